use crate::subject::Subject;

pub mod compile;
pub mod templates;

pub use compile::LatexCompiler;

/// Render the complete LaTeX source for a set of notes.
///
/// Pure string substitution: pick the subject's template, escape the prose,
/// fill the placeholders. No control flow beyond the subject lookup.
pub fn render(subject: Subject, title: &str, refined_text: &str) -> String {
    templates::DOCUMENT_SKELETON
        .replace("<<EXTRA_PREAMBLE>>", templates::extra_preamble(subject))
        .replace("<<TITLE>>", &escape(title))
        .replace("<<DATE>>", r"\today")
        .replace("<<SUBJECT>>", subject.as_str())
        .replace("<<BODY>>", &escape(refined_text))
}

/// Escape LaTeX special characters in plain prose.
///
/// Newlines pass through untouched, so blank lines in the refined text stay
/// paragraph breaks in the document.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' => escaped.push_str(r"\textbackslash{}"),
            '{' => escaped.push_str(r"\{"),
            '}' => escaped.push_str(r"\}"),
            '&' => escaped.push_str(r"\&"),
            '%' => escaped.push_str(r"\%"),
            '$' => escaped.push_str(r"\$"),
            '#' => escaped.push_str(r"\#"),
            '_' => escaped.push_str(r"\_"),
            '~' => escaped.push_str(r"\textasciitilde{}"),
            '^' => escaped.push_str(r"\textasciicircum{}"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape("50% & $10"), r"50\% \& \$10");
        assert_eq!(escape("a_b #1"), r"a\_b \#1");
        assert_eq!(escape("{x}"), r"\{x\}");
        assert_eq!(escape(r"C:\dir"), r"C:\textbackslash{}dir");
        assert_eq!(escape("~ and ^"), r"\textasciitilde{} and \textasciicircum{}");
    }

    #[test]
    fn test_escape_preserves_paragraph_breaks() {
        let text = "first paragraph\n\nsecond paragraph";
        assert_eq!(escape(text), text);
    }

    #[test]
    fn test_render_frames_document() {
        let tex = render(Subject::General, "My Lecture", "Some content.");
        assert!(tex.starts_with(r"\documentclass"));
        assert!(tex.trim_end().ends_with(r"\end{document}"));
        assert!(tex.contains("My Lecture"));
        assert!(tex.contains("Some content."));
        assert!(!tex.contains("<<"));
    }

    #[test]
    fn test_render_uses_subject_template() {
        for subject in Subject::ALL {
            let tex = render(subject, "t", "body");
            assert!(
                tex.contains(templates::signature_package(subject)),
                "{} template missing its package set",
                subject
            );
            assert!(tex.contains(&format!("% Subject: {}", subject)));
        }
    }

    #[test]
    fn test_render_escapes_body() {
        let tex = render(Subject::Math, "t", "100% of $x_i$");
        assert!(tex.contains(r"100\% of \$x\_i\$"));
    }

    #[test]
    fn test_general_template_has_no_extra_preamble() {
        let tex = render(Subject::General, "t", "body");
        assert!(!tex.contains("mathtools"));
        assert!(!tex.contains("listings"));
        assert!(!tex.contains("mhchem"));
        assert!(!tex.contains("siunitx"));
    }
}
