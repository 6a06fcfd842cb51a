use crate::subject::Subject;

/// Instructions for rewriting a raw subtitle dump into clean prose
pub const REFINE_PROMPT: &str = "\
You are an expert academic editor. Your task is to take a raw transcript of a spoken lecture \
(from YouTube subtitles) and rewrite it into clean, concise, well-structured written prose \
suitable for creating high-quality lecture notes.

Follow these rules strictly:
- Remove all filler words (um, uh, you know, like, basically, right?, okay, so yeah, etc.)
- Eliminate repetitions and false starts (e.g., \"let's let's begin\" -> \"let's begin\")
- Fix incomplete or run-on sentences into proper grammar
- Improve flow and logical structure: group related ideas, create natural paragraphs
- Keep all technical content, equations, examples, and explanations 100% accurate and intact
- Convert informal spoken style into clear academic written style
- Do NOT add new information or explanations, only rephrase and organize what's already said
- Do NOT summarize or shorten drastically: preserve detail and length, just make it read smoothly
- If code is mentioned, preserve it accurately
- If math is spoken (e.g., \"x squared plus two x plus one\"), write it naturally (e.g., \"x^2 + 2x + 1\")

Output ONLY the refined transcript text. No introductions, no explanations, no markdown.

Raw transcript:
";

/// Build the full refinement prompt for a raw transcript
pub fn build_refine_prompt(raw_transcript: &str) -> String {
    format!("{}{}", REFINE_PROMPT, raw_transcript)
}

/// Build the subject-classification prompt.
///
/// Only the beginning of the text is sent; a lecture's subject is settled well
/// before the sample limit.
pub fn build_classify_prompt(text: &str, sample_chars: usize) -> String {
    let sample = truncate_at_char_boundary(text, sample_chars);

    format!(
        "Classify the main subject of this lecture into exactly one of these categories.\n\
Return ONLY the category name, nothing else, no explanation, no quotes, no prefix.\n\
\n\
Categories: {}\n\
\n\
Lecture transcript (beginning):\n\
{}\n\
\n\
Your answer must look exactly like this example:\n\
Physics",
        Subject::category_list(),
        sample
    )
}

/// Truncate to at most `max_chars` characters without splitting a code point
fn truncate_at_char_boundary(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
