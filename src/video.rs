use regex::Regex;
use std::sync::OnceLock;

/// URL shapes we accept: watch pages, short links, embeds and the legacy /v/ path.
const ID_PATTERNS: &[&str] = &[
    r"(?:v=|youtu\.be/)([A-Za-z0-9_-]{11})",
    r"/embed/([A-Za-z0-9_-]{11})",
    r"/v/([A-Za-z0-9_-]{11})",
];

static ID_REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();

fn id_regexes() -> &'static [Regex] {
    ID_REGEXES.get_or_init(|| {
        ID_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("hard-coded pattern"))
            .collect()
    })
}

/// Extract a YouTube video ID from a URL or a bare 11-character ID
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    if is_bare_video_id(input) {
        return Some(input.to_string());
    }

    for regex in id_regexes() {
        if let Some(captures) = regex.captures(input) {
            if let Some(id) = captures.get(1) {
                return Some(id.as_str().to_string());
            }
        }
    }

    None
}

/// Check whether the input is already an 11-character video ID
fn is_bare_video_id(input: &str) -> bool {
    input.len() == 11
        && input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Default output folder name for a video
pub fn default_folder_name(video_id: &str) -> String {
    format!("lecture_{}", crate::utils::sanitize_filename(video_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=abc123_-XYZ&t=42s"),
            Some("abc123_-XYZ".to_string())
        );
    }

    #[test]
    fn test_extract_from_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?feature=shared"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_from_embed_and_legacy_urls() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/v/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_bare_id() {
        assert_eq!(
            extract_video_id("dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(extract_video_id("not a url"), None);
        assert_eq!(extract_video_id("https://example.com/video"), None);
        assert_eq!(extract_video_id("short"), None);
        // 11 chars but contains an invalid character
        assert_eq!(extract_video_id("abc!123$xyz"), None);
    }

    #[test]
    fn test_default_folder_name() {
        assert_eq!(default_folder_name("dQw4w9WgXcQ"), "lecture_dQw4w9WgXcQ");
    }
}
