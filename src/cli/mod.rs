use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "yt-lecture-notes",
    about = "Generate beautiful lecture notes (LaTeX + PDF) from YouTube lectures",
    version,
    long_about = "Fetches a YouTube lecture's transcript, cleans it up with the Gemini API, \
classifies the subject, and renders subject-specific LaTeX notes, optionally compiled to PDF.",
    after_help = "Examples:
  yt-lecture-notes \"https://youtu.be/dQw4w9WgXcQ\" -k YOUR_API_KEY_HERE
  yt-lecture-notes https://youtube.com/watch?v=abc123 --api-key YOUR_KEY --no-pdf
  yt-lecture-notes https://youtu.be/VIDEO_ID -o ./my_notes --debug"
)]
pub struct Cli {
    /// YouTube video URL or bare 11-character video ID
    #[arg(value_name = "VIDEO_URL")]
    pub url: String,

    /// Gemini API key (REQUIRED - no default)
    #[arg(short = 'k', long = "api-key", env = "GEMINI_API_KEY", value_name = "KEY")]
    pub api_key: String,

    /// Where to save files (default: ./lecture_{video_id}/)
    #[arg(short, long, value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// Generate only the .tex file (skip PDF compilation)
    #[arg(long)]
    pub no_pdf: bool,

    /// Transcript language preference, in order (may be repeated; defaults
    /// to the config file's language list)
    #[arg(short, long, value_name = "LANG")]
    pub language: Vec<String>,

    /// Show only errors and final file paths
    #[arg(long, conflicts_with = "debug")]
    pub quiet: bool,

    /// Very verbose output (for troubleshooting)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Default tracing directive derived from the verbosity flags
    pub fn log_directive(&self) -> &'static str {
        if self.debug {
            "yt_lecture_notes=debug"
        } else if self.quiet {
            "yt_lecture_notes=error"
        } else {
            "yt_lecture_notes=info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["yt-lecture-notes", "https://youtu.be/abc", "-k", "key"])
            .expect("minimal invocation should parse");
        assert_eq!(cli.url, "https://youtu.be/abc");
        assert_eq!(cli.api_key, "key");
        assert!(!cli.no_pdf);
        // No flag means no languages; the pipeline falls back to the config
        assert!(cli.language.is_empty());
    }

    #[test]
    fn test_language_flag_is_repeatable() {
        let cli = Cli::try_parse_from([
            "yt-lecture-notes",
            "url",
            "-k",
            "key",
            "-l",
            "de",
            "-l",
            "en",
        ])
        .unwrap();
        assert_eq!(cli.language, vec!["de", "en"]);
    }

    #[test]
    fn test_quiet_conflicts_with_debug() {
        let result = Cli::try_parse_from([
            "yt-lecture-notes",
            "url",
            "-k",
            "key",
            "--quiet",
            "--debug",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_directive() {
        let cli =
            Cli::try_parse_from(["yt-lecture-notes", "url", "-k", "key", "--debug"]).unwrap();
        assert_eq!(cli.log_directive(), "yt_lecture_notes=debug");

        let cli =
            Cli::try_parse_from(["yt-lecture-notes", "url", "-k", "key", "--quiet"]).unwrap();
        assert_eq!(cli.log_directive(), "yt_lecture_notes=error");
    }
}
