//! YouTube Lecture Notes - A Rust CLI tool for turning recorded lectures into typeset notes
//!
//! This library fetches a YouTube video's transcript, refines it into clean prose
//! via the Gemini API, classifies the lecture subject, and renders the result into
//! a subject-specific LaTeX document (optionally compiled to PDF with pdflatex).

pub mod cli;
pub mod config;
pub mod latex;
pub mod llm;
pub mod pipeline;
pub mod subject;
pub mod transcript;
pub mod utils;
pub mod video;

pub use cli::Cli;
pub use config::Config;
pub use pipeline::{NotesPipeline, NotesResult};
pub use subject::Subject;

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to the notes generator
#[derive(thiserror::Error, Debug)]
pub enum NotesError {
    #[error("Invalid YouTube URL or video ID: {0}")]
    InvalidVideoUrl(String),

    #[error("Transcript unavailable: {0} (common causes: no captions, private video, region-restricted, subtitles disabled)")]
    TranscriptUnavailable(String),

    #[error("Transcript is too short or empty ({len} chars, need at least {min})")]
    TranscriptTooShort { len: usize, min: usize },

    #[error("Gemini API request failed: {0}")]
    LlmApiFailed(String),

    #[error("LaTeX compilation failed: {0}")]
    LatexCompileFailed(String),
}
