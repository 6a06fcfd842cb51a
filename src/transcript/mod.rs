use anyhow::Result;
use serde::{Deserialize, Serialize};
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::NotesError;

/// A fetched transcript: ordered, timestamped segments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Video the transcript belongs to
    pub video_id: String,

    /// Human-readable language name
    pub language: String,

    /// BCP-47 language code
    pub language_code: String,

    /// Whether the captions were auto-generated
    pub is_generated: bool,

    /// Timestamped segments in playback order
    pub segments: Vec<TranscriptSegment>,
}

/// Individual transcript segment with timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Start time in seconds
    pub start: f64,

    /// Duration in seconds
    pub duration: f64,

    /// Segment text
    pub text: String,
}

impl Transcript {
    /// Concatenate all segments into plain text, single-space separated
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Total duration covered by the segments, in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.segments
            .last()
            .map(|s| s.start + s.duration)
            .unwrap_or(0.0)
    }
}

/// Fetch the transcript for a video ID.
///
/// A single attempt; anything the caption service refuses (no captions,
/// private video, region lock) surfaces as `TranscriptUnavailable`.
pub async fn fetch(video_id: &str, languages: &[String]) -> Result<Transcript> {
    let api = YouTubeTranscriptApi::new(None, None, None)
        .map_err(|e| anyhow::anyhow!("Failed to initialize transcript client: {}", e))?;

    let language_refs: Vec<&str> = languages.iter().map(|s| s.as_str()).collect();

    tracing::debug!(
        "Fetching transcript for {} (languages: {:?})",
        video_id,
        language_refs
    );

    let fetched = api
        .fetch_transcript(video_id, &language_refs, false)
        .await
        .map_err(|e| NotesError::TranscriptUnavailable(e.to_string()))?;

    let segments = fetched
        .snippets
        .iter()
        .map(|s| TranscriptSegment {
            start: s.start,
            duration: s.duration,
            text: s.text.clone(),
        })
        .collect();

    let transcript = Transcript {
        video_id: fetched.video_id.clone(),
        language: fetched.language.clone(),
        language_code: fetched.language_code.clone(),
        is_generated: fetched.is_generated,
        segments,
    };

    tracing::debug!(
        "Fetched {} segments in {} ({})",
        transcript.segments.len(),
        transcript.language,
        if transcript.is_generated { "auto-generated" } else { "manual" }
    );

    Ok(transcript)
}
