use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::LlmConfig;
use crate::subject::Subject;
use crate::NotesError;

pub mod prompts;

/// Minimal client for the Gemini generateContent REST endpoint
pub struct GeminiClient {
    config: LlmConfig,
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

impl GeminiClient {
    pub fn new(config: LlmConfig, api_key: String) -> Result<Self> {
        if api_key.trim().is_empty() {
            anyhow::bail!("Gemini API key must not be empty");
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            config,
            api_key,
            client,
            base_url: GEMINI_BASE_URL.to_string(),
        })
    }

    /// Override the endpoint base URL (used by tests)
    #[doc(hidden)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Send a single-turn prompt and return the first candidate's text
    async fn generate(&self, prompt: String, temperature: f32) -> Result<String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: GeminiGenerationConfig {
                max_output_tokens: self.config.max_output_tokens,
                temperature,
            },
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.config.model, self.api_key
        );

        tracing::debug!("Sending request to Gemini model {}", self.config.model);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| NotesError::LlmApiFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(NotesError::LlmApiFailed(format!("HTTP {}: {}", status, text)).into());
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| NotesError::LlmApiFailed(format!("invalid response body: {}", e)))?;

        let text = gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| NotesError::LlmApiFailed("empty response from model".to_string()))?;

        Ok(text)
    }

    /// Rewrite a raw subtitle dump into clean academic prose.
    ///
    /// API failures here abort the run; without a usable refinement there is
    /// nothing to typeset.
    pub async fn refine_transcript(&self, raw_transcript: &str) -> Result<String> {
        let prompt = prompts::build_refine_prompt(raw_transcript);

        let refined = self
            .generate(prompt, self.config.refine_temperature)
            .await
            .context("Transcript refinement failed")?;

        Ok(strip_code_fences(&refined))
    }

    /// Classify the refined text into one subject label.
    ///
    /// Unlike refinement, a failed classification degrades to `General`
    /// instead of aborting: the notes are still worth producing.
    pub async fn classify_subject(&self, refined_text: &str) -> Subject {
        let prompt =
            prompts::build_classify_prompt(refined_text, self.config.classify_sample_chars);

        match self.generate(prompt, self.config.classify_temperature).await {
            Ok(response) => {
                let subject = Subject::from_response(&response);
                tracing::info!("Detected subject: {}", subject);
                subject
            }
            Err(e) => {
                tracing::warn!("Classification failed: {}. Falling back to General.", e);
                Subject::General
            }
        }
    }
}

/// Remove markdown code fences the model sometimes wraps replies in
pub fn strip_code_fences(text: &str) -> String {
    if !text.contains("```") {
        return text.trim().to_string();
    }

    text.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
