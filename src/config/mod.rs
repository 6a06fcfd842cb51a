use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Gemini API settings
    pub llm: LlmConfig,

    /// LaTeX toolchain settings
    pub latex: LatexConfig,

    /// Application settings
    pub app: AppConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model identifier sent to the generateContent endpoint
    pub model: String,

    /// Sampling temperature for transcript refinement
    pub refine_temperature: f32,

    /// Sampling temperature for subject classification
    pub classify_temperature: f32,

    /// Maximum output tokens per request
    pub max_output_tokens: u32,

    /// How many characters of the refined text the classifier sees
    pub classify_sample_chars: usize,

    /// HTTP request timeout in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatexConfig {
    /// Compiler binary name or path
    pub engine: String,

    /// Number of compilation passes (two resolves references)
    pub passes: u32,

    /// Keep .aux/.log/.out/.toc files after a successful compile
    pub keep_aux: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reject transcripts shorter than this many characters
    pub transcript_min_chars: usize,

    /// Transcript language preference order used when the CLI gives none
    pub default_languages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                model: "gemini-2.5-flash".to_string(),
                refine_temperature: 0.3,
                classify_temperature: 0.0,
                max_output_tokens: 65536,
                classify_sample_chars: 3500,
                timeout_seconds: 300,
            },
            latex: LatexConfig {
                engine: "pdflatex".to_string(),
                passes: 2,
                keep_aux: false,
            },
            app: AppConfig {
                transcript_min_chars: 200,
                default_languages: vec!["en".to_string()],
            },
        }
    }
}

impl Config {
    /// Load configuration from file or create default
    pub async fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = fs_err::read_to_string(&config_path)
                .context("Failed to read config file")?;

            let config: Config = serde_yaml::from_str(&content)
                .context("Failed to parse config file")?;

            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save().await?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub async fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs_err::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs_err::write(&config_path, content)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get configuration file path
    fn config_path() -> Result<PathBuf> {
        // First try current directory for easy testing
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?;

        Ok(config_dir.join("yt-lecture-notes").join("config.yaml"))
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.llm.model.is_empty() {
            anyhow::bail!("LLM model must be configured");
        }

        if self.latex.engine.is_empty() {
            anyhow::bail!("LaTeX engine must be configured");
        }

        if self.latex.passes == 0 {
            anyhow::bail!("LaTeX passes must be at least 1");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.llm.model, "gemini-2.5-flash");
        assert_eq!(config.latex.passes, 2);
        assert_eq!(config.app.transcript_min_chars, 200);
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.llm.model, config.llm.model);
        assert_eq!(parsed.app.default_languages, config.app.default_languages);
    }

    #[test]
    fn test_zero_passes_rejected() {
        let mut config = Config::default();
        config.latex.passes = 0;
        assert!(config.validate().is_err());
    }
}
