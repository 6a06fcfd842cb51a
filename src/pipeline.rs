use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::config::Config;
use crate::latex::{self, LatexCompiler};
use crate::llm::GeminiClient;
use crate::subject::Subject;
use crate::transcript;
use crate::video;
use crate::NotesError;

/// Everything a finished run produced
#[derive(Debug)]
pub struct NotesResult {
    pub video_id: String,
    pub subject: Subject,
    pub output_dir: PathBuf,
    pub transcript_path: PathBuf,
    pub tex_path: PathBuf,
    pub pdf_path: Option<PathBuf>,
}

/// Sequential notes-generation pipeline.
///
/// Each stage waits for the previous one; no parallelism, no state beyond the
/// filesystem output.
pub struct NotesPipeline {
    config: Config,
    llm: GeminiClient,
    compiler: LatexCompiler,
    quiet: bool,
}

impl NotesPipeline {
    pub fn new(config: Config, api_key: String, quiet: bool) -> Result<Self> {
        let llm = GeminiClient::new(config.llm.clone(), api_key)?;
        let compiler = LatexCompiler::new(config.latex.clone());

        Ok(Self {
            config,
            llm,
            compiler,
            quiet,
        })
    }

    /// Run the full pipeline for one video URL
    pub async fn run(
        &self,
        url: &str,
        output_dir_override: Option<PathBuf>,
        languages: &[String],
        no_pdf: bool,
    ) -> Result<NotesResult> {
        // Stage 1: resolve the video reference
        let video_id = video::extract_video_id(url)
            .ok_or_else(|| NotesError::InvalidVideoUrl(url.to_string()))?;
        tracing::debug!("Resolved video ID: {}", video_id);

        // Stage 2: fetch the transcript. The output folder is only created
        // once this succeeds, so a caption-less video leaves no trace.
        let languages = self.resolve_languages(languages);

        let progress = self.spinner("Fetching transcript...");
        let transcript = transcript::fetch(&video_id, languages).await?;
        progress.finish_with_message("Transcript fetched");

        let raw_text = transcript.plain_text();
        let min = self.config.app.transcript_min_chars;
        if raw_text.trim().len() < min {
            return Err(NotesError::TranscriptTooShort {
                len: raw_text.trim().len(),
                min,
            }
            .into());
        }

        tracing::info!(
            "Transcript: {} chars, {} segments, {}",
            raw_text.len(),
            transcript.segments.len(),
            crate::utils::format_duration(transcript.duration_seconds())
        );

        let output_dir = self.resolve_output_dir(&video_id, output_dir_override)?;
        fs_err::create_dir_all(&output_dir)?;
        tracing::info!("Output folder: {}", output_dir.display());

        let transcript_path = output_dir.join("transcript.txt");
        fs_err::write(&transcript_path, &raw_text)?;
        tracing::info!("Saved raw transcript -> {}", transcript_path.display());

        // Stage 3: refinement (fatal on API failure)
        let progress = self.spinner("Refining transcript with Gemini...");
        let refined = self.llm.refine_transcript(&raw_text).await?;
        progress.finish_with_message("Transcript refined");
        tracing::debug!("Refined text: {} chars", refined.len());

        // Stage 4: classification (degrades to General)
        let progress = self.spinner("Classifying subject...");
        let subject = self.llm.classify_subject(&refined).await;
        progress.finish_with_message(format!("Subject: {}", subject));

        // Stages 5-7: render, write, optionally compile
        let title = format!("Lecture Notes: {}", video_id);
        let (tex_path, pdf_path) = self
            .write_notes(&output_dir, subject, &title, &refined, no_pdf)
            .await?;

        Ok(NotesResult {
            video_id,
            subject,
            output_dir,
            transcript_path,
            tex_path,
            pdf_path,
        })
    }

    /// Render the notes, write `notes.tex`, and unless `no_pdf` compile it.
    ///
    /// Compilation failure is reported but never removes the `.tex` just
    /// written; with `no_pdf` the compiler is not invoked at all.
    async fn write_notes(
        &self,
        output_dir: &std::path::Path,
        subject: Subject,
        title: &str,
        refined_text: &str,
        no_pdf: bool,
    ) -> Result<(PathBuf, Option<PathBuf>)> {
        let tex_source = latex::render(subject, title, refined_text);

        let tex_path = output_dir.join("notes.tex");
        fs_err::write(&tex_path, &tex_source)?;
        tracing::info!("LaTeX file created -> {}", tex_path.display());

        let pdf_path = if no_pdf {
            None
        } else {
            let progress = self.spinner("Compiling PDF (this may take a few seconds)...");
            match self.compiler.compile(&tex_path).await {
                Ok(pdf) => {
                    progress.finish_with_message("PDF compiled");
                    tracing::info!("PDF successfully created -> {}", pdf.display());
                    Some(pdf)
                }
                Err(e) => {
                    progress.finish_with_message("PDF compilation failed");
                    tracing::warn!("{:#}", e);
                    tracing::warn!("The .tex file was kept: {}", tex_path.display());
                    None
                }
            }
        };

        Ok((tex_path, pdf_path))
    }

    /// CLI languages when given, the config's default list otherwise
    fn resolve_languages<'a>(&'a self, cli_languages: &'a [String]) -> &'a [String] {
        if cli_languages.is_empty() {
            self.config.app.default_languages.as_slice()
        } else {
            cli_languages
        }
    }

    /// Pick the output folder: user override, or `lecture_{video_id}/` under
    /// the current directory
    fn resolve_output_dir(
        &self,
        video_id: &str,
        output_dir_override: Option<PathBuf>,
    ) -> Result<PathBuf> {
        match output_dir_override {
            Some(dir) => Ok(dir),
            None => {
                let cwd = std::env::current_dir().context("Could not determine current directory")?;
                Ok(cwd.join(video::default_folder_name(video_id)))
            }
        }
    }

    /// Check whether the configured LaTeX engine is installed
    pub async fn latex_available(&self) -> bool {
        self.compiler.check_availability().await
    }

    fn spinner(&self, message: &'static str) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap(),
        );
        progress.enable_steady_tick(std::time::Duration::from_millis(120));
        progress.set_message(message);
        progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pipeline() -> NotesPipeline {
        NotesPipeline::new(Config::default(), "test-key".to_string(), true).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_url_is_fatal_and_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("notes");

        let err = test_pipeline()
            .run("https://example.com/not-youtube", Some(out.clone()), &[], true)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Invalid YouTube URL"));
        assert!(!out.exists());
    }

    #[test]
    fn test_resolve_languages_falls_back_to_config() {
        let pipeline = test_pipeline();

        // No CLI languages: the config's default list applies
        assert_eq!(pipeline.resolve_languages(&[]), &["en".to_string()]);

        // CLI languages win over the config
        let cli = vec!["de".to_string(), "fr".to_string()];
        assert_eq!(pipeline.resolve_languages(&cli), cli.as_slice());
    }

    #[tokio::test]
    async fn test_no_pdf_writes_tex_and_nothing_else() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = test_pipeline();

        let (tex_path, pdf_path) = pipeline
            .write_notes(dir.path(), Subject::Physics, "Lecture Notes", "Some prose.", true)
            .await
            .unwrap();

        assert!(pdf_path.is_none());
        assert!(tex_path.is_file());
        assert!(!dir.path().join("notes.pdf").exists());

        // The written source carries the subject's template
        let tex = fs_err::read_to_string(&tex_path).unwrap();
        assert!(tex.contains("siunitx"));
        assert!(tex.contains("Some prose."));
    }

    #[tokio::test]
    async fn test_failed_compile_keeps_tex() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.latex.engine = "definitely-not-a-latex-engine".to_string();
        let pipeline = NotesPipeline::new(config, "test-key".to_string(), true).unwrap();

        let (tex_path, pdf_path) = pipeline
            .write_notes(dir.path(), Subject::General, "Lecture Notes", "Some prose.", false)
            .await
            .unwrap();

        assert!(pdf_path.is_none());
        assert!(tex_path.is_file());
    }

    #[test]
    fn test_resolve_output_dir_override_wins() {
        let pipeline = test_pipeline();
        let dir = pipeline
            .resolve_output_dir("dQw4w9WgXcQ", Some(PathBuf::from("/tmp/custom")))
            .unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/custom"));
    }

    #[test]
    fn test_resolve_output_dir_defaults_to_lecture_folder() {
        let pipeline = test_pipeline();
        let dir = pipeline.resolve_output_dir("dQw4w9WgXcQ", None).unwrap();
        assert!(dir.ends_with("lecture_dQw4w9WgXcQ"));
    }
}
