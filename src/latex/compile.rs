use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use crate::config::LatexConfig;
use crate::NotesError;

/// Auxiliary files pdflatex leaves next to the PDF
const AUX_EXTENSIONS: &[&str] = &["aux", "log", "out", "toc"];

/// Wrapper around the external LaTeX compiler
pub struct LatexCompiler {
    config: LatexConfig,
}

impl LatexCompiler {
    pub fn new(config: LatexConfig) -> Self {
        Self { config }
    }

    /// Check if the configured engine is available
    pub async fn check_availability(&self) -> bool {
        Command::new(&self.config.engine)
            .arg("--version")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Compile a `.tex` file to PDF, returning the PDF path.
    ///
    /// Runs the configured number of passes with the file's directory as the
    /// working directory so pdflatex drops its outputs next to the source.
    /// Failure never touches the already-written `.tex`.
    pub async fn compile(&self, tex_path: &Path) -> Result<PathBuf> {
        let work_dir = tex_path
            .parent()
            .context("LaTeX source has no parent directory")?;
        let file_name = tex_path
            .file_name()
            .context("LaTeX source has no file name")?;

        for pass in 1..=self.config.passes {
            tracing::debug!("{} pass {}/{}", self.config.engine, pass, self.config.passes);

            let output = Command::new(&self.config.engine)
                .arg("-interaction=nonstopmode")
                .arg(file_name)
                .current_dir(work_dir)
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output()
                .await
                .map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        NotesError::LatexCompileFailed(format!(
                            "{} not found. Please install LaTeX (TeX Live / MiKTeX / MacTeX): \
https://www.tug.org/texlive/ or https://miktex.org/",
                            self.config.engine
                        ))
                    } else {
                        NotesError::LatexCompileFailed(e.to_string())
                    }
                })?;

            if !output.status.success() {
                let log = String::from_utf8_lossy(&output.stdout);
                return Err(NotesError::LatexCompileFailed(format!(
                    "{} exited with {} on pass {}:\n{}",
                    self.config.engine,
                    output.status,
                    pass,
                    tail_lines(&log, 20)
                ))
                .into());
            }
        }

        let pdf_path = tex_path.with_extension("pdf");
        if !pdf_path.is_file() {
            return Err(NotesError::LatexCompileFailed(
                "compilation finished but no PDF was produced".to_string(),
            )
            .into());
        }

        if !self.config.keep_aux {
            self.cleanup_aux_files(tex_path);
        }

        Ok(pdf_path)
    }

    /// Remove auxiliary files after a successful compile
    fn cleanup_aux_files(&self, tex_path: &Path) {
        for ext in AUX_EXTENSIONS {
            let aux_path = tex_path.with_extension(ext);
            if aux_path.exists() {
                if let Err(e) = fs_err::remove_file(&aux_path) {
                    tracing::debug!("Could not remove {}: {}", aux_path.display(), e);
                }
            }
        }
    }
}

/// Last `n` lines of compiler output, for error reporting
fn tail_lines(text: &str, n: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}
