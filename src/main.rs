use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yt_lecture_notes::{Cli, Config, NotesPipeline, NotesResult};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; an explicit RUST_LOG wins over the verbosity flags
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_directive().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().await?;
    let pipeline = NotesPipeline::new(config, cli.api_key.clone(), cli.quiet)?;

    // Non-fatal pre-flight: missing pdflatex only costs the PDF stage.
    // Quiet mode shows errors and final paths only, so no warning there.
    if !cli.no_pdf && !cli.quiet && !pipeline.latex_available().await {
        eprintln!("⚠️  pdflatex was not found in PATH");
        eprintln!("   The .tex file will still be generated; install TeX Live or MiKTeX for PDFs");
    }

    tracing::info!("Starting YouTube Lecture Notes Generator");
    tracing::debug!("Video URL: {}", cli.url);

    let result = pipeline
        .run(&cli.url, cli.output_dir.clone(), &cli.language, cli.no_pdf)
        .await?;

    print_summary(&result);

    Ok(())
}

fn print_summary(result: &NotesResult) {
    let rule = "═".repeat(72);

    println!("\n{}", rule);
    println!("{:^72}", style("FINISHED SUCCESSFULLY").green().bold());
    println!("{}", rule);
    println!("  Video ID:     {}", result.video_id);
    println!("  Subject:      {}", result.subject);
    println!("  Folder:       {}", result.output_dir.display());
    println!("  Transcript:   {}", result.transcript_path.display());
    println!("  LaTeX source: {}", result.tex_path.display());
    if let Some(pdf) = &result.pdf_path {
        println!("  Final PDF:    {}", pdf.display());
    }
    println!("{}\n", rule);
}
