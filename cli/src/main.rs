//! pdf-outliner CLI - batch outline extraction tool

use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdf_outliner::{batch, OnnxHeadingModel};

#[derive(Parser)]
#[command(name = "pdf-outliner")]
#[command(version)]
#[command(about = "Extract structured outlines from a directory of PDFs", long_about = None)]
struct Cli {
    /// Directory containing input PDFs
    #[arg(long, env = "PDF_OUTLINER_INPUT", default_value = "/app/input")]
    input: PathBuf,

    /// Directory receiving JSON outlines (created if missing)
    #[arg(long, env = "PDF_OUTLINER_OUTPUT", default_value = "/app/output")]
    output: PathBuf,

    /// Pretrained ONNX heading classifier
    #[arg(
        long,
        env = "PDF_OUTLINER_MODEL",
        default_value = "models/heading_classifier.onnx"
    )]
    model: PathBuf,

    /// Label encoder (JSON array of class labels)
    #[arg(
        long,
        env = "PDF_OUTLINER_LABELS",
        default_value = "models/label_encoder.json"
    )]
    labels: PathBuf,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Artifacts load once, before any file is touched; a missing artifact
    // aborts the whole run
    let mut model = OnnxHeadingModel::load(&cli.model, &cli.labels)?;
    log::debug!("classifier ready: {model:?}");

    std::fs::create_dir_all(&cli.output)?;
    let files = batch::list_pdf_files(&cli.input)?;

    if files.is_empty() {
        println!("{}", "No PDF files found in input directory".yellow());
        return Ok(());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut total_headings = 0usize;
    for path in &files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        pb.set_message(name);

        let doc = batch::process_file(path, &mut model)?;
        total_headings += doc.outline.len();
        batch::write_outline(&doc, path, &cli.output)?;

        pb.inc(1);
    }

    pb.finish_and_clear();

    println!(
        "{} {} files, {} headings -> {}",
        "Done!".green().bold(),
        files.len(),
        total_headings,
        cli.output.display()
    );

    Ok(())
}
