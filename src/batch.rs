//! Batch driver: directory scan, per-file extraction, JSON output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::HeadingPredictor;
use crate::error::Result;
use crate::model::OutlineDocument;
use crate::outline::{extract_outline, extract_title};
use crate::parser::LopdfBackend;

/// Summary of one processed input file.
#[derive(Debug, Clone)]
pub struct ProcessedFile {
    /// Input PDF path
    pub input: PathBuf,
    /// Written JSON path
    pub output: PathBuf,
    /// Extracted (or fallback) title
    pub title: String,
    /// Number of headings surviving filters and deduplication
    pub heading_count: usize,
}

/// List the PDF files in a directory, in directory listing order.
///
/// Filters by filename suffix only, matching the batch contract: entries
/// not ending in ".pdf" are skipped silently.
pub fn list_pdf_files(input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().ends_with(".pdf") {
            files.push(entry.path());
        }
    }
    Ok(files)
}

/// Extract the outline document for a single PDF.
///
/// Title extraction is self-guarding (falls back to "Untitled"); outline
/// extraction errors propagate and abort the batch.
pub fn process_file(
    path: impl AsRef<Path>,
    predictor: &mut dyn HeadingPredictor,
) -> Result<OutlineDocument> {
    let path = path.as_ref();

    let title = extract_title(path);

    let backend = LopdfBackend::load_file(path)?;
    let outline = extract_outline(&backend, predictor)?;

    Ok(OutlineDocument::new(title, outline))
}

/// The JSON output path for a given input PDF: same basename with the
/// ".pdf" suffix replaced by ".json".
pub fn output_path(pdf_path: &Path, output_dir: &Path) -> PathBuf {
    let file_name = pdf_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(".pdf").unwrap_or(&file_name);
    output_dir.join(format!("{stem}.json"))
}

/// Serialize an outline document and write it next to its peers,
/// overwriting any existing output.
pub fn write_outline(
    doc: &OutlineDocument,
    pdf_path: &Path,
    output_dir: &Path,
) -> Result<PathBuf> {
    let path = output_path(pdf_path, output_dir);
    fs::write(&path, doc.to_json()?)?;
    Ok(path)
}

/// Process every PDF in `input_dir`, writing one JSON outline per file
/// into `output_dir` (created if absent).
///
/// Files are processed sequentially in listing order. A fatal error leaves
/// previously written outputs in place; there is no rollback.
pub fn process_directory(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    predictor: &mut dyn HeadingPredictor,
) -> Result<Vec<ProcessedFile>> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let mut processed = Vec::new();
    for path in list_pdf_files(input_dir)? {
        let doc = process_file(&path, predictor)?;
        let output = write_outline(&doc, &path, output_dir)?;

        log::info!(
            "{} -> {} ({} headings)",
            path.display(),
            output.display(),
            doc.outline.len()
        );

        processed.push(ProcessedFile {
            input: path,
            output,
            heading_count: doc.outline.len(),
            title: doc.title,
        });
    }

    Ok(processed)
}
