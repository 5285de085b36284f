//! # pdf-outliner
//!
//! Structured outline extraction from PDF documents.
//!
//! This library walks a PDF's text spans, classifies each span with a
//! pretrained heading model over visual features (font size, boldness,
//! capitalization ratio, word count), and assembles a title plus an
//! H1–H3 outline with page numbers. A batch driver processes a directory
//! of PDFs into one JSON outline document per file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_outliner::{process_directory, OnnxHeadingModel};
//!
//! fn main() -> pdf_outliner::Result<()> {
//!     // Both artifacts are loaded once at startup; loading failures are fatal
//!     let mut model = OnnxHeadingModel::load(
//!         "models/heading_classifier.onnx",
//!         "models/label_encoder.json",
//!     )?;
//!
//!     let processed = process_directory("/app/input", "/app/output", &mut model)?;
//!     println!("{} files processed", processed.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! Per document: title selection from the first page's largest spans, then
//! for each span a noise filter, feature extraction, classification, and a
//! confidence gate, and finally near-duplicate suppression. Entries keep
//! source document order throughout.

pub mod batch;
pub mod classify;
pub mod detect;
pub mod error;
pub mod features;
pub mod model;
pub mod outline;
pub mod parser;

// Re-export commonly used types
pub use batch::ProcessedFile;
pub use classify::{HeadingPredictor, LabelEncoder, OnnxHeadingModel, Prediction, MIN_CONFIDENCE};
pub use error::{Error, Result};
pub use features::FeatureVector;
pub use model::{HeadingEntry, HeadingLevel, OutlineDocument, TextSpan};
pub use outline::FALLBACK_TITLE;
pub use parser::{LopdfBackend, PdfBackend};

use std::path::Path;

/// Extract the outline document for a single PDF.
///
/// See [`batch::process_file`].
pub fn process_file<P: AsRef<Path>>(
    path: P,
    predictor: &mut dyn HeadingPredictor,
) -> Result<OutlineDocument> {
    batch::process_file(path, predictor)
}

/// Process every PDF in a directory into JSON outline documents.
///
/// See [`batch::process_directory`].
pub fn process_directory<I: AsRef<Path>, O: AsRef<Path>>(
    input_dir: I,
    output_dir: O,
    predictor: &mut dyn HeadingPredictor,
) -> Result<Vec<ProcessedFile>> {
    batch::process_directory(input_dir, output_dir, predictor)
}

/// Extract only the title of a PDF, falling back to "Untitled".
///
/// See [`outline::extract_title`].
pub fn extract_title<P: AsRef<Path>>(path: P) -> String {
    outline::extract_title(path)
}
