//! Error types for pdf-outliner.

use std::io;
use thiserror::Error;

/// Result type alias for pdf-outliner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error loading or running the heading classifier.
    #[error("Classifier error: {0}")]
    Model(String),

    /// The label encoder is missing, malformed, or disagrees with the model.
    #[error("Label encoder error: {0}")]
    LabelEncoder(String),

    /// Error serializing an outline document to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

impl From<ort::Error> for Error {
    fn from(err: ort::Error) -> Self {
        Error::Model(err.to_string())
    }
}
