//! Data model for outline extraction.
//!
//! Defines the intermediate representation flowing through the pipeline:
//! text spans coming out of the PDF parser, and the outline document that
//! is serialized to JSON at the end.

mod outline;
mod span;

pub use outline::{HeadingEntry, HeadingLevel, OutlineDocument};
pub use span::TextSpan;
