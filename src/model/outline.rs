//! Outline document types.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Heading level recognized by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Map a classifier label to a heading level.
    ///
    /// Returns `None` for any label outside the three accepted heading
    /// classes (e.g., "Body", "Caption").
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "H1" => Some(HeadingLevel::H1),
            "H2" => Some(HeadingLevel::H2),
            "H3" => Some(HeadingLevel::H3),
            _ => None,
        }
    }

    /// The level as it appears in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single accepted heading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Heading level
    pub level: HeadingLevel,

    /// Heading text (trimmed)
    pub text: String,

    /// Page number the heading appears on (1-indexed)
    pub page: u32,
}

impl HeadingEntry {
    /// Create a new heading entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// The outline extracted from one PDF document.
///
/// Written once per input file and never mutated afterwards. Entries keep
/// source document order: page number first, then in-page flow order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineDocument {
    /// Document title
    pub title: String,

    /// Accepted headings in document order
    pub outline: Vec<HeadingEntry>,
}

impl OutlineDocument {
    /// Create an outline document.
    pub fn new(title: impl Into<String>, outline: Vec<HeadingEntry>) -> Self {
        Self {
            title: title.into(),
            outline,
        }
    }

    /// Serialize to pretty JSON (2-space indentation, non-ASCII preserved).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
