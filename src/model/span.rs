//! Text spans produced by the PDF parser.

/// A run of text with font attributes, as it appears in a content stream.
///
/// Spans are ephemeral: they are produced per page in flow order, consumed
/// by the feature extractor and title selector, and never persisted.
#[derive(Debug, Clone)]
pub struct TextSpan {
    /// The text content
    pub text: String,
    /// Effective font size in points (Tf size scaled by the text matrix)
    pub font_size: f32,
    /// Base font name (e.g., "Helvetica-Bold")
    pub font_name: String,
    /// Page number this span appears on (1-indexed)
    pub page_number: u32,
}

impl TextSpan {
    /// Create a new text span.
    pub fn new(
        text: impl Into<String>,
        font_size: f32,
        font_name: impl Into<String>,
        page_number: u32,
    ) -> Self {
        Self {
            text: text.into(),
            font_size,
            font_name: font_name.into(),
            page_number,
        }
    }

    /// The span's text with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}
