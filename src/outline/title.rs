//! Title selection from the first page.

use std::path::Path;

use crate::error::Result;
use crate::model::TextSpan;
use crate::parser::{extract_page_spans, LopdfBackend, PdfBackend};

/// Title used whenever no candidate survives the filters or the document
/// cannot be parsed.
pub const FALLBACK_TITLE: &str = "Untitled";

/// Title candidates must be strictly longer than this many characters.
const MIN_TITLE_LEN: usize = 5;

/// Pick a title from first-page spans.
///
/// Candidates are considered by descending font size (flow order breaks
/// ties); the first whose trimmed text is long enough and not purely
/// numeric wins. Returns `None` when every candidate fails.
pub fn select_title_from_spans(spans: &[TextSpan]) -> Option<String> {
    let mut candidates: Vec<&TextSpan> = spans.iter().collect();
    candidates.sort_by(|a, b| {
        b.font_size
            .partial_cmp(&a.font_size)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    candidates.iter().find_map(|span| {
        let text = span.trimmed();
        if text.chars().count() > MIN_TITLE_LEN && !text.chars().all(|c| c.is_ascii_digit()) {
            Some(text.to_string())
        } else {
            None
        }
    })
}

/// Select a title from an already-open document's first page.
pub fn title_from_backend<B: PdfBackend + ?Sized>(backend: &B) -> Result<Option<String>> {
    let pages = backend.pages();
    let Some((&page_num, &page_id)) = pages.iter().next() else {
        return Ok(None);
    };

    let spans = extract_page_spans(backend, page_num, page_id)?;
    Ok(select_title_from_spans(&spans))
}

/// Extract the title of a PDF, falling back to [`FALLBACK_TITLE`].
///
/// Every parsing failure on this path is caught, logged as a warning, and
/// mapped to the fallback; it never propagates to the caller.
pub fn extract_title<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    match try_extract_title(path) {
        Ok(Some(title)) => title,
        Ok(None) => FALLBACK_TITLE.to_string(),
        Err(e) => {
            log::warn!("Skipping title extraction for {}: {}", path.display(), e);
            FALLBACK_TITLE.to_string()
        }
    }
}

fn try_extract_title(path: &Path) -> Result<Option<String>> {
    let backend = LopdfBackend::load_file(path)?;
    title_from_backend(&backend)
}
