//! Span-to-outline classification pipeline.

use crate::classify::HeadingPredictor;
use crate::error::Result;
use crate::features::{is_noise, FeatureVector};
use crate::model::HeadingEntry;
use crate::outline::dedup;
use crate::parser::{extract_document_spans, PdfBackend};

/// Extract the heading outline of a document.
///
/// Spans arrive in document order (page, then in-page flow order) and are
/// classified in that order, so the resulting entries keep it too. Noise
/// spans are filtered before classification, accepted predictions are
/// gated on label and confidence, and near-duplicates are suppressed at
/// the end.
///
/// Classifier errors propagate: a failing prediction aborts the document.
pub fn extract_outline<B: PdfBackend + ?Sized>(
    backend: &B,
    predictor: &mut dyn HeadingPredictor,
) -> Result<Vec<HeadingEntry>> {
    let mut entries = Vec::new();

    for span in extract_document_spans(backend)? {
        let text = span.trimmed();
        if is_noise(text) {
            continue;
        }

        let features = FeatureVector::extract(text, span.font_size, &span.font_name);
        let prediction = predictor.predict(&features)?;

        if let Some(level) = prediction.accepted_level() {
            entries.push(HeadingEntry::new(level, text, span.page_number));
        }
    }

    Ok(dedup::dedupe(entries))
}
