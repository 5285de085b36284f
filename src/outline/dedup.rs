//! Near-duplicate heading suppression.

use crate::model::HeadingEntry;

/// Headings on the same page whose texts are at least this similar are
/// considered duplicates.
pub const SIMILARITY_THRESHOLD: f64 = 0.9;

/// Remove near-duplicate headings, keeping the first occurrence.
///
/// Each entry is compared case-insensitively against every previously kept
/// entry on the same page using a normalized edit-distance ratio. Entries
/// are only ever removed, never reordered, so the surviving sequence keeps
/// document order. Quadratic in headings per document, which stays small.
pub fn dedupe(entries: Vec<HeadingEntry>) -> Vec<HeadingEntry> {
    let mut kept: Vec<HeadingEntry> = Vec::with_capacity(entries.len());

    for entry in entries {
        let lower = entry.text.to_lowercase();
        let is_duplicate = kept
            .iter()
            .filter(|prior| prior.page == entry.page)
            .any(|prior| {
                strsim::normalized_levenshtein(&prior.text.to_lowercase(), &lower)
                    > SIMILARITY_THRESHOLD
            });

        if !is_duplicate {
            kept.push(entry);
        }
    }

    kept
}
