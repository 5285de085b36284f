//! Text span extraction from content streams.
//!
//! Interprets the text-showing subset of PDF content stream operators,
//! tracking the selected font and the text matrix scale so that spans carry
//! realistic point sizes even when the nominal `Tf` size is 1 and the real
//! size comes from `Tm` scaling.

use std::collections::HashMap;

use crate::error::Result;
use crate::model::TextSpan;
use crate::parser::backend::{ContentOp, PageId, PdfBackend, PdfValue};

/// TJ adjustments larger than this (in 1/1000 text space units) are treated
/// as word breaks.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Text matrix scale state. Position is irrelevant for outline extraction,
/// so only the scale components are tracked.
#[derive(Debug, Clone, Copy)]
struct TextScale {
    a: f32,
    c: f32,
}

impl Default for TextScale {
    fn default() -> Self {
        Self { a: 1.0, c: 0.0 }
    }
}

impl TextScale {
    fn set(&mut self, a: f32, c: f32) {
        self.a = a;
        self.c = c;
    }

    /// Vertical scale factor applied to the nominal font size.
    fn factor(&self) -> f32 {
        (self.a * self.a + self.c * self.c).sqrt()
    }
}

/// Extract text spans from every page, in document order.
pub fn extract_document_spans<B: PdfBackend + ?Sized>(backend: &B) -> Result<Vec<TextSpan>> {
    let mut spans = Vec::new();
    for (page_num, page_id) in backend.pages() {
        spans.extend(extract_page_spans(backend, page_num, page_id)?);
    }
    Ok(spans)
}

/// Extract text spans from a single page, in flow (content stream) order.
pub fn extract_page_spans<B: PdfBackend + ?Sized>(
    backend: &B,
    page_num: u32,
    page_id: PageId,
) -> Result<Vec<TextSpan>> {
    let fonts = backend.page_fonts(page_id)?;
    let ops = backend.page_operations(page_id)?;
    Ok(interpret_ops(backend, page_id, page_num, &ops, &fonts))
}

fn interpret_ops<B: PdfBackend + ?Sized>(
    backend: &B,
    page_id: PageId,
    page_num: u32,
    ops: &[ContentOp],
    fonts: &HashMap<Vec<u8>, String>,
) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut current_font: String = String::new();
    let mut current_font_res: Vec<u8> = Vec::new();
    let mut current_font_size: f32 = 12.0;
    let mut scale = TextScale::default();
    let mut in_text_block = false;

    for op in ops {
        match op.operator.as_str() {
            "BT" => {
                in_text_block = true;
                scale = TextScale::default();
            }
            "ET" => {
                in_text_block = false;
            }
            "Tf" => {
                if op.operands.len() >= 2 {
                    if let PdfValue::Name(res_name) = &op.operands[0] {
                        current_font_res = res_name.clone();
                        current_font = fonts
                            .get(res_name.as_slice())
                            .cloned()
                            .unwrap_or_else(|| String::from_utf8_lossy(res_name).to_string());
                    }
                    current_font_size = op.operands[1].as_number().unwrap_or(12.0);
                }
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    scale.set(
                        op.operands[0].as_number().unwrap_or(1.0),
                        op.operands[2].as_number().unwrap_or(0.0),
                    );
                }
            }
            "Tj" => {
                if in_text_block {
                    if let Some(PdfValue::Str(bytes)) = op.operands.first() {
                        let text = backend.decode_text(page_id, &current_font_res, bytes);
                        push_span(
                            &mut spans,
                            text,
                            current_font_size * scale.factor(),
                            &current_font,
                            page_num,
                        );
                    }
                }
            }
            "TJ" => {
                if in_text_block {
                    if let Some(PdfValue::Array(items)) = op.operands.first() {
                        let text =
                            combine_tj_items(backend, page_id, &current_font_res, items);
                        push_span(
                            &mut spans,
                            text,
                            current_font_size * scale.factor(),
                            &current_font,
                            page_num,
                        );
                    }
                }
            }
            "'" | "\"" => {
                if in_text_block {
                    // " takes word/char spacing operands before the string
                    let text_idx = if op.operator == "\"" { 2 } else { 0 };
                    if let Some(PdfValue::Str(bytes)) = op.operands.get(text_idx) {
                        let text = backend.decode_text(page_id, &current_font_res, bytes);
                        push_span(
                            &mut spans,
                            text,
                            current_font_size * scale.factor(),
                            &current_font,
                            page_num,
                        );
                    }
                }
            }
            _ => {}
        }
    }

    spans
}

/// Combine a TJ array into one string, turning large negative adjustments
/// into word spaces.
fn combine_tj_items<B: PdfBackend + ?Sized>(
    backend: &B,
    page_id: PageId,
    font_res: &[u8],
    items: &[PdfValue],
) -> String {
    let mut combined = String::new();

    for item in items {
        match item {
            PdfValue::Str(bytes) => {
                combined.push_str(&backend.decode_text(page_id, font_res, bytes));
            }
            PdfValue::Integer(_) | PdfValue::Real(_) => {
                // Negative adjustments advance the pen; large ones are word breaks
                let adjustment = -item.as_number().unwrap_or(0.0);
                if adjustment > TJ_SPACE_THRESHOLD
                    && !combined.is_empty()
                    && !combined.ends_with(' ')
                {
                    combined.push(' ');
                }
            }
            _ => {}
        }
    }

    combined
}

fn push_span(
    spans: &mut Vec<TextSpan>,
    text: String,
    font_size: f32,
    font_name: &str,
    page_num: u32,
) {
    if !text.trim().is_empty() {
        spans.push(TextSpan::new(text, font_size, font_name, page_num));
    }
}
