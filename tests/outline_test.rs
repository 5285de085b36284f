//! End-to-end tests over synthetic PDFs.

use std::fs;
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use pdf_outliner::{
    batch, extract_title, process_file, FeatureVector, HeadingLevel, HeadingPredictor,
    LopdfBackend, PdfBackend, Prediction,
};

/// Build a PDF where each page is a list of (text, font size) spans, all
/// set in Helvetica-Bold.
fn build_pdf(pages: &[&[(&str, i64)]]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for spans in pages {
        let mut operations = vec![Operation::new("BT", vec![])];
        for (text, size) in *spans {
            operations.push(Operation::new("Tf", vec!["F1".into(), (*size).into()]));
            operations.push(Operation::new("Td", vec![72.into(), 700.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

fn save_pdf(doc: &mut Document, dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

/// Predictor stub assigning levels from font size alone.
struct SizePredictor;

impl HeadingPredictor for SizePredictor {
    fn predict(&mut self, features: &FeatureVector) -> pdf_outliner::Result<Prediction> {
        let (label, confidence) = if features.font_size >= 20.0 {
            ("H1", 0.95)
        } else if features.font_size >= 16.0 {
            ("H2", 0.9)
        } else if features.font_size >= 14.0 {
            ("H3", 0.8)
        } else {
            ("Body", 0.99)
        };
        Ok(Prediction::new(label, confidence))
    }
}

#[test]
fn test_span_extraction_from_real_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = build_pdf(&[&[("INTRODUCTION", 24)]]);
    let path = save_pdf(&mut doc, dir.path(), "doc.pdf");

    let backend = LopdfBackend::load_file(&path).unwrap();
    let pages = backend.pages();
    assert_eq!(pages.len(), 1);

    let (&page_num, &page_id) = pages.iter().next().unwrap();
    let spans = pdf_outliner::parser::extract_page_spans(&backend, page_num, page_id).unwrap();

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].text, "INTRODUCTION");
    assert_eq!(spans[0].font_size, 24.0);
    assert_eq!(spans[0].font_name, "Helvetica-Bold");
    assert_eq!(spans[0].page_number, 1);
}

#[test]
fn test_title_prefers_largest_non_numeric_candidate() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = build_pdf(&[&[
        ("2024", 30),
        ("Report Summary", 24),
        ("Some body text here", 11),
    ]]);
    let path = save_pdf(&mut doc, dir.path(), "report.pdf");

    assert_eq!(extract_title(&path), "Report Summary");
}

#[test]
fn test_title_falls_back_to_untitled() {
    let dir = tempfile::tempdir().unwrap();
    // Every candidate is numeric or too short
    let mut doc = build_pdf(&[&[("2024", 30), ("Memo", 20)]]);
    let path = save_pdf(&mut doc, dir.path(), "memo.pdf");

    assert_eq!(extract_title(&path), "Untitled");
}

#[test]
fn test_process_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = build_pdf(&[
        &[
            ("Annual Review 2024", 28),
            ("Introduction", 20),
            ("introduction", 20),
            ("Page 1", 10),
            ("Some body text here", 11),
        ],
        &[("Methods Overview", 17), ("Sampling notes", 14)],
    ]);
    let path = save_pdf(&mut doc, dir.path(), "review.pdf");

    let outline = process_file(&path, &mut SizePredictor).unwrap();

    assert_eq!(outline.title, "Annual Review 2024");

    let entries: Vec<(&str, HeadingLevel, u32)> = outline
        .outline
        .iter()
        .map(|e| (e.text.as_str(), e.level, e.page))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("Annual Review 2024", HeadingLevel::H1, 1),
            ("Introduction", HeadingLevel::H1, 1),
            ("Methods Overview", HeadingLevel::H2, 2),
            ("Sampling notes", HeadingLevel::H3, 2),
        ]
    );
}

#[test]
fn test_process_directory_writes_one_json_per_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    let output = dir.path().join("output");
    fs::create_dir(&input).unwrap();

    let mut a = build_pdf(&[&[("Document Alpha", 24)]]);
    save_pdf(&mut a, &input, "a.pdf");
    let mut b = build_pdf(&[&[("Document Beta", 24)]]);
    save_pdf(&mut b, &input, "b.pdf");
    fs::write(input.join("notes.txt"), "not a pdf").unwrap();

    // Output directory does not exist yet; the driver creates it
    let processed = batch::process_directory(&input, &output, &mut SizePredictor).unwrap();

    assert_eq!(processed.len(), 2);
    assert!(output.join("a.json").is_file());
    assert!(output.join("b.json").is_file());
    assert!(!output.join("notes.json").exists());

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output.join("a.json")).unwrap()).unwrap();
    assert_eq!(json["title"], "Document Alpha");
    assert_eq!(json["outline"][0]["level"], "H1");
    assert_eq!(json["outline"][0]["page"], 1);
}

#[test]
fn test_process_directory_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    let output = dir.path().join("output");
    fs::create_dir(&input).unwrap();
    fs::create_dir(&output).unwrap();

    let mut doc = build_pdf(&[&[("Document Alpha", 24)]]);
    save_pdf(&mut doc, &input, "a.pdf");
    fs::write(output.join("a.json"), "stale").unwrap();

    batch::process_directory(&input, &output, &mut SizePredictor).unwrap();

    let content = fs::read_to_string(output.join("a.json")).unwrap();
    assert!(content.contains("Document Alpha"));
}

#[test]
fn test_empty_document_yields_untitled_empty_outline() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    let output = dir.path().join("output");
    fs::create_dir(&input).unwrap();

    // One page, no text at all
    let mut doc = build_pdf(&[&[]]);
    save_pdf(&mut doc, &input, "doc.pdf");

    batch::process_directory(&input, &output, &mut SizePredictor).unwrap();

    let content = fs::read_to_string(output.join("doc.json")).unwrap();
    assert_eq!(content, "{\n  \"title\": \"Untitled\",\n  \"outline\": []\n}");
}

#[test]
fn test_unreadable_pdf_aborts_outline_extraction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    fs::write(&path, "%PDF-1.5\ngarbage").unwrap();

    // Title extraction guards itself; outline extraction does not
    assert_eq!(extract_title(&path), "Untitled");
    assert!(process_file(&path, &mut SizePredictor).is_err());
}
