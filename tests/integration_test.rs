//! Integration tests for budget asset generation

use budget_assets::config::{FontPaths, PipelineConfig, ReceiptConfig};
use budget_assets::data::{Budget, ContentBundle, Document, Quiz};
use budget_assets::pdf::{
    create_pdfium, page_path, rasterize_bytes, rasterize_pdf, RasterizeOptions,
};
use budget_assets::{create_receipt, generate_datasets, run_pipeline, Error};
use pdfium_render::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

fn missing_fonts() -> FontPaths {
    FontPaths {
        regular: PathBuf::from("/nonexistent/fonts/Regular.ttf"),
        bold: PathBuf::from("/nonexistent/fonts/Bold.ttf"),
    }
}

/// Build a PDF of `pages` blank A4 pages
fn blank_pdf(pages: usize) -> Vec<u8> {
    let pdfium = create_pdfium().expect("PDFium library is required for rasterization tests");
    let mut document = pdfium.create_new_pdf().expect("Failed to create PDF");
    for _ in 0..pages {
        document
            .pages_mut()
            .create_page_at_end(PdfPagePaperSize::a4())
            .expect("Failed to add page");
    }
    document.save_to_bytes().expect("Failed to save PDF")
}

fn read_json(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).expect("Failed to read dataset");
    serde_json::from_str(&text).expect("Dataset is not valid JSON")
}

// ============================================================================
// Receipt
// ============================================================================

#[test]
fn test_create_receipt_with_fallback_font() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReceiptConfig {
        output: dir.path().join("assets/images/page_3_loyer.png"),
        fonts: missing_fonts(),
        ..ReceiptConfig::default()
    };

    let path = create_receipt(&config).expect("Receipt rendering must not fail without fonts");

    assert_eq!(path, config.output);
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
    let image = image::open(&path).expect("Receipt is not a readable PNG");
    assert_eq!((image.width(), image.height()), (800, 1000));

    let files: Vec<_> = std::fs::read_dir(path.parent().unwrap()).unwrap().collect();
    assert_eq!(files.len(), 1);
}

#[test]
fn test_create_receipt_with_system_font() {
    let config = ReceiptConfig::default();
    if !config.fonts.regular.exists() || !config.fonts.bold.exists() {
        eprintln!("skipping: DejaVu fonts not installed");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let config = ReceiptConfig {
        output: dir.path().join("receipt.png"),
        ..config
    };

    let path = create_receipt(&config).unwrap();
    let image = image::open(path).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (800, 1000));
}

#[test]
fn test_create_receipt_into_file_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("images");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let config = ReceiptConfig {
        output: blocker.join("page_3_loyer.png"),
        fonts: missing_fonts(),
        ..ReceiptConfig::default()
    };

    let result = create_receipt(&config);
    assert!(matches!(result, Err(Error::Io(_))), "{:?}", result);
    assert!(!result.unwrap_err().is_source_error());
}

#[test]
fn test_create_receipt_overwrites_stale_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("page_3_loyer.png");
    std::fs::write(&output, b"stale content that is not an image").unwrap();

    let config = ReceiptConfig {
        output: output.clone(),
        fonts: missing_fonts(),
        ..ReceiptConfig::default()
    };
    create_receipt(&config).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
    assert!(image::load_from_memory(&bytes).is_ok());
}

// ============================================================================
// Datasets
// ============================================================================

#[test]
fn test_datasets_are_valid_json_and_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let (_, paths) = generate_datasets(&ContentBundle::builtin(), dir.path(), false).unwrap();

    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["documents.json", "budget.json", "quiz.json"]);

    for path in &paths {
        let first = read_json(path);
        let reserialized = serde_json::to_string_pretty(&first).unwrap();
        let second: serde_json::Value = serde_json::from_str(&reserialized).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_datasets_parse_back_into_records() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = ContentBundle::builtin();
    generate_datasets(&bundle, dir.path(), true).unwrap();

    let documents: Vec<Document> =
        serde_json::from_value(read_json(&dir.path().join("documents.json"))).unwrap();
    let budget: Budget = serde_json::from_value(read_json(&dir.path().join("budget.json"))).unwrap();
    let quiz: Quiz = serde_json::from_value(read_json(&dir.path().join("quiz.json"))).unwrap();

    assert_eq!(documents, bundle.documents);
    assert_eq!(budget, bundle.budget);
    assert_eq!(quiz, bundle.quiz);
}

#[test]
fn test_quiz_answers_in_bounds() {
    let dir = tempfile::tempdir().unwrap();
    generate_datasets(&ContentBundle::builtin(), dir.path(), false).unwrap();

    let quiz = read_json(&dir.path().join("quiz.json"));
    for part in ["partie1_documents", "partie3_final"] {
        for question in quiz[part].as_array().unwrap() {
            let options = question["options"].as_array().unwrap().len() as u64;
            let index = question["correctIndex"].as_u64().unwrap();
            assert!(index < options, "question {} out of bounds", question["id"]);
        }
    }
}

#[test]
fn test_budget_references_existing_documents() {
    let dir = tempfile::tempdir().unwrap();
    generate_datasets(&ContentBundle::builtin(), dir.path(), false).unwrap();

    let documents = read_json(&dir.path().join("documents.json"));
    let ids: HashSet<&str> = documents
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap())
        .collect();

    let budget = read_json(&dir.path().join("budget.json"));
    for category in ["entrees", "sorties_fixes", "sorties_variables"] {
        for entry in budget[category].as_array().unwrap() {
            let doc_id = entry["sourceDocId"].as_str().unwrap();
            assert!(ids.contains(doc_id), "unknown document {}", doc_id);
        }
    }
}

#[test]
fn test_datasets_overwrite_stale_files() {
    let dir = tempfile::tempdir().unwrap();
    let stale = "x".repeat(200_000);
    for name in ["documents.json", "budget.json", "quiz.json"] {
        std::fs::write(dir.path().join(name), &stale).unwrap();
    }

    generate_datasets(&ContentBundle::builtin(), dir.path(), false).unwrap();

    for name in ["documents.json", "budget.json", "quiz.json"] {
        let text = std::fs::read_to_string(dir.path().join(name)).unwrap();
        assert!(!text.contains("xxxx"), "{} kept stale content", name);
        assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());
    }
}

#[test]
fn test_budget_json_keeps_declared_totals() {
    let dir = tempfile::tempdir().unwrap();
    generate_datasets(&ContentBundle::builtin(), dir.path(), false).unwrap();

    let budget = read_json(&dir.path().join("budget.json"));
    assert_eq!(budget["totaux"]["total_entrees"], serde_json::json!(2102.52));
    assert_eq!(budget["totaux"]["total_sorties"], serde_json::json!(1750.0));
    assert_eq!(budget["totaux"]["solde"], serde_json::json!(352.52));
}

#[test]
fn test_invalid_quiz_blocks_all_datasets() {
    let dir = tempfile::tempdir().unwrap();
    let mut bundle = ContentBundle::builtin();
    bundle.quiz.partie1_documents[0].correct_index = 9;

    let result = generate_datasets(&bundle, dir.path(), false);
    assert!(matches!(result, Err(Error::InvalidDataset { .. })));
    assert!(!dir.path().join("documents.json").exists());
}

#[test]
fn test_unwritable_data_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::write(&data_dir, b"regular file").unwrap();

    let result = generate_datasets(&ContentBundle::builtin(), &data_dir, false);
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_write_failure_keeps_earlier_datasets() {
    let dir = tempfile::tempdir().unwrap();
    // A directory in place of budget.json makes the second write fail
    std::fs::create_dir(dir.path().join("budget.json")).unwrap();

    let result = generate_datasets(&ContentBundle::builtin(), dir.path(), false);

    assert!(matches!(result, Err(Error::Io(_))));
    let documents: Vec<Document> =
        serde_json::from_value(read_json(&dir.path().join("documents.json"))).unwrap();
    assert_eq!(documents.len(), 11);
    assert!(!dir.path().join("quiz.json").exists());
}

#[test]
fn test_external_content_bundle() {
    let dir = tempfile::tempdir().unwrap();
    let mut bundle = ContentBundle::builtin();
    bundle.documents.truncate(2);
    bundle.quiz.partie1_documents.truncate(2);
    bundle.quiz.partie3_final.clear();
    let content = dir.path().join("content.json");
    std::fs::write(&content, serde_json::to_vec(&bundle).unwrap()).unwrap();

    let config = PipelineConfig {
        content: Some(content),
        ..PipelineConfig::default()
    };
    let loaded = config.load_content().unwrap();
    assert_eq!(loaded, bundle);

    // Budget lines now point at documents that are no longer listed
    let (report, _) = generate_datasets(&loaded, &dir.path().join("data"), false).unwrap();
    assert!(!report.dangling_references.is_empty());
}

#[test]
fn test_page_paths_follow_prefix() {
    let options = RasterizeOptions {
        zoom: 1.0,
        image_prefix: "static/pages/".to_string(),
    };
    let paths: Vec<_> = (1..=3).map(|n| page_path(&options.image_prefix, n)).collect();
    assert_eq!(
        paths,
        vec![
            "static/pages/page_1.png",
            "static/pages/page_2.png",
            "static/pages/page_3.png",
        ]
    );
}

// ============================================================================
// Rasterization (requires the PDFium library)
// ============================================================================

#[rstest]
#[case(1)]
#[case(3)]
fn test_rasterize_one_image_per_page(#[case] pages: usize) {
    let data = blank_pdf(pages);
    let dir = tempfile::tempdir().unwrap();
    let images_dir = dir.path().join("images");

    let extracted = rasterize_bytes(&data, &images_dir, &RasterizeOptions::default()).unwrap();

    assert_eq!(extracted.len(), pages);
    for (i, page) in extracted.iter().enumerate() {
        let n = i as u32 + 1;
        assert_eq!(page.page, n);
        assert_eq!(page.filename, format!("page_{}.png", n));
        assert_eq!(page.path, format!("assets/images/page_{}.png", n));
        assert!(images_dir.join(&page.filename).exists());
    }
    assert_eq!(std::fs::read_dir(&images_dir).unwrap().count(), pages);
}

#[test]
fn test_rasterize_applies_zoom() {
    let data = blank_pdf(1);
    let dir = tempfile::tempdir().unwrap();

    let extracted = rasterize_bytes(&data, dir.path(), &RasterizeOptions::default()).unwrap();

    // A4 is 595.28 x 841.89 points
    let page = &extracted[0];
    assert!((page.width as i64 - 1191).abs() <= 2, "width {}", page.width);
    assert!((page.height as i64 - 1684).abs() <= 2, "height {}", page.height);

    let image = image::open(dir.path().join("page_1.png")).unwrap();
    assert_eq!((image.width(), image.height()), (page.width, page.height));
}

#[test]
fn test_rasterize_zero_pages() {
    let data = blank_pdf(0);
    let dir = tempfile::tempdir().unwrap();
    let images_dir = dir.path().join("images");

    let extracted = rasterize_bytes(&data, &images_dir, &RasterizeOptions::default()).unwrap();

    assert!(extracted.is_empty());
    assert_eq!(std::fs::read_dir(&images_dir).unwrap().count(), 0);
}

#[test]
fn test_rasterize_overwrites_stale_images() {
    let data = blank_pdf(2);
    let dir = tempfile::tempdir().unwrap();
    for name in ["page_1.png", "page_2.png"] {
        std::fs::write(dir.path().join(name), b"stale").unwrap();
    }

    rasterize_bytes(&data, dir.path(), &RasterizeOptions::default()).unwrap();

    for name in ["page_1.png", "page_2.png"] {
        assert!(image::open(dir.path().join(name)).is_ok(), "{} not replaced", name);
    }
}

#[test]
fn test_rasterize_unwritable_page_is_output_error() {
    let data = blank_pdf(1);
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("page_1.png")).unwrap();

    let result = rasterize_bytes(&data, dir.path(), &RasterizeOptions::default());

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Image(_)), "{:?}", err);
    assert!(!err.is_source_error());
}

#[test]
fn test_rasterize_from_file() {
    let data = blank_pdf(2);
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.pdf");
    std::fs::write(&source, &data).unwrap();

    let options = RasterizeOptions {
        zoom: 1.0,
        image_prefix: "img/".to_string(),
    };
    let extracted = rasterize_pdf(&source, &dir.path().join("out"), &options).unwrap();

    assert_eq!(extracted.len(), 2);
    assert_eq!(extracted[1].path, "img/page_2.png");
    assert!((extracted[0].width as i64 - 595).abs() <= 1);
}

#[test]
fn test_run_pipeline_end_to_end() {
    let data = blank_pdf(10);
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("budget.pdf");
    std::fs::write(&source, &data).unwrap();

    let config = PipelineConfig {
        source_pdf: source,
        output_dir: dir.path().join("public/assets"),
        strict: true,
        ..PipelineConfig::default()
    };

    let report = run_pipeline(&config).unwrap();

    assert_eq!(report.pages.len(), 10);
    assert_eq!(report.documents, 11);
    assert_eq!(report.budget_entries, 15);
    assert_eq!(report.questions, 15);
    assert!(report.validation.is_clean());
    assert!(config.images_dir().join("page_10.png").exists());
    for name in ["documents.json", "budget.json", "quiz.json"] {
        assert!(config.data_dir().join(name).exists());
    }
}

#[test]
fn test_run_pipeline_unwritable_data_dir_keeps_images() {
    let data = blank_pdf(2);
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("budget.pdf");
    std::fs::write(&source, &data).unwrap();

    let config = PipelineConfig {
        source_pdf: source,
        output_dir: dir.path().join("public/assets"),
        ..PipelineConfig::default()
    };
    std::fs::create_dir_all(&config.output_dir).unwrap();
    std::fs::write(config.data_dir(), b"regular file").unwrap();

    let result = run_pipeline(&config);

    assert!(matches!(result, Err(Error::Io(_))));
    assert!(config.images_dir().join("page_1.png").exists());
    assert!(config.images_dir().join("page_2.png").exists());
}
