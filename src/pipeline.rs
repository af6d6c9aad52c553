//! Asset extraction pipeline
//!
//! Rasterizes the source PDF, validates the content bundle and writes the
//! three datasets. Steps run in that order; the first failure aborts the run
//! and files written by earlier steps stay on disk.

use crate::config::PipelineConfig;
use crate::data::{
    validate, write_budget, write_documents, write_quiz, ContentBundle, ValidationReport,
};
use crate::error::{Error, Result};
use crate::pdf::{rasterize_pdf, ExtractedPage, RasterizeOptions};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Summary of a pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub pages: Vec<ExtractedPage>,
    pub documents: usize,
    pub budget_entries: usize,
    pub questions: usize,
    pub validation: ValidationReport,
    /// Dataset files, in write order
    pub datasets: Vec<PathBuf>,
}

/// Validate `bundle` and write its three datasets into `data_dir`.
///
/// With `strict`, totals mismatches and reference issues abort before
/// anything is written; otherwise they are logged and returned.
pub fn generate_datasets(
    bundle: &ContentBundle,
    data_dir: &Path,
    strict: bool,
) -> Result<(ValidationReport, Vec<PathBuf>)> {
    let report = validate(bundle)?;

    for issue in report.describe() {
        tracing::warn!("{}", issue);
    }
    if strict && !report.is_clean() {
        return Err(Error::InvalidDataset {
            reason: format!("{} consistency issue(s) found", report.issue_count()),
        });
    }

    let datasets = vec![
        write_documents(data_dir, &bundle.documents)?,
        write_budget(data_dir, &bundle.budget)?,
        write_quiz(data_dir, &bundle.quiz)?,
    ];

    Ok((report, datasets))
}

/// Run the whole pipeline
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineReport> {
    config.check()?;

    let options = RasterizeOptions {
        zoom: config.zoom,
        image_prefix: config.image_prefix.clone(),
    };
    let pages = rasterize_pdf(&config.source_pdf, &config.images_dir(), &options)?;
    tracing::info!(count = pages.len(), "pages extracted as images");

    let bundle = config.load_content()?;
    let (validation, datasets) = generate_datasets(&bundle, &config.data_dir(), config.strict)?;

    Ok(PipelineReport {
        pages,
        documents: bundle.documents.len(),
        budget_entries: bundle.budget.entry_count(),
        questions: bundle.quiz.question_count(),
        validation,
        datasets,
    })
}
