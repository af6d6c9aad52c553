//! JSON dataset files

use super::model::{Budget, Document, Quiz};
use crate::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DOCUMENTS_FILE: &str = "documents.json";
pub const BUDGET_FILE: &str = "budget.json";
pub const QUIZ_FILE: &str = "quiz.json";

/// Serialize `value` as pretty JSON (2-space indent, UTF-8, non-ASCII kept as is)
/// and replace `dir/file_name` with it. Creates `dir` when missing.
pub fn write_json<T: Serialize + ?Sized>(dir: &Path, file_name: &str, value: &T) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let bytes = serde_json::to_vec_pretty(value)?;

    let path = dir.join(file_name);
    std::fs::write(&path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote dataset");

    Ok(path)
}

/// Write `documents.json`
pub fn write_documents(data_dir: &Path, documents: &[Document]) -> Result<PathBuf> {
    let path = write_json(data_dir, DOCUMENTS_FILE, documents)?;
    tracing::info!(count = documents.len(), "{} written", DOCUMENTS_FILE);
    Ok(path)
}

/// Write `budget.json`
pub fn write_budget(data_dir: &Path, budget: &Budget) -> Result<PathBuf> {
    let path = write_json(data_dir, BUDGET_FILE, budget)?;
    tracing::info!(entries = budget.entry_count(), "{} written", BUDGET_FILE);
    Ok(path)
}

/// Write `quiz.json`
pub fn write_quiz(data_dir: &Path, quiz: &Quiz) -> Result<PathBuf> {
    let path = write_json(data_dir, QUIZ_FILE, quiz)?;
    tracing::info!(questions = quiz.question_count(), "{} written", QUIZ_FILE);
    Ok(path)
}
