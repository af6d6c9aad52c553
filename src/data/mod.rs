//! Quiz datasets: documents, budget and questions
//!
//! This module holds the dataset records, the built-in exercise content,
//! cross-dataset validation and the JSON writers.

mod catalog;
mod model;
mod validate;
mod writer;

pub use catalog::{builtin_budget, builtin_documents, builtin_quiz};
pub use model::{
    amounts_match, Budget, BudgetCategory, BudgetEntry, BudgetTotals, ContentBundle, Document,
    Quiz, QuizQuestion, AMOUNT_TOLERANCE,
};
pub use validate::{
    check_quiz_indices, validate, DanglingReference, TotalMismatch, ValidationReport,
};
pub use writer::{
    write_budget, write_documents, write_json, write_quiz, BUDGET_FILE, DOCUMENTS_FILE, QUIZ_FILE,
};
