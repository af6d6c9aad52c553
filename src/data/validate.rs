//! Consistency checks across the three datasets

use super::model::{amounts_match, BudgetTotals, ContentBundle};
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashSet;

/// A declared total that disagrees with the sum of its lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalMismatch {
    /// `total_entrees`, `total_sorties` or `solde`
    pub field: &'static str,
    pub declared: f64,
    pub computed: f64,
}

/// A reference to a document id that does not exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    /// Where the reference lives, e.g. `budget.sorties_fixes[Loyer]`
    pub location: String,
    pub doc_id: String,
}

/// Findings of [`validate`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub total_mismatches: Vec<TotalMismatch>,
    pub dangling_references: Vec<DanglingReference>,
    pub duplicate_document_ids: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.total_mismatches.is_empty()
            && self.dangling_references.is_empty()
            && self.duplicate_document_ids.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.total_mismatches.len()
            + self.dangling_references.len()
            + self.duplicate_document_ids.len()
    }

    /// One human readable line per finding
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.issue_count());
        for m in &self.total_mismatches {
            lines.push(format!(
                "budget.totaux.{}: declared {:.2}, lines sum to {:.2}",
                m.field, m.declared, m.computed
            ));
        }
        for r in &self.dangling_references {
            lines.push(format!("{}: unknown document id '{}'", r.location, r.doc_id));
        }
        for id in &self.duplicate_document_ids {
            lines.push(format!("documents: id '{}' is used more than once", id));
        }
        lines
    }
}

/// Fail if any quiz question's `correctIndex` points outside its options
pub fn check_quiz_indices(bundle: &ContentBundle) -> Result<()> {
    for question in bundle.quiz.questions() {
        if question.correct_option().is_none() {
            return Err(Error::InvalidDataset {
                reason: format!(
                    "question {}: correctIndex {} out of bounds ({} options)",
                    question.id,
                    question.correct_index,
                    question.options.len()
                ),
            });
        }
    }
    Ok(())
}

fn compare_totals(declared: &BudgetTotals, computed: &BudgetTotals) -> Vec<TotalMismatch> {
    [
        ("total_entrees", declared.total_entrees, computed.total_entrees),
        ("total_sorties", declared.total_sorties, computed.total_sorties),
        ("solde", declared.solde, computed.solde),
    ]
    .into_iter()
    .filter(|(_, declared, computed)| !amounts_match(*declared, *computed))
    .map(|(field, declared, computed)| TotalMismatch {
        field,
        declared,
        computed,
    })
    .collect()
}

/// Check quiz indices, then collect totals mismatches and reference issues.
///
/// Out-of-bounds quiz answers are an error; everything else is reported.
pub fn validate(bundle: &ContentBundle) -> Result<ValidationReport> {
    check_quiz_indices(bundle)?;

    let mut report = ValidationReport {
        total_mismatches: compare_totals(&bundle.budget.totaux, &bundle.budget.computed_totals()),
        ..ValidationReport::default()
    };

    let mut ids = HashSet::new();
    for doc in &bundle.documents {
        if !ids.insert(doc.id.as_str()) && !report.duplicate_document_ids.contains(&doc.id) {
            report.duplicate_document_ids.push(doc.id.clone());
        }
    }

    for (category, entry) in bundle.budget.entries() {
        if !ids.contains(entry.source_doc_id.as_str()) {
            report.dangling_references.push(DanglingReference {
                location: format!("budget.{}[{}]", category.key(), entry.libelle),
                doc_id: entry.source_doc_id.clone(),
            });
        }
    }

    for question in bundle.quiz.questions() {
        if let Some(doc_id) = &question.doc_id {
            if !ids.contains(doc_id.as_str()) {
                report.dangling_references.push(DanglingReference {
                    location: format!("quiz[{}]", question.id),
                    doc_id: doc_id.clone(),
                });
            }
        }
    }

    Ok(report)
}
