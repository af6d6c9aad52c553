//! Dataset records consumed by the quiz front-end
//!
//! JSON keys follow the front-end's naming. Struct field order is the
//! serialized key order.

use serde::{Deserialize, Serialize};

/// A scanned household document shown to the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub titre: String,
    /// Category tag (e.g. `quittance_loyer`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Page of the source PDF (1-indexed)
    #[serde(rename = "pagePDF")]
    pub page_pdf: u32,
    #[serde(rename = "imagePath")]
    pub image_path: String,
    pub montants: Vec<f64>,
    pub libelles: Vec<String>,
}

/// One line of the household budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// Line kind: `revenu`, `allocation`, `fixe` or `variable`
    #[serde(rename = "type")]
    pub kind: String,
    pub libelle: String,
    #[serde(rename = "montantAttendu")]
    pub montant_attendu: f64,
    /// Id of the [`Document`] the amount comes from
    #[serde(rename = "sourceDocId")]
    pub source_doc_id: String,
}

/// Declared budget totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub total_entrees: f64,
    pub total_sorties: f64,
    pub solde: f64,
}

impl BudgetTotals {
    /// A budget is considered healthy when the balance is zero or positive
    pub fn is_balanced_or_positive(&self) -> bool {
        self.solde > -AMOUNT_TOLERANCE
    }
}

/// Tolerance used when comparing amounts (one cent)
pub const AMOUNT_TOLERANCE: f64 = 0.01;

/// Compare two amounts within [`AMOUNT_TOLERANCE`]
pub fn amounts_match(a: f64, b: f64) -> bool {
    // Float sums of cent amounts land a few ulps off exact cents
    (a - b).abs() <= AMOUNT_TOLERANCE + 1e-9
}

/// Budget lines grouped by category, plus the declared totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub entrees: Vec<BudgetEntry>,
    pub sorties_fixes: Vec<BudgetEntry>,
    pub sorties_variables: Vec<BudgetEntry>,
    pub totaux: BudgetTotals,
}

impl Budget {
    /// Total number of budget lines across all categories
    pub fn entry_count(&self) -> usize {
        self.entrees.len() + self.sorties_fixes.len() + self.sorties_variables.len()
    }

    /// Iterate over every line with its category
    pub fn entries(&self) -> impl Iterator<Item = (BudgetCategory, &BudgetEntry)> {
        self.entrees
            .iter()
            .map(|e| (BudgetCategory::Income, e))
            .chain(
                self.sorties_fixes
                    .iter()
                    .map(|e| (BudgetCategory::FixedExpense, e)),
            )
            .chain(
                self.sorties_variables
                    .iter()
                    .map(|e| (BudgetCategory::VariableExpense, e)),
            )
    }

    /// Totals recomputed from the lines
    pub fn computed_totals(&self) -> BudgetTotals {
        let sum = |entries: &[BudgetEntry]| -> f64 {
            entries.iter().map(|e| e.montant_attendu).sum()
        };
        let total_entrees = sum(&self.entrees);
        let total_sorties = sum(&self.sorties_fixes) + sum(&self.sorties_variables);

        BudgetTotals {
            total_entrees,
            total_sorties,
            solde: total_entrees - total_sorties,
        }
    }
}

/// Budget line category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetCategory {
    Income,
    FixedExpense,
    VariableExpense,
}

impl BudgetCategory {
    /// Key of the category in `budget.json`
    pub fn key(&self) -> &'static str {
        match self {
            BudgetCategory::Income => "entrees",
            BudgetCategory::FixedExpense => "sorties_fixes",
            BudgetCategory::VariableExpense => "sorties_variables",
        }
    }
}

/// A multiple-choice quiz question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    /// Document the question is about, if any
    #[serde(rename = "docId", default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    pub options: Vec<String>,
    #[serde(rename = "correctIndex")]
    pub correct_index: usize,
    pub explication: String,
}

impl QuizQuestion {
    /// The correct option, or `None` when the index is out of bounds
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}

/// Quiz questions by game part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub partie1_documents: Vec<QuizQuestion>,
    pub partie3_final: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn question_count(&self) -> usize {
        self.partie1_documents.len() + self.partie3_final.len()
    }

    pub fn questions(&self) -> impl Iterator<Item = &QuizQuestion> {
        self.partie1_documents.iter().chain(self.partie3_final.iter())
    }
}

/// The three datasets as one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBundle {
    pub documents: Vec<Document>,
    pub budget: Budget,
    pub quiz: Quiz,
}
