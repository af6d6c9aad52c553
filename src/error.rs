//! Error types for budget asset generation

use thiserror::Error;

/// Result type alias for budget asset generation
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for budget asset generation
#[derive(Error, Debug)]
pub enum Error {
    /// Source PDF file not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDFium error
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Dataset violates an invariant that must hold before it is written
    #[error("Invalid dataset: {reason}")]
    InvalidDataset { reason: String },

    /// Configuration file could not be used
    #[error("Invalid configuration {path}: {reason}")]
    Config { path: String, reason: String },
}

impl Error {
    /// Whether the error comes from the source document rather than the output side.
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            Error::PdfNotFound { .. } | Error::InvalidPdf { .. } | Error::Pdfium { .. }
        )
    }
}
