//! Budget Quiz Assets Library
//!
//! This crate generates the static assets of a household budget quiz:
//! - `receipt`: draw the rent receipt image from a block layout
//! - `pdf`: rasterize every page of the source PDF
//! - `data`: documents, budget and quiz datasets, their validation and JSON output
//! - `pipeline`: run extraction and dataset generation end to end

pub mod config;
pub mod data;
pub mod error;
pub mod pdf;
pub mod pipeline;
pub mod receipt;

pub use config::{load_config, FontPaths, PipelineConfig, ReceiptConfig};
pub use error::{Error, Result};
pub use pipeline::{generate_datasets, run_pipeline, PipelineReport};
pub use receipt::{create_receipt, render_receipt};
