//! Run configuration for the two binaries
//!
//! Both configs default to the built-in exercise so the binaries run without
//! arguments. A JSON file may override any subset of the fields.

use crate::data::ContentBundle;
use crate::error::{Error, Result};
use crate::receipt::ReceiptFields;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default linear zoom applied when rasterizing PDF pages
pub const DEFAULT_ZOOM: f32 = 2.0;

/// Image path prefix recorded in extracted page entries
pub const DEFAULT_IMAGE_PREFIX: &str = "assets/images";

/// Configuration of the extraction pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Source PDF to rasterize
    pub source_pdf: PathBuf,
    /// Output root; images go to `<output_dir>/images`, datasets to `<output_dir>/data`
    pub output_dir: PathBuf,
    /// Linear zoom factor (2.0 doubles width and height)
    pub zoom: f32,
    /// Prefix of the paths recorded for extracted pages
    pub image_prefix: String,
    /// JSON content bundle replacing the built-in datasets
    pub content: Option<PathBuf>,
    /// Abort on totals mismatches or dangling references
    pub strict: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_pdf: PathBuf::from("source/budget_menage.pdf"),
            output_dir: PathBuf::from("public/assets"),
            zoom: DEFAULT_ZOOM,
            image_prefix: DEFAULT_IMAGE_PREFIX.to_string(),
            content: None,
            strict: false,
        }
    }
}

impl PipelineConfig {
    pub fn images_dir(&self) -> PathBuf {
        self.output_dir.join("images")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.output_dir.join("data")
    }

    /// Reject zoom factors PDFium cannot render with (zero, negative, NaN)
    pub fn check(&self) -> Result<()> {
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(Error::Config {
                path: "zoom".to_string(),
                reason: format!("must be a positive number, got {}", self.zoom),
            });
        }
        Ok(())
    }

    /// Load the content bundle, falling back to the built-in exercise
    pub fn load_content(&self) -> Result<ContentBundle> {
        match &self.content {
            Some(path) => read_json(path),
            None => Ok(ContentBundle::builtin()),
        }
    }
}

/// Font files used by the receipt renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontPaths {
    pub regular: PathBuf,
    pub bold: PathBuf,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            regular: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            bold: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
        }
    }
}

/// Configuration of the receipt renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptConfig {
    /// PNG file to write
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub fonts: FontPaths,
    pub fields: ReceiptFields,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("assets/images/page_3_loyer.png"),
            width: 800,
            height: 1000,
            fonts: FontPaths::default(),
            fields: ReceiptFields::default(),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|e| Error::Config {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Load a config from `path`, or the default when no path is given
pub fn load_config<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading configuration");
            read_json(path)
        }
        None => Ok(T::default()),
    }
}
