//! Page rasterization with PDFium

use crate::config::{DEFAULT_IMAGE_PREFIX, DEFAULT_ZOOM};
use crate::error::{Error, Result};
use pdfium_render::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bind PDFium (creates a new instance each time - PDFium is not thread-safe)
pub fn create_pdfium() -> Result<Pdfium> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}

/// Rasterization settings
#[derive(Debug, Clone, PartialEq)]
pub struct RasterizeOptions {
    /// Linear zoom relative to the native page size in points
    pub zoom: f32,
    /// Prefix of [`ExtractedPage::path`]
    pub image_prefix: String,
}

impl Default for RasterizeOptions {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            image_prefix: DEFAULT_IMAGE_PREFIX.to_string(),
        }
    }
}

/// A page written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// Page number (1-indexed)
    pub page: u32,
    pub filename: String,
    /// Path as referenced by the datasets, e.g. `assets/images/page_1.png`
    pub path: String,
    /// Rendered width in pixels
    pub width: u32,
    /// Rendered height in pixels
    pub height: u32,
}

/// `page_<n>.png` for a 1-indexed page number
pub fn page_filename(page: u32) -> String {
    format!("page_{}.png", page)
}

/// Path of a page image as referenced by the datasets
pub fn page_path(image_prefix: &str, page: u32) -> String {
    format!("{}/{}", image_prefix.trim_end_matches('/'), page_filename(page))
}

fn is_pdf(data: &[u8]) -> bool {
    data.len() >= 4 && &data[0..4] == b"%PDF"
}

/// Read the source PDF, rejecting missing files and non-PDF data
fn read_source(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(Error::PdfNotFound {
            path: path.display().to_string(),
        });
    }

    let data = std::fs::read(path)?;
    if !is_pdf(&data) {
        return Err(Error::InvalidPdf {
            reason: format!("{} is not a valid PDF file", path.display()),
        });
    }
    Ok(data)
}

fn map_pdfium_error(err: PdfiumError) -> Error {
    match err {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
            Error::InvalidPdf {
                reason: "PDF is password protected".to_string(),
            }
        }
        _ => Error::Pdfium {
            reason: format!("{}", err),
        },
    }
}

/// Render every page of the PDF at `source` into `images_dir`
pub fn rasterize_pdf(
    source: &Path,
    images_dir: &Path,
    options: &RasterizeOptions,
) -> Result<Vec<ExtractedPage>> {
    let data = read_source(source)?;
    tracing::info!(source = %source.display(), bytes = data.len(), "rasterizing PDF");
    rasterize_bytes(&data, images_dir, options)
}

/// Render every page of a PDF held in memory into `images_dir`.
///
/// Writes `page_1.png` .. `page_P.png`, replacing files of the same name.
pub fn rasterize_bytes(
    data: &[u8],
    images_dir: &Path,
    options: &RasterizeOptions,
) -> Result<Vec<ExtractedPage>> {
    if !is_pdf(data) {
        return Err(Error::InvalidPdf {
            reason: "Not a valid PDF file".to_string(),
        });
    }

    let pdfium = create_pdfium()?;
    let document = pdfium
        .load_pdf_from_byte_slice(data, None)
        .map_err(map_pdfium_error)?;

    std::fs::create_dir_all(images_dir)?;

    let pages = document.pages();
    let mut extracted = Vec::with_capacity(pages.len() as usize);

    let config = PdfRenderConfig::new()
        .scale_page_by_factor(options.zoom)
        .render_form_data(true)
        .render_annotations(true);

    for (index, page) in pages.iter().enumerate() {
        let page_num = index as u32 + 1;

        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| Error::Pdfium {
                reason: format!("Failed to render page {}: {}", page_num, e),
            })?;

        let dynamic_image = bitmap.as_image();
        let width = dynamic_image.width();
        let height = dynamic_image.height();

        let filename = page_filename(page_num);
        let target = images_dir.join(&filename);
        dynamic_image.save_with_format(&target, image::ImageFormat::Png)?;

        tracing::info!(page = page_num, width, height, "page extracted: {}", filename);

        extracted.push(ExtractedPage {
            page: page_num,
            path: page_path(&options.image_prefix, page_num),
            filename,
            width,
            height,
        });
    }

    Ok(extracted)
}
