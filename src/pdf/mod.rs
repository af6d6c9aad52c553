//! PDF processing layer
//!
//! This module rasterizes source PDF pages to PNG files using PDFium.

mod rasterize;

pub use rasterize::{
    create_pdfium, page_filename, page_path, rasterize_bytes, rasterize_pdf, ExtractedPage,
    RasterizeOptions,
};
