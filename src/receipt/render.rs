//! Receipt image rendering

use super::canvas::{outline_rect, paint, WHITE};
use super::content::receipt_blocks;
use super::fonts::Fonts;
use super::layout::layout;
use crate::config::ReceiptConfig;
use crate::error::Result;
use image::{ImageFormat, Rgb, RgbImage};
use std::path::PathBuf;

/// Distance of the outer border from the canvas edge
const FRAME_INSET: i32 = 30;
const FRAME_THICKNESS: u32 = 2;

/// Draw the receipt in memory
pub fn render_receipt(config: &ReceiptConfig) -> RgbImage {
    let fonts = Fonts::load(&config.fonts);
    render_with_fonts(config, &fonts)
}

/// Draw the receipt with already loaded fonts
pub fn render_with_fonts(config: &ReceiptConfig, fonts: &Fonts) -> RgbImage {
    let (width, height) = (config.width, config.height);
    let mut image = RgbImage::from_pixel(width, height, WHITE);

    outline_rect(
        &mut image,
        (
            FRAME_INSET,
            FRAME_INSET,
            width as i32 - FRAME_INSET,
            height as i32 - FRAME_INSET,
        ),
        Rgb([0, 0, 0]),
        FRAME_THICKNESS,
    );

    let blocks = receipt_blocks(&config.fields, width);
    let ops = layout(&blocks, width, fonts);
    paint(&mut image, &ops, fonts);

    image
}

/// Draw the receipt and save it as PNG, replacing any existing file
pub fn create_receipt(config: &ReceiptConfig) -> Result<PathBuf> {
    let image = render_receipt(config);

    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    image.save_with_format(&config.output, ImageFormat::Png)?;

    tracing::info!(
        path = %config.output.display(),
        width = image.width(),
        height = image.height(),
        "receipt image created"
    );
    Ok(config.output.clone())
}
