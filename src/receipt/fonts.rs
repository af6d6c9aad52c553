//! Text faces for the receipt: TrueType when available, 8x8 bitmap otherwise

use crate::config::FontPaths;
use ab_glyph::{FontVec, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::path::Path;

/// Text styles used on the receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Normal,
    Small,
    Amount,
}

impl TextStyle {
    /// Nominal pixel size
    pub fn px(&self) -> f32 {
        match self {
            TextStyle::Title => 24.0,
            TextStyle::Normal => 16.0,
            TextStyle::Small => 14.0,
            TextStyle::Amount => 18.0,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, TextStyle::Title | TextStyle::Amount)
    }
}

/// Loaded faces
pub enum Fonts {
    TrueType { regular: FontVec, bold: FontVec },
    /// Built-in 8x8 glyphs scaled by an integer factor
    Bitmap,
}

const GLYPH_SIZE: u32 = 8;

fn read_face(path: &Path) -> Result<FontVec, String> {
    let data = std::fs::read(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    FontVec::try_from_vec(data).map_err(|e| format!("{}: {}", path.display(), e))
}

impl Fonts {
    /// Load both TrueType faces. Any failure degrades every style to the bitmap font.
    pub fn load(paths: &FontPaths) -> Self {
        match (read_face(&paths.regular), read_face(&paths.bold)) {
            (Ok(regular), Ok(bold)) => {
                tracing::debug!(regular = %paths.regular.display(), bold = %paths.bold.display(), "TrueType fonts loaded");
                Fonts::TrueType { regular, bold }
            }
            (Err(reason), _) | (_, Err(reason)) => {
                tracing::warn!(%reason, "TrueType font unavailable, using bitmap font");
                Fonts::Bitmap
            }
        }
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, Fonts::Bitmap)
    }

    fn bitmap_scale(style: TextStyle) -> u32 {
        ((style.px() / GLYPH_SIZE as f32).round() as u32).max(1)
    }

    /// Width and height in pixels of `text` rendered in `style`
    pub fn measure(&self, style: TextStyle, text: &str) -> (u32, u32) {
        match self {
            Fonts::TrueType { regular, bold } => {
                let face = if style.is_bold() { bold } else { regular };
                text_size(PxScale::from(style.px()), face, text)
            }
            Fonts::Bitmap => {
                let cell = GLYPH_SIZE * Self::bitmap_scale(style);
                (cell * text.chars().count() as u32, cell)
            }
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`
    pub fn draw(
        &self,
        image: &mut RgbImage,
        style: TextStyle,
        x: i32,
        y: i32,
        color: Rgb<u8>,
        text: &str,
    ) {
        match self {
            Fonts::TrueType { regular, bold } => {
                let face = if style.is_bold() { bold } else { regular };
                draw_text_mut(image, color, x, y, PxScale::from(style.px()), face, text);
            }
            Fonts::Bitmap => {
                let scale = Self::bitmap_scale(style);
                draw_bitmap_text(image, scale, x, y, color, text);
                if style.is_bold() {
                    draw_bitmap_text(image, scale, x + 1, y, color, text);
                }
            }
        }
    }
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

fn draw_bitmap_text(image: &mut RgbImage, scale: u32, x: i32, y: i32, color: Rgb<u8>, text: &str) {
    let cell = (GLYPH_SIZE * scale) as i32;
    for (i, c) in text.chars().enumerate() {
        let origin_x = x + i as i32 * cell;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                // Bit 0 is the leftmost pixel
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                let px = origin_x + (col * scale) as i32;
                let py = y + (row as u32 * scale) as i32;
                draw_filled_rect_mut(image, Rect::at(px, py).of_size(scale, scale), color);
            }
        }
    }
}
