//! Rasterization of laid out operations

use super::fonts::Fonts;
use super::layout::DrawOp;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Rectangle from inclusive corners, `None` when degenerate
fn rect(left: i32, top: i32, right: i32, bottom: i32) -> Option<Rect> {
    if right < left || bottom < top {
        return None;
    }
    Some(Rect::at(left, top).of_size((right - left + 1) as u32, (bottom - top + 1) as u32))
}

/// Draw a rectangle outline `thickness` pixels wide, growing inward
pub fn outline_rect(
    image: &mut RgbImage,
    (left, top, right, bottom): (i32, i32, i32, i32),
    color: Rgb<u8>,
    thickness: u32,
) {
    for i in 0..thickness as i32 {
        if let Some(r) = rect(left + i, top + i, right - i, bottom - i) {
            draw_hollow_rect_mut(image, r, color);
        }
    }
}

/// Execute `ops` in order on `image`
pub fn paint(image: &mut RgbImage, ops: &[DrawOp], fonts: &Fonts) {
    for op in ops {
        match op {
            DrawOp::Text {
                x,
                y,
                text,
                style,
                color,
            } => fonts.draw(image, *style, *x, *y, *color, text),
            DrawOp::Line {
                from_x,
                to_x,
                y,
                color,
                thickness,
            } => {
                let (a, b) = ((*from_x).min(*to_x), (*from_x).max(*to_x));
                if let Some(r) = rect(a, *y, b, *y + (*thickness).max(1) as i32 - 1) {
                    draw_filled_rect_mut(image, r, *color);
                }
            }
            DrawOp::Rect {
                left,
                top,
                right,
                bottom,
                outline,
                fill,
                thickness,
            } => {
                if let Some(fill) = fill {
                    if let Some(r) = rect(*left, *top, *right, *bottom) {
                        draw_filled_rect_mut(image, r, *fill);
                    }
                }
                outline_rect(image, (*left, *top, *right, *bottom), *outline, *thickness);
            }
        }
    }
}
