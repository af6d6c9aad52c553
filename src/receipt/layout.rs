//! Sequential block layout
//!
//! Blocks are placed top to bottom by a running cursor. Each block moves the
//! cursor down by its `advance` before being placed. There is no wrapping,
//! reflow or overlap detection: what is asked for is what gets drawn.

use super::fonts::{Fonts, TextStyle};
use image::Rgb;

/// Horizontal placement of a text line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Top-left corner at `(x, cursor)`
    Start { x: i32 },
    /// Centered horizontally and vertically on `(x, cursor)`
    Middle { x: i32 },
}

/// One layout element
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text {
        text: String,
        style: TextStyle,
        color: Rgb<u8>,
        anchor: Anchor,
        advance: i32,
    },
    Rule {
        from_x: i32,
        to_x: i32,
        color: Rgb<u8>,
        thickness: u32,
        advance: i32,
    },
    /// Box spanning the canvas width minus `inset` on each side.
    /// Children are laid out from the panel's top edge; the cursor then
    /// resumes at the bottom edge.
    Panel {
        advance: i32,
        height: i32,
        inset: i32,
        outline: Rgb<u8>,
        fill: Option<Rgb<u8>>,
        thickness: u32,
        children: Vec<Block>,
    },
}

impl Block {
    /// Shorthand for a text block
    pub fn text(
        text: impl Into<String>,
        style: TextStyle,
        color: Rgb<u8>,
        anchor: Anchor,
        advance: i32,
    ) -> Self {
        Block::Text {
            text: text.into(),
            style,
            color,
            anchor,
            advance,
        }
    }
}

/// Positioned drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Text with its top-left corner at `(x, y)`
    Text {
        x: i32,
        y: i32,
        text: String,
        style: TextStyle,
        color: Rgb<u8>,
    },
    /// Horizontal line whose top edge is at `y`
    Line {
        from_x: i32,
        to_x: i32,
        y: i32,
        color: Rgb<u8>,
        thickness: u32,
    },
    /// Rectangle with inclusive corners, outline drawn inward
    Rect {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        outline: Rgb<u8>,
        fill: Option<Rgb<u8>>,
        thickness: u32,
    },
}

/// Lay `blocks` out on a canvas `width` pixels wide, starting at `cursor`.
/// Returns the operations and the final cursor position.
pub fn layout_from(
    blocks: &[Block],
    width: u32,
    mut cursor: i32,
    fonts: &Fonts,
) -> (Vec<DrawOp>, i32) {
    let mut ops = Vec::with_capacity(blocks.len());

    for block in blocks {
        match block {
            Block::Text {
                text,
                style,
                color,
                anchor,
                advance,
            } => {
                cursor += advance;
                let (x, y) = match *anchor {
                    Anchor::Start { x } => (x, cursor),
                    Anchor::Middle { x } => {
                        let (w, h) = fonts.measure(*style, text);
                        (x - w as i32 / 2, cursor - h as i32 / 2)
                    }
                };
                ops.push(DrawOp::Text {
                    x,
                    y,
                    text: text.clone(),
                    style: *style,
                    color: *color,
                });
            }
            Block::Rule {
                from_x,
                to_x,
                color,
                thickness,
                advance,
            } => {
                cursor += advance;
                ops.push(DrawOp::Line {
                    from_x: *from_x,
                    to_x: *to_x,
                    y: cursor,
                    color: *color,
                    thickness: *thickness,
                });
            }
            Block::Panel {
                advance,
                height,
                inset,
                outline,
                fill,
                thickness,
                children,
            } => {
                cursor += advance;
                let top = cursor;
                ops.push(DrawOp::Rect {
                    left: *inset,
                    top,
                    right: width as i32 - inset,
                    bottom: top + height,
                    outline: *outline,
                    fill: *fill,
                    thickness: *thickness,
                });
                let (child_ops, _) = layout_from(children, width, top, fonts);
                ops.extend(child_ops);
                cursor = top + height;
            }
        }
    }

    (ops, cursor)
}

/// Lay `blocks` out from the top of the canvas
pub fn layout(blocks: &[Block], width: u32, fonts: &Fonts) -> Vec<DrawOp> {
    let (ops, end) = layout_from(blocks, width, 0, fonts);
    tracing::debug!(ops = ops.len(), end, "layout complete");
    ops
}
