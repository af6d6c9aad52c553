//! Rent receipt renderer
//!
//! Receipt fields are turned into a list of layout blocks, laid out top to
//! bottom and painted on a white canvas.

mod canvas;
mod content;
mod fonts;
mod format;
mod layout;
mod render;

pub use content::{receipt_blocks, Party, ReceiptFields};
pub use fonts::{Fonts, TextStyle};
pub use format::{format_amount, format_long_date, format_period};
pub use layout::{layout, layout_from, Anchor, Block, DrawOp};
pub use render::{create_receipt, render_receipt, render_with_fonts};
