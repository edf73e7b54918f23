//! Text measurement and shaping.
//!
//! The shaper turns a string plus bounds, alignment, and wrap mode into a
//! sequence of positioned glyph (and icon) draws, re-computed every frame
//! and consumed immediately. Font knowledge is abstracted behind
//! [`FontMetrics`] — the core needs only a per-glyph advance and bitmap
//! width at the font's base size; `fontdue` backs the provided
//! implementation.

mod decode;
mod font;
mod layout;

pub use decode::{decode_codepoint, UNKNOWN_GLYPH};
pub use font::{FontError, FontMetrics, FontdueMetrics};
pub use layout::{HAlign, TextDraw, TextLayout, TextShaper, TextStyle, VAlign, WrapMode};
