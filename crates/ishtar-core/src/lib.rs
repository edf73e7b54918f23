//! Ishtar core crate.
//!
//! This crate owns the algorithmic leaves shared by every control in the
//! immediate-mode UI layer: the style property table, interaction-state
//! resolution with exclusive-drag arbitration, text shaping, RGB/HSV
//! conversion, and scrollbar geometry. It performs no rendering and no
//! input polling — the host supplies a pointer sample per frame and
//! consumes draw positions.

pub mod color;
pub mod coords;
pub mod input;
pub mod interaction;
pub mod logging;
pub mod scroll;
pub mod style;
pub mod text;
