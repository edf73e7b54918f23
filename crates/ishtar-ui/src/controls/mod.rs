//! Concrete controls.
//!
//! Each control is a method on [`crate::Ui`]: it resolves its interaction
//! state, computes a new value from caller-owned data, records its draw
//! commands, and returns. One file per control, mirroring the declaration
//! order rules documented on the context.

mod button;
mod checkbox;
mod color_picker;
mod combo;
mod dropdown;
mod label;
mod list_view;
mod panel;
mod progress;
mod scroll_panel;
mod scrollbar;
mod slider;
mod status;
mod toggle;
