//! Ishtar UI — immediate-mode controls over `ishtar-core`.
//!
//! Controls have no persistent objects: every frame the host re-declares
//! each visible control against its own data, and the context records a
//! renderer-agnostic draw stream.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ishtar_ui::prelude::*;
//!
//! let font = FontdueMetrics::from_bytes(include_bytes!("my_font.ttf"), 16.0)?;
//! let mut ui = Ui::new(font);
//!
//! // In your frame callback:
//! ui.begin_frame(pointer_sample);
//! if ui.button(Rect::new(10.0, 10.0, 120.0, 28.0), "Save") {
//!     save();
//! }
//! ui.slider(Rect::new(10.0, 50.0, 120.0, 20.0), "", "", &mut volume, 0.0, 1.0);
//! for cmd in ui.end_frame().iter() {
//!     // Feed DrawCmd::{Rect, GradientRect, Glyph, Icon} to your renderer.
//! }
//! ```

pub mod context;
pub mod controls;
pub mod draw;

pub use context::Ui;
pub use draw::{DrawCmd, DrawList};

/// Everything a host application needs — import this in your frame code.
pub mod prelude {
    pub use crate::context::Ui;
    pub use crate::draw::{DrawCmd, DrawList};

    // Re-export the core primitives every caller touches.
    pub use ishtar_core::color::{Hsv, Rgba};
    pub use ishtar_core::coords::{Rect, Vec2};
    pub use ishtar_core::input::PointerSample;
    pub use ishtar_core::interaction::ControlState;
    pub use ishtar_core::style::{
        BaseProp, CheckBoxProp, ColorPickerProp, ComboBoxProp, Control, DropdownBoxProp,
        GlobalProp, ListViewProp, ProgressBarProp, ScrollBarProp, SliderProp,
    };
    pub use ishtar_core::text::{FontMetrics, FontdueMetrics};
}
