//! Interaction-state resolution.
//!
//! Controls have no persistent objects, so "which state am I in" is
//! recomputed from scratch on every declaration: the context-wide
//! [`InteractionFlags`], the current [`DragArbiter`] session, and the
//! frame's pointer sample go in; a [`Resolution`] comes out. The drag
//! arbiter is what lets a slider keep tracking the pointer after it leaves
//! the control's bounds mid-drag, while every other control is suppressed.

mod drag;
mod flags;
mod resolver;

pub use drag::{DragArbiter, DragKey};
pub use flags::InteractionFlags;
pub use resolver::{Resolution, StateResolver};

/// Interaction state of one control for one frame.
///
/// Transient by design: computed per call, never stored between frames.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ControlState {
    #[default]
    Normal,
    Focused,
    Pressed,
    Disabled,
}
