use crate::coords::Rect;
use crate::input::PointerSample;

use super::{ControlState, DragArbiter, DragKey, InteractionFlags};

/// Outcome of resolving one control for one frame.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub state: ControlState,
    /// `true` exactly on the frame the button is released over the control
    /// (the "action" edge a button reports as a click).
    pub fired: bool,
}

impl Resolution {
    const fn state(state: ControlState) -> Self {
        Self { state, fired: false }
    }
}

/// Per-frame state resolver.
///
/// Borrows the context's flags, drag session, and pointer sample; `resolve`
/// is then a pure function of the control's bounds and drag key. The
/// resolution order guarantees that while a drag session is active, at most
/// one control (the owner) ever sees pointer input.
pub struct StateResolver<'a> {
    pub flags: &'a InteractionFlags,
    pub drag: &'a DragArbiter,
    pub pointer: &'a PointerSample,
}

impl<'a> StateResolver<'a> {
    pub fn new(
        flags: &'a InteractionFlags,
        drag: &'a DragArbiter,
        pointer: &'a PointerSample,
    ) -> Self {
        Self { flags, drag, pointer }
    }

    /// Resolves a control's interaction state.
    ///
    /// `key` is the control's drag identity; controls that never drag still
    /// pass their key so they are suppressed while someone else owns a
    /// session.
    pub fn resolve(&self, bounds: Rect, key: DragKey) -> Resolution {
        // A forced state wins over everything, for every control.
        if let Some(state) = self.flags.forced {
            return Resolution::state(state);
        }

        if !self.flags.enabled {
            return Resolution::state(ControlState::Disabled);
        }

        // Locked, or someone else owns the pointer: inputs suppressed.
        if self.flags.locked {
            return Resolution::state(ControlState::Normal);
        }
        if self.drag.is_active() && !self.drag.owns(key) {
            return Resolution::state(ControlState::Normal);
        }

        // Session owner tracks the pointer wherever it goes.
        if self.drag.owns(key) {
            if self.pointer.down {
                return Resolution::state(ControlState::Pressed);
            }
            // Button came up this frame: the owner commits, and a hit still
            // counts as an action edge.
            return Resolution {
                state: ControlState::Pressed,
                fired: self.pointer.released,
            };
        }

        if bounds.is_empty() || !bounds.contains(self.pointer.pos) {
            return Resolution::state(ControlState::Normal);
        }

        if self.pointer.down {
            return Resolution::state(ControlState::Pressed);
        }
        if self.pointer.released {
            return Resolution {
                state: ControlState::Focused,
                fired: true,
            };
        }
        Resolution::state(ControlState::Focused)
    }
}
