/// Identity of a drag-capable control.
///
/// The arbiter compares keys, nothing more — it does not care how they are
/// produced. The UI context derives them from the per-frame declaration
/// sequence, which is stable across frames because declaration order *is*
/// z-order; hosts that reorder controls dynamically can supply their own.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DragKey(pub u64);

/// Exclusive pointer ownership for continuous-value controls.
///
/// On press-inside-bounds a control claims the session; while the button
/// stays held, only the owner computes values (from the raw, un-clamped
/// pointer position) and every other control is suppressed by the state
/// resolver. Release ends the session.
#[derive(Debug, Default, Clone)]
pub struct DragArbiter {
    owner: Option<DragKey>,
}

impl DragArbiter {
    pub fn new() -> Self {
        Self { owner: None }
    }

    /// Claims the session for `key`. First claim wins; while a session is
    /// active, further claims are ignored.
    pub fn begin(&mut self, key: DragKey) {
        if self.owner.is_none() {
            self.owner = Some(key);
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.owner.is_some()
    }

    #[inline]
    pub fn owns(&self, key: DragKey) -> bool {
        self.owner == Some(key)
    }

    /// Ends the session. Called by the context on the first frame the
    /// button is observed up, after the owner has committed its final value.
    pub fn release(&mut self) {
        self.owner = None;
    }

    /// Programmatic cancellation — same effect as a release, available to
    /// hosts that need to abort a drag (focus loss, modal interruption).
    pub fn reset(&mut self) {
        self.owner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_claim_wins() {
        let mut drag = DragArbiter::new();
        drag.begin(DragKey(1));
        drag.begin(DragKey(2));
        assert!(drag.owns(DragKey(1)));
        assert!(!drag.owns(DragKey(2)));
    }

    #[test]
    fn release_clears_ownership() {
        let mut drag = DragArbiter::new();
        drag.begin(DragKey(7));
        assert!(drag.is_active());
        drag.release();
        assert!(!drag.is_active());
        assert!(!drag.owns(DragKey(7)));
    }

    #[test]
    fn reclaim_after_release() {
        let mut drag = DragArbiter::new();
        drag.begin(DragKey(1));
        drag.release();
        drag.begin(DragKey(2));
        assert!(drag.owns(DragKey(2)));
    }
}
