use super::ControlState;

/// Context-wide interaction switches.
///
/// One instance per UI context (there are no process globals); every
/// control resolved in a frame reads the same flags.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionFlags {
    /// `false` puts every control in [`ControlState::Disabled`] without
    /// hit-testing.
    pub enabled: bool,
    /// `true` suppresses pointer input everywhere while keeping normal
    /// visuals (controls resolve to `Normal`).
    pub locked: bool,
    /// Transparency applied to every recorded draw command, `[0, 1]`.
    pub alpha: f32,
    /// When set, short-circuits resolution: every control reports this
    /// state and never fires.
    pub forced: Option<ControlState>,
}

impl InteractionFlags {
    pub fn new() -> Self {
        Self {
            enabled: true,
            locked: false,
            alpha: 1.0,
            forced: None,
        }
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }
}

impl Default for InteractionFlags {
    fn default() -> Self {
        Self::new()
    }
}
