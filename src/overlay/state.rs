//! Overlay visibility state.

/// Visibility of the overlay surface.
///
/// `Hidden -> Shown` on load or file change, `Shown -> Shown` on every tick,
/// `Shown -> Hidden` on unload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Not initialized, or torn down
    #[default]
    Hidden,
    /// Styled, visible and refreshed by ticks
    Shown,
}

impl Visibility {
    /// Whether ticks should refresh the overlay.
    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown)
    }
}
