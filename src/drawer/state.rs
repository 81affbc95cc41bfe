//! Drawer state: viewport mode combined with the open intent.

use std::fmt;

use crate::viewport::ViewportMode;

/// The three observable phases of a drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerPhase {
    /// Wide viewport. The open intent is kept but has no visible effect.
    Inline,
    CollapsibleClosed,
    /// Shown modally over the content behind a scrim.
    CollapsibleOpen,
}

/// A snapshot of `(mode, open)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DrawerState {
    pub mode: ViewportMode,
    pub open: bool,
}

impl DrawerState {
    pub const fn new(mode: ViewportMode, open: bool) -> Self {
        Self { mode, open }
    }

    /// Whether the drawer is shown modally (collapsible and open).
    #[inline]
    pub fn is_modal(self) -> bool {
        self.mode.is_collapsible() && self.open
    }

    pub fn phase(self) -> DrawerPhase {
        match (self.mode, self.open) {
            (ViewportMode::Inline, _) => DrawerPhase::Inline,
            (ViewportMode::Collapsible, false) => DrawerPhase::CollapsibleClosed,
            (ViewportMode::Collapsible, true) => DrawerPhase::CollapsibleOpen,
        }
    }
}

impl fmt::Display for DrawerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            ViewportMode::Collapsible => "collapsible",
            ViewportMode::Inline => "inline",
        };
        let open = if self.open { "open" } else { "closed" };
        write!(f, "{mode}/{open}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_inline_closed() {
        let state = DrawerState::default();
        assert_eq!(state.mode, ViewportMode::Inline);
        assert!(!state.open);
        assert_eq!(state.phase(), DrawerPhase::Inline);
    }

    #[test]
    fn phases() {
        use ViewportMode::*;
        assert_eq!(DrawerState::new(Inline, true).phase(), DrawerPhase::Inline);
        assert_eq!(
            DrawerState::new(Collapsible, false).phase(),
            DrawerPhase::CollapsibleClosed
        );
        assert_eq!(
            DrawerState::new(Collapsible, true).phase(),
            DrawerPhase::CollapsibleOpen
        );
    }

    #[test]
    fn only_collapsible_open_is_modal() {
        use ViewportMode::*;
        assert!(!DrawerState::new(Inline, false).is_modal());
        assert!(!DrawerState::new(Inline, true).is_modal());
        assert!(!DrawerState::new(Collapsible, false).is_modal());
        assert!(DrawerState::new(Collapsible, true).is_modal());
    }

    #[test]
    fn display() {
        assert_eq!(
            DrawerState::new(ViewportMode::Collapsible, true).to_string(),
            "collapsible/open"
        );
        assert_eq!(DrawerState::default().to_string(), "inline/closed");
    }
}
