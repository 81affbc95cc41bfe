//! The shared signal bundle a drawer reads and writes.

use crate::reactive::Signal;

/// Shared cells connecting a drawer to the rest of the page.
///
/// The drawer does not own these. Clone the bundle (or individual signals)
/// into every component that needs them; all clones observe the same cells.
#[derive(Debug, Clone)]
pub struct DrawerSignals {
    /// "The drawer should be visible" intent. Written by the scrim, toggles,
    /// and the host. Independent of viewport mode.
    pub open: Signal<bool>,
    /// Written by the drawer: the sidebar is unreachable (collapsed and closed).
    pub sidebar_inert: Signal<bool>,
    /// Written by the drawer: the main content is unreachable.
    pub content_inert: Signal<bool>,
    /// Read by the drawer: another component (a dialog, say) wants the
    /// content inert regardless of the drawer.
    pub external_content_inert: Signal<bool>,
}

impl DrawerSignals {
    /// All flags start `false`.
    pub fn new() -> Self {
        Self {
            open: Signal::new(false),
            sidebar_inert: Signal::new(false),
            content_inert: Signal::new(false),
            external_content_inert: Signal::new(false),
        }
    }

    /// A bundle whose open intent starts as `open`.
    pub fn with_open(open: bool) -> Self {
        let signals = Self::new();
        signals.open.set(open);
        signals
    }
}

impl Default for DrawerSignals {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_false() {
        let s = DrawerSignals::new();
        assert!(!s.open.get());
        assert!(!s.sidebar_inert.get());
        assert!(!s.content_inert.get());
        assert!(!s.external_content_inert.get());
    }

    #[test]
    fn clones_share_cells() {
        let a = DrawerSignals::with_open(true);
        let b = a.clone();
        b.open.set(false);
        assert!(!a.open.get());
        assert!(a.content_inert.ptr_eq(&b.content_inert));
    }
}
