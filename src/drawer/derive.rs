//! Derivation: `(previous state, next state)` to render parameters.
//!
//! [`derive`] is pure. The state machine calls it once per refresh and hands
//! the result to the renderer; nothing here is cached between refreshes.

use crate::animation::{Easing, TransitionSpec, TransitionTarget, TransitionVariant};

use super::state::DrawerState;

/// Sidebar slide length when the modal drawer enters.
pub const ENTER_SLIDE_MS: u32 = 500;
/// Content fade length when the modal drawer enters.
pub const ENTER_CONTENT_OPACITY_MS: u32 = 300;
/// Sidebar slide length on exit and in every non-modal state.
pub const EXIT_SLIDE_MS: u32 = 150;
/// Content fade length on exit and in every non-modal state.
pub const EXIT_CONTENT_OPACITY_MS: u32 = 150;
/// Scrim fade length, both directions.
pub const SCRIM_FADE_MS: u32 = 150;

/// Everything the renderer needs for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedDrawerConfig {
    pub state: DrawerState,
    /// `mode == Collapsible && open`.
    pub show_scrim: bool,
    pub slide_duration_ms: u32,
    pub content_opacity_duration_ms: u32,
    pub scrim_opacity_duration_ms: u32,
    pub easing: Easing,
    /// `mode == Collapsible && !open`.
    pub sidebar_inert: bool,
    /// `show_scrim || external_content_inert`.
    pub content_inert: bool,
    /// Enter when the drawer just became modal, Exit when it just stopped
    /// being modal, Continuous otherwise (including the first derivation).
    pub variant: TransitionVariant,
}

/// Derive render parameters for a move from `prev` to `next`.
///
/// `prev` is `None` for the first derivation after construction. While `next`
/// is modal the enter profile (500ms slide, 300ms content fade, emphasized)
/// applies; every other state uses the exit profile (150ms, 150ms,
/// emphasized-accelerate).
pub fn derive(
    prev: Option<DrawerState>,
    next: DrawerState,
    external_content_inert: bool,
) -> DerivedDrawerConfig {
    let show_scrim = next.is_modal();
    let was_modal = prev.is_some_and(DrawerState::is_modal);

    let variant = match (prev, was_modal, show_scrim) {
        (None, _, _) => TransitionVariant::Continuous,
        (Some(_), false, true) => TransitionVariant::Enter,
        (Some(_), true, false) => TransitionVariant::Exit,
        _ => TransitionVariant::Continuous,
    };

    let (slide_duration_ms, content_opacity_duration_ms, easing) = if show_scrim {
        (ENTER_SLIDE_MS, ENTER_CONTENT_OPACITY_MS, Easing::Emphasized)
    } else {
        (EXIT_SLIDE_MS, EXIT_CONTENT_OPACITY_MS, Easing::EmphasizedAccelerate)
    };

    DerivedDrawerConfig {
        state: next,
        show_scrim,
        slide_duration_ms,
        content_opacity_duration_ms,
        scrim_opacity_duration_ms: SCRIM_FADE_MS,
        easing,
        sidebar_inert: next.mode.is_collapsible() && !next.open,
        content_inert: show_scrim || external_content_inert,
        variant,
    }
}

impl DerivedDrawerConfig {
    /// Transition requests for the sidebar slide, content fade and scrim fade.
    pub fn transitions(&self) -> [TransitionSpec; 3] {
        [
            TransitionSpec::new(
                TransitionTarget::Sidebar,
                &["transform"],
                self.slide_duration_ms,
                self.easing,
                self.variant,
            ),
            TransitionSpec::new(
                TransitionTarget::Content,
                &["opacity"],
                self.content_opacity_duration_ms,
                self.easing,
                self.variant,
            ),
            TransitionSpec::new(
                TransitionTarget::Scrim,
                &["opacity"],
                self.scrim_opacity_duration_ms,
                self.easing,
                self.variant,
            ),
        ]
    }
}
