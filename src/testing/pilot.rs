//! Pilot: programmatic interaction with a headless drawer.
//!
//! The `DrawerPilot` owns a mounted [`DrawerLayout`] wired to a
//! [`RecordingRenderer`] and simulates host input (resizes, clicks, keys) so
//! tests can assert on the frames the drawer produced.

use crate::config::DrawerConfig;
use crate::drawer::{DerivedDrawerConfig, DrawerLayout, DrawerSignals, DrawerState};
use crate::error::ConfigError;
use crate::event::{DrawerEvent, Key};
use crate::render::DrawerFrame;

use super::recorder::RecordingRenderer;
use super::snapshot::frame_summary;

// ---------------------------------------------------------------------------
// DrawerPilot
// ---------------------------------------------------------------------------

/// A headless drawer driver for testing.
///
/// # Examples
///
/// ```
/// use gilt_drawer::testing::DrawerPilot;
///
/// let pilot = DrawerPilot::new(500, 800);
/// pilot.open();
/// assert!(pilot.last_frame().unwrap().config.show_scrim);
/// ```
pub struct DrawerPilot {
    layout: DrawerLayout,
    recorder: RecordingRenderer,
}

impl DrawerPilot {
    /// A mounted drawer with default config, already measured at `width x height`.
    pub fn new(width: u16, height: u16) -> Self {
        let pilot = Self::unmeasured();
        pilot.resize(width, height);
        pilot
    }

    /// A mounted drawer with default config that has not seen any width yet.
    pub fn unmeasured() -> Self {
        match Self::with_config(DrawerConfig::default(), DrawerSignals::new()) {
            Ok(pilot) => pilot,
            Err(err) => unreachable!("default drawer config rejected: {err}"),
        }
    }

    /// A mounted drawer over caller-provided config and signals.
    pub fn with_config(config: DrawerConfig, signals: DrawerSignals) -> Result<Self, ConfigError> {
        let layout = DrawerLayout::new(config, signals)?;
        let recorder = RecordingRenderer::new();
        layout.set_renderer(recorder.clone());
        layout.mount();
        Ok(Self { layout, recorder })
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a viewport resize. Returns whether the drawer consumed it.
    pub fn resize(&self, width: u16, height: u16) -> bool {
        self.layout.handle_event(&DrawerEvent::Resize { width, height })
    }

    /// Simulate a primary click at `(x, y)`.
    pub fn click(&self, x: u16, y: u16) -> bool {
        self.layout.handle_event(&DrawerEvent::Click { x, y })
    }

    pub fn press_key(&self, key: Key) -> bool {
        self.layout.handle_event(&DrawerEvent::Key(key))
    }

    /// Feed a raw crossterm event through the `From` conversion.
    pub fn send_crossterm(&self, event: crossterm::event::Event) -> bool {
        self.layout.handle_event(&DrawerEvent::from(event))
    }

    // ── Intent ───────────────────────────────────────────────────────

    pub fn open(&self) {
        self.layout.set_open(true);
    }

    pub fn close(&self) {
        self.layout.set_open(false);
    }

    pub fn toggle(&self) {
        self.layout.toggle();
    }

    /// Scrim-click dismissal without hit testing.
    pub fn dismiss(&self) {
        self.layout.dismiss();
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn layout(&self) -> &DrawerLayout {
        &self.layout
    }

    pub fn signals(&self) -> &DrawerSignals {
        self.layout.signals()
    }

    pub fn state(&self) -> DrawerState {
        self.layout.state()
    }

    pub fn derived(&self) -> DerivedDrawerConfig {
        self.layout.derived()
    }

    pub fn recorder(&self) -> &RecordingRenderer {
        &self.recorder
    }

    pub fn frames(&self) -> Vec<DrawerFrame> {
        self.recorder.frames()
    }

    pub fn last_frame(&self) -> Option<DrawerFrame> {
        self.recorder.last()
    }

    /// [`frame_summary`] of the last frame, or an empty string before any.
    pub fn summary(&self) -> String {
        self.recorder
            .last()
            .map(|frame| frame_summary(&frame))
            .unwrap_or_default()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TransitionVariant;
    use crate::viewport::ViewportMode;

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_measures_and_renders() {
        let pilot = DrawerPilot::new(1000, 800);
        assert!(pilot.layout().is_mounted());
        assert_eq!(pilot.state().mode, ViewportMode::Inline);
        let frame = pilot.last_frame().unwrap();
        assert!(frame.measured);
        assert!(frame.regions.is_some());
    }

    #[test]
    fn unmeasured_renders_inline_without_regions() {
        let pilot = DrawerPilot::unmeasured();
        let frame = pilot.last_frame().unwrap();
        assert!(!frame.measured);
        assert_eq!(frame.config.state.mode, ViewportMode::Inline);
        assert!(frame.regions.is_none());
    }

    #[test]
    fn with_config_rejects_invalid() {
        let config = DrawerConfig::default().with_sidebar_width(0);
        assert!(DrawerPilot::with_config(config, DrawerSignals::new()).is_err());
    }

    // ── Input ────────────────────────────────────────────────────────

    #[test]
    fn resize_is_consumed() {
        let pilot = DrawerPilot::new(1000, 800);
        assert!(pilot.resize(400, 800));
        assert_eq!(pilot.state().mode, ViewportMode::Collapsible);
    }

    #[test]
    fn scrim_click_dismisses() {
        let pilot = DrawerPilot::new(500, 800);
        pilot.open();
        assert!(pilot.click(450, 300));
        assert!(!pilot.signals().open.get());
        assert_eq!(pilot.last_frame().unwrap().config.variant, TransitionVariant::Exit);
    }

    #[test]
    fn sidebar_click_is_not_consumed() {
        let pilot = DrawerPilot::new(500, 800);
        pilot.open();
        assert!(!pilot.click(100, 300));
        assert!(pilot.signals().open.get());
    }

    #[test]
    fn escape_key_dismisses() {
        let pilot = DrawerPilot::new(500, 800);
        pilot.toggle();
        assert!(pilot.press_key(Key::Escape));
        assert!(!pilot.signals().open.get());
        assert!(!pilot.press_key(Key::Escape));
    }

    #[test]
    fn crossterm_resize() {
        let pilot = DrawerPilot::new(1000, 800);
        assert!(pilot.send_crossterm(crossterm::event::Event::Resize(300, 200)));
        assert_eq!(pilot.state().mode, ViewportMode::Collapsible);
        assert!(!pilot.send_crossterm(crossterm::event::Event::FocusGained));
    }

    // ── Query ────────────────────────────────────────────────────────

    #[test]
    fn summary_empty_before_frames() {
        let pilot = DrawerPilot::unmeasured();
        pilot.recorder().clear();
        assert_eq!(pilot.summary(), "");
    }

    #[test]
    fn derived_matches_last_frame() {
        let pilot = DrawerPilot::new(500, 800);
        pilot.open();
        assert_eq!(pilot.derived(), pilot.last_frame().unwrap().config);
    }
}
