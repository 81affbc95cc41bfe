//! Viewport classification: collapsible vs. inline.
//!
//! [`classify`] is the pure width-vs-threshold rule. [`ViewportClassifier`]
//! classifies each measurement from a [`WidthSource`] (the media-query watcher
//! of the host) and publishes the resulting [`ViewportMode`], notifying only
//! when the classification flips.

use crate::reactive::{Signal, Subscription};

// ---------------------------------------------------------------------------
// ViewportMode
// ---------------------------------------------------------------------------

/// How the drawer is presented for the current viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewportMode {
    /// Narrow viewport: the drawer slides over the content behind a scrim.
    Collapsible,
    /// Wide viewport: the drawer sits permanently beside the content.
    #[default]
    Inline,
}

impl ViewportMode {
    #[inline]
    pub fn is_collapsible(self) -> bool {
        matches!(self, ViewportMode::Collapsible)
    }
}

/// Classify a viewport width against a threshold.
///
/// The boundary is inclusive on the narrow side: `width == threshold` is
/// [`ViewportMode::Collapsible`].
#[inline]
pub fn classify(width: u32, threshold: u32) -> ViewportMode {
    if width <= threshold {
        ViewportMode::Collapsible
    } else {
        ViewportMode::Inline
    }
}

// ---------------------------------------------------------------------------
// WidthSource
// ---------------------------------------------------------------------------

/// A source of viewport width measurements with change notification.
pub trait WidthSource {
    /// The latest measured width, or `None` before anything was measured.
    fn current_width(&self) -> Option<u32>;

    /// Call `listener` with every new width measurement.
    fn on_change(&self, listener: Box<dyn Fn(u32)>) -> Subscription;
}

/// A width source fed explicitly by the host (resize events, tests, or a
/// server that never measures anything).
#[derive(Debug, Clone)]
pub struct ManualWidthSource {
    width: Signal<Option<u32>>,
}

impl ManualWidthSource {
    /// A source with no measurement yet.
    pub fn new() -> Self {
        Self {
            width: Signal::new(None),
        }
    }

    /// A source that has already measured `width`.
    pub fn with_width(width: u32) -> Self {
        Self {
            width: Signal::new(Some(width)),
        }
    }

    /// Record a new measurement. Repeating the current width notifies nobody.
    pub fn set_width(&self, width: u32) {
        self.width.set_if_changed(Some(width));
    }

    pub fn width(&self) -> Option<u32> {
        self.width.get()
    }
}

impl Default for ManualWidthSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WidthSource for ManualWidthSource {
    fn current_width(&self) -> Option<u32> {
        self.width.get()
    }

    fn on_change(&self, listener: Box<dyn Fn(u32)>) -> Subscription {
        self.width.subscribe(move |width| {
            if let Some(width) = width {
                listener(*width);
            }
        })
    }
}

// ---------------------------------------------------------------------------
// ViewportClassifier
// ---------------------------------------------------------------------------

/// Tracks the [`ViewportMode`] for a fixed threshold.
///
/// Until the first measurement arrives the classifier reports
/// [`ViewportMode::Inline`] and [`measured`](Self::measured) is `false`.
#[derive(Debug)]
pub struct ViewportClassifier {
    threshold: u32,
    mode: Signal<Option<ViewportMode>>,
}

impl ViewportClassifier {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            mode: Signal::new(None),
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// The current mode, falling back to `Inline` before the first measurement.
    pub fn mode(&self) -> ViewportMode {
        self.mode.get().unwrap_or_default()
    }

    /// Whether at least one measurement has been classified.
    pub fn measured(&self) -> bool {
        self.mode.with(Option::is_some)
    }

    /// Media-query style view: whether the narrow query currently matches.
    pub fn matches(&self) -> bool {
        self.mode().is_collapsible()
    }

    /// Classify `width` and publish the result. Returns whether the published
    /// mode changed (including the first measurement).
    pub fn observe(&self, width: u32) -> bool {
        publish(&self.mode, self.threshold, width)
    }

    /// Forget the published mode, as if nothing had been measured yet.
    ///
    /// [`on_mode_change`](Self::on_mode_change) listeners are not called; the
    /// next observation publishes afresh.
    pub fn reset(&self) {
        self.mode.set_if_changed(None);
    }

    /// Call `listener` whenever the published mode changes.
    pub fn on_mode_change(&self, listener: impl Fn(ViewportMode) + 'static) -> Subscription {
        self.mode.subscribe(move |mode| {
            if let Some(mode) = mode {
                listener(*mode);
            }
        })
    }
}

fn publish(mode: &Signal<Option<ViewportMode>>, threshold: u32, width: u32) -> bool {
    let next = classify(width, threshold);
    let previous = mode.get();
    let changed = mode.set_if_changed(Some(next));
    if changed {
        log::debug!(
            "viewport {:?} -> {:?} (width {}, threshold {})",
            previous,
            next,
            width,
            threshold
        );
    }
    changed
}
