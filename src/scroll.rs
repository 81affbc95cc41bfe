//! Horizontal scroll strip with an animated "keep the selection in view" director.
//!
//! [`ScrollStrip`] tracks items laid out along one axis, the viewport width and
//! the current scroll offset, clamping the offset to `[0, max_scroll]` like a
//! scrollable container would. [`ScrollDirector`] owns a strip and, on
//! selection, animates the offset by the smallest amount that brings the
//! selected item fully into view.
//!
//! Animations are cancel-and-restart: selecting while a scroll is in flight
//! starts a new animation from the currently sampled position. A resize during
//! an animation keeps the animation's target, but every sampled offset is
//! clamped to the strip's current bounds.

use std::time::{Duration, Instant};

use slotmap::SlotMap;

use crate::animation::Easing;
use crate::config::DrawerConfig;

slotmap::new_key_type! {
    /// Handle to an item of a [`ScrollStrip`].
    pub struct ItemId;
}

// ---------------------------------------------------------------------------
// ScrollStrip
// ---------------------------------------------------------------------------

/// One item's extent along the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripItem {
    pub start: i32,
    pub width: i32,
}

impl StripItem {
    /// Far edge, saturating at `i32::MAX`.
    #[inline]
    pub fn end(&self) -> i32 {
        self.start.saturating_add(self.width)
    }
}

/// Items along a horizontally scrolling strip.
///
/// The offset is always clamped to `[0, max_scroll]` where
/// `max_scroll = content_width - viewport_width` (clamped to zero).
#[derive(Debug, Clone, Default)]
pub struct ScrollStrip {
    items: SlotMap<ItemId, StripItem>,
    viewport_width: i32,
    offset: i32,
}

impl ScrollStrip {
    pub fn new(viewport_width: i32) -> Self {
        Self {
            items: SlotMap::with_key(),
            viewport_width: viewport_width.max(0),
            offset: 0,
        }
    }

    /// Add an item at an explicit start position.
    pub fn insert(&mut self, start: i32, width: i32) -> ItemId {
        self.items.insert(StripItem {
            start,
            width: width.max(0),
        })
    }

    /// Append an item right after the current content.
    pub fn push(&mut self, width: i32) -> ItemId {
        let start = self.content_width();
        self.insert(start, width)
    }

    /// Remove an item. The offset is re-clamped to the smaller content.
    pub fn remove(&mut self, id: ItemId) -> Option<StripItem> {
        let removed = self.items.remove(id);
        if removed.is_some() {
            self.scroll_to(self.offset);
        }
        removed
    }

    pub fn item(&self, id: ItemId) -> Option<StripItem> {
        self.items.get(id).copied()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Far edge of the furthest item.
    pub fn content_width(&self) -> i32 {
        self.items.values().map(StripItem::end).max().unwrap_or(0).max(0)
    }

    pub fn viewport_width(&self) -> i32 {
        self.viewport_width
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn max_scroll(&self) -> i32 {
        (self.content_width() - self.viewport_width).max(0)
    }

    /// Scroll to an absolute position, clamping to the valid range.
    pub fn scroll_to(&mut self, x: i32) {
        self.offset = x.clamp(0, self.max_scroll());
    }

    /// Update the viewport width and re-clamp the offset.
    pub fn set_viewport_width(&mut self, width: i32) {
        self.viewport_width = width.max(0);
        self.scroll_to(self.offset);
    }

    /// Whether the item lies entirely inside the visible range.
    pub fn is_fully_visible(&self, id: ItemId) -> bool {
        self.reveal_delta(id) == Some(0)
    }

    /// Smallest offset change that brings `id` fully into view.
    ///
    /// Negative scrolls toward the start. An item wider than the viewport is
    /// aligned to its start. `None` when the item does not exist.
    pub fn reveal_delta(&self, id: ItemId) -> Option<i32> {
        let item = self.item(id)?;
        let view_end = self.offset.saturating_add(self.viewport_width);
        let delta = if item.start < self.offset || item.width > self.viewport_width {
            item.start.saturating_sub(self.offset)
        } else if item.end() > view_end {
            item.end().saturating_sub(view_end)
        } else {
            0
        };
        Some(delta)
    }

    /// The clamped offset at which `id` is revealed.
    pub fn reveal_target(&self, id: ItemId) -> Option<i32> {
        let delta = self.reveal_delta(id)?;
        Some(self.offset.saturating_add(delta).clamp(0, self.max_scroll()))
    }
}

// ---------------------------------------------------------------------------
// ScrollAnimation
// ---------------------------------------------------------------------------

/// A single eased scroll between two offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub from: i32,
    pub to: i32,
    pub started: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl ScrollAnimation {
    pub fn new(from: i32, to: i32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
            easing: Easing::Standard,
        }
    }

    /// Linear time progress in `[0.0, 1.0]`.
    pub fn time_progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Offset at `now`, rounded to whole units.
    pub fn sample(&self, now: Instant) -> i32 {
        let eased = self.easing.sample(self.time_progress(now));
        let from = f64::from(self.from);
        let span = f64::from(self.to) - from;
        (from + span * eased).round() as i32
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.time_progress(now) >= 1.0
    }
}

// ---------------------------------------------------------------------------
// ScrollDirector
// ---------------------------------------------------------------------------

/// Drives a [`ScrollStrip`] toward the selected item.
#[derive(Debug, Clone)]
pub struct ScrollDirector {
    strip: ScrollStrip,
    duration: Duration,
    selected: Option<ItemId>,
    animation: Option<ScrollAnimation>,
}

impl ScrollDirector {
    pub fn new(strip: ScrollStrip, duration: Duration) -> Self {
        Self {
            strip,
            duration,
            selected: None,
            animation: None,
        }
    }

    /// A director animating over `config.scroll_duration_ms`.
    pub fn from_config(strip: ScrollStrip, config: &DrawerConfig) -> Self {
        Self::new(strip, Duration::from_millis(u64::from(config.scroll_duration_ms)))
    }

    pub fn strip(&self) -> &ScrollStrip {
        &self.strip
    }

    /// Mutable access for inserting, removing or resizing. Any running
    /// animation keeps its target.
    pub fn strip_mut(&mut self) -> &mut ScrollStrip {
        &mut self.strip
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn animation(&self) -> Option<&ScrollAnimation> {
        self.animation.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Where the strip is headed: the animation target, or the current offset.
    pub fn target(&self) -> i32 {
        self.animation.map_or(self.strip.offset, |anim| anim.to)
    }

    /// Select `id` and start scrolling it into view.
    ///
    /// Returns `false` (and changes nothing) when `id` is not in the strip.
    /// An in-flight animation is cancelled; the new one starts from the
    /// position sampled at `now`.
    pub fn select(&mut self, id: ItemId, now: Instant) -> bool {
        if !self.strip.contains(id) {
            log::debug!("scroll select ignored: item {:?} is absent", id);
            return false;
        }
        if let Some(anim) = self.animation.take() {
            self.strip.scroll_to(anim.sample(now));
        }
        self.selected = Some(id);

        let from = self.strip.offset;
        let Some(to) = self.strip.reveal_target(id) else {
            return true;
        };
        if to != from {
            log::debug!("scroll retarget {} -> {} for {:?}", from, to, id);
            self.animation = Some(ScrollAnimation::new(from, to, now, self.duration));
        }
        true
    }

    /// Advance to `now` and return the current offset.
    pub fn tick(&mut self, now: Instant) -> i32 {
        if let Some(anim) = self.animation {
            self.strip.scroll_to(anim.sample(now));
            if anim.is_finished(now) {
                self.animation = None;
            }
        }
        self.strip.offset
    }

    /// Jump to the end of any running animation.
    pub fn finish(&mut self) {
        if let Some(anim) = self.animation.take() {
            self.strip.scroll_to(anim.to);
        }
    }
}
