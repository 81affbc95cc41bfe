//! The responsive drawer state machine.
//!
//! [`DrawerLayout`] combines a [`ViewportClassifier`] with the shared open
//! signal. Every change (width measurement, open write, external inert
//! request) runs one refresh: derive the config, write the inert flags into
//! the shared signals, lay out the regions and hand a [`DrawerFrame`] to the
//! renderer.
//!
//! # Re-entrancy
//!
//! A refresh that triggers another refresh (a signal listener that writes the
//! open signal, say) does not recurse. The nested request marks the layout
//! dirty and the outer refresh runs another round, up to
//! [`MAX_REFRESH_ROUNDS`]. No `RefCell` borrow is held while signal
//! listeners or the renderer run.
//!
//! A panicking inert listener does not stop the other inert flag from being
//! written or the frame from being rendered; the panic resumes afterwards.
//! A panicking renderer stays installed for the next refresh.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use crate::config::{DrawerConfig, InertWritePolicy};
use crate::error::ConfigError;
use crate::event::{DrawerEvent, Key};
use crate::geometry::Size;
use crate::reactive::{Signal, Subscription};
use crate::regions::{compute_regions, DrawerRegions, RegionMetrics};
use crate::render::{DrawerFrame, Renderer};
use crate::viewport::{ManualWidthSource, ViewportClassifier, ViewportMode, WidthSource};

use super::derive::{derive, DerivedDrawerConfig};
use super::signals::DrawerSignals;
use super::state::DrawerState;

/// Refresh rounds allowed before a feedback loop is cut off.
pub const MAX_REFRESH_ROUNDS: usize = 8;

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

struct Shared {
    config: DrawerConfig,
    signals: DrawerSignals,
    classifier: ViewportClassifier,
    /// Fed by `DrawerEvent::Resize`; the source used by [`DrawerLayout::mount`].
    resize_source: ManualWidthSource,
    refreshing: Cell<bool>,
    dirty: Cell<bool>,
    inner: RefCell<Inner>,
}

#[derive(Default)]
struct Inner {
    renderer: Option<Box<dyn Renderer>>,
    last_state: Option<DrawerState>,
    last_frame: Option<DrawerFrame>,
    regions: Option<DrawerRegions>,
    viewport_width: Option<u32>,
    viewport_height: Option<u32>,
    subscriptions: Vec<Subscription>,
    mounted: bool,
}

/// Sets a flag for the lifetime of the guard, clearing it even on unwind.
struct FlagGuard<'a>(&'a Cell<bool>);

impl<'a> FlagGuard<'a> {
    fn raise(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl Shared {
    fn current_state(&self) -> DrawerState {
        DrawerState::new(self.classifier.mode(), self.signals.open.get())
    }

    fn metrics(&self) -> RegionMetrics {
        RegionMetrics {
            sidebar_width: self.config.sidebar_width,
            top_bar_height: self.config.top_bar_height,
        }
    }

    fn on_width(&self, width: u32) {
        self.inner.borrow_mut().viewport_width = Some(width);
        self.classifier.observe(width);
        self.refresh();
    }

    fn refresh(&self) {
        if self.refreshing.get() {
            self.dirty.set(true);
            return;
        }
        let _guard = FlagGuard::raise(&self.refreshing);

        let mut rounds = 0;
        loop {
            self.dirty.set(false);
            self.derive_and_render();
            rounds += 1;
            if !self.dirty.get() {
                break;
            }
            if rounds >= MAX_REFRESH_ROUNDS {
                log::warn!(
                    "drawer refresh did not settle after {} rounds; dropping further requests",
                    rounds
                );
                self.dirty.set(false);
                break;
            }
        }
    }

    fn derive_and_render(&self) {
        let next = self.current_state();
        let external = self.signals.external_content_inert.get();
        let measured = self.classifier.measured();
        let metrics = self.metrics();

        let (frame, renderer) = {
            let mut inner = self.inner.borrow_mut();
            let prev = inner.last_state;
            let config = derive(prev, next, external);
            if prev != Some(next) {
                log::debug!("drawer {:?} -> {} ({:?})", prev, next, config.variant);
            }
            log::trace!("derived {:?}", config);
            inner.last_state = Some(next);

            if let (Some(width), Some(height)) = (inner.viewport_width, inner.viewport_height) {
                let viewport = Size::new(width as i32, height as i32);
                match compute_regions(viewport, metrics, next) {
                    Ok(regions) => inner.regions = Some(regions),
                    Err(err) => log::warn!("keeping previous drawer regions: {}", err),
                }
            }

            let frame = DrawerFrame::new(config, inner.regions, measured);
            inner.last_frame = Some(frame.clone());
            (frame, inner.renderer.take())
        };

        let listener_panic = self.write_inert(&frame.config);

        if let Some(renderer) = renderer {
            let mut slot = RendererSlot {
                inner: &self.inner,
                renderer: Some(renderer),
            };
            if let Some(renderer) = slot.renderer.as_mut() {
                renderer.render(&frame);
            }
        }

        if let Some(payload) = listener_panic {
            panic::resume_unwind(payload);
        }
    }

    /// Write both inert flags. A panicking listener on one flag does not keep
    /// the other from being written; the first panic is returned for the
    /// caller to resume once the frame is out.
    fn write_inert(&self, config: &DerivedDrawerConfig) -> Option<Box<dyn Any + Send>> {
        let policy = self.config.inert_writes;
        let writes = [
            (&self.signals.sidebar_inert, config.sidebar_inert),
            (&self.signals.content_inert, config.content_inert),
        ];
        let mut first_panic = None;
        for (signal, value) in writes {
            let result = panic::catch_unwind(AssertUnwindSafe(|| write_flag(signal, value, policy)));
            if let Err(payload) = result {
                first_panic.get_or_insert(payload);
            }
        }
        first_panic
    }
}

/// Holds the renderer while it runs and puts it back on drop, unwinding included.
struct RendererSlot<'a> {
    inner: &'a RefCell<Inner>,
    renderer: Option<Box<dyn Renderer>>,
}

impl Drop for RendererSlot<'_> {
    fn drop(&mut self) {
        let Some(renderer) = self.renderer.take() else {
            return;
        };
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            // A renderer installed while this one ran wins.
            if inner.renderer.is_none() {
                inner.renderer = Some(renderer);
            }
        }
    }
}

fn write_flag(signal: &Signal<bool>, value: bool, policy: InertWritePolicy) {
    match policy {
        InertWritePolicy::OnChange => {
            signal.set_if_changed(value);
        }
        InertWritePolicy::Always => signal.set(value),
    }
}

fn refresh_weak(weak: &Weak<Shared>) {
    if let Some(shared) = weak.upgrade() {
        shared.refresh();
    }
}

// ---------------------------------------------------------------------------
// DrawerLayout
// ---------------------------------------------------------------------------

/// A drawer instance: top bar, sidebar and content that switch between inline
/// and modal presentation.
///
/// All methods take `&self`; state lives behind `Rc` and interior mutability,
/// so listeners registered on the shared signals can reach back into the
/// drawer. The drawer is single-threaded by construction.
pub struct DrawerLayout {
    shared: Rc<Shared>,
}

impl DrawerLayout {
    /// Build an unmounted drawer over `signals`.
    pub fn new(config: DrawerConfig, signals: DrawerSignals) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            shared: Rc::new(Shared {
                classifier: ViewportClassifier::new(config.collapse_threshold),
                config,
                signals,
                resize_source: ManualWidthSource::new(),
                refreshing: Cell::new(false),
                dirty: Cell::new(false),
                inner: RefCell::new(Inner::default()),
            }),
        })
    }

    /// Install the renderer that receives every frame. Replaces any previous one.
    pub fn set_renderer(&self, renderer: impl Renderer + 'static) {
        self.shared.inner.borrow_mut().renderer = Some(Box::new(renderer));
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.shared.config
    }

    pub fn signals(&self) -> &DrawerSignals {
        &self.shared.signals
    }

    /// The current mode; `Inline` until the first measurement after mounting.
    pub fn mode(&self) -> ViewportMode {
        self.shared.classifier.mode()
    }

    /// Whether a width has been classified since mounting.
    pub fn measured(&self) -> bool {
        self.shared.classifier.measured()
    }

    /// Call `listener` whenever the classified viewport mode flips.
    ///
    /// Runs before the refresh for that measurement, so [`state`](Self::state)
    /// already reports the new mode while the last frame still shows the old
    /// one. Unmounting does not notify.
    pub fn on_mode_change(&self, listener: impl Fn(ViewportMode) + 'static) -> Subscription {
        self.shared.classifier.on_mode_change(listener)
    }

    /// `(mode, open)` as of now, whether or not it has been rendered yet.
    pub fn state(&self) -> DrawerState {
        self.shared.current_state()
    }

    /// The render parameters for the current state.
    ///
    /// Computed on demand, so it also works before the first refresh (first
    /// paint or server-side construction, where it treats the state as
    /// having no predecessor).
    pub fn derived(&self) -> DerivedDrawerConfig {
        let next = self.shared.current_state();
        let external = self.shared.signals.external_content_inert.get();
        let inner = self.shared.inner.borrow();
        match &inner.last_frame {
            // Already rendered: keep that pass's variant.
            Some(frame)
                if inner.last_state == Some(next)
                    && frame.config.content_inert == (next.is_modal() || external) =>
            {
                frame.config
            }
            _ => derive(inner.last_state, next, external),
        }
    }

    /// The frame most recently handed to the renderer.
    pub fn last_frame(&self) -> Option<DrawerFrame> {
        self.shared.inner.borrow().last_frame.clone()
    }

    pub fn regions(&self) -> Option<DrawerRegions> {
        self.shared.inner.borrow().regions
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.inner.borrow().mounted
    }

    /// Mount against the built-in resize source fed by
    /// [`DrawerEvent::Resize`] through [`handle_event`](Self::handle_event).
    pub fn mount(&self) {
        let source = self.shared.resize_source.clone();
        self.mount_with(&source);
    }

    /// Mount against `source`: subscribe to width changes, the open signal
    /// and the external inert request, then refresh once.
    ///
    /// Mounting an already mounted drawer unmounts it first.
    pub fn mount_with(&self, source: &dyn WidthSource) {
        if self.is_mounted() {
            self.unmount();
        }

        let weak = Rc::downgrade(&self.shared);
        let mut subscriptions = Vec::with_capacity(3);
        subscriptions.push(source.on_change(Box::new({
            let weak = weak.clone();
            move |width| {
                if let Some(shared) = weak.upgrade() {
                    shared.on_width(width);
                }
            }
        })));
        subscriptions.push(self.shared.signals.open.subscribe({
            let weak = weak.clone();
            move |_| refresh_weak(&weak)
        }));
        subscriptions.push(
            self.shared
                .signals
                .external_content_inert
                .subscribe(move |_| refresh_weak(&weak)),
        );

        {
            let mut inner = self.shared.inner.borrow_mut();
            inner.subscriptions = subscriptions;
            inner.mounted = true;
        }
        log::debug!("drawer mounted (threshold {})", self.shared.classifier.threshold());

        match source.current_width() {
            Some(width) => self.shared.on_width(width),
            None => self.shared.refresh(),
        }
    }

    /// Release every subscription and withdraw the drawer's inert assertions.
    ///
    /// The open intent is left untouched. Unmounting twice is a no-op.
    pub fn unmount(&self) {
        let subscriptions = {
            let mut inner = self.shared.inner.borrow_mut();
            if !inner.mounted {
                return;
            }
            inner.mounted = false;
            inner.last_state = None;
            inner.viewport_width = None;
            std::mem::take(&mut inner.subscriptions)
        };
        for sub in &subscriptions {
            sub.release();
        }
        self.shared.classifier.reset();

        let signals = &self.shared.signals;
        signals.sidebar_inert.set_if_changed(false);
        signals
            .content_inert
            .set_if_changed(signals.external_content_inert.get());
        log::debug!("drawer unmounted");
    }

    /// Re-derive and render now.
    pub fn refresh(&self) {
        self.shared.refresh();
    }

    /// Run `f` with refreshes deferred, then refresh once if anything asked for it.
    ///
    /// Lets a host change width and open intent in one step, so the renderer
    /// sees a single transition.
    pub fn batch(&self, f: impl FnOnce()) {
        if self.shared.refreshing.get() {
            f();
            return;
        }
        {
            let _guard = FlagGuard::raise(&self.shared.refreshing);
            f();
        }
        if self.shared.dirty.get() {
            self.shared.refresh();
        }
    }

    /// Scrim click: set the open intent to `false` and nothing else.
    ///
    /// Safe in any state; when the drawer is not modal it only rewrites `false`.
    pub fn dismiss(&self) {
        log::debug!("drawer dismissed");
        self.shared.signals.open.set(false);
    }

    /// Flip the open intent (menu button).
    pub fn toggle(&self) {
        let open = self.shared.signals.open.get();
        self.shared.signals.open.set(!open);
    }

    pub fn set_open(&self, open: bool) {
        self.shared.signals.open.set(open);
    }

    /// Record the viewport height used for region layout.
    pub fn set_viewport_height(&self, height: u32) {
        self.shared.inner.borrow_mut().viewport_height = Some(height);
        self.refresh();
    }

    /// Feed the built-in resize source without a full event.
    pub fn resize(&self, width: u32, height: u32) {
        self.batch(|| {
            self.shared.inner.borrow_mut().viewport_height = Some(height);
            self.shared.resize_source.set_width(width);
            self.refresh();
        });
    }

    /// Route a host input event. Returns whether the drawer consumed it.
    ///
    /// - `Resize` feeds the built-in resize source and the region height.
    /// - `Click` on the scrim (outside the sidebar) dismisses.
    /// - `Escape` dismisses while modal, if enabled in the config.
    pub fn handle_event(&self, event: &DrawerEvent) -> bool {
        match *event {
            DrawerEvent::Resize { width, height } => {
                self.resize(u32::from(width), u32::from(height));
                true
            }
            DrawerEvent::Click { x, y } => {
                if !self.state().is_modal() {
                    return false;
                }
                let hit = self
                    .regions()
                    .is_some_and(|regions| regions.hits_scrim(i32::from(x), i32::from(y)));
                if hit {
                    self.dismiss();
                }
                hit
            }
            DrawerEvent::Key(Key::Escape) => {
                if self.shared.config.dismiss_on_escape && self.state().is_modal() {
                    self.dismiss();
                    true
                } else {
                    false
                }
            }
            DrawerEvent::Key(_) | DrawerEvent::Ignored => false,
        }
    }
}

impl std::fmt::Debug for DrawerLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawerLayout")
            .field("state", &self.state())
            .field("measured", &self.measured())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
