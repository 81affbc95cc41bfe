//! Signal<T> and create_signal() for shared observable state.
//!
//! A signal is a single mutable cell with synchronous subscriber notification.
//! Handles are cheap `Rc` clones, so several components can read and write the
//! same cell without knowing about each other. Handles are `!Send`: every read,
//! write and notification happens on the thread that created the signal.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Identifies one listener registered on a [`Signal`].
    pub struct SubscriberId;
}

type Listener<T> = Rc<dyn Fn(&T)>;

struct SignalInner<T> {
    value: T,
    listeners: SlotMap<SubscriberId, Listener<T>>,
    /// Registration order. `SlotMap` iteration order is slot order, not insertion order.
    order: Vec<SubscriberId>,
}

// ---------------------------------------------------------------------------
// Signal
// ---------------------------------------------------------------------------

/// Create a signal holding `initial`.
pub fn create_signal<T: 'static>(initial: T) -> Signal<T> {
    Signal::new(initial)
}

/// An observable value cell shared by reference-counted handles.
///
/// Writes store the value first and then call every current listener, in
/// subscription order, before returning. Writing the current value again is
/// allowed and still notifies; use [`Signal::set_if_changed`] to skip no-op writes.
pub struct Signal<T: 'static> {
    inner: Rc<RefCell<SignalInner<T>>>,
}

impl<T: 'static> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl<T: 'static> Signal<T> {
    /// Create a signal holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SignalInner {
                value: initial,
                listeners: SlotMap::with_key(),
                order: Vec::new(),
            })),
        }
    }

    /// Read by reference without cloning.
    ///
    /// The closure must not write to this same signal.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Register `listener`; it is called with the new value after every write.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// released or dropped.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.listeners.insert(Rc::new(listener));
            inner.order.push(id);
            id
        };
        let weak: Weak<RefCell<SignalInner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.borrow_mut();
                if inner.listeners.remove(id).is_some() {
                    inner.order.retain(|other| *other != id);
                }
            }
        })
    }

    /// Number of live listeners.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Whether two handles point at the same cell.
    pub fn ptr_eq(&self, other: &Signal<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Call each snapshotted listener with `value`.
    ///
    /// A listener released earlier in the same round is skipped. A panicking
    /// listener does not stop the round; the first panic is resumed once every
    /// listener has run.
    fn notify(&self, value: &T, listeners: Vec<(SubscriberId, Listener<T>)>) {
        if listeners.is_empty() {
            return;
        }
        log::trace!("signal notifying {} listener(s)", listeners.len());

        let mut first_panic: Option<Box<dyn Any + Send>> = None;
        for (id, listener) in listeners {
            let live = self.inner.borrow().listeners.contains_key(id);
            if !live {
                continue;
            }
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| listener(value))) {
                if first_panic.is_none() {
                    first_panic = Some(payload);
                }
            }
        }

        if let Some(payload) = first_panic {
            panic::resume_unwind(payload);
        }
    }

    fn snapshot_listeners(inner: &SignalInner<T>) -> Vec<(SubscriberId, Listener<T>)> {
        inner
            .order
            .iter()
            .filter_map(|id| inner.listeners.get(*id).map(|l| (*id, Rc::clone(l))))
            .collect()
    }
}

impl<T: Clone + 'static> Signal<T> {
    /// Read the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Store `value` and notify every listener before returning.
    pub fn set(&self, value: T) {
        let (current, listeners) = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            (inner.value.clone(), Self::snapshot_listeners(&inner))
        };
        self.notify(&current, listeners);
    }

    /// Mutate the value in place and notify every listener.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let (current, listeners) = {
            let mut inner = self.inner.borrow_mut();
            f(&mut inner.value);
            (inner.value.clone(), Self::snapshot_listeners(&inner))
        };
        self.notify(&current, listeners);
    }
}

impl<T: Clone + PartialEq + 'static> Signal<T> {
    /// Store `value` only if it differs from the current one.
    ///
    /// Returns whether a write (and notification) happened.
    pub fn set_if_changed(&self, value: T) -> bool {
        let changed = self.inner.borrow().value != value;
        if changed {
            self.set(value);
        }
        changed
    }
}

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// A live registration between a signal (or other source) and a listener.
///
/// Releasing removes the listener permanently. Releasing twice is a no-op.
/// Dropping the handle releases it; call [`Subscription::detach`] to keep the
/// listener for the lifetime of the source instead.
pub struct Subscription {
    release: Cell<Option<Box<dyn FnOnce()>>>,
}

impl Subscription {
    /// Wrap a release action.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Cell::new(Some(Box::new(release))),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self {
            release: Cell::new(None),
        }
    }

    /// Remove the listener. Subsequent calls do nothing.
    pub fn release(&self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    /// Whether the listener is still registered through this handle.
    pub fn is_active(&self) -> bool {
        let release = self.release.take();
        let active = release.is_some();
        self.release.set(release);
        active
    }

    /// Give up the handle without removing the listener.
    pub fn detach(self) {
        drop(self.release.take());
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
