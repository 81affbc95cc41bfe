//! Shared reactive state: signals and subscriptions.
//!
//! - [`create_signal`]: create a shared observable cell.
//! - [`Signal::subscribe`]: register a listener, returning a [`Subscription`].

pub mod signal;

pub use signal::{create_signal, Signal, SubscriberId, Subscription};
