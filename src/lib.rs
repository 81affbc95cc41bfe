//! # gilt-drawer
//!
//! A responsive navigation drawer for Rust UIs, in the gilt-tui family.
//!
//! The drawer arranges a top bar, a sidebar and main content, and switches
//! between an inline presentation (sidebar beside content) and a modal one
//! (sidebar sliding over content behind a dismissible scrim) depending on the
//! viewport width. The crate owns the state machine, inert signaling and
//! transition timing; drawing is left to a [`render::Renderer`].
//!
//! ## Core Systems
//!
//! - **[`reactive`]**: Shared signals with ordered, synchronous notification
//! - **[`viewport`]**: Width classification and injectable width sources
//! - **[`drawer`]**: Drawer state, the pure derivation and the mounted state machine
//! - **[`animation`]**: Easing curves and declarative transition requests
//! - **[`regions`]**: Taffy-powered placement of the four drawer regions
//! - **[`render`]**: The renderer boundary and per-pass frames
//! - **[`event`]**: Drawer input events with crossterm conversions
//! - **[`scroll`]**: Scroll strip and animated selection director
//! - **[`config`]**: `DrawerConfig` builder and TOML loading
//! - **[`testing`]**: Headless pilot, recording renderer, frame summaries
//! - **[`geometry`]**: Size and Region primitives

// Foundation
pub mod error;
pub mod geometry;

// Reactivity and measurement
pub mod reactive;
pub mod viewport;

// Drawer core
pub mod animation;
pub mod config;
pub mod drawer;
pub mod regions;

// Host boundary
pub mod event;
pub mod render;

// Secondary component
pub mod scroll;

// Test harness
pub mod testing;

pub use config::DrawerConfig;
pub use drawer::{derive, DerivedDrawerConfig, DrawerLayout, DrawerSignals, DrawerState};
pub use error::{ConfigError, LayoutError};
pub use viewport::{classify, ViewportMode};
