//! The responsive navigation drawer.
//!
//! - [`state`]: `(mode, open)` snapshots and their phases
//! - [`derive`]: the pure state-to-render-parameters function
//! - [`signals`]: the shared cells a drawer reads and writes
//! - [`layout`]: [`DrawerLayout`], the mounted state machine

pub mod derive;
pub mod layout;
pub mod signals;
pub mod state;

pub use derive::{derive, DerivedDrawerConfig};
pub use layout::{DrawerLayout, MAX_REFRESH_ROUNDS};
pub use signals::DrawerSignals;
pub use state::{DrawerPhase, DrawerState};
