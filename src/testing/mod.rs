//! Headless testing helpers: a recording renderer, a drawer pilot and frame
//! summaries for snapshot-style assertions.

pub mod pilot;
pub mod recorder;
pub mod snapshot;

pub use pilot::DrawerPilot;
pub use recorder::RecordingRenderer;
pub use snapshot::frame_summary;
