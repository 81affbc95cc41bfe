//! The renderer boundary.
//!
//! The drawer computes a [`DrawerFrame`] on every refresh and hands it to a
//! [`Renderer`]. The renderer owns markup, inert marking of subtrees and the
//! actual interpolation of each [`TransitionSpec`].

use crate::animation::TransitionSpec;
use crate::drawer::derive::DerivedDrawerConfig;
use crate::regions::DrawerRegions;

/// One render pass worth of drawer output.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerFrame {
    pub config: DerivedDrawerConfig,
    /// Freshly computed for this pass; never reused from an earlier frame.
    pub transitions: [TransitionSpec; 3],
    /// `None` until both viewport width and height are known.
    pub regions: Option<DrawerRegions>,
    /// Whether the viewport has been measured at least once.
    pub measured: bool,
}

impl DrawerFrame {
    pub fn new(
        config: DerivedDrawerConfig,
        regions: Option<DrawerRegions>,
        measured: bool,
    ) -> Self {
        Self {
            transitions: config.transitions(),
            config,
            regions,
            measured,
        }
    }
}

/// Consumes drawer frames.
pub trait Renderer {
    fn render(&mut self, frame: &DrawerFrame);
}

impl<F: FnMut(&DrawerFrame)> Renderer for F {
    fn render(&mut self, frame: &DrawerFrame) {
        self(frame)
    }
}
