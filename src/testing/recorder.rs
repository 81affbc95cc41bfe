//! A renderer that records every frame it receives.

use std::cell::RefCell;
use std::rc::Rc;

use crate::render::{DrawerFrame, Renderer};

/// Records frames into a shared log.
///
/// Clones share the log, so a test can hand one clone to the drawer and keep
/// another for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    frames: Rc<RefCell<Vec<DrawerFrame>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames so far, oldest first.
    pub fn frames(&self) -> Vec<DrawerFrame> {
        self.frames.borrow().clone()
    }

    pub fn last(&self) -> Option<DrawerFrame> {
        self.frames.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.borrow().is_empty()
    }

    /// Drop recorded frames.
    pub fn clear(&self) {
        self.frames.borrow_mut().clear();
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &DrawerFrame) {
        self.frames.borrow_mut().push(frame.clone());
    }
}
