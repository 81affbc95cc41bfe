//! Taffy-powered placement of the top bar, sidebar, content and scrim.
//!
//! Inline: the top bar spans the viewport, the sidebar is a fixed-width column
//! and the content fills the rest of the row. Collapsible: the content spans
//! the full width and the sidebar is positioned absolutely over it, resting at
//! `x = -sidebar_width` while closed. The scrim, when shown, covers everything
//! below the top bar.

use taffy::prelude::*;

use crate::drawer::state::DrawerState;
use crate::error::LayoutError;
use crate::geometry::{Region, Size};

/// Fixed lengths of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionMetrics {
    pub sidebar_width: u32,
    pub top_bar_height: u32,
}

/// Resting placement of every region for one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerRegions {
    pub top_bar: Region,
    pub sidebar: Region,
    pub content: Region,
    /// Present only while the drawer is shown modally.
    pub scrim: Option<Region>,
}

impl DrawerRegions {
    /// Whether a point hits the scrim rather than the sidebar.
    pub fn hits_scrim(&self, x: i32, y: i32) -> bool {
        match self.scrim {
            Some(scrim) => scrim.contains(x, y) && !self.sidebar.contains(x, y),
            None => false,
        }
    }
}

/// Lay out the regions for `state` inside `viewport`.
pub fn compute_regions(
    viewport: Size,
    metrics: RegionMetrics,
    state: DrawerState,
) -> Result<DrawerRegions, LayoutError> {
    let mut tree: TaffyTree<()> = TaffyTree::new();
    let sidebar_width = metrics.sidebar_width as f32;

    let top_bar = tree.new_leaf(top_bar_style(metrics.top_bar_height)).map_err(taffy_err)?;
    let content = tree.new_leaf(content_style()).map_err(taffy_err)?;

    let collapsible = state.mode.is_collapsible();
    let sidebar_style = if collapsible {
        let left = if state.open { 0.0 } else { -sidebar_width };
        overlay_sidebar_style(sidebar_width, left)
    } else {
        inline_sidebar_style(sidebar_width)
    };
    let sidebar = tree.new_leaf(sidebar_style).map_err(taffy_err)?;

    let scrim = if state.is_modal() {
        Some(tree.new_leaf(scrim_style()).map_err(taffy_err)?)
    } else {
        None
    };

    let mut body_children = Vec::with_capacity(3);
    if collapsible {
        body_children.push(content);
        body_children.extend(scrim);
        body_children.push(sidebar);
    } else {
        body_children.push(sidebar);
        body_children.push(content);
    }
    let body = tree
        .new_with_children(body_style(), &body_children)
        .map_err(taffy_err)?;
    let root = tree
        .new_with_children(root_style(viewport), &[top_bar, body])
        .map_err(taffy_err)?;

    tree.compute_layout(
        root,
        taffy::geometry::Size {
            width: AvailableSpace::Definite(viewport.width as f32),
            height: AvailableSpace::Definite(viewport.height as f32),
        },
    )
    .map_err(taffy_err)?;

    let body_region = region_of(&tree, body, Region::EMPTY)?;
    Ok(DrawerRegions {
        top_bar: region_of(&tree, top_bar, Region::EMPTY)?,
        sidebar: region_of(&tree, sidebar, body_region)?,
        content: region_of(&tree, content, body_region)?,
        scrim: match scrim {
            Some(node) => Some(region_of(&tree, node, body_region)?),
            None => None,
        },
    })
}

/// Absolute region of `node`, given its parent's absolute region.
fn region_of(
    tree: &TaffyTree<()>,
    node: taffy::prelude::NodeId,
    parent: Region,
) -> Result<Region, LayoutError> {
    let layout = tree.layout(node).map_err(taffy_err)?;
    Ok(Region {
        x: parent.x + layout.location.x.round() as i32,
        y: parent.y + layout.location.y.round() as i32,
        width: layout.size.width.round() as i32,
        height: layout.size.height.round() as i32,
    })
}

fn taffy_err(err: taffy::TaffyError) -> LayoutError {
    LayoutError::Taffy(err.to_string())
}

fn root_style(viewport: Size) -> Style {
    let mut style = Style::default();
    style.flex_direction = FlexDirection::Column;
    style.size = taffy::geometry::Size {
        width: Dimension::from_length(viewport.width as f32),
        height: Dimension::from_length(viewport.height as f32),
    };
    style
}

fn top_bar_style(height: u32) -> Style {
    let mut style = Style::default();
    style.flex_shrink = 0.0;
    style.size = taffy::geometry::Size {
        width: Dimension::from_percent(1.0),
        height: Dimension::from_length(height as f32),
    };
    style
}

fn body_style() -> Style {
    let mut style = Style::default();
    style.flex_direction = FlexDirection::Row;
    style.flex_grow = 1.0;
    style.flex_shrink = 1.0;
    style.flex_basis = Dimension::from_length(0.0);
    style
}

fn content_style() -> Style {
    let mut style = Style::default();
    style.flex_grow = 1.0;
    style.flex_basis = Dimension::from_length(0.0);
    style
}

fn inline_sidebar_style(width: f32) -> Style {
    let mut style = Style::default();
    style.flex_shrink = 0.0;
    style.size = taffy::geometry::Size {
        width: Dimension::from_length(width),
        height: Dimension::AUTO,
    };
    style
}

fn overlay_sidebar_style(width: f32, left: f32) -> Style {
    let mut style = Style::default();
    style.position = Position::Absolute;
    style.inset = taffy::geometry::Rect {
        left: LengthPercentageAuto::from_length(left),
        top: LengthPercentageAuto::from_length(0.0),
        right: LengthPercentageAuto::AUTO,
        bottom: LengthPercentageAuto::AUTO,
    };
    style.size = taffy::geometry::Size {
        width: Dimension::from_length(width),
        height: Dimension::from_percent(1.0),
    };
    style
}

fn scrim_style() -> Style {
    let mut style = Style::default();
    style.position = Position::Absolute;
    style.inset = taffy::geometry::Rect {
        left: LengthPercentageAuto::from_length(0.0),
        top: LengthPercentageAuto::from_length(0.0),
        right: LengthPercentageAuto::from_length(0.0),
        bottom: LengthPercentageAuto::from_length(0.0),
    };
    style
}
