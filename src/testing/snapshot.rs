//! Plain-text summaries of drawer frames for snapshot assertions.

use std::fmt::Write;

use crate::animation::TransitionVariant;
use crate::geometry::Region;
use crate::render::DrawerFrame;

/// Summarize a frame, one fact per line.
///
/// ```text
/// state: collapsible/open
/// scrim: shown
/// inert: sidebar=false content=true
/// variant: enter
/// sidebar: transform 500ms cubic-bezier(0.2, 0, 0, 1)
/// content: opacity 300ms cubic-bezier(0.2, 0, 0, 1)
/// scrim: opacity 150ms cubic-bezier(0.2, 0, 0, 1)
/// ```
///
/// A `regions:` block follows when the frame carries regions.
pub fn frame_summary(frame: &DrawerFrame) -> String {
    let config = &frame.config;
    let mut out = String::new();
    let _ = writeln!(out, "state: {}", config.state);
    let _ = writeln!(
        out,
        "scrim: {}",
        if config.show_scrim { "shown" } else { "hidden" }
    );
    let _ = writeln!(
        out,
        "inert: sidebar={} content={}",
        config.sidebar_inert, config.content_inert
    );
    let _ = writeln!(out, "variant: {}", variant_name(config.variant));
    let [slide, content, scrim] = &frame.transitions;
    let _ = writeln!(out, "sidebar: {}", slide.to_css());
    let _ = writeln!(out, "content: {}", content.to_css());
    let _ = write!(out, "scrim: {}", scrim.to_css());

    if let Some(regions) = &frame.regions {
        let _ = write!(out, "\nregions:");
        let _ = write!(out, "\n  top_bar {}", region_text(regions.top_bar));
        let _ = write!(out, "\n  sidebar {}", region_text(regions.sidebar));
        let _ = write!(out, "\n  content {}", region_text(regions.content));
        if let Some(scrim) = regions.scrim {
            let _ = write!(out, "\n  scrim {}", region_text(scrim));
        }
    }
    out
}

/// `x,y WxH`.
pub fn region_text(region: Region) -> String {
    format!("{},{} {}x{}", region.x, region.y, region.width, region.height)
}

fn variant_name(variant: TransitionVariant) -> &'static str {
    match variant {
        TransitionVariant::Enter => "enter",
        TransitionVariant::Exit => "exit",
        TransitionVariant::Continuous => "continuous",
    }
}
