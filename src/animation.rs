//! Transition parameters handed to the renderer.
//!
//! The drawer never interpolates anything itself. It computes a
//! [`TransitionSpec`] per animated part (which properties, how long, which
//! curve, enter or exit) and the renderer owns frame scheduling. [`Easing`]
//! still exposes [`Easing::sample`] so non-CSS renderers and the scroll
//! director can evaluate the same curves.
//!
//! # Invariants
//!
//! - `Easing::sample(t)` is clamped: `t <= 0` gives `0.0`, `t >= 1` gives `1.0`.
//! - A zero-duration transition reports full progress immediately.

use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing
// ---------------------------------------------------------------------------

/// Named easing curves, each a CSS cubic-bezier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Used when the modal drawer enters.
    Emphasized,
    /// Used for exits and every non-modal change.
    EmphasizedAccelerate,
    EmphasizedDecelerate,
    /// Used by the scroll director.
    Standard,
    Linear,
}

impl Easing {
    /// Cubic-bezier control points `(x1, y1, x2, y2)`.
    pub const fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Easing::Emphasized => (0.2, 0.0, 0.0, 1.0),
            Easing::EmphasizedAccelerate => (0.3, 0.0, 0.8, 0.15),
            Easing::EmphasizedDecelerate => (0.05, 0.7, 0.1, 1.0),
            Easing::Standard => (0.2, 0.0, 0.0, 1.0),
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
        }
    }

    /// Token name, e.g. `"emphasized-accelerate"`.
    pub const fn name(self) -> &'static str {
        match self {
            Easing::Emphasized => "emphasized",
            Easing::EmphasizedAccelerate => "emphasized-accelerate",
            Easing::EmphasizedDecelerate => "emphasized-decelerate",
            Easing::Standard => "standard",
            Easing::Linear => "linear",
        }
    }

    /// CSS timing-function text.
    pub fn to_css(self) -> String {
        if self == Easing::Linear {
            return "linear".to_owned();
        }
        let (x1, y1, x2, y2) = self.control_points();
        format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
    }

    /// Eased progress for linear time progress `t`.
    pub fn sample(self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        if self == Easing::Linear {
            return t;
        }
        let (x1, y1, x2, y2) = self.control_points();
        let s = solve_curve_x(t, x1, x2);
        bezier(s, y1, y2)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One axis of a cubic bezier with endpoints fixed at 0 and 1.
#[inline]
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[inline]
fn bezier_derivative(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x equals `x`. Newton first, bisection if
/// the slope is too flat.
fn solve_curve_x(x: f64, x1: f64, x2: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = bezier_derivative(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let value = bezier(s, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

// ---------------------------------------------------------------------------
// TransitionVariant / TransitionTarget
// ---------------------------------------------------------------------------

/// Whether a transition brings something in, takes it out, or just retimes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionVariant {
    Enter,
    Exit,
    Continuous,
}

/// The part of the drawer layout a transition applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransitionTarget {
    /// The sidebar's slide in/out.
    Sidebar,
    /// The main content's opacity.
    Content,
    /// The scrim's fade.
    Scrim,
}

// ---------------------------------------------------------------------------
// TransitionSpec
// ---------------------------------------------------------------------------

/// A declarative transition request for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionSpec {
    pub target: TransitionTarget,
    pub properties: BTreeSet<&'static str>,
    pub duration_ms: u32,
    pub easing: Easing,
    pub variant: TransitionVariant,
}

impl TransitionSpec {
    /// Create a transition for `target` animating `properties`.
    pub fn new(
        target: TransitionTarget,
        properties: &[&'static str],
        duration_ms: u32,
        easing: Easing,
        variant: TransitionVariant,
    ) -> Self {
        Self {
            target,
            properties: properties.iter().copied().collect(),
            duration_ms,
            easing,
            variant,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }

    /// Eased progress after `elapsed`, in `[0.0, 1.0]`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() / self.duration().as_secs_f64();
        self.easing.sample(t)
    }

    /// CSS `transition` value, one entry per property.
    pub fn to_css(&self) -> String {
        let easing = self.easing.to_css();
        self.properties
            .iter()
            .map(|prop| format!("{prop} {}ms {easing}", self.duration_ms))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn easing_names() {
        assert_eq!(Easing::Emphasized.name(), "emphasized");
        assert_eq!(Easing::EmphasizedAccelerate.name(), "emphasized-accelerate");
        assert_eq!(Easing::EmphasizedAccelerate.to_string(), "emphasized-accelerate");
    }

    #[test]
    fn easing_css() {
        insta::assert_snapshot!(Easing::Emphasized.to_css(), @"cubic-bezier(0.2, 0, 0, 1)");
        insta::assert_snapshot!(Easing::EmphasizedAccelerate.to_css(), @"cubic-bezier(0.3, 0, 0.8, 0.15)");
        assert_eq!(Easing::Linear.to_css(), "linear");
    }

    #[test]
    fn sample_endpoints() {
        for easing in [
            Easing::Emphasized,
            Easing::EmphasizedAccelerate,
            Easing::EmphasizedDecelerate,
            Easing::Standard,
            Easing::Linear,
        ] {
            assert_eq!(easing.sample(0.0), 0.0);
            assert_eq!(easing.sample(1.0), 1.0);
            assert_eq!(easing.sample(-3.0), 0.0);
            assert_eq!(easing.sample(7.0), 1.0);
            assert_eq!(easing.sample(f64::NAN), 0.0);
        }
    }

    #[test]
    fn linear_is_identity() {
        assert!(approx(Easing::Linear.sample(0.25), 0.25));
        assert!(approx(Easing::Linear.sample(0.8), 0.8));
    }

    #[test]
    fn emphasized_front_loads_progress() {
        // (0.2, 0, 0, 1) is well ahead of linear at the midpoint.
        assert!(Easing::Emphasized.sample(0.5) > 0.75);
    }

    #[test]
    fn accelerate_back_loads_progress() {
        assert!(Easing::EmphasizedAccelerate.sample(0.5) < 0.25);
    }

    #[test]
    fn sample_is_monotonic() {
        for easing in [Easing::Emphasized, Easing::EmphasizedAccelerate, Easing::Standard] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.sample(i as f64 / 100.0);
                assert!(v + 1e-9 >= prev, "{easing} not monotonic at {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn transition_collects_properties() {
        let transition = TransitionSpec::new(
            TransitionTarget::Content,
            &["opacity", "filter", "opacity"],
            300,
            Easing::Emphasized,
            TransitionVariant::Enter,
        );
        assert_eq!(transition.properties.len(), 2);
        assert_eq!(transition.duration(), Duration::from_millis(300));
    }

    #[test]
    fn transition_css() {
        let transition = TransitionSpec::new(
            TransitionTarget::Sidebar,
            &["transform"],
            500,
            Easing::Emphasized,
            TransitionVariant::Enter,
        );
        insta::assert_snapshot!(transition.to_css(), @"transform 500ms cubic-bezier(0.2, 0, 0, 1)");
    }

    #[test]
    fn transition_css_multiple_properties_sorted() {
        let transition = TransitionSpec::new(
            TransitionTarget::Scrim,
            &["visibility", "opacity"],
            150,
            Easing::Linear,
            TransitionVariant::Exit,
        );
        assert_eq!(transition.to_css(), "opacity 150ms linear, visibility 150ms linear");
    }

    #[test]
    fn progress_over_time() {
        let transition = TransitionSpec::new(
            TransitionTarget::Scrim,
            &["opacity"],
            150,
            Easing::Linear,
            TransitionVariant::Enter,
        );
        assert_eq!(transition.progress(Duration::ZERO), 0.0);
        assert!(approx(transition.progress(Duration::from_millis(75)), 0.5));
        assert_eq!(transition.progress(Duration::from_millis(400)), 1.0);
    }

    #[test]
    fn zero_duration_completes_instantly() {
        let transition = TransitionSpec::new(
            TransitionTarget::Sidebar,
            &["transform"],
            0,
            Easing::Emphasized,
            TransitionVariant::Exit,
        );
        assert_eq!(transition.progress(Duration::ZERO), 1.0);
    }
}
