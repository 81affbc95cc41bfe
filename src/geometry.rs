//! Core geometry types: Size, Region.
//!
//! Coordinates are in whatever unit the host measures the viewport in (CSS
//! pixels for a web renderer, cells for a terminal). The drawer never mixes
//! units: thresholds, sidebar width and top bar height share the viewport's.

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangle defined by its top-left corner and size.
///
/// The origin may be negative: a closed modal sidebar rests left of the viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive): `y + height`.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// Whether the point (x, y) lies inside this region.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_edges() {
        let r = Region::new(10, 5, 20, 4);
        assert_eq!(r.right(), 30);
        assert_eq!(r.bottom(), 9);
    }

    #[test]
    fn region_contains_is_half_open() {
        let r = Region::new(0, 0, 10, 10);
        assert!(r.contains(0, 0));
        assert!(r.contains(9, 9));
        assert!(!r.contains(10, 0));
        assert!(!r.contains(0, 10));
        assert!(!r.contains(-1, 3));
    }

    #[test]
    fn region_negative_origin_contains() {
        // A sidebar resting off-screen to the left.
        let r = Region::new(-30, 4, 30, 20);
        assert!(!r.contains(0, 10));
        assert!(r.contains(-1, 10));
    }

    #[test]
    fn empty_region_contains_nothing() {
        assert!(!Region::EMPTY.contains(0, 0));
        assert_eq!(Size::new(3, 4), Size { width: 3, height: 4 });
    }
}
