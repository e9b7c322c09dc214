//! Integer rectangle math for the tile grid.
//!
//! Coordinates are grid cells, not pixels. Both edges are stored as origin +
//! size; `right` and `bottom` are exclusive so adjacent rectangles never
//! overlap and containment uses half-open intervals on both axes.
//!
//! Invariants:
//! * `width >= 1` and `height >= 1` for every constructed `Rectangle`.
//! * Origins may be negative; only the size is validated.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("invalid rectangle size {width}x{height}: both dimensions must be at least 1")]
    InvalidSize { width: i32, height: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rectangle {
    /// Build a rectangle, rejecting degenerate sizes.
    pub fn try_new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, GeometryError> {
        if width < 1 || height < 1 {
            return Err(GeometryError::InvalidSize { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Build a rectangle from sizes known to be valid at the call site.
    ///
    /// # Panics
    ///
    /// Panics when `width < 1` or `height < 1`. A degenerate rectangle here is
    /// a bug in the calling layout code; use [`Rectangle::try_new`] when the
    /// size comes from data.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        match Self::try_new(x, y, width, height) {
            Ok(rect) => rect,
            Err(err) => panic!("{err}"),
        }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Right edge, exclusive.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge, exclusive.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True when the two rectangles share at least one cell.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// True when the cell `(x, y)` lies inside `[x, right) x [y, bottom)`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x <= x && self.right() > x && self.y <= y && self.bottom() > y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn stores_origin_and_size() {
        let r = Rectangle::new(1, 2, 3, 5);
        assert_eq!((r.x(), r.y(), r.width(), r.height()), (1, 2, 3, 5));
        assert_eq!(r.right(), 4);
        assert_eq!(r.bottom(), 7);
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert_eq!(
            Rectangle::try_new(0, 0, 0, 3),
            Err(GeometryError::InvalidSize {
                width: 0,
                height: 3
            })
        );
        assert!(Rectangle::try_new(0, 0, 3, -1).is_err());
    }

    #[test]
    #[should_panic(expected = "invalid rectangle size")]
    fn new_panics_on_zero_height() {
        let _ = Rectangle::new(0, 0, 1, 0);
    }

    #[test]
    fn detects_true_intersections() {
        let r = Rectangle::new(3, 3, 8, 8);
        assert!(r.intersects(&Rectangle::new(4, 4, 2, 2))); // inside
        assert!(r.intersects(&Rectangle::new(1, 1, 100, 100))); // enclosing
        assert!(r.intersects(&Rectangle::new(1, 2, 3, 3))); // top-left
        assert!(r.intersects(&Rectangle::new(9, 2, 10, 3))); // top-right
        assert!(r.intersects(&Rectangle::new(2, 8, 3, 10))); // bottom-left
        assert!(r.intersects(&Rectangle::new(9, 8, 10, 10))); // bottom-right
    }

    #[test]
    fn ignores_touching_edges() {
        let r = Rectangle::new(3, 3, 8, 8);
        assert!(!r.intersects(&Rectangle::new(0, 0, 3, 3)));
        assert!(!r.intersects(&Rectangle::new(11, 0, 3, 3)));
        assert!(!r.intersects(&Rectangle::new(0, 11, 3, 3)));
        assert!(!r.intersects(&Rectangle::new(11, 11, 3, 3)));
        assert!(!r.intersects(&Rectangle::new(0, 0, 3, 100)));
        assert!(!r.intersects(&Rectangle::new(0, 0, 100, 3)));
        assert!(!r.intersects(&Rectangle::new(11, 0, 3, 100)));
        assert!(!r.intersects(&Rectangle::new(0, 11, 100, 3)));
    }

    #[test]
    fn containment_is_half_open() {
        let r = Rectangle::new(3, 3, 8, 8);
        assert!(r.contains(3, 3));
        assert!(r.contains(10, 10));
        assert!(!r.contains(2, 3));
        assert!(!r.contains(11, 3));
        assert!(!r.contains(3, 2));
        assert!(!r.contains(3, 11));
    }

    #[test]
    fn equality_is_structural() {
        let a = Rectangle::new(3, 3, 8, 8);
        assert_eq!(a, Rectangle::new(3, 3, 8, 8));
        assert_ne!(a, Rectangle::new(1, 2, 3, 5));
    }

    fn rect() -> impl Strategy<Value = Rectangle> {
        (-50i32..50, -50i32..50, 1i32..40, 1i32..40)
            .prop_map(|(x, y, w, h)| Rectangle::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn contains_matches_interval_definition(r in rect(), px in -100i32..100, py in -100i32..100) {
            let expected = r.x() <= px && px < r.right() && r.y() <= py && py < r.bottom();
            prop_assert_eq!(r.contains(px, py), expected);
        }

        #[test]
        fn intersects_is_symmetric(a in rect(), b in rect()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn intersects_iff_some_cell_shared(a in rect(), b in rect()) {
            let shared = (a.x().max(b.x())..a.right().min(b.right()))
                .any(|x| (a.y().max(b.y())..a.bottom().min(b.bottom())).any(|y| a.contains(x, y) && b.contains(x, y)));
            prop_assert_eq!(a.intersects(&b), shared);
        }
    }
}
