//! Geometry primitives: points, half-open boundaries and quadrant tags.

use crate::error::ConfigError;
use std::fmt;

/// A 2D point using glam's DVec2.
pub type Point = glam::DVec2;

/// One of the four child slots of a subdivided region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Quadrant {
    /// All quadrants in the fixed delegation order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    /// Slot index of this quadrant in a children array.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Quadrant::NorthEast => 0,
            Quadrant::NorthWest => 1,
            Quadrant::SouthEast => 2,
            Quadrant::SouthWest => 3,
        }
    }

    /// Lowercase compass name.
    pub const fn name(self) -> &'static str {
        match self {
            Quadrant::NorthEast => "northeast",
            Quadrant::NorthWest => "northwest",
            Quadrant::SouthEast => "southeast",
            Quadrant::SouthWest => "southwest",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Half-open axis-aligned rectangle: `[min_x, max_x) x [min_y, max_y)`.
///
/// Edges are stored rather than the extent so that quadrants share their
/// split lines bit for bit with the parent. A point inside the parent is then
/// inside exactly one quadrant, whatever rounding `x + width / 2` would do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Boundary {
    /// Create a boundary from its top-left corner and extent.
    ///
    /// The origin must be finite and the extent must be positive, finite and
    /// large enough to survive `x + width` in floating point.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, ConfigError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ConfigError::InvalidOrigin { x, y });
        }
        let extent_ok = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        let max_x = x + width;
        let max_y = y + height;
        if !extent_ok || !max_x.is_finite() || !max_y.is_finite() || max_x <= x || max_y <= y {
            return Err(ConfigError::InvalidExtent { width, height });
        }
        Ok(Self {
            min_x: x,
            min_y: y,
            max_x,
            max_y,
        })
    }

    #[inline]
    const fn from_edges(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Left edge (inclusive).
    #[inline]
    pub fn x(&self) -> f64 {
        self.min_x
    }

    /// Top edge (inclusive).
    #[inline]
    pub fn y(&self) -> f64 {
        self.min_y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.max_x
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.max_y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The split point shared by all four quadrants.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// Half-open containment test.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.min_x <= point.x && point.x < self.max_x && self.min_y <= point.y && point.y < self.max_y
    }

    /// Whether halving still yields four non-empty quadrants.
    #[inline]
    pub fn can_split(&self) -> bool {
        let mid = self.center();
        self.min_x < mid.x && mid.x < self.max_x && self.min_y < mid.y && mid.y < self.max_y
    }

    /// Boundary of a single quadrant.
    pub fn quadrant_bounds(&self, quadrant: Quadrant) -> Boundary {
        let mid = self.center();
        match quadrant {
            Quadrant::NorthEast => Self::from_edges(mid.x, self.min_y, self.max_x, mid.y),
            Quadrant::NorthWest => Self::from_edges(self.min_x, self.min_y, mid.x, mid.y),
            Quadrant::SouthEast => Self::from_edges(mid.x, mid.y, self.max_x, self.max_y),
            Quadrant::SouthWest => Self::from_edges(self.min_x, mid.y, mid.x, self.max_y),
        }
    }

    /// The four quadrant boundaries in [`Quadrant::ALL`] order.
    pub fn quadrants(&self) -> [Boundary; 4] {
        Quadrant::ALL.map(|q| self.quadrant_bounds(q))
    }

    /// First quadrant (in delegation order) whose boundary holds the point.
    pub fn quadrant(&self, point: Point) -> Option<Quadrant> {
        Quadrant::ALL
            .into_iter()
            .find(|&q| self.quadrant_bounds(q).contains(point))
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.min_x,
            self.min_y,
            self.width(),
            self.height()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Boundary {
        Boundary::new(0.0, 0.0, 100.0, 100.0).unwrap()
    }

    #[test]
    fn test_half_open_containment() {
        let b = square();
        assert!(b.contains(Point::new(0.0, 0.0)));
        assert!(b.contains(Point::new(99.999, 99.999)));
        assert!(!b.contains(Point::new(100.0, 50.0)));
        assert!(!b.contains(Point::new(50.0, 100.0)));
        assert!(!b.contains(Point::new(-0.001, 50.0)));
        assert!(!b.contains(Point::new(f64::NAN, 50.0)));
    }

    #[test]
    fn test_rejects_bad_extent() {
        assert_eq!(
            Boundary::new(0.0, 0.0, 0.0, 10.0),
            Err(ConfigError::InvalidExtent { width: 0.0, height: 10.0 })
        );
        assert!(Boundary::new(0.0, 0.0, 10.0, -1.0).is_err());
        assert!(Boundary::new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
        assert!(Boundary::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
        // Width vanishes when added to a huge origin.
        assert!(Boundary::new(1e20, 0.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_quadrant_geometry() {
        let b = Boundary::new(10.0, 20.0, 100.0, 50.0).unwrap();
        let [ne, nw, se, sw] = b.quadrants();

        assert_eq!((ne.x(), ne.y(), ne.width(), ne.height()), (60.0, 20.0, 50.0, 25.0));
        assert_eq!((nw.x(), nw.y(), nw.width(), nw.height()), (10.0, 20.0, 50.0, 25.0));
        assert_eq!((se.x(), se.y(), se.width(), se.height()), (60.0, 45.0, 50.0, 25.0));
        assert_eq!((sw.x(), sw.y(), sw.width(), sw.height()), (10.0, 45.0, 50.0, 25.0));
    }

    #[test]
    fn test_quadrants_share_edges() {
        let b = Boundary::new(0.1, 0.7, 0.3, 0.9).unwrap();
        let [ne, nw, se, sw] = b.quadrants();

        assert_eq!(nw.right(), ne.x());
        assert_eq!(sw.right(), se.x());
        assert_eq!(nw.bottom(), sw.y());
        assert_eq!(ne.bottom(), se.y());
        assert_eq!(ne.right(), b.right());
        assert_eq!(se.bottom(), b.bottom());
    }

    #[test]
    fn test_exactly_one_quadrant_owns_each_point() {
        let b = Boundary::new(0.1, 0.7, 0.3, 0.9).unwrap();
        let mid = b.center();
        let probes = [
            Point::new(b.x(), b.y()),
            mid,
            Point::new(mid.x, b.y()),
            Point::new(b.x(), mid.y),
            Point::new(b.right() - f64::EPSILON, b.bottom() - f64::EPSILON),
            Point::new(0.25, 1.1),
        ];
        for p in probes {
            assert!(b.contains(p));
            let owners = b.quadrants().iter().filter(|q| q.contains(p)).count();
            assert_eq!(owners, 1, "point {p} owned by {owners} quadrants");
        }
    }

    #[test]
    fn test_quadrant_lookup() {
        let b = square();
        assert_eq!(b.quadrant(Point::new(75.0, 10.0)), Some(Quadrant::NorthEast));
        assert_eq!(b.quadrant(Point::new(10.0, 10.0)), Some(Quadrant::NorthWest));
        assert_eq!(b.quadrant(Point::new(50.0, 50.0)), Some(Quadrant::SouthEast));
        assert_eq!(b.quadrant(Point::new(49.0, 50.0)), Some(Quadrant::SouthWest));
        assert_eq!(b.quadrant(Point::new(100.0, 10.0)), None);
    }

    #[test]
    fn test_split_limit() {
        assert!(square().can_split());
        let tiny = Boundary::new(1.0, 1.0, f64::EPSILON, f64::EPSILON).unwrap();
        assert!(!tiny.can_split());
    }
}
