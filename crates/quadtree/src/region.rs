//! Region quadtree.
//!
//! A [`Region`] is either a leaf holding at most `capacity` points or a branch
//! owning exactly four child regions, one per [`Quadrant`]. Children are boxed
//! in a fixed array and there are no parent links, so dropping the root frees
//! the whole tree.

use crate::error::{ConfigError, InsertError};
use crate::geometry::{Boundary, Point, Quadrant};
use crate::observe::{InsertObserver, Silent};
use tracing::trace;

/// No depth cap by default; splitting stops where `f64` halving stops.
pub const DEFAULT_MAX_DEPTH: u32 = u32::MAX;

/// A node of the quadtree.
#[derive(Debug, Clone)]
pub struct Region {
    boundary: Boundary,
    capacity: u32,
    max_depth: u32,
    depth: u32,
    /// Slot in the parent; `None` for the root.
    quadrant: Option<Quadrant>,
    points: Vec<Point>,
    children: Option<Box<[Region; 4]>>,
}

impl Region {
    /// Create an empty root region.
    pub fn new(boundary: Boundary, capacity: u32) -> Result<Self, ConfigError> {
        Self::with_max_depth(boundary, capacity, DEFAULT_MAX_DEPTH)
    }

    /// Create an empty root region from `(x, y, width, height)`.
    pub fn from_rect(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        capacity: u32,
    ) -> Result<Self, ConfigError> {
        Self::new(Boundary::new(x, y, width, height)?, capacity)
    }

    /// Create an empty root region whose descendants stop at `max_depth`.
    pub fn with_max_depth(
        boundary: Boundary,
        capacity: u32,
        max_depth: u32,
    ) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self {
            boundary,
            capacity,
            max_depth,
            depth: 0,
            quadrant: None,
            points: Vec::new(),
            children: None,
        })
    }

    fn spawn(&self, quadrant: Quadrant, boundary: Boundary) -> Self {
        Self {
            boundary,
            capacity: self.capacity,
            max_depth: self.max_depth,
            depth: self.depth + 1,
            quadrant: Some(quadrant),
            points: Vec::new(),
            children: None,
        }
    }

    #[inline]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Number of subdivisions between the root and this region.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Which child slot of its parent this region fills.
    #[inline]
    pub fn quadrant(&self) -> Option<Quadrant> {
        self.quadrant
    }

    /// Points held directly. Always empty once subdivided.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn is_subdivided(&self) -> bool {
        self.children.is_some()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The four children in [`Quadrant::ALL`] order, if subdivided.
    #[inline]
    pub fn children(&self) -> Option<&[Region; 4]> {
        self.children.as_deref()
    }

    /// A single child, if subdivided.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Region> {
        self.children().map(|c| &c[quadrant.index()])
    }

    /// Whether this region owns the point under the half-open rule.
    #[inline]
    pub fn in_boundary(&self, point: Point) -> bool {
        self.boundary.contains(point)
    }

    /// Insert a point somewhere below this region.
    ///
    /// Returns `Ok(false)` without touching the tree when the point lies
    /// outside the boundary, `Ok(true)` once it is stored in a leaf.
    pub fn insert(&mut self, point: Point) -> Result<bool, InsertError> {
        self.insert_with(point, &mut Silent)
    }

    /// Like [`insert`](Self::insert), reporting each decision to `observer`.
    pub fn insert_with<O: InsertObserver + ?Sized>(
        &mut self,
        point: Point,
        observer: &mut O,
    ) -> Result<bool, InsertError> {
        let placed = self.place(point, observer)?;
        if placed {
            observer.accepted(self, point);
        }
        Ok(placed)
    }

    fn place<O: InsertObserver + ?Sized>(
        &mut self,
        point: Point,
        observer: &mut O,
    ) -> Result<bool, InsertError> {
        if !self.in_boundary(point) {
            observer.rejected(self, point);
            return Ok(false);
        }

        if self.is_leaf() {
            if self.points.len() < self.capacity as usize {
                self.points.push(point);
                observer.stored(self, point);
                return Ok(true);
            }
            self.subdivide(point, observer)?;
        }

        self.delegate(point, observer)
    }

    /// Offer the point to each child in order. Exactly one must take it.
    fn delegate<O: InsertObserver + ?Sized>(
        &mut self,
        point: Point,
        observer: &mut O,
    ) -> Result<bool, InsertError> {
        let boundary = self.boundary;
        if let Some(children) = self.children.as_deref_mut() {
            for child in children.iter_mut() {
                if child.place(point, observer)? {
                    return Ok(true);
                }
            }
        }
        Err(InsertError::Unplaced { point, boundary })
    }

    /// Split a full leaf into four quadrants and move its points down.
    ///
    /// `incoming` is the point that overflowed the leaf. Nothing is mutated
    /// unless every held point finds a child.
    fn subdivide<O: InsertObserver + ?Sized>(
        &mut self,
        incoming: Point,
        observer: &mut O,
    ) -> Result<(), InsertError> {
        debug_assert!(self.is_leaf());

        if !self.can_separate(incoming) {
            return Err(InsertError::DepthExhausted {
                point: incoming,
                max_depth: self.max_depth,
            });
        }
        observer.capacity_exceeded(self, incoming);

        let bounds = self.boundary.quadrants();
        let mut children = Quadrant::ALL.map(|q| self.spawn(q, bounds[q.index()]));
        trace!(
            "Subdividing {} at depth {} ({} points)",
            self.boundary,
            self.depth,
            self.points.len()
        );
        observer.subdivided(self, &bounds);

        for &point in &self.points {
            let placed = match children.iter_mut().find(|c| c.in_boundary(point)) {
                Some(child) => child.place(point, observer)?,
                None => false,
            };
            if !placed {
                return Err(InsertError::Unplaced {
                    point,
                    boundary: self.boundary,
                });
            }
        }

        self.points.clear();
        self.children = Some(Box::new(children));
        Ok(())
    }

    /// Dry run of the splits needed before `incoming` fits beside the points
    /// this full leaf holds. Only the quadrant receiving `incoming` can stay
    /// crowded, every other child ends up with fewer than `capacity` points.
    fn can_separate(&self, incoming: Point) -> bool {
        let capacity = self.capacity as usize;
        let mut boundary = self.boundary;
        let mut depth = self.depth;
        let mut crowd = self.points.clone();

        loop {
            if depth >= self.max_depth || !boundary.can_split() {
                return false;
            }
            let Some(quadrant) = boundary.quadrant(incoming) else {
                // Let the real pass report the defect.
                return true;
            };
            boundary = boundary.quadrant_bounds(quadrant);
            crowd.retain(|&p| boundary.contains(p));
            if crowd.len() < capacity {
                return true;
            }
            depth += 1;
        }
    }
}
