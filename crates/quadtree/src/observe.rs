//! Insertion instrumentation.
//!
//! Observers are passed explicitly to [`Region::insert_with`] and only ever see
//! shared references, so they cannot steer an insertion. [`Region::insert`]
//! uses [`Silent`].

use crate::geometry::{Boundary, Point, Quadrant};
use crate::region::Region;
use tracing::info;

/// Hooks fired while a point travels down the tree.
///
/// `region` is the region the event happened in; its `depth()` and
/// `quadrant()` say where it sits in the tree.
pub trait InsertObserver {
    /// The point is outside `region`.
    fn rejected(&mut self, _region: &Region, _point: Point) {}

    /// The point was appended to the leaf `region`, either as a new insertion
    /// or as a move during redistribution.
    fn stored(&mut self, _region: &Region, _point: Point) {}

    /// The leaf `region` is full and is about to subdivide for `point`.
    /// Not fired when the split is refused.
    fn capacity_exceeded(&mut self, _region: &Region, _point: Point) {}

    /// `region` has just created its four children, before redistribution.
    fn subdivided(&mut self, _region: &Region, _children: &[Boundary; 4]) {}

    /// The region `insert` was called on has accepted the point.
    fn accepted(&mut self, _region: &Region, _point: Point) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl InsertObserver for Silent {}

/// Logs each decision at `info`, indented by depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct Narrator;

impl Narrator {
    fn indent(region: &Region) -> String {
        "-".repeat(region.depth() as usize * 5)
    }

    fn label(region: &Region) -> &'static str {
        region.quadrant().map_or("root", |q| q.name())
    }
}

impl InsertObserver for Narrator {
    fn rejected(&mut self, region: &Region, point: Point) {
        info!(
            "{}Point {} is out of bounds of {}",
            Self::indent(region),
            point,
            Self::label(region)
        );
    }

    fn stored(&mut self, region: &Region, point: Point) {
        info!(
            "{}Point {} added to {} {}",
            Self::indent(region),
            point,
            Self::label(region),
            region.boundary()
        );
    }

    fn capacity_exceeded(&mut self, region: &Region, point: Point) {
        info!(
            "{}Capacity {} reached in {} while inserting {}",
            Self::indent(region),
            region.capacity(),
            region.boundary(),
            point
        );
    }

    fn subdivided(&mut self, region: &Region, children: &[Boundary; 4]) {
        let indent = Self::indent(region);
        for (quadrant, boundary) in Quadrant::ALL.iter().zip(children) {
            info!(
                "{}Created {} quadrant {} with capacity {}",
                indent,
                quadrant,
                boundary,
                region.capacity()
            );
        }
    }

    fn accepted(&mut self, _region: &Region, _point: Point) {
        info!("{}", "-".repeat(20));
    }
}

/// Counts events; handy for tests and summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertStats {
    /// Points accepted by the region `insert` was called on.
    pub accepted: usize,
    /// Boundary rejections at any level, including quadrants tried in order.
    pub rejected: usize,
    /// Points appended to leaves, including redistribution moves.
    pub stored: usize,
    pub capacity_exceeded: usize,
    pub subdivisions: usize,
}

impl InsertObserver for InsertStats {
    fn rejected(&mut self, _region: &Region, _point: Point) {
        self.rejected += 1;
    }

    fn stored(&mut self, _region: &Region, _point: Point) {
        self.stored += 1;
    }

    fn capacity_exceeded(&mut self, _region: &Region, _point: Point) {
        self.capacity_exceeded += 1;
    }

    fn subdivided(&mut self, _region: &Region, _children: &[Boundary; 4]) {
        self.subdivisions += 1;
    }

    fn accepted(&mut self, _region: &Region, _point: Point) {
        self.accepted += 1;
    }
}
