//! Quadtree error types.

use crate::geometry::{Boundary, Point, Quadrant};
use thiserror::Error;

/// Errors raised while constructing a root region.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Boundary extent must be positive and finite, got {width}x{height}")]
    InvalidExtent { width: f64, height: f64 },

    #[error("Boundary origin must be finite, got ({x}, {y})")]
    InvalidOrigin { x: f64, y: f64 },

    #[error("Region capacity must be at least 1")]
    ZeroCapacity,
}

/// Insertion failures. A point outside the root is not one of these;
/// `insert` reports that as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InsertError {
    /// The point is inside a region but inside none of its quadrants.
    #[error("Point {point} lies in {boundary} but in none of its quadrants")]
    Unplaced { point: Point, boundary: Boundary },

    /// Separating the point from a full leaf would need more levels than allowed.
    #[error("Point {point} cannot be separated from its neighbours within {max_depth} levels")]
    DepthExhausted { point: Point, max_depth: u32 },
}

/// Structural defects found by [`Region::validate`](crate::Region::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantError {
    #[error("Point {point} stored outside its region {boundary}")]
    Uncontained { point: Point, boundary: Boundary },

    #[error("Leaf {boundary} holds {len} points, capacity is {capacity}")]
    OverCapacity {
        boundary: Boundary,
        len: usize,
        capacity: u32,
    },

    #[error("Subdivided region {boundary} still holds {len} points")]
    PointsInBranch { boundary: Boundary, len: usize },

    #[error("Region {boundary} has capacity {found}, root has {expected}")]
    CapacityMismatch {
        boundary: Boundary,
        expected: u32,
        found: u32,
    },

    #[error("Region {boundary} is at depth {found}, expected {expected}")]
    DepthMismatch {
        boundary: Boundary,
        expected: u32,
        found: u32,
    },

    #[error("The {quadrant} child of {parent} has boundary {found}")]
    TilingMismatch {
        parent: Boundary,
        quadrant: Quadrant,
        found: Boundary,
    },
}
