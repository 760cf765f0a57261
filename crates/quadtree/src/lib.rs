//! Capacity-bounded region quadtree.
//!
//! This crate contains:
//! - Half-open boundaries and quadrant geometry
//! - The recursive [`Region`] tree with insert/subdivide
//! - Insert observers for narration and counting
//! - Read-only traversal and structural validation
//! - TOML configuration

pub mod config;
mod error;
mod geometry;
mod observe;
mod region;
mod validate;
mod walk;

pub use config::Config;
pub use error::{ConfigError, InsertError, InvariantError};
pub use geometry::{Boundary, Point, Quadrant};
pub use observe::{InsertObserver, InsertStats, Narrator, Silent};
pub use region::{Region, DEFAULT_MAX_DEPTH};
pub use walk::Regions;
