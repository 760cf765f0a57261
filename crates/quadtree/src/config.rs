//! Quadtree configuration.

use crate::error::ConfigError;
use crate::geometry::{Boundary, Point};
use crate::region::{Region, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// File read by [`Config::load`].
pub const CONFIG_FILE: &str = "quadtree.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Errors while reading or writing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize default config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// Load configuration from `quadtree.toml` or use defaults.
    pub fn load() -> Result<Self, LoadError> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            info!("No {} found, creating default config", CONFIG_FILE);
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

/// Root region geometry and splitting limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TreeConfig {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_extent")]
    pub width: f64,
    #[serde(default = "default_extent")]
    pub height: f64,
    /// Points a leaf may hold before it splits.
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    /// Deepest level a region may be created at.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

impl TreeConfig {
    pub fn boundary(&self) -> Result<Boundary, ConfigError> {
        Boundary::new(self.x, self.y, self.width, self.height)
    }

    /// Build an empty root region.
    pub fn build(&self) -> Result<Region, ConfigError> {
        Region::with_max_depth(self.boundary()?, self.capacity, self.max_depth)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: default_extent(),
            height: default_extent(),
            capacity: default_capacity(),
            max_depth: default_max_depth(),
        }
    }
}

fn default_extent() -> f64 {
    100.0
}
fn default_capacity() -> u32 {
    4
}
fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

/// Demo input set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Points inserted in order.
    #[serde(default = "default_demo_points")]
    pub points: Vec<[f64; 2]>,
    /// Extra points drawn uniformly inside the root boundary.
    #[serde(default)]
    pub random_points: usize,
    /// Seed for the random points; fresh entropy when unset.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Log every insert/subdivide decision.
    #[serde(default = "default_narrate")]
    pub narrate: bool,
}

impl DemoConfig {
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().map(|&[x, y]| Point::new(x, y))
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            points: default_demo_points(),
            random_points: 0,
            seed: None,
            narrate: default_narrate(),
        }
    }
}

fn default_demo_points() -> Vec<[f64; 2]> {
    vec![
        [10.0, 10.0],
        [20.0, 20.0],
        [70.0, 70.0],
        [80.0, 80.0],
        [30.0, 30.0],
        [20.0, 40.0],
        [40.0, 40.0],
        [49.0, 49.0],
        [40.0, 26.0],
        [45.0, 39.0],
    ]
}
fn default_narrate() -> bool {
    true
}

/// Output of the demo renderer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Print an indented outline of the tree.
    #[serde(default = "default_outline")]
    pub outline: bool,
    /// Write an SVG picture here when set.
    #[serde(default)]
    pub svg_path: Option<String>,
    /// Pixels per world unit in the SVG.
    #[serde(default = "default_svg_scale")]
    pub svg_scale: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            outline: default_outline(),
            svg_path: None,
            svg_scale: default_svg_scale(),
        }
    }
}

fn default_outline() -> bool {
    true
}
fn default_svg_scale() -> f64 {
    4.0
}
