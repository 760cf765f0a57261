//! Quadtree demo - builds a tree from the configured points and renders it.

mod render;

use quadtree::{Config, InsertError, InsertObserver, Narrator, Point, Silent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Native Quadtree demo v{}", env!("CARGO_PKG_VERSION"));

    // Explicit config path wins over ./quadtree.toml
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    let mut tree = config.tree.build()?;
    info!("Loaded configuration");
    info!("  Boundary: {}", tree.boundary());
    info!("  Capacity: {}", tree.capacity());
    info!("  Max depth: {}", tree.max_depth());

    let points = demo_points(&config, &tree.boundary());
    info!("Inserting {} points", points.len());

    let mut observer: Box<dyn InsertObserver> = if config.demo.narrate {
        Box::new(Narrator)
    } else {
        Box::new(Silent)
    };

    let (mut accepted, mut rejected, mut failed) = (0usize, 0usize, 0usize);
    for point in points {
        match tree.insert_with(point, observer.as_mut()) {
            Ok(true) => accepted += 1,
            Ok(false) => {
                rejected += 1;
                warn!("Point {} lies outside {}", point, tree.boundary());
            }
            Err(err @ InsertError::DepthExhausted { .. }) => {
                failed += 1;
                warn!("{}", err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    tree.validate()?;
    info!(
        "Accepted {}, rejected {}, failed {}",
        accepted, rejected, failed
    );
    info!(
        "Tree has {} regions, {} leaves, height {}",
        tree.region_count(),
        tree.leaf_count(),
        tree.height()
    );

    if config.render.outline {
        print!("{}", render::outline(&tree));
    }

    if let Some(path) = &config.render.svg_path {
        std::fs::write(path, render::svg(&tree, config.render.svg_scale))?;
        info!("Wrote {}", path);
    }

    Ok(())
}

/// Configured points followed by uniformly drawn extras.
fn demo_points(config: &Config, boundary: &quadtree::Boundary) -> Vec<Point> {
    let mut points: Vec<Point> = config.demo.points().collect();

    let count = config.demo.random_points;
    if count > 0 {
        let mut rng = match config.demo.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        points.extend((0..count).map(|_| {
            Point::new(
                rng.random_range(boundary.x()..boundary.right()),
                rng.random_range(boundary.y()..boundary.bottom()),
            )
        }));
    }

    points
}
