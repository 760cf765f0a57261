//! Read-only traversal and counting.

use crate::geometry::Point;
use crate::region::Region;

/// Pre-order iterator over a region and all of its descendants.
///
/// Children come in [`Quadrant::ALL`](crate::Quadrant::ALL) order.
#[derive(Debug, Clone)]
pub struct Regions<'a> {
    stack: Vec<&'a Region>,
}

impl<'a> Iterator for Regions<'a> {
    type Item = &'a Region;

    fn next(&mut self) -> Option<Self::Item> {
        let region = self.stack.pop()?;
        if let Some(children) = region.children() {
            self.stack.extend(children.iter().rev());
        }
        Some(region)
    }
}

impl Region {
    /// Walk this region and every descendant.
    pub fn iter(&self) -> Regions<'_> {
        Regions { stack: vec![self] }
    }

    /// Walk the leaves only.
    pub fn leaves(&self) -> impl Iterator<Item = &Region> + '_ {
        self.iter().filter(|r| r.is_leaf())
    }

    /// Every stored point, leaf by leaf.
    pub fn all_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.leaves().flat_map(|r| r.points().iter().copied())
    }

    /// Total number of stored points.
    pub fn len(&self) -> usize {
        self.leaves().map(|r| r.points().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves().all(|r| r.points().is_empty())
    }

    /// Number of regions including this one.
    pub fn region_count(&self) -> usize {
        self.iter().count()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Levels below this region; 0 for a leaf.
    pub fn height(&self) -> u32 {
        self.iter()
            .map(|r| r.depth() - self.depth())
            .max()
            .unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Region;
    type IntoIter = Regions<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
