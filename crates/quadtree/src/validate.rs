//! Structural checks over a built tree.

use crate::error::InvariantError;
use crate::geometry::Quadrant;
use crate::region::Region;

impl Region {
    /// Check containment, leaf capacity, quadrant tiling, inherited capacity
    /// and depth bookkeeping for this region and all of its descendants.
    ///
    /// Returns the first defect found in pre-order.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let capacity = self.capacity();
        let mut stack = vec![self];

        while let Some(region) = stack.pop() {
            let boundary = region.boundary();

            if region.capacity() != capacity {
                return Err(InvariantError::CapacityMismatch {
                    boundary,
                    expected: capacity,
                    found: region.capacity(),
                });
            }

            if let Some(point) = region.points().iter().copied().find(|&p| !region.in_boundary(p)) {
                return Err(InvariantError::Uncontained { point, boundary });
            }

            let Some(children) = region.children() else {
                if region.points().len() > capacity as usize {
                    return Err(InvariantError::OverCapacity {
                        boundary,
                        len: region.points().len(),
                        capacity,
                    });
                }
                continue;
            };

            if !region.points().is_empty() {
                return Err(InvariantError::PointsInBranch {
                    boundary,
                    len: region.points().len(),
                });
            }

            for (quadrant, child) in Quadrant::ALL.into_iter().zip(children.iter()) {
                let expected = boundary.quadrant_bounds(quadrant);
                if child.boundary() != expected || child.quadrant() != Some(quadrant) {
                    return Err(InvariantError::TilingMismatch {
                        parent: boundary,
                        quadrant,
                        found: child.boundary(),
                    });
                }
                if child.depth() != region.depth() + 1 {
                    return Err(InvariantError::DepthMismatch {
                        boundary: child.boundary(),
                        expected: region.depth() + 1,
                        found: child.depth(),
                    });
                }
            }

            stack.extend(children.iter().rev());
        }

        Ok(())
    }
}
