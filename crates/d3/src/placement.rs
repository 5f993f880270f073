//! Placed items: an item with an accepted position and rotation.

use crate::item::{Item, Rotation};
use nalgebra::Vector3;
use stowage_core::Aabb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An item that has been assigned a position and rotation inside the
/// container. `position` is the minimum corner of the rotated bounding
/// box. Created only by the placement engine; the settler mutates the z
/// coordinate and nothing else.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedItem {
    /// The placed item.
    pub item: Item,
    /// Minimum corner of the rotated bounding box.
    pub position: Vector3<f64>,
    /// Accepted orientation.
    pub rotation: Rotation,
}

impl PlacedItem {
    /// Creates a new placement.
    pub fn new(item: Item, position: Vector3<f64>, rotation: Rotation) -> Self {
        Self {
            item,
            position,
            rotation,
        }
    }

    /// Returns the dimensions after rotation.
    pub fn dimensions(&self) -> Vector3<f64> {
        self.rotation
            .apply(self.item.width, self.item.height, self.item.depth)
    }

    /// Returns the rotated extent as an AABB.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_position_size(self.position, self.dimensions())
    }

    /// Returns the z coordinate of the top face.
    pub fn top(&self) -> f64 {
        self.position.z + self.dimensions().z
    }

    /// Checks whether the X-Y footprints of two placements overlap with
    /// nonzero measure.
    pub fn overlaps_footprint(&self, other: &PlacedItem) -> bool {
        self.aabb().overlaps_xy(&other.aabb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn placed(id: &str, x: f64, y: f64, z: f64, rotation: Rotation) -> PlacedItem {
        PlacedItem::new(
            Item::new(id, 10.0, 20.0, 30.0, 1.0),
            Vector3::new(x, y, z),
            rotation,
        )
    }

    #[test]
    fn test_dimensions_follow_rotation() {
        let p = placed("A_1", 0.0, 0.0, 0.0, Rotation::Dwh);
        assert_relative_eq!(p.dimensions().x, 30.0);
        assert_relative_eq!(p.dimensions().y, 10.0);
        assert_relative_eq!(p.dimensions().z, 20.0);
    }

    #[test]
    fn test_top_uses_rotated_depth() {
        let p = placed("A_1", 0.0, 0.0, 5.0, Rotation::Whd);
        assert_relative_eq!(p.top(), 35.0);

        let rotated = placed("A_2", 0.0, 0.0, 5.0, Rotation::Wdh);
        assert_relative_eq!(rotated.top(), 25.0);
    }

    #[test]
    fn test_footprint_overlap() {
        let a = placed("A_1", 0.0, 0.0, 0.0, Rotation::Whd);
        let above = placed("A_2", 5.0, 5.0, 100.0, Rotation::Whd);
        let beside = placed("A_3", 10.0, 0.0, 0.0, Rotation::Whd);

        assert!(a.overlaps_footprint(&above));
        // Touching edges have zero-measure overlap.
        assert!(!a.overlaps_footprint(&beside));
    }
}
