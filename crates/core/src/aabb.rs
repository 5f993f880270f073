//! Axis-aligned bounding boxes.

use crate::precision::round_to;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in 3D, stored as min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vector3<f64>,
    /// Maximum corner.
    pub max: Vector3<f64>,
}

impl Aabb {
    /// Creates a new AABB from min/max corners.
    pub fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from a minimum corner and an extent.
    pub fn from_position_size(position: Vector3<f64>, size: Vector3<f64>) -> Self {
        Self {
            min: position,
            max: position + size,
        }
    }

    /// Returns the extent along the x axis.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Returns the extent along the y axis.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns the extent along the z axis.
    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Returns the volume of the AABB.
    pub fn volume(&self) -> f64 {
        self.width() * self.height() * self.depth()
    }

    /// Returns this AABB with every coordinate rounded to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            min: self.min.map(|v| round_to(v, decimals)),
            max: self.max.map(|v| round_to(v, decimals)),
        }
    }

    /// Checks whether two AABBs overlap with nonzero volume.
    ///
    /// Boxes that only touch along a shared face do not overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
            && self.min.z < other.max.z
            && other.min.z < self.max.z
    }

    /// [`Aabb::intersects`] with both boxes rounded to `decimals` places.
    pub fn intersects_at(&self, other: &Self, decimals: u32) -> bool {
        self.rounded(decimals).intersects(&other.rounded(decimals))
    }

    /// Checks whether the X and Y intervals both overlap with nonzero
    /// measure, ignoring z. This is the footprint test used for settling.
    pub fn overlaps_xy(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Checks whether this AABB lies entirely within `[0, size]` on every
    /// axis, comparing at `decimals` places.
    pub fn fits_within(&self, size: Vector3<f64>, decimals: u32) -> bool {
        let r = self.rounded(decimals);
        r.min.x >= 0.0
            && r.min.y >= 0.0
            && r.min.z >= 0.0
            && r.max.x <= round_to(size.x, decimals)
            && r.max.y <= round_to(size.y, decimals)
            && r.max.z <= round_to(size.z, decimals)
    }
}
