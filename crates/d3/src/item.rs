//! Item descriptors and axis-aligned rotations.

use nalgebra::Vector3;
use std::collections::HashMap;
use std::fmt;
use stowage_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the six axis-aligned orientations of a box.
///
/// Each variant names the order in which the item's original extents
/// (width, height, depth) are assigned to the x, y and z axes. The
/// variant order is the canonical search order used by the packer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// (w, h, d) — identity orientation.
    #[default]
    Whd,
    /// (h, w, d)
    Hwd,
    /// (h, d, w)
    Hdw,
    /// (d, h, w)
    Dhw,
    /// (d, w, h)
    Dwh,
    /// (w, d, h)
    Wdh,
}

impl Rotation {
    /// All rotations in canonical search order.
    pub const ALL: [Rotation; 6] = [
        Rotation::Whd,
        Rotation::Hwd,
        Rotation::Hdw,
        Rotation::Dhw,
        Rotation::Dwh,
        Rotation::Wdh,
    ];

    /// Permutes the original extents onto the (x, y, z) axes.
    pub fn apply(&self, width: f64, height: f64, depth: f64) -> Vector3<f64> {
        match self {
            Rotation::Whd => Vector3::new(width, height, depth),
            Rotation::Hwd => Vector3::new(height, width, depth),
            Rotation::Hdw => Vector3::new(height, depth, width),
            Rotation::Dhw => Vector3::new(depth, height, width),
            Rotation::Dwh => Vector3::new(depth, width, height),
            Rotation::Wdh => Vector3::new(width, depth, height),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rotation::Whd => "WHD",
            Rotation::Hwd => "HWD",
            Rotation::Hdw => "HDW",
            Rotation::Dhw => "DHW",
            Rotation::Dwh => "DWH",
            Rotation::Wdh => "WDH",
        };
        write!(f, "{}", name)
    }
}

/// A single box to be packed. Immutable geometric identity; positions and
/// rotations live on [`crate::PlacedItem`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Unique identity, `"{type}_{index}"` when expanded from a record.
    pub id: String,
    /// Extent along the x axis in the identity orientation.
    pub width: f64,
    /// Extent along the y axis in the identity orientation.
    pub height: f64,
    /// Extent along the z (vertical) axis in the identity orientation.
    pub depth: f64,
    /// Weight, unchanged by rotation.
    pub weight: f64,
}

impl Item {
    /// Creates a new item.
    pub fn new(id: impl Into<String>, width: f64, height: f64, depth: f64, weight: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            depth,
            weight,
        }
    }

    /// Returns the item volume.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }

    /// Returns the type prefix of the identity, everything before the
    /// first underscore. Used by renderers to pick a display color.
    pub fn bin_type(&self) -> &str {
        self.id.split('_').next().unwrap_or(&self.id)
    }

    /// Validates the descriptor.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0.0 || self.height <= 0.0 || self.depth <= 0.0 {
            return Err(Error::InvalidItem(format!(
                "all dimensions for '{}' must be positive",
                self.id
            )));
        }
        if self.weight < 0.0 {
            return Err(Error::InvalidItem(format!(
                "weight for '{}' cannot be negative",
                self.id
            )));
        }
        Ok(())
    }
}

/// An item-type record as supplied by the loader.
///
/// Expands into `quantity` distinct items named `"{name}_{i}"` with a
/// 1-based index, identical in dimensions and weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemType {
    /// Type name, the prefix of every expanded identity.
    pub name: String,
    /// Extent along the x axis.
    pub width: f64,
    /// Extent along the y axis.
    pub height: f64,
    /// Extent along the z (vertical) axis.
    pub depth: f64,
    /// Weight per item.
    pub weight: f64,
    /// Number of items to expand into.
    pub quantity: u32,
    /// Optional display color for renderers.
    pub color: Option<String>,
}

impl ItemType {
    /// Creates a new item type.
    pub fn new(
        name: impl Into<String>,
        width: f64,
        height: f64,
        depth: f64,
        weight: f64,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            depth,
            weight,
            quantity,
            color: None,
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Expands this record into `quantity` individual items.
    pub fn expand(&self) -> Vec<Item> {
        (1..=self.quantity)
            .map(|i| {
                Item::new(
                    format!("{}_{}", self.name, i),
                    self.width,
                    self.height,
                    self.depth,
                    self.weight,
                )
            })
            .collect()
    }
}

/// Builds the type-to-color mapping consumed by renderers.
///
/// Types without a color (or with a blank one) map to `"black"`.
pub fn color_map(types: &[ItemType]) -> HashMap<String, String> {
    types
        .iter()
        .map(|t| {
            let color = t
                .color
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or("black");
            (t.name.clone(), color.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotations_cover_all_permutations() {
        let mut seen = Vec::new();
        for rotation in Rotation::ALL {
            let dims = rotation.apply(1.0, 2.0, 3.0);
            let triple = (dims.x as i32, dims.y as i32, dims.z as i32);
            assert!(!seen.contains(&triple), "duplicate permutation {:?}", triple);
            seen.push(triple);
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[0], (1, 2, 3));
    }

    #[test]
    fn test_rotation_preserves_volume() {
        for rotation in Rotation::ALL {
            let dims = rotation.apply(2.0, 3.0, 5.0);
            assert_relative_eq!(dims.x * dims.y * dims.z, 30.0);
        }
    }

    #[test]
    fn test_rotation_display() {
        assert_eq!(Rotation::Whd.to_string(), "WHD");
        assert_eq!(Rotation::Dwh.to_string(), "DWH");
    }

    #[test]
    fn test_expand_names_items_one_based() {
        let record = ItemType::new("Small", 10.0, 10.0, 10.0, 2.5, 3);
        let items = record.expand();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "Small_1");
        assert_eq!(items[2].id, "Small_3");
        assert_relative_eq!(items[1].weight, 2.5);
    }

    #[test]
    fn test_expand_zero_quantity() {
        let record = ItemType::new("Empty", 10.0, 10.0, 10.0, 1.0, 0);
        assert!(record.expand().is_empty());
    }

    #[test]
    fn test_bin_type() {
        assert_eq!(Item::new("Small_1", 1.0, 1.0, 1.0, 1.0).bin_type(), "Small");
        assert_eq!(Item::new("Plain", 1.0, 1.0, 1.0, 1.0).bin_type(), "Plain");
    }

    #[test]
    fn test_color_map_defaults_to_black() {
        let types = vec![
            ItemType::new("Red", 1.0, 1.0, 1.0, 1.0, 1).with_color("red"),
            ItemType::new("Blank", 1.0, 1.0, 1.0, 1.0, 1).with_color("  "),
            ItemType::new("None", 1.0, 1.0, 1.0, 1.0, 1),
        ];
        let map = color_map(&types);
        assert_eq!(map["Red"], "red");
        assert_eq!(map["Blank"], "black");
        assert_eq!(map["None"], "black");
    }

    #[test]
    fn test_validation() {
        assert!(Item::new("A", 1.0, 1.0, 1.0, 0.0).validate().is_ok());
        assert!(Item::new("B", -1.0, 1.0, 1.0, 0.0).validate().is_err());
        assert!(Item::new("C", 1.0, 1.0, 1.0, -0.5).validate().is_err());
    }
}
