//! Container descriptor.

use nalgebra::Vector3;
use stowage_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fixed-size rectangular container that items are packed into.
///
/// Axis convention: x spans `width`, y spans `height`, z spans `depth`;
/// z is the vertical axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Identifier from the container record.
    pub id: String,
    /// Extent along the x axis.
    pub width: f64,
    /// Extent along the y axis.
    pub height: f64,
    /// Extent along the z (vertical) axis.
    pub depth: f64,
    /// Maximum total weight of fitted items.
    pub max_weight: f64,
}

impl Container {
    /// Creates a new container descriptor.
    pub fn new(
        id: impl Into<String>,
        width: f64,
        height: f64,
        depth: f64,
        max_weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            depth,
            max_weight,
        }
    }

    /// Returns the dimensions as a vector.
    pub fn size(&self) -> Vector3<f64> {
        Vector3::new(self.width, self.height, self.depth)
    }

    /// Returns the container volume.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }

    /// Validates the descriptor.
    ///
    /// The packing engine tolerates degenerate containers (nothing fits,
    /// utilization reports as zero); this check is for callers that want
    /// to reject them up front.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0.0 || self.height <= 0.0 || self.depth <= 0.0 {
            return Err(Error::InvalidContainer(format!(
                "all dimensions for '{}' must be positive",
                self.id
            )));
        }
        if self.max_weight < 0.0 {
            return Err(Error::InvalidContainer(format!(
                "maximum weight for '{}' cannot be negative",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_volume() {
        let container = Container::new("C1", 100.0, 80.0, 50.0, 1000.0);
        assert_relative_eq!(container.volume(), 400_000.0, epsilon = 0.001);
    }

    #[test]
    fn test_validation() {
        let valid = Container::new("C1", 100.0, 80.0, 50.0, 1000.0);
        assert!(valid.validate().is_ok());

        let flat = Container::new("C2", 100.0, 0.0, 50.0, 1000.0);
        assert!(flat.validate().is_err());

        let negative_weight = Container::new("C3", 100.0, 80.0, 50.0, -1.0);
        assert!(negative_weight.validate().is_err());
    }
}
