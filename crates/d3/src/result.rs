//! Packing results and derived metrics.

use crate::container::Container;
use crate::item::Item;
use crate::placement::PlacedItem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a pack invocation: the fitted/unfitted partition of the
/// input items plus the container they were packed into.
///
/// Invariant: the multiset of identities in `fitted` and `unfitted`
/// together equals exactly the multiset of input identities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingResult {
    /// The container items were packed into.
    pub container: Container,
    /// Successfully placed items, ordered by placement (or by settled
    /// height after settling).
    pub fitted: Vec<PlacedItem>,
    /// Items that could not be placed, in attempt order.
    pub unfitted: Vec<Item>,
}

impl PackingResult {
    /// Creates a new result.
    pub fn new(container: Container, fitted: Vec<PlacedItem>, unfitted: Vec<Item>) -> Self {
        Self {
            container,
            fitted,
            unfitted,
        }
    }

    /// Number of fitted items.
    pub fn fitted_count(&self) -> usize {
        self.fitted.len()
    }

    /// Number of unfitted items.
    pub fn unfitted_count(&self) -> usize {
        self.unfitted.len()
    }

    /// Returns true when every input item was placed.
    pub fn all_fitted(&self) -> bool {
        self.unfitted.is_empty()
    }

    /// Container volume.
    pub fn container_volume(&self) -> f64 {
        self.container.volume()
    }

    /// Total volume of fitted items.
    pub fn packed_volume(&self) -> f64 {
        self.fitted.iter().map(|p| p.item.volume()).sum()
    }

    /// Total volume of unfitted items.
    pub fn unpacked_volume(&self) -> f64 {
        self.unfitted.iter().map(Item::volume).sum()
    }

    /// Volume utilization as a percentage; zero for a degenerate
    /// container.
    pub fn utilization(&self) -> f64 {
        let container_volume = self.container_volume();
        if container_volume > 0.0 {
            self.packed_volume() / container_volume * 100.0
        } else {
            0.0
        }
    }

    /// Renders a textual summary of the packing, optionally listing each
    /// fitted item's position and rotation.
    pub fn summary(&self, include_positions: bool) -> String {
        let mut lines = vec![
            "Packing Results:".to_string(),
            format!("Successfully packed: {} items", self.fitted_count()),
            format!("Unable to pack: {} items", self.unfitted_count()),
            String::new(),
            "Volume Analysis:".to_string(),
            format!("Container Volume: {:.2} cubic units", self.container_volume()),
            format!("Packed Volume: {:.2} cubic units", self.packed_volume()),
            format!("Unpacked Volume: {:.2} cubic units", self.unpacked_volume()),
            format!("Volume Utilization: {:.1}%", self.utilization()),
        ];

        if include_positions && !self.fitted.is_empty() {
            lines.push(String::new());
            lines.push("Item positions:".to_string());
            for placed in &self.fitted {
                lines.push(format!(
                    "{}: Position ({}, {}, {}), Rotation {}",
                    placed.item.id,
                    placed.position.x,
                    placed.position.y,
                    placed.position.z,
                    placed.rotation
                ));
            }
        }

        if !self.unfitted.is_empty() {
            lines.push(String::new());
            lines.push("Unfitted items:".to_string());
            for item in &self.unfitted {
                lines.push(item.id.clone());
            }
        }

        lines.join("\n")
    }
}
