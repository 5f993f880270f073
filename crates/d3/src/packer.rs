//! Greedy corner-based placement engine.
//!
//! Items are tried one at a time against an ordered list of candidate
//! corners. At each corner all six axis-aligned rotations are tried in
//! canonical order; the first candidate that stays inside the container,
//! overlaps nothing already placed, and keeps the cumulative weight under
//! the limit is accepted. Each accepted placement retires its corner and
//! contributes up to three new corners, one just beyond each of its +x,
//! +y and +z faces.
//!
//! The search is purely sequential and deterministic: identical inputs
//! and configuration produce bit-for-bit identical results.

use crate::container::Container;
use crate::item::{Item, Rotation};
use crate::placement::PlacedItem;
use crate::result::PackingResult;
use nalgebra::Vector3;
use std::cmp::Ordering;
use stowage_core::{round_to, Aabb};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the placement engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackConfig {
    /// Sort items by their vertical extent, largest first, before packing.
    /// A packing-quality heuristic, not a correctness requirement.
    pub bigger_first: bool,

    /// Spread placements across the container floor instead of packing
    /// tightly against one corner. Changes only the order in which
    /// candidate corners are tried, never the acceptance rule.
    pub distribute: bool,

    /// Decimal places used in all dimension comparisons.
    pub precision: u32,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            bigger_first: false,
            distribute: false,
            precision: 6,
        }
    }
}

impl PackConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bigger-first ordering.
    pub fn with_bigger_first(mut self, enabled: bool) -> Self {
        self.bigger_first = enabled;
        self
    }

    /// Sets the corner-distribution policy.
    pub fn with_distribute(mut self, enabled: bool) -> Self {
        self.distribute = enabled;
        self
    }

    /// Sets the comparison precision in decimal places.
    pub fn with_precision(mut self, decimals: u32) -> Self {
        self.precision = decimals;
        self
    }
}

/// Greedy corner-based placement engine.
#[derive(Debug, Clone, Default)]
pub struct PlacementEngine {
    config: PackConfig,
}

impl PlacementEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: PackConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Packs `items` into `container`, partitioning them into fitted
    /// placements and unfitted items.
    ///
    /// Every input item ends up in exactly one of the two partitions;
    /// infeasibility is never an error. Fitted positions are as placed,
    /// possibly floating; run [`crate::gravity::settle`] on
    /// `result.fitted` to rest them on supporting surfaces.
    pub fn pack(&self, container: &Container, items: Vec<Item>) -> PackingResult {
        let mut ordered = items;
        if self.config.bigger_first {
            // Stable: ties keep input order.
            ordered.sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(Ordering::Equal));
        }

        let mut corners: Vec<Vector3<f64>> = vec![Vector3::zeros()];
        let mut fitted: Vec<PlacedItem> = Vec::new();
        let mut unfitted: Vec<Item> = Vec::new();
        let mut fitted_weight = 0.0;

        for item in ordered {
            if self.config.distribute {
                // Stable: equal corners keep insertion order.
                corners.sort_by(compare_spread);
            }

            match try_place(
                &item,
                container,
                &corners,
                &fitted,
                fitted_weight,
                &self.config,
            ) {
                Some((placed, corner_idx)) => {
                    corners.remove(corner_idx);
                    corners.extend(derived_corners(&placed, container, self.config.precision));
                    fitted_weight += placed.item.weight;
                    log::debug!(
                        "placed '{}' at ({}, {}, {}) rotation {}",
                        placed.item.id,
                        placed.position.x,
                        placed.position.y,
                        placed.position.z,
                        placed.rotation
                    );
                    fitted.push(placed);
                }
                None => {
                    log::debug!("no placement for '{}'", item.id);
                    unfitted.push(item);
                }
            }
        }

        log::info!(
            "packed {} items into '{}', {} unfitted",
            fitted.len(),
            container.id,
            unfitted.len()
        );
        PackingResult::new(container.clone(), fitted, unfitted)
    }
}

/// Corner ordering for the distribute policy: lowest z first, then y,
/// then x, filling the floor before stacking.
fn compare_spread(a: &Vector3<f64>, b: &Vector3<f64>) -> Ordering {
    a.z.partial_cmp(&b.z)
        .unwrap_or(Ordering::Equal)
        .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
        .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
}

/// Searches corners in order, rotations in canonical order, and returns
/// the first acceptable placement together with the index of the corner
/// it consumes. Pure: mutates nothing.
///
/// A candidate is acceptable when, at the configured precision, the
/// rotated box lies inside the container, overlaps no placed item
/// (touching faces permitted), and `fitted_weight` plus the item weight
/// stays within the container limit. The weight condition is evaluated
/// jointly with the geometric ones, so a weight-infeasible item is
/// unfitted even though space exists.
pub fn try_place(
    item: &Item,
    container: &Container,
    corners: &[Vector3<f64>],
    placed: &[PlacedItem],
    fitted_weight: f64,
    config: &PackConfig,
) -> Option<(PlacedItem, usize)> {
    let size = container.size();
    for (corner_idx, corner) in corners.iter().enumerate() {
        for rotation in Rotation::ALL {
            let dims = rotation.apply(item.width, item.height, item.depth);
            let candidate = Aabb::from_position_size(*corner, dims);

            if !candidate.fits_within(size, config.precision) {
                continue;
            }
            if placed
                .iter()
                .any(|p| candidate.intersects_at(&p.aabb(), config.precision))
            {
                continue;
            }
            if fitted_weight + item.weight > container.max_weight {
                continue;
            }

            return Some((PlacedItem::new(item.clone(), *corner, rotation), corner_idx));
        }
    }
    None
}

/// Candidate corners contributed by a placement: the points immediately
/// beyond its +x, +y and +z faces. Corners at or outside the container
/// extent are dropped.
fn derived_corners(placed: &PlacedItem, container: &Container, decimals: u32) -> Vec<Vector3<f64>> {
    let pos = placed.position;
    let max = placed.aabb().max;
    let size = container.size();
    let mut corners = Vec::with_capacity(3);

    if round_to(max.x, decimals) < round_to(size.x, decimals) {
        corners.push(Vector3::new(max.x, pos.y, pos.z));
    }
    if round_to(max.y, decimals) < round_to(size.y, decimals) {
        corners.push(Vector3::new(pos.x, max.y, pos.z));
    }
    if round_to(max.z, decimals) < round_to(size.z, decimals) {
        corners.push(Vector3::new(pos.x, pos.y, max.z));
    }
    corners
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn container() -> Container {
        Container::new("C1", 100.0, 100.0, 100.0, 1000.0)
    }

    fn cube(id: &str, edge: f64, weight: f64) -> Item {
        Item::new(id, edge, edge, edge, weight)
    }

    #[test]
    fn test_empty_input() {
        let result = PlacementEngine::default().pack(&container(), Vec::new());
        assert!(result.fitted.is_empty());
        assert!(result.unfitted.is_empty());
    }

    #[test]
    fn test_first_item_lands_at_origin() {
        let result = PlacementEngine::default().pack(&container(), vec![cube("A_1", 50.0, 1.0)]);
        assert_eq!(result.fitted.len(), 1);
        assert_relative_eq!(result.fitted[0].position.x, 0.0);
        assert_relative_eq!(result.fitted[0].position.y, 0.0);
        assert_relative_eq!(result.fitted[0].position.z, 0.0);
        assert_eq!(result.fitted[0].rotation, Rotation::Whd);
    }

    #[test]
    fn test_oversized_item_is_unfitted() {
        let long = Item::new("Long_1", 200.0, 50.0, 50.0, 1.0);
        let result = PlacementEngine::default().pack(&container(), vec![long]);
        assert!(result.fitted.is_empty());
        assert_eq!(result.unfitted.len(), 1);
        assert_eq!(result.unfitted[0].id, "Long_1");
    }

    #[test]
    fn test_rotation_rescues_tall_item() {
        // Taller than the container but fits on its side.
        let tall = Item::new("Tall_1", 50.0, 50.0, 150.0, 1.0);
        let wide = Container::new("C2", 200.0, 100.0, 100.0, 1000.0);
        let result = PlacementEngine::default().pack(&wide, vec![tall]);
        assert_eq!(result.fitted.len(), 1);
        assert_ne!(result.fitted[0].rotation, Rotation::Whd);
        assert!(result.fitted[0].dimensions().z <= 100.0);
    }

    #[test]
    fn test_weight_limit_rejects_despite_space() {
        let light_limit = Container::new("C3", 100.0, 100.0, 100.0, 150.0);
        let items = vec![cube("A_1", 10.0, 100.0), cube("B_1", 10.0, 100.0)];
        let result = PlacementEngine::default().pack(&light_limit, items);
        assert_eq!(result.fitted.len(), 1);
        assert_eq!(result.unfitted.len(), 1);
        assert_eq!(result.fitted[0].item.id, "A_1");
        assert_eq!(result.unfitted[0].id, "B_1");
    }

    #[test]
    fn test_second_item_takes_first_derived_corner() {
        let items = vec![cube("A_1", 50.0, 1.0), cube("B_1", 50.0, 1.0)];
        let result = PlacementEngine::default().pack(&container(), items);
        assert_eq!(result.fitted.len(), 2);
        // Corners are appended +x first, so B lands beside A.
        assert_relative_eq!(result.fitted[1].position.x, 50.0);
        assert_relative_eq!(result.fitted[1].position.y, 0.0);
        assert_relative_eq!(result.fitted[1].position.z, 0.0);
    }

    #[test]
    fn test_bigger_first_sorts_by_vertical_extent() {
        let short = Item::new("Short_1", 10.0, 10.0, 10.0, 1.0);
        let tall = Item::new("Tall_1", 10.0, 10.0, 80.0, 1.0);
        let config = PackConfig::default().with_bigger_first(true);
        let result = PlacementEngine::new(config).pack(&container(), vec![short, tall]);
        assert_eq!(result.fitted[0].item.id, "Tall_1");
        assert_eq!(result.fitted[1].item.id, "Short_1");
    }

    #[test]
    fn test_distribute_fills_floor_before_stacking() {
        let items = vec![
            cube("A_1", 40.0, 1.0),
            cube("B_1", 40.0, 1.0),
            cube("C_1", 40.0, 1.0),
        ];
        let config = PackConfig::default().with_distribute(true);
        let result = PlacementEngine::new(config).pack(&container(), items);
        assert_eq!(result.fitted.len(), 3);
        for placed in &result.fitted {
            assert_relative_eq!(placed.position.z, 0.0);
        }
    }

    #[test]
    fn test_determinism() {
        let items: Vec<Item> = (1..=10)
            .map(|i| Item::new(format!("Box_{}", i), 30.0, 25.0, 20.0, 5.0))
            .collect();
        let engine = PlacementEngine::new(PackConfig::default().with_bigger_first(true));
        let first = engine.pack(&container(), items.clone());
        let second = engine.pack(&container(), items);
        assert_eq!(first.fitted, second.fitted);
        assert_eq!(first.unfitted, second.unfitted);
    }

    #[test]
    fn test_precision_ignores_sub_precision_overlap() {
        let placed = vec![PlacedItem::new(
            cube("A_1", 50.0, 1.0),
            Vector3::zeros(),
            Rotation::Whd,
        )];
        let item = cube("B_1", 50.0, 1.0);
        let corners = vec![Vector3::new(49.9999999, 0.0, 0.0)];
        let config = PackConfig::default().with_precision(3);
        let hit = try_place(&item, &container(), &corners, &placed, 1.0, &config);
        // At 3 decimals the 1e-7 overlap rounds away.
        assert!(hit.is_some());
    }

    #[test]
    fn test_degenerate_container_fits_nothing() {
        let flat = Container::new("Flat", 100.0, 100.0, 0.0, 1000.0);
        let result = PlacementEngine::default().pack(&flat, vec![cube("A_1", 10.0, 1.0)]);
        assert!(result.fitted.is_empty());
        assert_eq!(result.unfitted.len(), 1);
    }
}
