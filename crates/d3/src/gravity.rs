//! Gravity settling: one ordered downward pass removing floating
//! placements.
//!
//! The pass checks only X-Y column overlap when searching for support; it
//! relies on the placement stage having already ruled out 3D
//! interpenetration. It is a single forward sweep, not a fixed-point
//! relaxation: an item can only rest on items earlier in the z-sorted
//! order, so a supporter that itself settles later is not re-visited.

use crate::placement::PlacedItem;
use std::cmp::Ordering;

/// Settles every placement onto the highest supporting surface beneath
/// it, in place.
///
/// Items are stable-sorted by ascending z, then visited in that order;
/// each is lowered to the maximum top face among earlier items whose
/// footprints overlap its own with nonzero measure, or to the floor when
/// none do. Items are only ever lowered, never raised. On return `fitted`
/// is ordered by ascending settled z, ties keeping their prior relative
/// order.
pub fn settle(fitted: &mut [PlacedItem]) {
    fitted.sort_by(compare_z);

    for i in 0..fitted.len() {
        let (below, rest) = fitted.split_at_mut(i);
        let item = &mut rest[0];

        let mut min_height = 0.0_f64;
        for other in below.iter() {
            if item.overlaps_footprint(other) {
                min_height = min_height.max(other.top());
            }
        }

        if item.position.z > min_height {
            log::debug!(
                "settled '{}' from z={} to z={}",
                item.item.id,
                item.position.z,
                min_height
            );
            item.position.z = min_height;
        }
    }

    // Lowering can reorder items relative to their settled heights.
    fitted.sort_by(compare_z);
}

fn compare_z(a: &PlacedItem, b: &PlacedItem) -> Ordering {
    a.position
        .z
        .partial_cmp(&b.position.z)
        .unwrap_or(Ordering::Equal)
}
