//! # Stowage 3D
//!
//! Greedy 3D container packing with gravity settling.
//!
//! A heterogeneous list of box items is assigned non-overlapping
//! positions and axis-aligned orientations inside a single fixed-size
//! [`Container`], respecting volume and total-weight limits. Items that
//! cannot be placed are reported as unfitted, never as failures. A
//! post-pass ([`settle`]) lowers every placed item onto the highest
//! supporting surface beneath it.
//!
//! ```rust
//! use stowage_d3::{settle, Container, Item, PackConfig, PlacementEngine};
//!
//! let container = Container::new("C1", 100.0, 100.0, 100.0, 1000.0);
//! let items = vec![
//!     Item::new("Small_1", 50.0, 50.0, 50.0, 100.0),
//!     Item::new("Small_2", 50.0, 50.0, 50.0, 100.0),
//! ];
//!
//! let engine = PlacementEngine::new(PackConfig::default().with_bigger_first(true));
//! let mut result = engine.pack(&container, items);
//! settle(&mut result.fitted);
//!
//! assert_eq!(result.fitted_count(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod container;
pub mod gravity;
pub mod item;
pub mod packer;
pub mod placement;
pub mod result;

// Re-exports
pub use container::Container;
pub use gravity::settle;
pub use item::{color_map, Item, ItemType, Rotation};
pub use packer::{try_place, PackConfig, PlacementEngine};
pub use placement::PlacedItem;
pub use result::PackingResult;
pub use stowage_core::{Error, Result};
