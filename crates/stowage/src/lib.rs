//! # Stowage
//!
//! 3D container packing engine.
//!
//! This crate bundles the workspace:
//! - **Placement**: greedy corner-based placement of box items into a
//!   single container, with rotation, volume and weight constraints
//! - **Settling**: a deterministic post-pass lowering every placed item
//!   onto the highest supporting surface beneath it
//!
//! ## Quick Start
//!
//! ```rust
//! use stowage::{settle, Container, Item, PackConfig, PlacementEngine};
//!
//! let container = Container::new("C1", 100.0, 100.0, 100.0, 1000.0);
//! let items = vec![Item::new("Small_1", 50.0, 50.0, 50.0, 100.0)];
//!
//! let engine = PlacementEngine::new(PackConfig::default());
//! let mut result = engine.pack(&container, items);
//! settle(&mut result.fitted);
//!
//! println!("{}", result.summary(true));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core types: errors, precision helpers, AABBs.
pub use stowage_core as core;

/// 3D packing: containers, items, placement engine, settling.
pub use stowage_d3 as d3;

// Re-export commonly used types at root level
pub use stowage_core::{Aabb, Error, Result};
pub use stowage_d3::{
    color_map, settle, Container, Item, ItemType, PackConfig, PackingResult, PlacedItem,
    PlacementEngine, Rotation,
};
