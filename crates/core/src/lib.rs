//! # Stowage Core
//!
//! Shared types for the stowage container packing engine: error types,
//! decimal-precision helpers, and axis-aligned bounding boxes.
//!
//! The packing algorithms themselves live in the `stowage-d3` crate.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod aabb;
pub mod error;
pub mod precision;

// Re-exports
pub use aabb::Aabb;
pub use error::{Error, Result};
pub use precision::round_to;
