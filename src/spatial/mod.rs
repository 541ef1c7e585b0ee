//! Spatial partitioning and the geometry kernel it filters with

pub mod cell;
pub mod geometry;
pub mod narrow;
pub mod sparse_hash;

pub use cell::{CellKey, CellSpan};
pub use geometry::{Aabb, Circle};
pub use sparse_hash::{CellChange, SpatialDebugInfo, SpatialHash};
