//! Broadphase - incremental 2D spatial hash for world object queries
//!
//! Objects are tracked by handle with an axis-aligned footprint on the x/z
//! plane. Per frame, callers update moved objects and issue box, radius or
//! point queries; box and radius queries return candidates that callers
//! narrow with the predicates in [`spatial::geometry`].

pub mod core;
pub mod spatial;
pub mod world;

pub use crate::core::{Point, Result, SpatialConfig, SpatialError};
pub use crate::spatial::{Aabb, CellChange, CellKey, Circle, SpatialDebugInfo, SpatialHash};
pub use crate::world::WorldObjectId;
