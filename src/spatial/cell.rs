//! Grid cell addressing

use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use crate::core::types::Point;

/// Integer coordinate of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    pub x: i32,
    pub z: i32,
}

impl CellKey {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Cell containing a world position
    #[inline]
    pub fn containing(p: Point, cell_size: f32) -> Self {
        Self {
            x: (p.x / cell_size).floor() as i32,
            z: (p.z / cell_size).floor() as i32,
        }
    }
}

/// Inclusive rectangle of cells covered by a box
///
/// An inverted box produces an empty span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub min: CellKey,
    pub max: CellKey,
}

impl CellSpan {
    pub fn of(bounds: &Aabb, cell_size: f32) -> Self {
        Self {
            min: CellKey::containing(bounds.min, cell_size),
            max: CellKey::containing(bounds.max, cell_size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.z > self.max.z
    }

    /// Number of cells covered. Widened to u64 so huge query boxes cannot overflow.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        let w = (self.max.x as i64 - self.min.x as i64 + 1) as u64;
        let d = (self.max.z as i64 - self.min.z as i64 + 1) as u64;
        w.saturating_mul(d)
    }

    pub fn contains(&self, key: CellKey) -> bool {
        key.x >= self.min.x && key.x <= self.max.x && key.z >= self.min.z && key.z <= self.max.z
    }

    /// Row-major walk over every covered cell
    pub fn iter(&self) -> impl Iterator<Item = CellKey> {
        let (min, max) = (self.min, self.max);
        (min.z..=max.z).flat_map(move |z| (min.x..=max.x).map(move |x| CellKey::new(x, z)))
    }
}
