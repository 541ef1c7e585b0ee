//! Sparse hash grid for broad-phase queries over moving objects
//!
//! Every tracked item remembers the exact set of cells its bounds span, and
//! every occupied cell remembers which items it holds. The two views are kept
//! in lockstep: an item is in cell `k` iff `k` is in that item's cell set.
//! Cells are dropped the moment they become empty, so memory follows the
//! number of occupied cells rather than the extent of the world.

use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use serde::Serialize;

use super::cell::{CellKey, CellSpan};
use super::geometry::{Aabb, Circle};
use crate::core::config::{validate_cell_size, SpatialConfig};
use crate::core::error::Result;
use crate::core::types::Point;

#[derive(Debug, Clone)]
struct Entry {
    bounds: Aabb,
    cells: AHashSet<CellKey>,
}

/// Cells touched by a single `update`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellChange {
    /// Cells the item was added to
    pub entered: usize,
    /// Cells the item was removed from
    pub left: usize,
}

impl CellChange {
    pub fn is_unchanged(&self) -> bool {
        self.entered == 0 && self.left == 0
    }
}

/// Read-only snapshot for debug overlays and logs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpatialDebugInfo {
    pub item_count: usize,
    pub cell_count: usize,
    pub cell_size: f32,
    pub average_items_per_cell: f32,
}

impl SpatialDebugInfo {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Uniform-grid spatial hash keyed by item handle
///
/// `T` is an identity, not a payload: two equal handles are the same item.
/// Queries return candidates only, except [`SpatialHash::query_point`].
#[derive(Debug, Clone)]
pub struct SpatialHash<T> {
    cell_size: f32,
    entries: AHashMap<T, Entry>,
    cells: AHashMap<CellKey, AHashSet<T>>,
}

impl<T: Copy + Eq + Hash> SpatialHash<T> {
    /// Fails if `cell_size` is not a positive finite number
    pub fn new(cell_size: f32) -> Result<Self> {
        validate_cell_size(cell_size)?;
        tracing::debug!("Created spatial hash with cell size {}", cell_size);
        Ok(Self {
            cell_size,
            entries: AHashMap::new(),
            cells: AHashMap::new(),
        })
    }

    pub fn from_config(config: &SpatialConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            "Created spatial hash with cell size {} (capacity {})",
            config.cell_size,
            config.expected_items
        );
        Ok(Self {
            cell_size: config.cell_size,
            entries: AHashMap::with_capacity(config.expected_items),
            cells: AHashMap::new(),
        })
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of tracked items
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn span(&self, bounds: &Aabb) -> CellSpan {
        CellSpan::of(bounds, self.cell_size)
    }

    /// Start tracking `item`. A tracked item is removed first, never merged.
    pub fn insert(&mut self, item: T, bounds: Aabb) {
        self.remove(item);
        self.insert_untracked(item, bounds);
    }

    fn insert_untracked(&mut self, item: T, bounds: Aabb) -> usize {
        let cells: AHashSet<CellKey> = self.span(&bounds).iter().collect();
        for &key in &cells {
            self.cells.entry(key).or_default().insert(item);
        }
        let entered = cells.len();
        self.entries.insert(item, Entry { bounds, cells });
        entered
    }

    /// Stop tracking `item`. Untracked items are ignored.
    pub fn remove(&mut self, item: T) {
        if let Some(entry) = self.entries.remove(&item) {
            for key in &entry.cells {
                detach(&mut self.cells, key, &item);
            }
        }
    }

    /// Move `item` to `bounds`, touching only the cells whose membership changes
    ///
    /// An untracked item is inserted.
    pub fn update(&mut self, item: T, bounds: Aabb) -> CellChange {
        let new_cells: AHashSet<CellKey> = self.span(&bounds).iter().collect();

        let Some(entry) = self.entries.get_mut(&item) else {
            let entered = self.insert_untracked(item, bounds);
            return CellChange { entered, left: 0 };
        };

        let mut change = CellChange::default();
        for key in entry.cells.difference(&new_cells) {
            detach(&mut self.cells, key, &item);
            change.left += 1;
        }
        for &key in new_cells.difference(&entry.cells) {
            self.cells.entry(key).or_default().insert(item);
            change.entered += 1;
        }

        entry.bounds = bounds;
        entry.cells = new_cells;

        if !change.is_unchanged() {
            tracing::trace!(entered = change.entered, left = change.left, "spatial update");
        }
        change
    }

    /// Every item sharing a cell with `bounds`, without duplicates
    ///
    /// May include items that do not overlap `bounds`; never misses one that does.
    pub fn query(&self, bounds: &Aabb) -> Vec<T> {
        let span = self.span(bounds);
        let mut seen = AHashSet::new();
        let mut found = Vec::new();
        let mut collect = |items: &AHashSet<T>| {
            for &item in items {
                if seen.insert(item) {
                    found.push(item);
                }
            }
        };

        // Large query boxes walk the occupied cells instead of the span
        if span.len() > self.cells.len() as u64 {
            for (key, items) in &self.cells {
                if span.contains(*key) {
                    collect(items);
                }
            }
        } else {
            for key in span.iter() {
                if let Some(items) = self.cells.get(&key) {
                    collect(items);
                }
            }
        }

        found
    }

    /// Broad-phase candidates within `radius` of `pos` (square box test)
    pub fn query_radius(&self, pos: Point, radius: f32) -> Vec<T> {
        self.query(&Aabb::from_radius(pos, radius))
    }

    pub fn query_circle(&self, circle: &Circle) -> Vec<T> {
        self.query(&circle.to_aabb())
    }

    /// Items whose bounds contain `pos`. Exact, unlike the other queries.
    pub fn query_point(&self, pos: Point) -> Vec<T> {
        let key = CellKey::containing(pos, self.cell_size);
        let Some(items) = self.cells.get(&key) else {
            return Vec::new();
        };
        items
            .iter()
            .copied()
            .filter(|item| {
                self.entries
                    .get(item)
                    .is_some_and(|entry| entry.bounds.contains_point(pos))
            })
            .collect()
    }

    pub fn get_bounds(&self, item: T) -> Option<Aabb> {
        self.entries.get(&item).map(|entry| entry.bounds)
    }

    pub fn has(&self, item: T) -> bool {
        self.entries.contains_key(&item)
    }

    /// All tracked items in no particular order
    pub fn get_all(&self) -> Vec<T> {
        self.entries.keys().copied().collect()
    }

    /// Cells currently holding `item`, sorted
    pub fn cells_of(&self, item: T) -> Option<Vec<CellKey>> {
        self.entries.get(&item).map(|entry| {
            let mut cells: Vec<CellKey> = entry.cells.iter().copied().collect();
            cells.sort_unstable();
            cells
        })
    }

    pub fn clear(&mut self) {
        tracing::debug!(
            "Cleared spatial hash ({} items, {} cells)",
            self.entries.len(),
            self.cells.len()
        );
        self.entries.clear();
        self.cells.clear();
    }

    pub fn debug_info(&self) -> SpatialDebugInfo {
        let cell_count = self.cells.len();
        let memberships: usize = self.cells.values().map(|items| items.len()).sum();
        let average_items_per_cell = if cell_count == 0 {
            0.0
        } else {
            memberships as f32 / cell_count as f32
        };
        SpatialDebugInfo {
            item_count: self.entries.len(),
            cell_count,
            cell_size: self.cell_size,
            average_items_per_cell,
        }
    }
}

fn detach<T: Eq + Hash>(cells: &mut AHashMap<CellKey, AHashSet<T>>, key: &CellKey, item: &T) {
    if let Some(items) = cells.get_mut(key) {
        items.remove(item);
        if items.is_empty() {
            cells.remove(key);
        }
    }
}
