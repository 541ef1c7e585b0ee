//! Narrow-phase filters over broad-phase candidates
//!
//! `SpatialHash::query` and `query_radius` stay approximate. These helpers
//! run the exact geometry test against each candidate's stored bounds.

use std::hash::Hash;

use super::geometry::{Aabb, Circle};
use super::sparse_hash::SpatialHash;
use crate::core::types::Point;

/// Items whose bounds truly overlap `bounds`
pub fn overlapping<T: Copy + Eq + Hash>(hash: &SpatialHash<T>, bounds: &Aabb) -> Vec<T> {
    hash.query(bounds)
        .into_iter()
        .filter(|&item| hash.get_bounds(item).is_some_and(|b| b.intersects(bounds)))
        .collect()
}

/// Items whose bounds touch `circle`
pub fn within_circle<T: Copy + Eq + Hash>(hash: &SpatialHash<T>, circle: &Circle) -> Vec<T> {
    hash.query_circle(circle)
        .into_iter()
        .filter(|&item| hash.get_bounds(item).is_some_and(|b| b.intersects_circle(circle)))
        .collect()
}

/// Closest item whose bounds touch the circle around `pos`, measured to the bounds center
pub fn nearest<T: Copy + Eq + Hash>(hash: &SpatialHash<T>, pos: Point, radius: f32) -> Option<T> {
    let circle = Circle::new(pos, radius);
    within_circle(hash, &circle)
        .into_iter()
        .filter_map(|item| {
            hash.get_bounds(item)
                .map(|b| (item, b.center().distance_squared(&pos)))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(item, _)| item)
}
