//! Property tests for the membership invariants

use broadphase::{Aabb, Point, SpatialHash};
use proptest::prelude::*;

fn aabb_strategy() -> impl Strategy<Value = Aabb> {
    (-200.0f32..200.0, -200.0f32..200.0, 0.0f32..40.0, 0.0f32..40.0)
        .prop_map(|(x, z, w, d)| Aabb::new(Point::new(x, z), Point::new(x + w, z + d)))
}

proptest! {
    #[test]
    fn query_never_misses_overlapping_items(
        items in prop::collection::vec(aabb_strategy(), 1..40),
        query in aabb_strategy(),
        cell_size in 1.0f32..50.0,
    ) {
        let mut hash = SpatialHash::new(cell_size).unwrap();
        for (i, bounds) in items.iter().enumerate() {
            hash.insert(i, *bounds);
        }
        let found = hash.query(&query);
        for (i, bounds) in items.iter().enumerate() {
            if bounds.intersects(&query) {
                prop_assert!(found.contains(&i), "item {} overlaps but was not returned", i);
            }
        }
        let mut sorted = found.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), found.len());
    }

    #[test]
    fn update_matches_fresh_insert(
        start in aabb_strategy(),
        moves in prop::collection::vec(aabb_strategy(), 1..10),
        cell_size in 1.0f32..50.0,
    ) {
        let mut moved = SpatialHash::new(cell_size).unwrap();
        moved.insert(0u32, start);
        for bounds in &moves {
            let before = moved.cells_of(0).unwrap();
            let change = moved.update(0, *bounds);

            let mut fresh = SpatialHash::new(cell_size).unwrap();
            fresh.insert(0u32, *bounds);
            let after = fresh.cells_of(0).unwrap();

            prop_assert_eq!(moved.cells_of(0).unwrap(), after.clone());
            prop_assert_eq!(moved.debug_info(), fresh.debug_info());

            let left = before.iter().filter(|k| !after.contains(k)).count();
            let entered = after.iter().filter(|k| !before.contains(k)).count();
            prop_assert_eq!(change.left, left);
            prop_assert_eq!(change.entered, entered);
        }
    }

    #[test]
    fn query_point_is_exact(
        items in prop::collection::vec(aabb_strategy(), 1..40),
        x in -200.0f32..240.0,
        z in -200.0f32..240.0,
    ) {
        let mut hash = SpatialHash::new(10.0).unwrap();
        for (i, bounds) in items.iter().enumerate() {
            hash.insert(i, *bounds);
        }
        let p = Point::new(x, z);
        let found = hash.query_point(p);
        for (i, bounds) in items.iter().enumerate() {
            prop_assert_eq!(found.contains(&i), bounds.contains_point(p));
        }
    }

    #[test]
    fn removing_everything_leaves_no_cells(
        items in prop::collection::vec(aabb_strategy(), 1..40),
    ) {
        let mut hash = SpatialHash::new(7.5).unwrap();
        for (i, bounds) in items.iter().enumerate() {
            hash.insert(i, *bounds);
        }
        for i in 0..items.len() {
            hash.remove(i);
            prop_assert!(!hash.has(i));
            prop_assert!(!hash.query(&items[i]).contains(&i));
        }
        prop_assert_eq!(hash.debug_info().cell_count, 0);
        prop_assert!(hash.is_empty());
    }
}
