//! Frame-style scenarios against the public spatial hash API

use broadphase::spatial::narrow;
use broadphase::{Aabb, CellKey, Point, SpatialConfig, SpatialError, SpatialHash, WorldObjectId};

fn boxed(x0: f32, z0: f32, x1: f32, z1: f32) -> Aabb {
    Aabb::new(Point::new(x0, z0), Point::new(x1, z1))
}

#[test]
fn test_walkthrough_cell_size_ten() {
    let a = WorldObjectId::Npc(1);
    let mut hash = SpatialHash::new(10.0).unwrap();

    hash.insert(a, boxed(0.0, 0.0, 5.0, 5.0));
    assert_eq!(hash.cells_of(a), Some(vec![CellKey::new(0, 0)]));
    assert_eq!(hash.query(&boxed(-5.0, -5.0, 3.0, 3.0)), vec![a]);

    assert!(hash.query_point(Point::new(12.0, 3.0)).is_empty());
    assert_eq!(hash.query_radius(Point::new(2.0, 2.0), 1.0), vec![a]);

    hash.update(a, boxed(15.0, 15.0, 19.0, 19.0));
    assert!(hash.query(&boxed(0.0, 0.0, 5.0, 5.0)).is_empty());
    assert_eq!(hash.cells_of(a), Some(vec![CellKey::new(1, 1)]));
    assert_eq!(hash.debug_info().cell_count, 1);

    hash.remove(a);
    assert!(!hash.has(a));
    assert_eq!(hash.len(), 0);
    assert!(hash.get_all().is_empty());
}

#[test]
fn test_invalid_cell_sizes_fail_construction() {
    for size in [0.0, -5.0] {
        let err = SpatialHash::<WorldObjectId>::new(size).unwrap_err();
        assert!(matches!(err, SpatialError::InvalidCellSize(s) if s == size));
    }
}

#[test]
fn test_npcs_wandering_over_many_frames() {
    let mut hash = SpatialHash::new(8.0).unwrap();
    let npcs: Vec<WorldObjectId> = (0..20).map(WorldObjectId::Npc).collect();

    for frame in 0..50 {
        for (i, &npc) in npcs.iter().enumerate() {
            let x = i as f32 * 3.0 + frame as f32 * 0.7;
            let z = (frame as f32 * 0.3 + i as f32).sin() * 20.0;
            hash.update(npc, Aabb::from_center(Point::new(x, z), 0.5, 0.5));
        }
    }

    assert_eq!(hash.len(), npcs.len());
    for &npc in &npcs {
        let bounds = hash.get_bounds(npc).unwrap();
        assert!(hash.query(&bounds).contains(&npc));
        assert!(hash.query_point(bounds.center()).contains(&npc));
    }
}

#[test]
fn test_trigger_zone_detection() {
    let mut hash = SpatialHash::new(10.0).unwrap();
    let door = WorldObjectId::Trigger(0);
    hash.insert(door, boxed(20.0, 0.0, 24.0, 2.0));
    hash.insert(WorldObjectId::Prop(3), boxed(21.0, 5.0, 23.0, 7.0));

    let player_pos = Point::new(22.0, 1.0);
    hash.update(WorldObjectId::Player, Aabb::from_radius(player_pos, 0.4));

    let inside: Vec<_> = hash
        .query_point(player_pos)
        .into_iter()
        .filter(|id| id.is_trigger())
        .collect();
    assert_eq!(inside, vec![door]);

    // Prop shares the cell but is not under the player
    let touching = narrow::overlapping(&hash, &hash.get_bounds(WorldObjectId::Player).unwrap());
    assert!(!touching.contains(&WorldObjectId::Prop(3)));
    assert!(touching.contains(&door));
}

#[test]
fn test_config_driven_construction() {
    let config = SpatialConfig::from_toml_str("cell_size = 16.0\nexpected_items = 8\n").unwrap();
    let mut hash = SpatialHash::from_config(&config).unwrap();
    hash.insert(WorldObjectId::Prop(0), boxed(0.0, 0.0, 31.0, 1.0));
    assert_eq!(hash.cells_of(WorldObjectId::Prop(0)).map(|c| c.len()), Some(2));
    assert_eq!(hash.debug_info().cell_size, 16.0);
}
