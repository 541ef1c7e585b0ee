//! Headless Spatial Demo
//!
//! Wanders a crowd of NPCs around a player for a number of frames, feeding
//! every move through the spatial hash, and reports what perception and
//! trigger queries saw. Prints the final grid diagnostics as JSON.

use broadphase::spatial::narrow;
use broadphase::{Aabb, Circle, Point, SpatialConfig, SpatialHash, WorldObjectId};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

/// Spatial Demo - exercise the spatial hash with a moving crowd
#[derive(Parser, Debug)]
#[command(name = "spatial_demo")]
#[command(about = "Simulate wandering NPCs and report spatial query statistics")]
struct Args {
    /// Optional TOML file with spatial settings
    #[arg(long)]
    config: Option<String>,

    /// Override the configured cell size
    #[arg(long)]
    cell_size: Option<f32>,

    /// Number of wandering NPCs
    #[arg(long, default_value_t = 500)]
    npcs: u32,

    /// Number of trigger zones scattered over the map
    #[arg(long, default_value_t = 20)]
    triggers: u32,

    /// Frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Side length of the square world
    #[arg(long, default_value_t = 400.0)]
    world_size: f32,

    /// NPC perception radius
    #[arg(long, default_value_t = 15.0)]
    perception: f32,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,
}

const NPC_HALF_EXTENT: f32 = 0.5;
const MAX_STEP: f32 = 1.2;

fn main() -> broadphase::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("broadphase=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SpatialConfig::load(path)?,
        None => SpatialConfig::default(),
    };
    if let Some(cell_size) = args.cell_size {
        config.cell_size = cell_size;
    }
    config.expected_items = (args.npcs + args.triggers + 1) as usize;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut hash = SpatialHash::from_config(&config)?;

    tracing::info!(
        "Starting spatial demo: {} npcs, {} triggers, {} frames, seed {}",
        args.npcs,
        args.triggers,
        args.frames,
        seed
    );

    let world = args.world_size;
    for i in 0..args.triggers {
        let center = Point::new(rng.gen_range(0.0..world), rng.gen_range(0.0..world));
        let half = rng.gen_range(2.0..8.0);
        hash.insert(WorldObjectId::Trigger(i), Aabb::from_center(center, half, half));
    }

    let mut positions: Vec<Point> = (0..args.npcs)
        .map(|_| Point::new(rng.gen_range(0.0..world), rng.gen_range(0.0..world)))
        .collect();
    let mut player = Point::new(world * 0.5, world * 0.5);

    let mut cell_changes = 0usize;
    let mut sightings = 0usize;
    let mut trigger_hits = 0usize;

    for frame in 0..args.frames {
        for (i, pos) in positions.iter_mut().enumerate() {
            let step = Point::new(
                rng.gen_range(-MAX_STEP..MAX_STEP),
                rng.gen_range(-MAX_STEP..MAX_STEP),
            );
            *pos = wrap_to_world(*pos + step, world);
            let change = hash.update(
                WorldObjectId::Npc(i as u32),
                Aabb::from_center(*pos, NPC_HALF_EXTENT, NPC_HALF_EXTENT),
            );
            cell_changes += change.entered + change.left;
        }

        player = wrap_to_world(player + Point::new(0.4, 0.25), world);
        hash.update(
            WorldObjectId::Player,
            Aabb::from_center(player, NPC_HALF_EXTENT, NPC_HALF_EXTENT),
        );

        let seen_by = narrow::within_circle(&hash, &Circle::new(player, args.perception))
            .into_iter()
            .filter(|id| matches!(id, WorldObjectId::Npc(_)))
            .count();
        sightings += seen_by;

        if let Some(trigger) = hash
            .query_point(player)
            .into_iter()
            .find(WorldObjectId::is_trigger)
        {
            trigger_hits += 1;
            tracing::debug!("Frame {}: player inside {:?}", frame, trigger);
        }
    }

    let info = hash.debug_info();
    tracing::info!(
        "Finished: {} cell changes, {} npc sightings, {} trigger frames",
        cell_changes,
        sightings,
        trigger_hits
    );
    println!("{}", info.to_json()?);

    Ok(())
}

fn wrap_to_world(p: Point, world: f32) -> Point {
    Point::new(p.x.rem_euclid(world), p.z.rem_euclid(world))
}
