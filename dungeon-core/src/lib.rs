mod algos;
mod constants;
mod types;

use anyhow::Result;
use rand::{SeedableRng, rngs::SmallRng};
use tracing::{Level, span};

pub use algos::DungeonConfig;
pub use constants::TILE_SIZE;
pub use types::{
    Direction, Dungeon, EnemyArchetype, EnemySpawn, ItemKind, ItemSpawn, Room, RoomCoord,
    RoomGraph, Tile, TileCoord,
};

/// Generates a fresh dungeon from the thread-local random source. Every
/// call rebuilds the grid wholesale; the result is always fully connected
/// and navigable from any room interior to every door.
pub fn generate_dungeon(config: &DungeonConfig) -> Result<Dungeon> {
    let span = span!(Level::DEBUG, "generate_dungeon");
    let _guard = span.enter();

    let builder = algos::DungeonBuilder::new(*config)?;

    Ok(builder.build(&mut rand::rng()))
}

/// Same as [generate_dungeon], but fully reproducible from `seed`.
pub fn generate_dungeon_from_seed(config: &DungeonConfig, seed: u64) -> Result<Dungeon> {
    let span = span!(Level::DEBUG, "generate_dungeon_from_seed");
    let _guard = span.enter();

    let builder = algos::DungeonBuilder::new(*config)?;
    let mut rng = SmallRng::seed_from_u64(seed);

    Ok(builder.build(&mut rng))
}
