use super::DungeonBuilder;
use crate::constants::{
    MAX_ENEMIES_PER_ROOM, MAX_ITEM_SPAWN_ATTEMPTS, MAX_SPAWN_ATTEMPTS, PLAYER_SPAWN_RADIUS,
    TILE_SIZE,
};
use crate::types::{EnemyArchetype, EnemySpawn, ItemKind, ItemSpawn, Room, TileCoord};

use rand::Rng;

impl DungeonBuilder {
    /// Populates one room's spawn list with one to three enemies of
    /// random archetypes. The player begins at the center of the start
    /// room, so spawns there keep their distance from it.
    pub(super) fn spawn_enemies(
        &self,
        room: &Room,
        is_start_room: bool,
        rng: &mut impl Rng,
    ) -> Vec<EnemySpawn> {
        let enemy_count = rng.random_range(1..=MAX_ENEMIES_PER_ROOM);

        let mut spawns = Vec::with_capacity(enemy_count as usize);
        for _ in 0..enemy_count {
            let archetype = EnemyArchetype::pick(rng);
            if let Some(spawn) = self.place_enemy(room, archetype, is_start_room, rng) {
                spawns.push(spawn);
            }
        }

        spawns
    }

    fn place_enemy(
        &self,
        room: &Room,
        archetype: EnemyArchetype,
        is_start_room: bool,
        rng: &mut impl Rng,
    ) -> Option<EnemySpawn> {
        let center_x = self.config.room_width as f32 * TILE_SIZE / 2.0;
        let center_y = self.config.room_height as f32 * TILE_SIZE / 2.0;

        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let tile = TileCoord::new(
                rng.random_range(0..self.config.room_width),
                rng.random_range(0..self.config.room_height),
            );
            if !room.is_floor(tile) {
                continue;
            }

            let (x, y) = tile.to_pixels();
            if is_start_room {
                let player_distance = ((x - center_x).powi(2) + (y - center_y).powi(2)).sqrt();
                if player_distance < PLAYER_SPAWN_RADIUS {
                    continue;
                }
            }

            return Some(EnemySpawn { x, y, archetype });
        }

        // Attempt budget exhausted. Basic enemies fall back to the room
        // center; the other archetypes skip placement.
        if archetype == EnemyArchetype::Basic {
            Some(EnemySpawn {
                x: center_x,
                y: center_y,
                archetype,
            })
        } else {
            None
        }
    }

    /// Places at most one power-up on an open floor tile. Items get a
    /// larger attempt budget than enemies but no fallback; a room that
    /// cannot fit one simply goes without.
    pub(super) fn spawn_items(
        &self,
        room: &Room,
        is_start_room: bool,
        rng: &mut impl Rng,
    ) -> Vec<ItemSpawn> {
        let center_x = self.config.room_width as f32 * TILE_SIZE / 2.0;
        let center_y = self.config.room_height as f32 * TILE_SIZE / 2.0;

        for _ in 0..MAX_ITEM_SPAWN_ATTEMPTS {
            let tile = TileCoord::new(
                rng.random_range(0..self.config.room_width),
                rng.random_range(0..self.config.room_height),
            );
            if !room.is_floor(tile) {
                continue;
            }

            let (x, y) = tile.to_pixels();
            if is_start_room {
                let player_distance = ((x - center_x).powi(2) + (y - center_y).powi(2)).sqrt();
                if player_distance < PLAYER_SPAWN_RADIUS {
                    continue;
                }
            }

            return vec![ItemSpawn {
                x,
                y,
                kind: ItemKind::SpreadShot,
                collected: false,
            }];
        }

        Vec::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algos::DungeonConfig;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn open_room(config: &DungeonConfig) -> Room {
        let mut room = Room::filled_with_walls(config.room_width, config.room_height);
        for y in 1..(config.room_height - 1) {
            for x in 1..(config.room_width - 1) {
                room.carve(x as isize, y as isize);
            }
        }

        room
    }

    #[test]
    fn test_spawns_land_on_floor_tiles() {
        let config = DungeonConfig::default();
        let builder = DungeonBuilder::new(config).unwrap();
        let room = open_room(&config);

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            for spawn in builder.spawn_enemies(&room, false, &mut rng) {
                assert!(
                    !room.is_wall_at_pixel(spawn.x, spawn.y),
                    "enemy spawned inside a wall at ({}, {})",
                    spawn.x,
                    spawn.y
                );
            }
        }
    }

    #[test]
    fn test_room_holds_one_to_three_enemies() {
        let config = DungeonConfig::default();
        let builder = DungeonBuilder::new(config).unwrap();
        let room = open_room(&config);

        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let spawns = builder.spawn_enemies(&room, false, &mut rng);
            assert!((1..=3).contains(&spawns.len()));
        }
    }

    #[test]
    fn test_start_room_spawns_keep_clear_of_the_player() {
        let config = DungeonConfig::default();
        let builder = DungeonBuilder::new(config).unwrap();
        let room = open_room(&config);

        let center_x = config.room_width as f32 * TILE_SIZE / 2.0;
        let center_y = config.room_height as f32 * TILE_SIZE / 2.0;

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            for spawn in builder.spawn_enemies(&room, true, &mut rng) {
                let distance =
                    ((spawn.x - center_x).powi(2) + (spawn.y - center_y).powi(2)).sqrt();
                assert!(
                    distance >= PLAYER_SPAWN_RADIUS,
                    "enemy spawned {}px from the player start",
                    distance
                );
            }
        }
    }

    #[test]
    fn test_items_land_on_floor_tiles() {
        let config = DungeonConfig::default();
        let builder = DungeonBuilder::new(config).unwrap();
        let room = open_room(&config);

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let items = builder.spawn_items(&room, false, &mut rng);

            assert_eq!(items.len(), 1, "an open room should always fit an item");
            let item = items[0];
            assert!(
                !room.is_wall_at_pixel(item.x, item.y),
                "item spawned inside a wall at ({}, {})",
                item.x,
                item.y
            );
            assert!(!item.collected);
        }
    }

    #[test]
    fn test_start_room_items_keep_clear_of_the_player() {
        let config = DungeonConfig::default();
        let builder = DungeonBuilder::new(config).unwrap();
        let room = open_room(&config);

        let center_x = config.room_width as f32 * TILE_SIZE / 2.0;
        let center_y = config.room_height as f32 * TILE_SIZE / 2.0;

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            for item in builder.spawn_items(&room, true, &mut rng) {
                let distance = ((item.x - center_x).powi(2) + (item.y - center_y).powi(2)).sqrt();
                assert!(
                    distance >= PLAYER_SPAWN_RADIUS,
                    "item spawned {}px from the player start",
                    distance
                );
            }
        }
    }

    #[test]
    fn test_sealed_room_gets_no_items() {
        let config = DungeonConfig::default();
        let builder = DungeonBuilder::new(config).unwrap();
        let sealed = Room::filled_with_walls(config.room_width, config.room_height);

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            assert!(
                builder.spawn_items(&sealed, false, &mut rng).is_empty(),
                "items have no placement fallback"
            );
        }
    }

    #[test]
    fn test_sealed_room_only_yields_center_fallbacks() {
        let config = DungeonConfig::default();
        let builder = DungeonBuilder::new(config).unwrap();
        let sealed = Room::filled_with_walls(config.room_width, config.room_height);

        let center_x = config.room_width as f32 * TILE_SIZE / 2.0;
        let center_y = config.room_height as f32 * TILE_SIZE / 2.0;

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            for spawn in builder.spawn_enemies(&sealed, false, &mut rng) {
                assert_eq!(spawn.archetype, EnemyArchetype::Basic);
                assert_eq!((spawn.x, spawn.y), (center_x, center_y));
            }
        }
    }
}
