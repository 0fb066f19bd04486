use crate::types::{Dungeon, EnemySpawn, ItemSpawn, Room, RoomCoord, RoomGraph, RoomShape};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use rayon::prelude::*;
use tracing::event;

mod builder_config;
mod carve_doors;
mod carve_shapes;
mod connect_rooms;
mod repair_paths;
mod spawn_entities;

pub use builder_config::DungeonConfig;

pub(crate) struct DungeonBuilder {
    pub config: DungeonConfig,
}

impl DungeonBuilder {
    pub fn new(config: DungeonConfig) -> anyhow::Result<Self> {
        config.validate()?;

        Ok(DungeonBuilder { config })
    }

    pub fn build(&self, rng: &mut impl Rng) -> Dungeon {
        let build_start = std::time::Instant::now();

        let graph = self.generate_room_graph(rng);

        let graph_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Built room connectivity in {:.2}ms",
            graph_time.duration_since(build_start).as_millis()
        );

        // Once the graph is fixed, rooms are carved independently. Each
        // room draws its own seed from the master source so the carve
        // phase can run in parallel without sharing the generator.
        let carve_seeds = (0..graph.node_count())
            .map(|_| rng.random::<u64>())
            .collect::<Vec<_>>();

        let carved = carve_seeds
            .into_par_iter()
            .enumerate()
            .map(|(index, seed)| {
                let mut room_rng = SmallRng::seed_from_u64(seed);
                self.carve_room(graph.coord_of(index), &graph, &mut room_rng)
            })
            .collect::<Vec<_>>();

        let mut rooms = Vec::with_capacity(self.config.rooms_y);
        let mut enemies_per_room = Vec::with_capacity(self.config.rooms_y);
        let mut items_per_room = Vec::with_capacity(self.config.rooms_y);

        let mut carved_iter = carved.into_iter();
        for _ in 0..self.config.rooms_y {
            let mut room_row = Vec::with_capacity(self.config.rooms_x);
            let mut enemy_row = Vec::with_capacity(self.config.rooms_x);
            let mut item_row = Vec::with_capacity(self.config.rooms_x);

            for (room, enemies, items) in carved_iter.by_ref().take(self.config.rooms_x) {
                room_row.push(room);
                enemy_row.push(enemies);
                item_row.push(items);
            }

            rooms.push(room_row);
            enemies_per_room.push(enemy_row);
            items_per_room.push(item_row);
        }

        let dungeon = Dungeon::new(rooms, enemies_per_room, items_per_room);

        let carve_time = std::time::Instant::now();
        let door_tiles = dungeon
            .rooms()
            .iter()
            .flatten()
            .fold(0_usize, |acc, room| acc + room.doors().len());
        event!(
            tracing::Level::DEBUG,
            "Carved {}x{} rooms with {} door tiles in {:.2}ms",
            self.config.rooms_x,
            self.config.rooms_y,
            door_tiles,
            carve_time.duration_since(graph_time).as_millis()
        );

        dungeon
    }

    fn carve_room(
        &self,
        coord: RoomCoord,
        graph: &RoomGraph,
        rng: &mut impl Rng,
    ) -> (Room, Vec<EnemySpawn>, Vec<ItemSpawn>) {
        let mut room = Room::filled_with_walls(self.config.room_width, self.config.room_height);

        self.carve_doors(&mut room, coord, graph);

        // The door set is fixed before the shape goes in; boundary tiles
        // opened later would connect to nothing on the neighbouring side.
        let doors = room.doors();

        let shape = RoomShape::pick(rng);
        let shape_seed = self.carve_shape(&mut room, shape, rng);

        self.repair_paths(&mut room, shape_seed, &doors);

        let start = RoomCoord::new(self.config.rooms_x / 2, self.config.rooms_y / 2);
        let enemies = self.spawn_enemies(&room, coord == start, rng);
        let items = self.spawn_items(&room, coord == start, rng);

        (room, enemies, items)
    }
}
