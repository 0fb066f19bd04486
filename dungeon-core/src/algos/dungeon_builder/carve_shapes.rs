use super::DungeonBuilder;
use crate::types::{Room, RoomShape, TileCoord};

use rand::Rng;

impl DungeonBuilder {
    /// Carves the room's interior outline and returns its centroid, used
    /// as the flood-fill seed by path repair. Carving only ever turns
    /// walls into floor, so it composes safely with the door openings
    /// already present.
    pub(super) fn carve_shape(
        &self,
        room: &mut Room,
        shape: RoomShape,
        rng: &mut impl Rng,
    ) -> TileCoord {
        match shape {
            RoomShape::Square => self.carve_square(room),
            RoomShape::Rectangle => self.carve_rectangle(room, rng),
            RoomShape::LShape => self.carve_l_shape(room),
            RoomShape::Hallway => self.carve_hallway(room, rng),
        }
    }

    fn carve_square(&self, room: &mut Room) -> TileCoord {
        let side = (self.config.room_width - 4).min(self.config.room_height - 4);
        let origin_x = (self.config.room_width - side) / 2;
        let origin_y = (self.config.room_height - side) / 2;

        Self::carve_rect(room, origin_x, origin_y, side, side);

        TileCoord::new(origin_x + side / 2, origin_y + side / 2)
    }

    fn carve_rectangle(&self, room: &mut Room, rng: &mut impl Rng) -> TileCoord {
        let rect_width = rng.random_range(4..=self.config.room_width - 2);
        let rect_height = rng.random_range(4..=self.config.room_height - 2);
        let origin_x = (self.config.room_width - rect_width) / 2;
        let origin_y = (self.config.room_height - rect_height) / 2;

        Self::carve_rect(room, origin_x, origin_y, rect_width, rect_height);

        TileCoord::new(origin_x + rect_width / 2, origin_y + rect_height / 2)
    }

    // Two overlapping legs pivoting on the room center: a short vertical
    // leg ending at the pivot and a taller horizontal leg starting there.
    fn carve_l_shape(&self, room: &mut Room) -> TileCoord {
        let leg_width = self.config.room_width / 3;
        let leg_height = self.config.room_height / 3;
        let pivot_x = self.config.room_width / 2;
        let pivot_y = self.config.room_height / 2;

        Self::carve_rect(
            room,
            pivot_x - leg_width,
            pivot_y - leg_height,
            leg_width,
            leg_height,
        );
        Self::carve_rect(
            room,
            pivot_x,
            pivot_y - leg_height,
            leg_width,
            2 * leg_height,
        );

        TileCoord::new(pivot_x, pivot_y)
    }

    fn carve_hallway(&self, room: &mut Room, rng: &mut impl Rng) -> TileCoord {
        let horizontal = rng.random_bool(0.5);
        let span = if horizontal {
            self.config.room_width
        } else {
            self.config.room_height
        };

        // Capped at span - 6 so the corridor never reaches the boundary
        // and mints door tiles the neighbour knows nothing about.
        let length = rng.random_range(6..=span - 6);
        let start = span / 2 - length / 2;
        let half_width = (self.config.min_path_width / 2) as isize;

        if horizontal {
            let mid_y = (self.config.room_height / 2) as isize;
            for x in start..(start + length) {
                for y in (mid_y - half_width)..=(mid_y + half_width) {
                    room.carve(x as isize, y);
                }
            }

            TileCoord::new(start + length / 2, self.config.room_height / 2)
        } else {
            let mid_x = (self.config.room_width / 2) as isize;
            for y in start..(start + length) {
                for x in (mid_x - half_width)..=(mid_x + half_width) {
                    room.carve(x, y as isize);
                }
            }

            TileCoord::new(self.config.room_width / 2, start + length / 2)
        }
    }

    fn carve_rect(room: &mut Room, origin_x: usize, origin_y: usize, width: usize, height: usize) {
        for y in origin_y..(origin_y + height) {
            for x in origin_x..(origin_x + width) {
                room.carve(x as isize, y as isize);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algos::DungeonConfig;
    use crate::types::Tile;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn carved_with(shape: RoomShape, seed: u64) -> (Room, TileCoord, DungeonConfig) {
        let config = DungeonConfig::default();
        let builder = DungeonBuilder::new(config).unwrap();

        let mut room = Room::filled_with_walls(config.room_width, config.room_height);
        let centroid = builder.carve_shape(&mut room, shape, &mut SmallRng::seed_from_u64(seed));

        (room, centroid, config)
    }

    #[test]
    fn test_centroid_is_always_carved() {
        for shape in [
            RoomShape::Square,
            RoomShape::Rectangle,
            RoomShape::LShape,
            RoomShape::Hallway,
        ] {
            for seed in 0..20 {
                let (room, centroid, _) = carved_with(shape, seed);
                assert!(
                    room.is_floor(centroid),
                    "{:?} centroid {} landed on a wall",
                    shape,
                    centroid
                );
            }
        }
    }

    #[test]
    fn test_shapes_never_touch_the_boundary() {
        for shape in [
            RoomShape::Square,
            RoomShape::Rectangle,
            RoomShape::LShape,
            RoomShape::Hallway,
        ] {
            for seed in 0..20 {
                let (room, _, _) = carved_with(shape, seed);
                assert!(
                    room.doors().is_empty(),
                    "{:?} with seed {} carved a boundary tile",
                    shape,
                    seed
                );
            }
        }
    }

    #[test]
    fn test_carving_is_monotonic_over_existing_floor() {
        let config = DungeonConfig::default();
        let builder = DungeonBuilder::new(config).unwrap();

        let mut room = Room::filled_with_walls(config.room_width, config.room_height);
        // pre-carved door strip on the west wall
        for y in 13..=17 {
            room.carve(0, y);
        }
        let before = room.clone();

        builder.carve_shape(
            &mut room,
            RoomShape::Rectangle,
            &mut SmallRng::seed_from_u64(5),
        );

        for (y, row) in before.tiles().iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if tile.is_floor() {
                    assert_eq!(
                        room.tiles()[y][x],
                        Tile::Floor,
                        "carving reverted floor to wall at ({}, {})",
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn test_square_is_centered() {
        let (room, centroid, config) = carved_with(RoomShape::Square, 0);

        let side = (config.room_width - 4).min(config.room_height - 4);
        assert_eq!(room.floor_count(), side * side);
        assert_eq!(centroid.x, (config.room_width - side) / 2 + side / 2);
        assert_eq!(centroid.y, (config.room_height - side) / 2 + side / 2);
    }

    #[test]
    fn test_l_shape_legs_are_connected() {
        let (room, centroid, config) = carved_with(RoomShape::LShape, 0);

        let leg_width = config.room_width / 3;
        let leg_height = config.room_height / 3;
        // vertical leg plus horizontal leg, no overlap between them
        assert_eq!(
            room.floor_count(),
            leg_width * leg_height + leg_width * 2 * leg_height
        );

        // the legs meet around the pivot
        assert!(room.is_floor(centroid));
        assert!(room.is_floor(TileCoord::new(centroid.x - 1, centroid.y - 1)));
    }

    #[test]
    fn test_hallway_stays_within_its_band() {
        for seed in 0..30 {
            let (room, _, config) = carved_with(RoomShape::Hallway, seed);

            let carved_rows: Vec<usize> = (0..config.room_height)
                .filter(|&y| (0..config.room_width).any(|x| room.is_floor(TileCoord::new(x, y))))
                .collect();
            let carved_cols: Vec<usize> = (0..config.room_width)
                .filter(|&x| (0..config.room_height).any(|y| room.is_floor(TileCoord::new(x, y))))
                .collect();

            let band = config.min_path_width + 1;
            assert!(
                carved_rows.len() <= band || carved_cols.len() <= band,
                "seed {} carved a corridor wider than its band",
                seed
            );
        }
    }
}
