use super::DungeonBuilder;
use crate::types::{Room, TileCoord};

use std::collections::{HashSet, VecDeque};

impl DungeonBuilder {
    /// Guarantees every door connects to the carved interior: doors the
    /// flood-fill from `seed` cannot reach get a corridor carved straight
    /// to them. Carving is unconditional wall removal, so repair cannot
    /// fail; the worst case is a long corridor.
    pub(super) fn repair_paths(&self, room: &mut Room, seed: TileCoord, doors: &[TileCoord]) {
        let reachable = reachable_floor(room, seed);

        for &door in doors {
            if !reachable.contains(&door) {
                carve_manhattan_path(room, seed, door, self.config.min_path_width);
            }
        }
    }
}

/// The set of floor tiles reachable from `seed` via 4-connectivity.
pub(crate) fn reachable_floor(room: &Room, seed: TileCoord) -> HashSet<TileCoord> {
    let mut visited = HashSet::new();
    visited.insert(seed);

    let mut queue = VecDeque::from([seed]);
    while let Some(current) = queue.pop_front() {
        let (x, y) = (current.x as isize, current.y as isize);

        for (dx, dy) in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
            let (next_x, next_y) = (x + dx, y + dy);
            if next_x < 0 || next_y < 0 {
                continue;
            }

            let next = TileCoord::new(next_x as usize, next_y as usize);
            if room.is_floor(next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited
}

/// Carves a corridor from `from` to `to`, at each step moving one tile
/// along whichever axis has the larger remaining distance. Around every
/// step a band `width` tiles thick is opened perpendicular to the travel
/// direction, covering the current tile and the next, so the corridor is
/// walkable by entities wider than one tile.
pub(crate) fn carve_manhattan_path(room: &mut Room, from: TileCoord, to: TileCoord, width: usize) {
    let half_width = (width / 2) as isize;

    let (mut x, mut y) = (from.x as isize, from.y as isize);
    let (target_x, target_y) = (to.x as isize, to.y as isize);

    while x != target_x || y != target_y {
        let remaining_x = target_x - x;
        let remaining_y = target_y - y;

        if remaining_y.abs() >= remaining_x.abs() && remaining_y != 0 {
            let step = remaining_y.signum();
            for offset in -half_width..=half_width {
                room.carve(x + offset, y);
                room.carve(x + offset, y + step);
            }
            y += step;
        } else {
            let step = remaining_x.signum();
            for offset in -half_width..=half_width {
                room.carve(x, y + offset);
                room.carve(x + step, y + offset);
            }
            x += step;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algos::DungeonConfig;

    #[test]
    fn test_reachable_floor_stops_at_walls() {
        let mut room = Room::filled_with_walls(8, 8);
        // two floor pockets separated by a wall
        room.carve(1, 1);
        room.carve(2, 1);
        room.carve(5, 5);

        let reachable = reachable_floor(&room, TileCoord::new(1, 1));

        assert!(reachable.contains(&TileCoord::new(1, 1)));
        assert!(reachable.contains(&TileCoord::new(2, 1)));
        assert!(!reachable.contains(&TileCoord::new(5, 5)));
    }

    #[test]
    fn test_carve_manhattan_path_connects_endpoints() {
        let mut room = Room::filled_with_walls(20, 15);
        let from = TileCoord::new(10, 7);
        let to = TileCoord::new(0, 2);
        room.carve(from.x as isize, from.y as isize);

        carve_manhattan_path(&mut room, from, to, 2);

        let reachable = reachable_floor(&room, from);
        assert!(reachable.contains(&to));
    }

    #[test]
    fn test_carved_corridor_has_minimum_width() {
        let mut room = Room::filled_with_walls(20, 15);
        let from = TileCoord::new(3, 7);
        let to = TileCoord::new(15, 7);

        carve_manhattan_path(&mut room, from, to, 2);

        // A straight horizontal walk opens a band of rows around the line
        for x in from.x..=to.x {
            let open_rows = (0..15)
                .filter(|&y| room.is_floor(TileCoord::new(x, y)))
                .count();
            assert!(
                open_rows >= 2,
                "corridor is only {} tile(s) tall at column {}",
                open_rows,
                x
            );
        }
    }

    #[test]
    fn test_corridor_carving_preserves_existing_floor() {
        let mut room = Room::filled_with_walls(20, 15);
        // scattered floor the corridor will cross or pass by
        for (x, y) in [(4, 4), (5, 4), (10, 7), (12, 2), (1, 13)] {
            room.carve(x, y);
        }
        let before = room.clone();

        carve_manhattan_path(&mut room, TileCoord::new(2, 12), TileCoord::new(16, 3), 2);

        for (y, row) in before.tiles().iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if tile.is_floor() {
                    assert!(
                        room.is_floor(TileCoord::new(x, y)),
                        "corridor carve reverted floor to wall at ({}, {})",
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_length_path_carves_nothing() {
        let mut room = Room::filled_with_walls(10, 10);
        let spot = TileCoord::new(4, 4);

        carve_manhattan_path(&mut room, spot, spot, 2);

        assert_eq!(room.floor_count(), 0);
    }

    // A horizontal hallway that stops short of a door on the west wall:
    // repair must carve a connecting corridor.
    #[test]
    fn test_repair_reaches_a_stranded_door() {
        let config = DungeonConfig::default();
        let builder = DungeonBuilder::new(config).unwrap();

        let mut room = Room::filled_with_walls(config.room_width, config.room_height);

        // door strip on the west wall
        for y in 13..=17 {
            room.carve(0, y);
        }
        let doors = room.doors();
        assert_eq!(doors.len(), 5);

        // horizontal hallway across the middle, well clear of the wall
        for x in 10..30 {
            for y in 14..=16 {
                room.carve(x, y);
            }
        }
        let hall_seed = TileCoord::new(20, 15);

        let before = reachable_floor(&room, hall_seed);
        assert!(doors.iter().all(|door| !before.contains(door)));

        builder.repair_paths(&mut room, hall_seed, &doors);

        let after = reachable_floor(&room, hall_seed);
        for door in doors {
            assert!(after.contains(&door), "door {} still unreachable", door);
        }
    }

    #[test]
    fn test_repair_leaves_connected_doors_untouched() {
        let config = DungeonConfig::default();
        let builder = DungeonBuilder::new(config).unwrap();

        let mut room = Room::filled_with_walls(config.room_width, config.room_height);
        room.carve(0, 15);
        for x in 0..10 {
            room.carve(x, 15);
        }
        let doors = room.doors();
        let before = room.clone();

        builder.repair_paths(&mut room, TileCoord::new(5, 15), &doors);

        assert_eq!(room, before, "an already reachable door triggered carving");
    }

    #[test]
    fn test_repair_always_succeeds_into_a_far_corner() {
        let config = DungeonConfig::default();
        let builder = DungeonBuilder::new(config).unwrap();

        let mut room = Room::filled_with_walls(config.room_width, config.room_height);
        let seed = TileCoord::new(config.room_width - 3, config.room_height - 3);
        room.carve(seed.x as isize, seed.y as isize);

        // a door about as far from the seed as the room allows
        room.carve(0, 1);
        let doors = vec![TileCoord::new(0, 1)];

        builder.repair_paths(&mut room, seed, &doors);

        let reachable = reachable_floor(&room, seed);
        assert!(reachable.contains(&TileCoord::new(0, 1)));
    }
}
