use super::DungeonBuilder;
use crate::types::{Direction, Room, RoomCoord, RoomGraph};

impl DungeonBuilder {
    /// Opens a door through each wall shared with a graph neighbour. The
    /// opening is centered on the wall and spans `door_width` tiles,
    /// clipped to the room bounds.
    pub(super) fn carve_doors(&self, room: &mut Room, coord: RoomCoord, graph: &RoomGraph) {
        let door_x = (self.config.room_width / 2) as isize;
        let door_y = (self.config.room_height / 2) as isize;
        let half_span = (self.config.door_width / 2) as isize;

        let last_col = (self.config.room_width - 1) as isize;
        let last_row = (self.config.room_height - 1) as isize;

        for neighbour in graph.neighbours(coord) {
            let Some(direction) = coord.direction_to(&neighbour) else {
                continue;
            };

            match direction {
                Direction::West => {
                    for dy in (door_y - half_span)..=(door_y + half_span) {
                        room.carve(0, dy);
                    }
                }
                Direction::East => {
                    for dy in (door_y - half_span)..=(door_y + half_span) {
                        room.carve(last_col, dy);
                    }
                }
                Direction::North => {
                    for dx in (door_x - half_span)..=(door_x + half_span) {
                        room.carve(dx, 0);
                    }
                }
                Direction::South => {
                    for dx in (door_x - half_span)..=(door_x + half_span) {
                        room.carve(dx, last_row);
                    }
                }
            }
        }
    }
}
