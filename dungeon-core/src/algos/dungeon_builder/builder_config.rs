use crate::constants::{
    DEFAULT_DOOR_WIDTH, DEFAULT_MIN_PATH_WIDTH, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH,
    DEFAULT_ROOMS_X, DEFAULT_ROOMS_Y, MIN_ROOM_DIMENSION,
};

use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DungeonConfig {
    // Number of rooms along each axis of the dungeon grid.
    pub rooms_x: usize,
    pub rooms_y: usize,
    // Tile dimensions shared by every room.
    pub room_width: usize,
    pub room_height: usize,
    // Tile span of a door opening carved into a shared wall.
    pub door_width: usize,
    // Minimum walkable width of carved corridors.
    pub min_path_width: usize,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        DungeonConfig {
            rooms_x: DEFAULT_ROOMS_X,
            rooms_y: DEFAULT_ROOMS_Y,
            room_width: DEFAULT_ROOM_WIDTH,
            room_height: DEFAULT_ROOM_HEIGHT,
            door_width: DEFAULT_DOOR_WIDTH,
            min_path_width: DEFAULT_MIN_PATH_WIDTH,
        }
    }
}

impl DungeonConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.rooms_x == 0 || self.rooms_y == 0 {
            return Err(anyhow::anyhow!(
                "Room grid dimensions must be greater than zero"
            ));
        }

        if self.room_width < MIN_ROOM_DIMENSION || self.room_height < MIN_ROOM_DIMENSION {
            return Err(anyhow::anyhow!(
                "Rooms must be at least {}x{} tiles",
                MIN_ROOM_DIMENSION,
                MIN_ROOM_DIMENSION
            ));
        }

        if self.door_width == 0 || self.min_path_width == 0 {
            return Err(anyhow::anyhow!(
                "Door and path widths must be greater than zero"
            ));
        }

        Ok(())
    }
}
