use crate::types::Direction;

pub(crate) const DEFAULT_ROOMS_X: usize = 3;
pub(crate) const DEFAULT_ROOMS_Y: usize = 3;

pub(crate) const DEFAULT_ROOM_WIDTH: usize = 40;
pub(crate) const DEFAULT_ROOM_HEIGHT: usize = 30;

pub(crate) const DEFAULT_DOOR_WIDTH: usize = 4;
pub(crate) const DEFAULT_MIN_PATH_WIDTH: usize = 2;

// Rooms smaller than this leave no margin for the shape carver.
pub(crate) const MIN_ROOM_DIMENSION: usize = 12;

/// Side length of one tile in world pixels.
pub const TILE_SIZE: f32 = 40.0;

pub(crate) const MAX_SPAWN_ATTEMPTS: u32 = 50;
pub(crate) const MAX_ITEM_SPAWN_ATTEMPTS: u32 = 250;
pub(crate) const PLAYER_SPAWN_RADIUS: f32 = 150.0;
pub(crate) const MAX_ENEMIES_PER_ROOM: u32 = 3;

pub(crate) const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];
