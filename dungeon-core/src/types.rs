use crate::constants::TILE_SIZE;

use std::fmt::{Display, Formatter};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single cell of a room's tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Wall,
    Floor,
}

impl Tile {
    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    pub fn is_floor(&self) -> bool {
        matches!(self, Tile::Floor)
    }
}

// Tiles travel over the persistence boundary as bare 0/1 integers,
// so the grid serializes to plain nested arrays.
impl Serialize for Tile {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(match self {
            Tile::Floor => 0,
            Tile::Wall => 1,
        })
    }
}

impl<'de> Deserialize<'de> for Tile {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(Tile::Floor),
            1 => Ok(Tile::Wall),
            other => Err(serde::de::Error::custom(format!(
                "invalid tile value: {}",
                other
            ))),
        }
    }
}

/// Identifies one room inside the dungeon grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomCoord {
    pub x: usize,
    pub y: usize,
}

impl RoomCoord {
    pub const fn new(x: usize, y: usize) -> Self {
        RoomCoord { x, y }
    }

    /// The coordinate one step in `direction`, or `None` when the step
    /// would leave the grid on the zero side. The caller is responsible
    /// for the upper bounds.
    pub fn towards(&self, direction: Direction) -> Option<RoomCoord> {
        match direction {
            Direction::North => self.y.checked_sub(1).map(|y| RoomCoord::new(self.x, y)),
            Direction::South => Some(RoomCoord::new(self.x, self.y + 1)),
            Direction::West => self.x.checked_sub(1).map(|x| RoomCoord::new(x, self.y)),
            Direction::East => Some(RoomCoord::new(self.x + 1, self.y)),
        }
    }

    /// The direction pointing from `self` to a grid-adjacent `other`.
    pub fn direction_to(&self, other: &RoomCoord) -> Option<Direction> {
        if self.y == other.y {
            if other.x + 1 == self.x {
                return Some(Direction::West);
            } else if self.x + 1 == other.x {
                return Some(Direction::East);
            }
        } else if self.x == other.x {
            if other.y + 1 == self.y {
                return Some(Direction::North);
            } else if self.y + 1 == other.y {
                return Some(Direction::South);
            }
        }

        None
    }
}

impl Display for RoomCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identifies one tile inside a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    pub x: usize,
    pub y: usize,
}

impl TileCoord {
    pub const fn new(x: usize, y: usize) -> Self {
        TileCoord { x, y }
    }

    /// Center of this tile in world pixels.
    pub fn to_pixels(&self) -> (f32, f32) {
        (
            self.x as f32 * TILE_SIZE + TILE_SIZE / 2.0,
            self.y as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        )
    }
}

impl Display for TileCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn reverse(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

pub(crate) type NeighbourSet = tinyset::SetUsize;

/// Undirected adjacency over the room coordinate grid.
///
/// Edges are only ever inserted between grid-adjacent coordinates. After
/// the connectivity pass the graph is a spanning tree: connected, with
/// exactly `node_count() - 1` edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomGraph {
    width: usize,
    height: usize,
    neighbour_buffer: Vec<NeighbourSet>,
}

impl RoomGraph {
    pub fn new(width: usize, height: usize) -> Self {
        RoomGraph {
            width,
            height,
            neighbour_buffer: vec![NeighbourSet::new(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn node_count(&self) -> usize {
        self.neighbour_buffer.len()
    }

    pub fn edge_count(&self) -> usize {
        // Every edge appears in both endpoint sets
        self.neighbour_buffer
            .iter()
            .map(|set| set.len())
            .sum::<usize>()
            / 2
    }

    pub fn contains(&self, coord: RoomCoord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    fn index_of(&self, coord: RoomCoord) -> usize {
        coord.y * self.width + coord.x
    }

    pub fn coord_of(&self, index: usize) -> RoomCoord {
        RoomCoord::new(index % self.width, index / self.width)
    }

    /// Inserts the symmetric edge `a <-> b`. Requests for coordinates
    /// outside the grid or not grid-adjacent are ignored.
    pub fn add_edge(&mut self, a: RoomCoord, b: RoomCoord) {
        if !self.contains(a) || !self.contains(b) || a.direction_to(&b).is_none() {
            return;
        }

        let idx_a = self.index_of(a);
        let idx_b = self.index_of(b);

        self.neighbour_buffer[idx_a].insert(idx_b);
        self.neighbour_buffer[idx_b].insert(idx_a);
    }

    pub fn neighbours(&self, coord: RoomCoord) -> impl Iterator<Item = RoomCoord> + '_ {
        self.neighbour_buffer[self.index_of(coord)]
            .iter()
            .map(|idx| self.coord_of(idx))
    }

    /// Whether every node is reachable from every other node via edges.
    pub fn is_connected(&self) -> bool {
        if self.neighbour_buffer.is_empty() {
            return true;
        }

        let mut visited = vec![false; self.node_count()];
        let mut stack = vec![0_usize];
        visited[0] = true;

        let mut reached = 1_usize;
        while let Some(idx) = stack.pop() {
            for neighbour_idx in self.neighbour_buffer[idx].iter() {
                if !visited[neighbour_idx] {
                    visited[neighbour_idx] = true;
                    reached += 1;
                    stack.push(neighbour_idx);
                }
            }
        }

        reached == self.node_count()
    }
}

/// One cell of the dungeon grid, itself a 2D tile grid.
///
/// Rooms are mutated only during generation. Serializes transparently as
/// nested arrays of 0/1 tile values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Room {
    tiles: Vec<Vec<Tile>>,
}

impl Room {
    pub fn filled_with_walls(width: usize, height: usize) -> Self {
        Room {
            tiles: vec![vec![Tile::Wall; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    pub fn is_floor(&self, coord: TileCoord) -> bool {
        self.tiles
            .get(coord.y)
            .and_then(|row| row.get(coord.x))
            .is_some_and(Tile::is_floor)
    }

    /// Converts the addressed tile to floor. Writes outside the grid are
    /// skipped silently, so carving with signed offsets stays safe.
    pub fn carve(&mut self, x: isize, y: isize) {
        if x < 0 || y < 0 {
            return;
        }

        let (x, y) = (x as usize, y as usize);
        if y < self.height() && x < self.width() {
            self.tiles[y][x] = Tile::Floor;
        }
    }

    /// Collision query for movement collaborators, by world pixel position.
    pub fn is_wall_at_pixel(&self, px: f32, py: f32) -> bool {
        if px < 0.0 || py < 0.0 {
            return true;
        }

        let coord = TileCoord::new((px / TILE_SIZE) as usize, (py / TILE_SIZE) as usize);
        if coord.x >= self.width() || coord.y >= self.height() {
            return true;
        }

        !self.is_floor(coord)
    }

    /// Every boundary floor tile is a door; doors are derived rather
    /// than stored. Scans the left and right walls row by row, then the
    /// top and bottom walls column by column.
    pub fn doors(&self) -> Vec<TileCoord> {
        let (width, height) = (self.width(), self.height());
        let mut doors = Vec::new();

        for y in 0..height {
            if self.is_floor(TileCoord::new(0, y)) {
                doors.push(TileCoord::new(0, y));
            }
            if self.is_floor(TileCoord::new(width - 1, y)) {
                doors.push(TileCoord::new(width - 1, y));
            }
        }
        for x in 0..width {
            if self.is_floor(TileCoord::new(x, 0)) {
                doors.push(TileCoord::new(x, 0));
            }
            if self.is_floor(TileCoord::new(x, height - 1)) {
                doors.push(TileCoord::new(x, height - 1));
            }
        }

        doors
    }

    pub fn floor_count(&self) -> usize {
        self.tiles
            .iter()
            .flat_map(|row| row.iter())
            .filter(|tile| tile.is_floor())
            .count()
    }
}

/// The interior outline carved into a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoomShape {
    Square,
    Rectangle,
    LShape,
    Hallway,
}

impl RoomShape {
    pub fn pick(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..4_u8) {
            0 => RoomShape::Square,
            1 => RoomShape::Rectangle,
            2 => RoomShape::LShape,
            _ => RoomShape::Hallway,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyArchetype {
    Basic,
    Charger,
    Shooter,
}

impl EnemyArchetype {
    pub fn pick(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..3_u8) {
            0 => EnemyArchetype::Basic,
            1 => EnemyArchetype::Charger,
            _ => EnemyArchetype::Shooter,
        }
    }

    pub fn max_hp(&self) -> u32 {
        match self {
            EnemyArchetype::Basic => 7,
            EnemyArchetype::Charger => 5,
            EnemyArchetype::Shooter => 3,
        }
    }

    pub fn speed(&self) -> f32 {
        match self {
            EnemyArchetype::Basic => 3.5,
            EnemyArchetype::Charger | EnemyArchetype::Shooter => 2.0,
        }
    }

    pub fn sprite_size(&self) -> f32 {
        match self {
            EnemyArchetype::Basic => 64.0,
            EnemyArchetype::Charger | EnemyArchetype::Shooter => 32.0,
        }
    }
}

/// A spawn point handed to the enemy AI collaborator, in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    pub archetype: EnemyArchetype,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    SpreadShot,
}

/// A power-up placed on the floor, in world pixels. `collected` is
/// flipped by the pickup handler and survives saves, so an item taken
/// before saving stays gone after a load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSpawn {
    pub x: f32,
    pub y: f32,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub collected: bool,
}

/// The complete generated dungeon.
///
/// Rebuilt wholesale on every generation; read-only afterwards except for
/// `visited_rooms`, which the room-transition handler flips as the player
/// explores, and item `collected` flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dungeon {
    rooms: Vec<Vec<Room>>,
    visited_rooms: Vec<Vec<bool>>,
    #[serde(default)]
    enemies_per_room: Vec<Vec<Vec<EnemySpawn>>>,
    #[serde(default)]
    items_per_room: Vec<Vec<Vec<ItemSpawn>>>,
}

impl Dungeon {
    pub(crate) fn new(
        rooms: Vec<Vec<Room>>,
        enemies_per_room: Vec<Vec<Vec<EnemySpawn>>>,
        items_per_room: Vec<Vec<Vec<ItemSpawn>>>,
    ) -> Self {
        let rooms_y = rooms.len();
        let rooms_x = rooms.first().map_or(0, Vec::len);

        let mut visited_rooms = vec![vec![false; rooms_x]; rooms_y];
        visited_rooms[rooms_y / 2][rooms_x / 2] = true;

        Dungeon {
            rooms,
            visited_rooms,
            enemies_per_room,
            items_per_room,
        }
    }

    pub fn rooms_x(&self) -> usize {
        self.rooms.first().map_or(0, Vec::len)
    }

    pub fn rooms_y(&self) -> usize {
        self.rooms.len()
    }

    pub fn rooms(&self) -> &[Vec<Room>] {
        &self.rooms
    }

    pub fn room(&self, coord: RoomCoord) -> &Room {
        &self.rooms[coord.y][coord.x]
    }

    /// The room the player starts in, at the center of the grid. This is
    /// also the root of the connectivity spanning tree.
    pub fn start_room(&self) -> RoomCoord {
        RoomCoord::new(self.rooms_x() / 2, self.rooms_y() / 2)
    }

    pub fn is_visited(&self, coord: RoomCoord) -> bool {
        self.visited_rooms[coord.y][coord.x]
    }

    /// The only mutation permitted after generation, performed by the
    /// room-transition handler for the minimap.
    pub fn mark_visited(&mut self, coord: RoomCoord) {
        self.visited_rooms[coord.y][coord.x] = true;
    }

    /// Spawn list for one room. Empty for dungeons restored from saves
    /// predating spawn persistence.
    pub fn enemies_in(&self, coord: RoomCoord) -> &[EnemySpawn] {
        self.enemies_per_room
            .get(coord.y)
            .and_then(|row| row.get(coord.x))
            .map_or(&[], |spawns| spawns.as_slice())
    }

    /// Item list for one room, with the same save tolerance as
    /// [Dungeon::enemies_in].
    pub fn items_in(&self, coord: RoomCoord) -> &[ItemSpawn] {
        self.items_per_room
            .get(coord.y)
            .and_then(|row| row.get(coord.x))
            .map_or(&[], |items| items.as_slice())
    }

    /// Marks one of the room's items as picked up.
    pub fn collect_item(&mut self, coord: RoomCoord, index: usize) {
        if let Some(item) = self
            .items_per_room
            .get_mut(coord.y)
            .and_then(|row| row.get_mut(coord.x))
            .and_then(|items| items.get_mut(index))
        {
            item.collected = true;
        }
    }
}
