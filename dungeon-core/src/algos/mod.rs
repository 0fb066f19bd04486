mod dungeon_builder;

pub use dungeon_builder::DungeonConfig;
pub(crate) use dungeon_builder::DungeonBuilder;
