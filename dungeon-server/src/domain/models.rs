use dungeon_core::{Dungeon, DungeonConfig};

use derive_more::From;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies one save slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stage(u32);

impl Stage {
    pub fn new(raw: u32) -> Self {
        Stage(raw)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// The document written to and read from the save store, matching the
/// JSON shape the game client exchanges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDungeon {
    stage: Stage,
    dungeon_data: Dungeon,
}

impl SavedDungeon {
    pub fn new(stage: Stage, dungeon_data: Dungeon) -> Self {
        Self {
            stage,
            dungeon_data,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn dungeon_data(&self) -> &Dungeon {
        &self.dungeon_data
    }
}

#[derive(Clone, Debug, Error)]
#[error("dungeon dimension cannot be zero")]
pub struct DimensionCannotBeZeroError;

/// The fields required by the domain to generate a fresh [Dungeon].
#[derive(Clone, Debug, PartialEq, Eq, From)]
pub struct GenerateDungeonRequest {
    config: DungeonConfig,
    seed: Option<u64>,
}

impl GenerateDungeonRequest {
    pub fn new(config: DungeonConfig, seed: Option<u64>) -> Self {
        Self { config, seed }
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[derive(Debug, Error)]
pub enum SaveDungeonError {
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
    #[error("Failed to persist dungeon: {0}")]
    FileSystem(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum LoadDungeonError {
    #[error("No saved dungeon for stage {}", .stage.raw())]
    NotFound { stage: Stage },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum GenerateDungeonError {
    #[error("Invalid dungeon parameters: {0}")]
    InvalidParameters(#[from] anyhow::Error),
}
