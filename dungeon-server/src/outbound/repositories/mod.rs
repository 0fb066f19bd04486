use std::path::{Path, PathBuf};

use crate::domain::{
    models::{LoadDungeonError, SaveDungeonError, SavedDungeon, Stage},
    ports::DungeonRepository,
};

/// Stores one JSON document per stage under a data directory.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    data_dir: PathBuf,
}

impl FileSystemRepository {
    /// Creates the data directory if it does not exist yet.
    pub fn new(data_dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;

        Ok(Self { data_dir })
    }

    fn stage_path(&self, stage: Stage) -> PathBuf {
        self.data_dir.join(format!("dungeon-{}.json", stage.raw()))
    }
}

impl DungeonRepository for FileSystemRepository {
    async fn persist_dungeon(&self, saved: &SavedDungeon) -> Result<(), SaveDungeonError> {
        let bytes = serde_json::to_vec(saved).map_err(anyhow::Error::from)?;
        let path = self.stage_path(saved.stage());

        tokio::fs::write(&path, bytes).await?;

        Ok(())
    }

    async fn fetch_dungeon(&self, stage: Stage) -> Result<SavedDungeon, LoadDungeonError> {
        let path = self.stage_path(stage);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(LoadDungeonError::NotFound { stage });
            }
            Err(err) => return Err(LoadDungeonError::Unknown(err.into())),
        };

        let saved = serde_json::from_slice(&bytes)
            .map_err(|err| LoadDungeonError::Unknown(anyhow::Error::from(err)))?;

        Ok(saved)
    }
}
