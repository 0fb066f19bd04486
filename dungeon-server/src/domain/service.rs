/*!
   Module `service` provides the canonical implementation of the [DungeonService] port.
*/

use dungeon_core::Dungeon;

use super::{
    models::{
        GenerateDungeonError, GenerateDungeonRequest, LoadDungeonError, SaveDungeonError,
        SavedDungeon, Stage,
    },
    ports::{DungeonMetrics, DungeonRepository, DungeonService},
};

/// Canonical implementation of the [DungeonService] port, through which the dungeon domain API
/// is consumed.
#[derive(Debug, Clone)]
pub struct Service<R, M>
where
    R: DungeonRepository,
    M: DungeonMetrics,
{
    repository: R,
    metrics: M,
}

impl<R, M> Service<R, M>
where
    R: DungeonRepository,
    M: DungeonMetrics,
{
    pub fn new(repo: R, metrics: M) -> Self {
        Self {
            repository: repo,
            metrics,
        }
    }
}

impl<R, M> DungeonService for Service<R, M>
where
    R: DungeonRepository,
    M: DungeonMetrics,
{
    /// Generate the [Dungeon] specified in `req`.
    ///
    /// Generation is pure computation, so nothing is persisted here. The client saves
    /// explicitly once it wants the state to survive.
    async fn generate_dungeon(
        &self,
        req: &GenerateDungeonRequest,
    ) -> Result<Dungeon, GenerateDungeonError> {
        let dungeon = match req.seed() {
            Some(seed) => dungeon_core::generate_dungeon_from_seed(req.config(), seed)?,
            None => dungeon_core::generate_dungeon(req.config())?,
        };

        Ok(dungeon)
    }

    /// Persist `saved` and record the outcome.
    ///
    /// # Errors
    ///
    /// - Propagates any [SaveDungeonError] returned by the [DungeonRepository].
    async fn save_dungeon(&self, saved: &SavedDungeon) -> Result<(), SaveDungeonError> {
        let result = self.repository.persist_dungeon(saved).await;

        match result {
            Ok(()) => self.metrics.record_save_success().await,
            Err(_) => self.metrics.record_save_failure().await,
        }

        result
    }

    /// Fetch the state saved for `stage`. A failed load leaves saved state untouched.
    async fn load_dungeon(&self, stage: Stage) -> Result<SavedDungeon, LoadDungeonError> {
        self.repository.fetch_dungeon(stage).await
    }
}
