/*
   Module `ports` specifies the API by which external modules interact with the dungeon domain.

   All traits are bounded by `Send + Sync + 'static`, since their implementations must be shareable
   between request-handling threads.

   Trait methods are explicitly asynchronous, including `Send` bounds on response types,
   since the application is expected to always run in a multithreaded environment.
*/

use std::future::Future;

use dungeon_core::Dungeon;

use crate::domain::models::*;

/// `DungeonService` is the public API for the dungeon domain.
///
/// External modules must conform to this contract – the domain is not concerned with the
/// implementation details or underlying technology of any external code.
pub trait DungeonService: Clone + Send + Sync + 'static {
    /// Asynchronously generate a new [Dungeon].
    ///
    /// # Errors
    ///
    /// - [GenerateDungeonError::InvalidParameters] if the requested dimensions are rejected.
    fn generate_dungeon(
        &self,
        req: &GenerateDungeonRequest,
    ) -> impl Future<Output = Result<Dungeon, GenerateDungeonError>> + Send;

    /// Asynchronously persist the dungeon state for a stage.
    fn save_dungeon(
        &self,
        saved: &SavedDungeon,
    ) -> impl Future<Output = Result<(), SaveDungeonError>> + Send;

    /// Asynchronously fetch the dungeon state previously saved for `stage`.
    ///
    /// # Errors
    ///
    /// - [LoadDungeonError::NotFound] if nothing was ever saved for `stage`.
    fn load_dungeon(
        &self,
        stage: Stage,
    ) -> impl Future<Output = Result<SavedDungeon, LoadDungeonError>> + Send;
}

/// `DungeonRepository` represents a store of saved dungeon states.
///
/// External modules must conform to this contract – the domain is not concerned with the
/// implementation details or underlying technology of any external code.
pub trait DungeonRepository: Send + Sync + Clone + 'static {
    /// Asynchronously persist a [SavedDungeon].
    fn persist_dungeon(
        &self,
        saved: &SavedDungeon,
    ) -> impl Future<Output = Result<(), SaveDungeonError>> + Send;

    /// Asynchronously fetch the [SavedDungeon] stored for `stage`.
    fn fetch_dungeon(
        &self,
        stage: Stage,
    ) -> impl Future<Output = Result<SavedDungeon, LoadDungeonError>> + Send;
}

/// `DungeonMetrics` describes an aggregator of dungeon persistence related metrics, such as a
/// time-series database.
pub trait DungeonMetrics: Send + Sync + Clone + 'static {
    /// Record a successful dungeon save.
    fn record_save_success(&self) -> impl Future<Output = ()> + Send;

    /// Record a dungeon save failure.
    fn record_save_failure(&self) -> impl Future<Output = ()> + Send;
}
