use crate::domain::ports::DungeonMetrics;

#[derive(Debug, Clone)]
pub struct NullMetrics;

impl DungeonMetrics for NullMetrics {
    async fn record_save_success(&self) {}

    async fn record_save_failure(&self) {}
}
