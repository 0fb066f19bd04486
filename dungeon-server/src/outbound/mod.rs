pub mod metrics;
pub mod repositories;
