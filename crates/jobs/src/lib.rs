pub mod cache_snapshot;
pub mod runner;

pub use cache_snapshot::CacheSnapshotJob;
pub use runner::JobRunner;
