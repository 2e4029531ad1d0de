mod cache_snapshot;
mod record_cache;
mod upstream_resolver;

pub use cache_snapshot::{CacheSnapshotPort, SnapshotOutcome};
pub use record_cache::RecordCachePort;
pub use upstream_resolver::UpstreamResolver;
