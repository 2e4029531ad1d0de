use async_trait::async_trait;
use dnsrelay_domain::DomainError;

/// Outcome of writing a cache snapshot.
#[derive(Debug, Default, Clone)]
pub struct SnapshotOutcome {
    pub domains: usize,
    pub entries: usize,
    pub bytes_written: usize,
}

/// Port for persisting the record cache to durable storage.
#[async_trait]
pub trait CacheSnapshotPort: Send + Sync {
    async fn save_snapshot(&self) -> Result<SnapshotOutcome, DomainError>;
}
