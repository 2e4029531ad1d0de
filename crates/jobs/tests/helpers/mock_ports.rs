#![allow(dead_code)]

use async_trait::async_trait;
use dnsrelay_application::ports::{CacheSnapshotPort, SnapshotOutcome};
use dnsrelay_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

pub struct MockCacheSnapshotPort {
    call_count: Arc<AtomicU64>,
    should_fail: AtomicBool,
}

impl MockCacheSnapshotPort {
    pub fn new() -> Self {
        Self {
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheSnapshotPort for MockCacheSnapshotPort {
    async fn save_snapshot(&self) -> Result<SnapshotOutcome, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::IoError("disk full".to_string()));
        }
        Ok(SnapshotOutcome {
            domains: 1,
            entries: 2,
            bytes_written: 128,
        })
    }
}
