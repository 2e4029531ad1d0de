use dnsrelay_domain::DnsRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub record: DnsRecord,
    /// Absolute expiry as a Unix timestamp (seconds).
    pub expires_at_secs: u64,
    /// Flags word of the message the record was parsed from.
    pub source_flags: u16,
}

impl CacheEntry {
    pub fn new(record: DnsRecord, now_secs: u64, source_flags: u16) -> Self {
        let expires_at_secs = now_secs.saturating_add(u64::from(record.ttl));
        Self {
            record,
            expires_at_secs,
            source_flags,
        }
    }

    /// An entry stored with TTL 0 is never live.
    #[inline]
    pub fn is_live_at(&self, now_secs: u64) -> bool {
        now_secs < self.expires_at_secs
    }
}
