use super::clock::Clock;
use super::entry::CacheEntry;
use dashmap::DashMap;
use dnsrelay_application::ports::RecordCachePort;
use dnsrelay_domain::{DnsQuestion, DnsRecord, RecordType};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, trace};

/// Entries of one domain, grouped by record type in insertion order.
pub type TypeGroups = HashMap<RecordType, Vec<CacheEntry>>;

/// Process-wide record store keyed by domain, then record type.
///
/// Expiry is lazy: nothing sweeps the map, and a group is filtered the
/// next time `lookup` or `contains` touches it. The per-domain shard lock
/// of the `DashMap` serializes concurrent mutations of one domain.
pub struct RecordCache {
    pub(super) entries: DashMap<String, TypeGroups>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) snapshot_path: Option<PathBuf>,
}

impl RecordCache {
    /// Empty cache without a snapshot file.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
            snapshot_path: None,
        }
    }

    /// Number of cached domains.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries across every domain and type, live or not.
    pub fn entry_count(&self) -> usize {
        self.entries
            .iter()
            .map(|groups| groups.values().map(Vec::len).sum::<usize>())
            .sum()
    }

    pub fn snapshot_path(&self) -> Option<&PathBuf> {
        self.snapshot_path.as_ref()
    }

    /// Appends an entry expiring `record.ttl` seconds from now.
    ///
    /// Identical records are not merged; each store adds a new entry.
    pub fn store(
        &self,
        domain: &str,
        record: DnsRecord,
        record_type: RecordType,
        source_flags: u16,
    ) {
        let entry = CacheEntry::new(record, self.clock.now_secs(), source_flags);
        trace!(
            domain = %domain,
            record_type = %record_type,
            expires_at = entry.expires_at_secs,
            "Caching record"
        );
        self.entries
            .entry(domain.to_string())
            .or_default()
            .entry(record_type)
            .or_default()
            .push(entry);
    }

    /// Live records for `(domain, record_type)`, in insertion order.
    pub fn lookup(&self, domain: &str, record_type: RecordType) -> Option<Vec<DnsRecord>> {
        let now = self.clock.now_secs();
        self.with_live_group(domain, record_type, now, |entries| {
            entries.iter().map(|e| e.record.clone()).collect()
        })
    }

    /// True when a live answer exists under the question's type or,
    /// failing that, under SOA.
    pub fn contains(&self, question: &DnsQuestion) -> bool {
        let now = self.clock.now_secs();
        let has_live = |record_type| {
            self.with_live_group(&question.name, record_type, now, |_| ())
                .is_some()
        };
        has_live(question.record_type) || has_live(RecordType::SOA)
    }

    /// Drops expired entries of one group, removing the group (and the
    /// domain once it has no groups left) when nothing survives, then hands
    /// the surviving entries to `read`.
    fn with_live_group<R>(
        &self,
        domain: &str,
        record_type: RecordType,
        now_secs: u64,
        read: impl FnOnce(&[CacheEntry]) -> R,
    ) -> Option<R> {
        let mut groups = self.entries.get_mut(domain)?;
        let entries = groups.get_mut(&record_type)?;

        let before = entries.len();
        entries.retain(|entry| entry.is_live_at(now_secs));
        let expired = before - entries.len();

        if !entries.is_empty() {
            return Some(read(entries));
        }

        groups.remove(&record_type);
        let domain_empty = groups.is_empty();
        drop(groups);

        if domain_empty {
            self.entries.remove_if(domain, |_, groups| groups.is_empty());
        }

        debug!(
            domain = %domain,
            record_type = %record_type,
            expired,
            "Cache group expired"
        );
        None
    }
}

impl RecordCachePort for RecordCache {
    fn store(&self, domain: &str, record: DnsRecord, record_type: RecordType, source_flags: u16) {
        RecordCache::store(self, domain, record, record_type, source_flags);
    }

    fn lookup(&self, domain: &str, record_type: RecordType) -> Option<Vec<DnsRecord>> {
        RecordCache::lookup(self, domain, record_type)
    }

    fn contains(&self, question: &DnsQuestion) -> bool {
        RecordCache::contains(self, question)
    }

    fn len(&self) -> usize {
        RecordCache::len(self)
    }
}
