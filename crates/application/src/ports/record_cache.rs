use dnsrelay_domain::{DnsQuestion, DnsRecord, RecordType};

/// Port for the TTL-based record cache shared by every in-flight query.
pub trait RecordCachePort: Send + Sync {
    /// Appends `record` under `(domain, record_type)`, expiring `record.ttl`
    /// seconds from now. Identical records are not deduplicated.
    fn store(&self, domain: &str, record: DnsRecord, record_type: RecordType, source_flags: u16);

    /// Live records for `(domain, record_type)` in insertion order, or `None`.
    /// Expired entries are dropped as a side effect.
    fn lookup(&self, domain: &str, record_type: RecordType) -> Option<Vec<DnsRecord>>;

    /// Whether a usable answer is cached for the question's type, falling back
    /// to a cached SOA for the same name.
    fn contains(&self, question: &DnsQuestion) -> bool;

    /// Number of cached domains.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
