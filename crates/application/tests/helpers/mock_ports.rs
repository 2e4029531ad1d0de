#![allow(dead_code)]

use async_trait::async_trait;
use dnsrelay_application::ports::{RecordCachePort, UpstreamResolver};
use dnsrelay_domain::{DnsQuestion, DnsRecord, DomainError, RecordType};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory cache without expiry, recording every store call.
#[derive(Default)]
pub struct MockRecordCache {
    records: Mutex<HashMap<(String, RecordType), Vec<DnsRecord>>>,
    stored_flags: Mutex<Vec<u16>>,
}

impl MockRecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(self, record: DnsRecord) -> Self {
        let record_type = record.record_type;
        self.store(&record.domain.clone(), record, record_type, 0x8180);
        self
    }

    pub fn stored_count(&self) -> usize {
        self.stored_flags.lock().unwrap().len()
    }

    pub fn stored_flags(&self) -> Vec<u16> {
        self.stored_flags.lock().unwrap().clone()
    }
}

impl RecordCachePort for MockRecordCache {
    fn store(&self, domain: &str, record: DnsRecord, record_type: RecordType, source_flags: u16) {
        self.records
            .lock()
            .unwrap()
            .entry((domain.to_string(), record_type))
            .or_default()
            .push(record);
        self.stored_flags.lock().unwrap().push(source_flags);
    }

    fn lookup(&self, domain: &str, record_type: RecordType) -> Option<Vec<DnsRecord>> {
        self.records
            .lock()
            .unwrap()
            .get(&(domain.to_string(), record_type))
            .cloned()
    }

    fn contains(&self, question: &DnsQuestion) -> bool {
        let records = self.records.lock().unwrap();
        records.contains_key(&(question.name.clone(), question.record_type))
            || records.contains_key(&(question.name.clone(), RecordType::SOA))
    }

    fn len(&self) -> usize {
        let records = self.records.lock().unwrap();
        let mut domains: Vec<_> = records.keys().map(|(d, _)| d.clone()).collect();
        domains.sort();
        domains.dedup();
        domains.len()
    }
}

enum UpstreamBehavior {
    Respond(Vec<u8>),
    Fail(DomainError),
}

/// Upstream that replays a canned answer and counts calls.
pub struct MockUpstreamResolver {
    behavior: Mutex<UpstreamBehavior>,
    calls: AtomicUsize,
    last_query: Mutex<Option<Vec<u8>>>,
}

impl MockUpstreamResolver {
    pub fn responding(response: Vec<u8>) -> Self {
        Self {
            behavior: Mutex::new(UpstreamBehavior::Respond(response)),
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            behavior: Mutex::new(UpstreamBehavior::Fail(error)),
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<Vec<u8>> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.to_vec());
        match &*self.behavior.lock().unwrap() {
            UpstreamBehavior::Respond(bytes) => Ok(bytes.clone()),
            UpstreamBehavior::Fail(e) => Err(e.clone()),
        }
    }

    fn server_name(&self) -> String {
        "mock-upstream".to_string()
    }
}
