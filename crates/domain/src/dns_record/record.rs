use super::{RecordData, RecordType};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub domain: String,

    pub record_type: RecordType,

    pub class: u16,

    pub ttl: u32,

    pub data: RecordData,
}

impl DnsRecord {
    pub fn new(
        domain: impl Into<String>,
        record_type: RecordType,
        class: u16,
        ttl: u32,
        data: RecordData,
    ) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            class,
            ttl,
            data,
        }
    }

    /// Convenience constructor for an IN-class A record.
    pub fn ipv4(domain: impl Into<String>, ttl: u32, octets: [u8; 4]) -> Self {
        Self::new(
            domain,
            RecordType::A,
            1,
            ttl,
            RecordData::Address(octets.to_vec()),
        )
    }
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "domain: {}, type: {}, class: {}, ttl: {}, data: {}",
            self.domain, self.record_type, self.class, self.ttl, self.data
        )
    }
}
