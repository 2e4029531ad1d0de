#![allow(dead_code)]
use dnsrelay_domain::wire::{encode_header, encode_name};
use dnsrelay_domain::{DnsRecord, RecordData, RecordType};

pub struct DnsRecordBuilder {
    domain: String,
    record_type: RecordType,
    class: u16,
    ttl: u32,
    data: RecordData,
}

impl DnsRecordBuilder {
    pub fn new() -> Self {
        Self {
            domain: "example.com".to_string(),
            record_type: RecordType::A,
            class: 1,
            ttl: 300,
            data: RecordData::Address(vec![93, 184, 216, 34]),
        }
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn address(mut self, octets: &[u8]) -> Self {
        self.data = RecordData::Address(octets.to_vec());
        self
    }

    pub fn name_data(mut self, name: &str) -> Self {
        self.data = RecordData::Name(name.to_string());
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.data = RecordData::Raw(bytes.to_vec());
        self
    }

    pub fn build(self) -> DnsRecord {
        DnsRecord::new(self.domain, self.record_type, self.class, self.ttl, self.data)
    }
}

impl Default for DnsRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a standard recursive query with a single question.
pub fn query_packet(id: u16, domain: &str, qtype: u16) -> Vec<u8> {
    let mut packet = encode_header(id, 0x0100, 1, 0, 0, 0).to_vec();
    packet.extend_from_slice(&encode_name(domain).unwrap());
    packet.extend_from_slice(&qtype.to_be_bytes());
    packet.extend_from_slice(&1u16.to_be_bytes());
    packet
}
