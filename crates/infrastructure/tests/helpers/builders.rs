#![allow(dead_code)]
use dnsrelay_domain::wire::{encode_header, encode_name};
use dnsrelay_domain::{DnsQuestion, DnsRecord, RecordData, RecordType};

pub fn query_packet(id: u16, domain: &str, qtype: u16) -> Vec<u8> {
    let mut packet = encode_header(id, 0x0100, 1, 0, 0, 0).to_vec();
    packet.extend_from_slice(&encode_name(domain).unwrap());
    packet.extend_from_slice(&qtype.to_be_bytes());
    packet.extend_from_slice(&1u16.to_be_bytes());
    packet
}

pub fn question(domain: &str, record_type: RecordType) -> DnsQuestion {
    DnsQuestion::new(domain, record_type, 1, Vec::new())
}

pub fn a_record(domain: &str, ttl: u32, ip: [u8; 4]) -> DnsRecord {
    DnsRecord::ipv4(domain, ttl, ip)
}

pub fn soa_record(domain: &str, ttl: u32) -> DnsRecord {
    DnsRecord::new(
        domain,
        RecordType::SOA,
        1,
        ttl,
        RecordData::Name(format!("ns.{}", domain)),
    )
}
