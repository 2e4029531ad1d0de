#![allow(dead_code)]

use dnsrelay_domain::wire::{encode_header, encode_name};

pub fn query_packet(id: u16, domain: &str, qtype: u16) -> Vec<u8> {
    let mut packet = encode_header(id, 0x0100, 1, 0, 0, 0).to_vec();
    packet.extend_from_slice(&encode_name(domain).unwrap());
    packet.extend_from_slice(&qtype.to_be_bytes());
    packet.extend_from_slice(&1u16.to_be_bytes());
    packet
}

/// Upstream-style answer to `query_packet(id, domain, 1)` carrying one A
/// record whose owner name is compressed against the question.
pub fn a_response_packet(id: u16, domain: &str, ttl: u32, ip: [u8; 4]) -> Vec<u8> {
    let mut packet = query_packet(id, domain, 1);
    packet[2..4].copy_from_slice(&0x8180u16.to_be_bytes());
    packet[6..8].copy_from_slice(&1u16.to_be_bytes());
    packet.extend_from_slice(&[0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01]);
    packet.extend_from_slice(&ttl.to_be_bytes());
    packet.extend_from_slice(&[0x00, 0x04]);
    packet.extend_from_slice(&ip);
    packet
}
