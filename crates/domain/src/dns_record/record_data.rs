use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type-specific payload of a resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RecordData {
    /// Literal RDATA of an address record (A / AAAA).
    Address(Vec<u8>),
    /// Single embedded domain name (NS, SOA approximated as its primary name).
    Name(String),
    /// Untouched RDATA for every other type.
    Raw(Vec<u8>),
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::Address(bytes) => {
                if let Ok(octets) = <[u8; 4]>::try_from(bytes.as_slice()) {
                    write!(f, "{}", Ipv4Addr::from(octets))
                } else if let Ok(octets) = <[u8; 16]>::try_from(bytes.as_slice()) {
                    write!(f, "{}", Ipv6Addr::from(octets))
                } else {
                    write_hex(f, bytes)
                }
            }
            RecordData::Name(name) => f.write_str(name),
            RecordData::Raw(bytes) => write_hex(f, bytes),
        }
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for b in bytes {
        write!(f, "{:02x}", b)?;
    }
    Ok(())
}
