use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record and query types the relay understands.
///
/// Anything outside the closed set is carried as `Other(code)` and renders as
/// its decimal value, so it re-encodes to the same numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RecordType {
    A,
    NS,
    SOA,
    AAAA,
    Other(u16),
}

impl RecordType {
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::SOA => 6,
            RecordType::AAAA => 28,
            RecordType::Other(code) => *code,
        }
    }

    /// Never fails: unlisted codes become `Other`.
    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            6 => RecordType::SOA,
            28 => RecordType::AAAA,
            other => RecordType::Other(other),
        }
    }

    /// Types whose RDATA is a literal address payload.
    pub fn is_address(&self) -> bool {
        matches!(self, RecordType::A | RecordType::AAAA)
    }

    /// Types whose RDATA is decoded as a single domain name.
    pub fn carries_name(&self) -> bool {
        matches!(self, RecordType::NS | RecordType::SOA)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => f.write_str("A"),
            RecordType::NS => f.write_str("NS"),
            RecordType::SOA => f.write_str("SOA"),
            RecordType::AAAA => f.write_str("AAAA"),
            RecordType::Other(code) => write!(f, "{}", code),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "NS" => Ok(RecordType::NS),
            "SOA" => Ok(RecordType::SOA),
            "AAAA" => Ok(RecordType::AAAA),
            other => other
                .parse::<u16>()
                .map(RecordType::from_u16)
                .map_err(|_| format!("Unknown record type: {}", s)),
        }
    }
}

impl From<RecordType> for String {
    fn from(record_type: RecordType) -> Self {
        record_type.to_string()
    }
}

impl TryFrom<String> for RecordType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
