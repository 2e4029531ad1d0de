use super::RecordType;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: String,
    pub record_type: RecordType,
    pub class: u16,
    /// Question section exactly as received, echoed verbatim in cached responses.
    pub raw: Vec<u8>,
}

impl DnsQuestion {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        class: u16,
        raw: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
            raw,
        }
    }
}

impl fmt::Display for DnsQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, type: {}, class: {}",
            self.name, self.record_type, self.class
        )
    }
}
