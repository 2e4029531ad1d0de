use super::{DnsQuestion, DnsRecord};
use std::fmt;

/// Flags of a response served from cache: QR, AA, RD and RA set, RCODE 0.
pub const FLAGS_CACHED_RESPONSE: u16 = 0x8580;

const QR_BIT: u16 = 0x8000;
const RCODE_MASK: u16 = 0x000F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DnsHeader {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl DnsHeader {
    pub fn is_response(&self) -> bool {
        self.flags & QR_BIT != 0
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }
}

/// A decoded message. Sections hold only what could be read from the buffer;
/// `complete` is false when decoding stopped before the header counts were met.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DnsMessage {
    pub header: DnsHeader,
    pub question: Option<DnsQuestion>,
    pub answers: Vec<DnsRecord>,
    pub authority: Vec<DnsRecord>,
    pub additional: Vec<DnsRecord>,
    pub complete: bool,
}

impl DnsMessage {
    /// Every record of the answer, authority and additional sections, in order.
    pub fn records(&self) -> impl Iterator<Item = &DnsRecord> {
        self.answers
            .iter()
            .chain(self.authority.iter())
            .chain(self.additional.iter())
    }

    pub fn record_count(&self) -> usize {
        self.answers.len() + self.authority.len() + self.additional.len()
    }
}

impl fmt::Display for DnsMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = &self.header;
        writeln!(
            f,
            "id: {:#06x}, flags: {:#06x}, qd: {}, an: {}, ns: {}, ar: {}",
            h.id,
            h.flags,
            h.question_count,
            h.answer_count,
            h.authority_count,
            h.additional_count
        )?;
        if let Some(question) = &self.question {
            writeln!(f, "{}", question)?;
        }
        for record in self.records() {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
