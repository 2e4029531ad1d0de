use super::{read_u16, WireError, HEADER_LEN};
use crate::DnsHeader;

/// Fixed 12-byte big-endian header layout.
pub fn encode_header(
    id: u16,
    flags: u16,
    questions: u16,
    answers: u16,
    authority: u16,
    additional: u16,
) -> [u8; HEADER_LEN] {
    let mut out = [0u8; HEADER_LEN];
    for (i, field) in [id, flags, questions, answers, authority, additional]
        .iter()
        .enumerate()
    {
        out[i * 2..i * 2 + 2].copy_from_slice(&field.to_be_bytes());
    }
    out
}

pub fn decode_header(buf: &[u8]) -> Result<DnsHeader, WireError> {
    if buf.len() < HEADER_LEN {
        return Err(WireError::Truncated { offset: buf.len() });
    }
    Ok(DnsHeader {
        id: read_u16(buf, 0)?,
        flags: read_u16(buf, 2)?,
        question_count: read_u16(buf, 4)?,
        answer_count: read_u16(buf, 6)?,
        authority_count: read_u16(buf, 8)?,
        additional_count: read_u16(buf, 10)?,
    })
}

impl DnsHeader {
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        encode_header(
            self.id,
            self.flags,
            self.question_count,
            self.answer_count,
            self.authority_count,
            self.additional_count,
        )
    }
}
