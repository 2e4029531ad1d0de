use super::{decode_name, read_u16, WireError, HEADER_LEN};
use crate::{DnsQuestion, RecordType};

/// Decodes the first question, which always starts right after the header.
pub fn decode_question(buf: &[u8]) -> Result<(DnsQuestion, usize), WireError> {
    decode_question_at(buf, HEADER_LEN)
}

pub(crate) fn decode_question_at(
    buf: &[u8],
    offset: usize,
) -> Result<(DnsQuestion, usize), WireError> {
    if buf.len() < offset {
        return Err(WireError::Truncated { offset: buf.len() });
    }
    let (name, pos) = decode_name(buf, offset)?;
    let qtype = read_u16(buf, pos)?;
    let qclass = read_u16(buf, pos + 2)?;
    let end = pos + 4;

    let question = DnsQuestion::new(
        name,
        RecordType::from_u16(qtype),
        qclass,
        buf[offset..end].to_vec(),
    );
    Ok((question, end))
}
