use super::{encode_header, encode_record, read_u16, WireError};
use crate::dns_message::FLAGS_CACHED_RESPONSE;
use crate::{DnsHeader, DnsQuestion, DnsRecord};

const RD_BIT: u16 = 0x0100;
const SERVFAIL_BASE_FLAGS: u16 = 0x8080;
const RCODE_SERVFAIL: u16 = 2;

/// Builds the answer for a cache hit: request id, fixed cached-response flags,
/// the original question bytes, then every record as the answer section.
pub fn build_cached_response(
    request: &DnsHeader,
    question: &DnsQuestion,
    records: &[DnsRecord],
) -> Result<Vec<u8>, WireError> {
    let answer_count =
        u16::try_from(records.len()).map_err(|_| WireError::TooManyRecords(records.len()))?;

    let mut out = Vec::with_capacity(12 + question.raw.len() + records.len() * 32);
    out.extend_from_slice(&encode_header(
        request.id,
        FLAGS_CACHED_RESPONSE,
        1,
        answer_count,
        0,
        0,
    ));
    out.extend_from_slice(&question.raw);
    for record in records {
        out.extend_from_slice(&encode_record(record)?);
    }
    Ok(out)
}

/// Builds a SERVFAIL answer to `query`, echoing its id, RD bit and question.
pub fn build_servfail_response(
    query: &[u8],
    question: Option<&DnsQuestion>,
) -> Result<Vec<u8>, WireError> {
    let id = read_u16(query, 0)?;
    let rd = read_u16(query, 2)? & RD_BIT;

    let mut out = Vec::with_capacity(12 + question.map_or(0, |q| q.raw.len()));
    out.extend_from_slice(&encode_header(
        id,
        SERVFAIL_BASE_FLAGS | rd | RCODE_SERVFAIL,
        u16::from(question.is_some()),
        0,
        0,
        0,
    ));
    if let Some(question) = question {
        out.extend_from_slice(&question.raw);
    }
    Ok(out)
}
