use super::question::decode_question_at;
use super::{decode_header, decode_record, WireError, HEADER_LEN};
use crate::{DnsMessage, DnsRecord};

/// Decodes a whole message, best effort.
///
/// Only a missing header is an error. After that, questions and records are
/// read in order until the header counts are met or a section cannot be read;
/// everything decoded up to that point is kept and `complete` tells the two
/// cases apart. Only the first question is retained.
pub fn decode_message(buf: &[u8]) -> Result<DnsMessage, WireError> {
    let header = decode_header(buf)?;
    let mut message = DnsMessage {
        header,
        ..Default::default()
    };

    let mut offset = HEADER_LEN;
    for _ in 0..header.question_count {
        match decode_question_at(buf, offset) {
            Ok((question, next)) => {
                if message.question.is_none() {
                    message.question = Some(question);
                }
                offset = next;
            }
            Err(_) => return Ok(message),
        }
    }

    let sections = [
        header.answer_count,
        header.authority_count,
        header.additional_count,
    ];
    for (index, count) in sections.into_iter().enumerate() {
        let target = match index {
            0 => &mut message.answers,
            1 => &mut message.authority,
            _ => &mut message.additional,
        };
        match decode_section(buf, offset, count, target) {
            Some(next) => offset = next,
            None => return Ok(message),
        }
    }

    message.complete = true;
    Ok(message)
}

fn decode_section(
    buf: &[u8],
    mut offset: usize,
    count: u16,
    out: &mut Vec<DnsRecord>,
) -> Option<usize> {
    for _ in 0..count {
        let (record, next) = decode_record(buf, offset).ok()?;
        out.push(record);
        offset = next;
    }
    Some(offset)
}
