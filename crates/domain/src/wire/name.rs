use super::{WireError, MAX_LABEL_LEN, MAX_NAME_LEN, MAX_POINTER_JUMPS};

const POINTER_MASK: u8 = 0xC0;

/// Encodes `domain` as uncompressed length-prefixed labels ending in a zero byte.
///
/// Accepts the escaped form produced by [`decode_name`]: `\.` and `\\` stand
/// for a literal dot or backslash inside a label, `\DDD` for any byte by its
/// decimal value. Leading dots and one trailing dot are ignored; the empty
/// string encodes the root.
pub fn encode_name(domain: &str) -> Result<Vec<u8>, WireError> {
    let labels = split_labels(domain.trim_start_matches('.'))?;
    let mut out = Vec::with_capacity(domain.len() + 2);

    for label in &labels {
        if label.is_empty() {
            return Err(WireError::EmptyLabel(domain.to_string()));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(WireError::LabelTooLong(escape_label(label)));
        }
        out.push(label.len() as u8);
        out.extend_from_slice(label);
    }
    out.push(0);

    if out.len() > MAX_NAME_LEN {
        return Err(WireError::NameTooLong);
    }
    Ok(out)
}

/// Decodes the name starting at `offset`.
///
/// Returns the dotted name (no trailing dot, `""` for the root) and the offset
/// just past the name as it appears at `offset`: past the terminating zero
/// byte, or past the first two-byte compression pointer. Every pointer must
/// target an offset strictly below the start of the segment it was read from.
///
/// Label bytes outside printable ASCII, and dots or backslashes inside a
/// label, are escaped so that [`encode_name`] restores the exact wire labels.
pub fn decode_name(buf: &[u8], offset: usize) -> Result<(String, usize), WireError> {
    let mut name = String::new();
    let mut pos = offset;
    let mut segment_start = offset;
    let mut end_offset: Option<usize> = None;
    let mut jumps = 0usize;
    let mut encoded_len = 0usize;

    loop {
        let len_byte = *buf.get(pos).ok_or(WireError::Truncated { offset: pos })?;

        if len_byte & POINTER_MASK == POINTER_MASK {
            let low = *buf.get(pos + 1).ok_or(WireError::Truncated { offset: pos + 1 })?;
            let target = (((len_byte & !POINTER_MASK) as usize) << 8) | low as usize;

            if target >= segment_start {
                return Err(WireError::PointerLoop { offset: pos });
            }
            jumps += 1;
            if jumps > MAX_POINTER_JUMPS {
                return Err(WireError::TooManyPointers { offset });
            }
            if end_offset.is_none() {
                end_offset = Some(pos + 2);
            }
            pos = target;
            segment_start = target;
            continue;
        }

        if len_byte & POINTER_MASK != 0 {
            return Err(WireError::UnsupportedLabel {
                byte: len_byte,
                offset: pos,
            });
        }

        if len_byte == 0 {
            pos += 1;
            break;
        }

        let len = len_byte as usize;
        let label = buf
            .get(pos + 1..pos + 1 + len)
            .ok_or(WireError::Truncated { offset: pos + 1 })?;

        encoded_len += len + 1;
        if encoded_len + 1 > MAX_NAME_LEN {
            return Err(WireError::NameTooLong);
        }

        if !name.is_empty() {
            name.push('.');
        }
        push_escaped(&mut name, label);
        pos += 1 + len;
    }

    Ok((name, end_offset.unwrap_or(pos)))
}

fn push_escaped(out: &mut String, label: &[u8]) {
    for &byte in label {
        match byte {
            b'.' | b'\\' => {
                out.push('\\');
                out.push(byte as char);
            }
            0x21..=0x7E => out.push(byte as char),
            _ => out.push_str(&format!("\\{:03}", byte)),
        }
    }
}

fn escape_label(label: &[u8]) -> String {
    let mut out = String::with_capacity(label.len());
    push_escaped(&mut out, label);
    out
}

/// Splits a presentation-form name on unescaped dots, resolving escapes.
fn split_labels(domain: &str) -> Result<Vec<Vec<u8>>, WireError> {
    let bytes = domain.as_bytes();
    let mut labels = Vec::new();
    let mut current = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                let digits = bytes
                    .get(i + 1..i + 4)
                    .filter(|d| d.iter().all(u8::is_ascii_digit));
                if let Some(digits) = digits {
                    let value = digits
                        .iter()
                        .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'));
                    let byte = u8::try_from(value)
                        .map_err(|_| WireError::InvalidEscape(domain.to_string()))?;
                    current.push(byte);
                    i += 4;
                } else {
                    let escaped = *bytes
                        .get(i + 1)
                        .ok_or_else(|| WireError::InvalidEscape(domain.to_string()))?;
                    current.push(escaped);
                    i += 2;
                }
            }
            b'.' => {
                labels.push(std::mem::take(&mut current));
                i += 1;
            }
            byte => {
                current.push(byte);
                i += 1;
            }
        }
    }

    // A trailing dot leaves one empty final label; a root name leaves nothing.
    if !current.is_empty() || labels.is_empty() {
        labels.push(current);
    }
    if labels.len() == 1 && labels[0].is_empty() {
        labels.clear();
    }
    Ok(labels)
}
