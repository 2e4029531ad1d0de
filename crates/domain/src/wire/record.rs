use super::{decode_name, encode_name, read_u16, read_u32, WireError};
use crate::{DnsRecord, RecordData, RecordType};

/// Type, class, TTL and RDLENGTH following the owner name.
const FIXED_FIELDS_LEN: usize = 10;

/// Decodes one resource record starting at `offset`.
///
/// Address types keep RDLENGTH raw bytes. NS and SOA decode the embedded name
/// at the start of RDATA and trust its own terminator rather than RDLENGTH.
/// All other types keep their RDATA untouched. The returned offset is always
/// the end of RDATA as declared by RDLENGTH.
pub fn decode_record(buf: &[u8], offset: usize) -> Result<(DnsRecord, usize), WireError> {
    let (domain, pos) = decode_name(buf, offset)?;

    let record_type = RecordType::from_u16(read_u16(buf, pos)?);
    let class = read_u16(buf, pos + 2)?;
    let ttl = read_u32(buf, pos + 4)?;
    let rdlength = read_u16(buf, pos + 8)? as usize;

    let rdata_start = pos + FIXED_FIELDS_LEN;
    let rdata_end = rdata_start + rdlength;
    let rdata = buf
        .get(rdata_start..rdata_end)
        .ok_or(WireError::Truncated {
            offset: rdata_start,
        })?;

    let data = if record_type.is_address() {
        RecordData::Address(rdata.to_vec())
    } else if record_type.carries_name() {
        let (name, _) = decode_name(buf, rdata_start)?;
        RecordData::Name(name)
    } else {
        RecordData::Raw(rdata.to_vec())
    };

    Ok((
        DnsRecord::new(domain, record_type, class, ttl, data),
        rdata_end,
    ))
}

/// Encodes a record with an uncompressed owner name.
///
/// NS data is written as the encoded name followed by one extra zero byte,
/// with RDLENGTH counting that byte. Other name data (SOA) is written as the
/// plain encoded name. Byte payloads are written literally.
pub fn encode_record(record: &DnsRecord) -> Result<Vec<u8>, WireError> {
    let mut out = encode_name(&record.domain)?;
    out.extend_from_slice(&record.record_type.to_u16().to_be_bytes());
    out.extend_from_slice(&record.class.to_be_bytes());
    out.extend_from_slice(&record.ttl.to_be_bytes());

    match &record.data {
        RecordData::Name(name) => {
            let encoded = encode_name(name)?;
            if record.record_type == RecordType::NS {
                push_rdlength(&mut out, encoded.len() + 1)?;
                out.extend_from_slice(&encoded);
                out.push(0);
            } else {
                push_rdlength(&mut out, encoded.len())?;
                out.extend_from_slice(&encoded);
            }
        }
        RecordData::Address(bytes) | RecordData::Raw(bytes) => {
            push_rdlength(&mut out, bytes.len())?;
            out.extend_from_slice(bytes);
        }
    }
    Ok(out)
}

fn push_rdlength(out: &mut Vec<u8>, len: usize) -> Result<(), WireError> {
    let len16 = u16::try_from(len).map_err(|_| WireError::RdataTooLong(len))?;
    out.extend_from_slice(&len16.to_be_bytes());
    Ok(())
}
