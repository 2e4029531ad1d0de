//! DNS wire-format codec (RFC 1035 §4).
//!
//! Pure and stateless: every function takes the whole message buffer and an
//! offset, and never reads past the end of the buffer. Decoding of a name
//! follows compression pointers only strictly backwards, so adversarial
//! pointer cycles terminate with [`WireError::PointerLoop`].

mod header;
mod message;
mod name;
mod question;
mod record;
mod response;

pub use header::{decode_header, encode_header};
pub use message::decode_message;
pub use name::{decode_name, encode_name};
pub use question::decode_question;
pub use record::{decode_record, encode_record};
pub use response::{build_cached_response, build_servfail_response};

use thiserror::Error;

/// Fixed size of the message header.
pub const HEADER_LEN: usize = 12;

/// Longest label allowed in a domain name.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded domain name, including length bytes and the terminator.
pub const MAX_NAME_LEN: usize = 255;

/// Upper bound on compression pointers followed while decoding one name.
pub const MAX_POINTER_JUMPS: usize = 128;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("buffer truncated at offset {offset}")]
    Truncated { offset: usize },

    #[error("compression pointer at offset {offset} does not point backwards")]
    PointerLoop { offset: usize },

    #[error("too many compression pointers while decoding name at offset {offset}")]
    TooManyPointers { offset: usize },

    #[error("unsupported label type {byte:#04x} at offset {offset}")]
    UnsupportedLabel { byte: u8, offset: usize },

    #[error("label '{0}' exceeds 63 bytes")]
    LabelTooLong(String),

    #[error("empty label in domain name '{0}'")]
    EmptyLabel(String),

    #[error("invalid escape sequence in domain name '{0}'")]
    InvalidEscape(String),

    #[error("domain name exceeds 255 encoded bytes")]
    NameTooLong,

    #[error("record data of {0} bytes does not fit a 16-bit length")]
    RdataTooLong(usize),

    #[error("{0} records do not fit a 16-bit section count")]
    TooManyRecords(usize),
}

pub(crate) fn read_u16(buf: &[u8], offset: usize) -> Result<u16, WireError> {
    buf.get(offset..offset + 2)
        .map(|b| u16::from_be_bytes([b[0], b[1]]))
        .ok_or(WireError::Truncated { offset })
}

pub(crate) fn read_u32(buf: &[u8], offset: usize) -> Result<u32, WireError> {
    buf.get(offset..offset + 4)
        .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or(WireError::Truncated { offset })
}
