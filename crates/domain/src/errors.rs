use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed DNS packet: {0}")]
    MalformedPacket(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("Cache snapshot error: {0}")]
    SnapshotError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DomainError::QueryTimeout)
    }
}

impl From<crate::wire::WireError> for DomainError {
    fn from(err: crate::wire::WireError) -> Self {
        DomainError::MalformedPacket(err.to_string())
    }
}
