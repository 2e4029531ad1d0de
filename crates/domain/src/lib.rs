//! dnsrelay Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_question;
pub mod dns_record;
pub mod errors;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{DnsHeader, DnsMessage};
pub use dns_question::DnsQuestion;
pub use dns_record::{DnsRecord, RecordData, RecordType};
pub use errors::DomainError;
pub use wire::WireError;
