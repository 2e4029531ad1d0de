mod record;
mod record_data;
mod record_type;

pub use record::DnsRecord;
pub use record_data::RecordData;
pub use record_type::RecordType;
