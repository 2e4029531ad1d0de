pub mod cache;
pub mod server;
pub mod transport;

pub use cache::{CacheEntry, Clock, ManualClock, RecordCache, SystemClock};
pub use server::DnsServerHandler;
pub use transport::{UdpTransport, UdpUpstreamResolver};
