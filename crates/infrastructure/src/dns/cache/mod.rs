//! In-memory record cache with lazy TTL expiry and JSON snapshots.

pub mod clock;
pub mod entry;
pub mod snapshot;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use storage::RecordCache;
