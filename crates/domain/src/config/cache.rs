use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,

    /// Seconds between periodic snapshots; 0 disables them.
    #[serde(default = "default_snapshot_interval_secs")]
    pub snapshot_interval_secs: u64,

    #[serde(default = "default_true")]
    pub save_on_shutdown: bool,
}

impl CacheConfig {
    pub fn snapshot_interval(&self) -> Option<Duration> {
        (self.snapshot_interval_secs > 0)
            .then(|| Duration::from_secs(self.snapshot_interval_secs))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            snapshot_interval_secs: default_snapshot_interval_secs(),
            save_on_shutdown: true,
        }
    }
}

fn default_snapshot_path() -> String {
    "cache_data.p".to_string()
}

fn default_snapshot_interval_secs() -> u64 {
    300
}

fn default_true() -> bool {
    true
}
