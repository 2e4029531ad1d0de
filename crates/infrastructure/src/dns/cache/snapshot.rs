//! JSON persistence for [`RecordCache`].
//!
//! The snapshot is the whole `{domain: {type: [entry, ...]}}` map, expired
//! entries included. Writes go to a sibling temp file that is renamed over
//! the target, so a crash mid-write never leaves a truncated snapshot.

use super::clock::Clock;
use super::storage::{RecordCache, TypeGroups};
use async_trait::async_trait;
use dnsrelay_application::ports::{CacheSnapshotPort, SnapshotOutcome};
use dnsrelay_domain::DomainError;
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

type SnapshotMap = HashMap<String, TypeGroups>;

impl RecordCache {
    /// Builds a cache from the snapshot at `path`.
    ///
    /// A missing, unreadable or corrupt snapshot yields an empty cache; the
    /// path is still remembered so later saves recreate it.
    pub fn load(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        let path = path.into();
        let mut cache = Self::new(clock);

        match read_snapshot(&path) {
            Ok(Some(map)) => {
                for (domain, groups) in map {
                    cache.entries.insert(domain, groups);
                }
                info!(
                    path = %path.display(),
                    domains = cache.len(),
                    entries = cache.entry_count(),
                    "Cache snapshot loaded"
                );
            }
            Ok(None) => {
                info!(path = %path.display(), "No cache snapshot found, starting empty");
            }
            Err(DomainError::SnapshotError(reason)) => {
                warn!(
                    path = %path.display(),
                    error = %reason,
                    "Corrupt cache snapshot ignored, starting empty"
                );
            }
            Err(e) => {
                error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read cache snapshot, starting empty"
                );
            }
        }

        cache.snapshot_path = Some(path);
        cache
    }

    /// Writes the snapshot to the path given at load time.
    pub fn save(&self) -> Result<SnapshotOutcome, DomainError> {
        let path = self.snapshot_path.as_deref().ok_or_else(|| {
            DomainError::SnapshotError("no snapshot path configured".to_string())
        })?;
        self.save_to(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<SnapshotOutcome, DomainError> {
        let map: SnapshotMap = self
            .entries
            .iter()
            .map(|item| (item.key().clone(), item.value().clone()))
            .collect();
        let entries = map
            .values()
            .map(|groups| groups.values().map(Vec::len).sum::<usize>())
            .sum();

        let bytes = serde_json::to_vec(&map)
            .map_err(|e| DomainError::SnapshotError(format!("serialize: {}", e)))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                DomainError::IoError(format!("create {}: {}", parent.display(), e))
            })?;
        }

        let tmp = temp_path(path);
        fs::write(&tmp, &bytes)
            .map_err(|e| DomainError::IoError(format!("write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            DomainError::IoError(format!("rename to {}: {}", path.display(), e))
        })?;

        Ok(SnapshotOutcome {
            domains: map.len(),
            entries,
            bytes_written: bytes.len(),
        })
    }
}

#[async_trait]
impl CacheSnapshotPort for RecordCache {
    async fn save_snapshot(&self) -> Result<SnapshotOutcome, DomainError> {
        self.save()
    }
}

/// `Ok(None)` when the file does not exist.
fn read_snapshot(path: &Path) -> Result<Option<SnapshotMap>, DomainError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(DomainError::IoError(format!(
                "read {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| DomainError::SnapshotError(e.to_string()))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("snapshot"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_is_sibling() {
        assert_eq!(
            temp_path(Path::new("/var/lib/dnsrelay/cache_data.p")),
            PathBuf::from("/var/lib/dnsrelay/cache_data.p.tmp")
        );
        assert_eq!(temp_path(Path::new("cache_data.p")), PathBuf::from("cache_data.p.tmp"));
    }
}
