//! JSON snapshot persistence
//!
//! The snapshot is the full record set serialized as a JSON array. Writes
//! go through a temp file in the same directory, fsync, then an atomic
//! rename, so a crash mid-write leaves the previous snapshot intact.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::errors::{StoreError, StoreResult};
use super::record::AnalyzedRecord;

/// Load records from a snapshot file.
///
/// A missing file is an empty store, not an error.
pub fn load_snapshot(path: &Path) -> StoreResult<Vec<AnalyzedRecord>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(StoreError::Snapshot(format!(
                "Failed to read snapshot {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_str(&content).map_err(|e| {
        StoreError::Snapshot(format!("Invalid snapshot {}: {}", path.display(), e))
    })
}

/// Write the full record set to the snapshot file atomically.
pub fn save_snapshot(path: &Path, records: &[AnalyzedRecord]) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::Snapshot(format!(
                    "Failed to create snapshot directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let body = serde_json::to_vec_pretty(records)
        .map_err(|e| StoreError::Snapshot(format!("Failed to encode snapshot: {}", e)))?;

    let tmp_path = path.with_extension("tmp");

    let mut tmp = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&tmp_path)
        .map_err(|e| {
            StoreError::Snapshot(format!("Failed to open {}: {}", tmp_path.display(), e))
        })?;

    tmp.write_all(&body)
        .and_then(|_| tmp.sync_all())
        .map_err(|e| {
            StoreError::Snapshot(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;
    drop(tmp);

    fs::rename(&tmp_path, path).map_err(|e| {
        StoreError::Snapshot(format!(
            "Failed to rename {} to {}: {}",
            tmp_path.display(),
            path.display(),
            e
        ))
    })?;

    // Make the rename durable
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }
    }

    Ok(())
}
