//! Backup archive.
//!
//! Every mutation batch pushes a full snapshot of the store into the
//! archive directory, one JSON document per snapshot. Entry names embed a
//! sortable timestamp plus a monotonic sequence number, so same-second
//! snapshots stay unique and ordered. The archive is pruned to the
//! [`RETAIN`] newest entries after each write.
//!
//! Restoring populates memory only; the caller must save explicitly if the
//! restored state should become the canonical file.

use crate::error::{PalletError, Result};
use crate::model::{date_format, PalletRecord};
use crate::store::PalletStore;
use chrono::NaiveDateTime;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Number of snapshots kept after pruning.
pub const RETAIN: usize = 5;

const ENTRY_PREFIX: &str = "backup-";
const ENTRY_SUFFIX: &str = ".json";
const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub app: String,
    pub version: String,
    #[serde(with = "date_format")]
    pub created_at: NaiveDateTime,
    pub records: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub metadata: SnapshotMetadata,
    pub data: Vec<PalletRecord>,
}

/// Which snapshot to restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSelector {
    Latest,
    Named(String),
}

pub struct BackupManager {
    dir: PathBuf,
}

impl BackupManager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write a new snapshot of the store and prune the archive. Returns the
    /// entry name. Pruning failures are logged, never fatal.
    pub fn snapshot(&self, store: &PalletStore, now: NaiveDateTime) -> Result<String> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let seq = self.next_seq()?;
        if seq > u32::MAX as u64 {
            // Refuse rather than write an entry the archive scan would
            // never see again.
            return Err(PalletError::Persistence(
                "backup archive sequence numbers exhausted".into(),
            ));
        }
        let name = format!(
            "{}{}-{:04}{}",
            ENTRY_PREFIX,
            now.format(TIMESTAMP_FORMAT),
            seq,
            ENTRY_SUFFIX
        );
        let doc = SnapshotDocument {
            metadata: SnapshotMetadata {
                app: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                created_at: now,
                records: store.len(),
            },
            data: store.records().to_vec(),
        };

        let content = serde_json::to_string_pretty(&doc)?;
        fs::write(self.dir.join(&name), content)?;
        info!("snapshot {} written ({} records)", name, store.len());

        self.prune();
        Ok(name)
    }

    /// Entry names, newest first.
    pub fn list_snapshots(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries: Vec<(String, u128)> = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let name = entry?.file_name().to_string_lossy().into_owned();
            if let Some(key) = entry_key(&name) {
                entries.push((name, key));
            }
        }
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(entries.into_iter().map(|(name, _)| name).collect())
    }

    /// Restore a snapshot into a fresh store, returning the resolved entry
    /// name alongside it. Does not touch the canonical file or any live
    /// store.
    pub fn restore(&self, selector: &SnapshotSelector) -> Result<(String, PalletStore)> {
        let name = self.resolve(selector)?;
        let content = fs::read_to_string(self.dir.join(&name))?;
        let doc: SnapshotDocument = serde_json::from_str(&content)
            .map_err(|e| PalletError::Schema(format!("snapshot {}: {}", name, e)))?;

        if doc.metadata.records != doc.data.len() {
            warn!(
                "snapshot {} metadata claims {} records, found {}",
                name,
                doc.metadata.records,
                doc.data.len()
            );
        }
        info!("restored snapshot {} ({} records)", name, doc.data.len());
        Ok((name, PalletStore::from_records(doc.data)))
    }

    fn resolve(&self, selector: &SnapshotSelector) -> Result<String> {
        match selector {
            SnapshotSelector::Latest => self
                .list_snapshots()?
                .into_iter()
                .next()
                .ok_or_else(|| PalletError::SnapshotNotFound("latest (archive is empty)".into())),
            SnapshotSelector::Named(name) => {
                if entry_key(name).is_some() && self.dir.join(name).is_file() {
                    Ok(name.clone())
                } else {
                    Err(PalletError::SnapshotNotFound(name.clone()))
                }
            }
        }
    }

    fn next_seq(&self) -> Result<u64> {
        let max = self
            .list_snapshots()?
            .iter()
            .filter_map(|name| entry_key(name))
            .map(|key| (key & u128::from(u32::MAX)) as u64)
            .max()
            .unwrap_or(0);
        Ok(max + 1)
    }

    fn prune(&self) {
        let entries = match self.list_snapshots() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("cannot list archive for pruning: {}", e);
                return;
            }
        };
        for name in entries.iter().skip(RETAIN) {
            match fs::remove_file(self.dir.join(name)) {
                Ok(()) => info!("pruned snapshot {}", name),
                Err(e) => warn!("failed to prune snapshot {}: {}", name, e),
            }
        }
    }
}

/// Sort key for an entry name: timestamp digits in the high bits, sequence
/// number in the low 32. Returns None for files that are not snapshots.
fn entry_key(name: &str) -> Option<u128> {
    let body = name
        .strip_prefix(ENTRY_PREFIX)?
        .strip_suffix(ENTRY_SUFFIX)?;
    // <YYYYMMDD>T<HHMMSS>-<seq>
    let (stamp, seq) = body.rsplit_once('-')?;
    let bytes = stamp.as_bytes();
    if bytes.len() != 15 || bytes[8] != b'T' {
        return None;
    }
    if !bytes[..8].iter().all(|b| b.is_ascii_digit())
        || !bytes[9..].iter().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let ts: u64 = format!("{}{}", &stamp[..8], &stamp[9..]).parse().ok()?;
    let seq: u64 = seq.parse().ok()?;
    if seq > u32::MAX as u64 {
        return None;
    }
    Some((u128::from(ts) << 32) | u128::from(seq))
}
