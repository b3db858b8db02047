//! Persistence gateway for the canonical data file.
//!
//! The file is a plain comma-separated table with a fixed header:
//! `Pallet_No,Location,Status,Date`. None of the field vocabularies
//! contain commas, so no quoting is needed. Saves go through a sibling
//! temp file followed by an atomic rename, so a half-written canonical
//! file is never observable.

use super::PalletStore;
use crate::error::{PalletError, Result};
use crate::model::{parse_date, PalletRecord, Location, Status, DATE_FORMAT};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "Pallet_No,Location,Status,Date";

pub struct CsvGateway {
    path: PathBuf,
}

impl CsvGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the canonical file. A missing file is an empty store; rows that
    /// fail to parse are dropped with a warning; a bad header is a schema
    /// error and the caller decides the fallback.
    pub fn load(&self) -> Result<PalletStore> {
        if !self.path.exists() {
            return Ok(PalletStore::new());
        }
        let content = fs::read_to_string(&self.path)?;
        parse_table(&content)
    }

    /// Write the full table. The in-memory store stays authoritative on
    /// failure; nothing is durably committed unless the rename succeeds.
    pub fn save(&self, store: &PalletStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    PalletError::Persistence(format!("creating {}: {}", parent.display(), e))
                })?;
            }
        }

        let tmp = self.path.with_extension("csv.tmp");
        fs::write(&tmp, render_table(store))
            .map_err(|e| PalletError::Persistence(format!("writing {}: {}", tmp.display(), e)))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(PalletError::Persistence(format!(
                "replacing {}: {}",
                self.path.display(),
                e
            )));
        }

        info!("saved {} records to {}", store.len(), self.path.display());
        Ok(())
    }
}

fn parse_table(content: &str) -> Result<PalletStore> {
    let mut lines = content.lines();
    let header = lines.next().map(str::trim_end).unwrap_or("");
    if header != HEADER {
        return Err(PalletError::Schema(format!(
            "expected header {:?}, found {:?}",
            HEADER, header
        )));
    }

    let mut records = Vec::new();
    for (lineno, line) in lines.enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        match parse_row(line) {
            Ok(rec) => records.push(rec),
            Err(reason) => warn!("dropping row {}: {} ({:?})", lineno + 2, reason, line),
        }
    }
    Ok(PalletStore::from_records(records))
}

fn parse_row(line: &str) -> std::result::Result<PalletRecord, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [id, location, status, date] = fields.as_slice() else {
        return Err(format!("expected 4 fields, found {}", fields.len()));
    };

    if id.is_empty() {
        return Err("empty pallet number".to_string());
    }
    let location =
        Location::parse_label(location).ok_or_else(|| format!("unknown location {:?}", location))?;
    let status =
        Status::parse_label(status).ok_or_else(|| format!("unknown status {:?}", status))?;
    let updated_at = parse_date(date).ok_or_else(|| format!("unparseable date {:?}", date))?;

    Ok(PalletRecord {
        id: id.to_string(),
        location,
        status,
        updated_at,
    })
}

fn render_table(store: &PalletStore) -> String {
    let mut out = String::with_capacity(64 * (store.len() + 1));
    out.push_str(HEADER);
    out.push('\n');
    for rec in store.iter() {
        out.push_str(&format!(
            "{},{},{},{}\n",
            rec.id,
            rec.location,
            rec.status,
            rec.updated_at.format(DATE_FORMAT)
        ));
    }
    out
}
