//! # API Facade
//!
//! [`PalletApi`] is the single entry point for every operation, regardless
//! of the client driving it. It owns the in-memory store, the persistence
//! gateway, and the backup manager, and it enforces the control flow the
//! clients must not reimplement: derive the identifier sequence, run the
//! batch, then flush (save the canonical file and push a snapshot).
//!
//! The facade holds no presentation concerns; it returns structured
//! [`CmdResult`] values and never touches stdout or stderr. It is generic
//! over [`Clock`] so the whole mutation path is deterministic under test.

use crate::backup::{BackupManager, SnapshotSelector};
use crate::clock::Clock;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Location, Status};
use crate::sequence;
use crate::store::csv::CsvGateway;
use crate::store::PalletStore;
use log::warn;
use std::path::PathBuf;

pub use crate::commands::export::ExportFormat;

pub struct PalletApi<C: Clock> {
    store: PalletStore,
    gateway: CsvGateway,
    backups: BackupManager,
    clock: C,
}

impl<C: Clock> PalletApi<C> {
    pub fn new(store: PalletStore, gateway: CsvGateway, backups: BackupManager, clock: C) -> Self {
        Self {
            store,
            gateway,
            backups,
            clock,
        }
    }

    pub fn store(&self) -> &PalletStore {
        &self.store
    }

    /// Add `count` sequentially numbered pallets starting at `start`.
    /// Identifier validation aborts before any mutation; duplicates are
    /// partitioned, not fatal.
    pub fn add_pallets(
        &mut self,
        start: &str,
        count: usize,
        location: Location,
        status: Status,
    ) -> Result<CmdResult> {
        let ids = sequence::generate_sequence(start, count)?;
        let mut result =
            commands::add::run(&mut self.store, &self.clock, &ids, location, status)?;
        self.flush(&mut result)?;
        Ok(result)
    }

    /// Overwrite location and status for `count` pallets starting at
    /// `start`. Never creates records.
    pub fn update_pallets(
        &mut self,
        start: &str,
        count: usize,
        new_location: Location,
        new_status: Status,
    ) -> Result<CmdResult> {
        let ids = sequence::generate_sequence(start, count)?;
        let mut result =
            commands::update::run(&mut self.store, &self.clock, &ids, new_location, new_status)?;
        self.flush(&mut result)?;
        Ok(result)
    }

    /// Mark `count` pallets starting at `start` as discarded.
    pub fn discard_pallets(&mut self, start: &str, count: usize) -> Result<CmdResult> {
        let ids = sequence::generate_sequence(start, count)?;
        let mut result = commands::discard::run(&mut self.store, &self.clock, &ids)?;
        self.flush(&mut result)?;
        Ok(result)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find(&self, id: &str) -> Result<CmdResult> {
        commands::search::find(&self.store, id)
    }

    pub fn search(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn export(&self, format: ExportFormat, output: Option<PathBuf>) -> Result<CmdResult> {
        commands::export::run(&self.store, format, output, self.clock.now())
    }

    /// Push a snapshot of the current store without mutating anything.
    pub fn snapshot(&self) -> Result<CmdResult> {
        let name = self.backups.snapshot(&self.store, self.clock.now())?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!("Snapshot written: {}", name)));
        Ok(result)
    }

    /// Snapshot names, newest first.
    pub fn list_snapshots(&self) -> Result<Vec<String>> {
        self.backups.list_snapshots()
    }

    /// Replace the in-memory store with a snapshot's contents. The
    /// canonical file is only rewritten when `commit` is set; otherwise the
    /// restored state lives in memory until the next explicit save.
    pub fn restore(&mut self, selector: &SnapshotSelector, commit: bool) -> Result<CmdResult> {
        let (name, restored) = self.backups.restore(selector)?;

        self.store = restored;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Restored {} pallets from {}",
            self.store.len(),
            name
        )));
        if commit {
            self.gateway.save(&self.store)?;
            result.add_message(CmdMessage::info("Restored state written to the data file."));
        } else {
            result.add_message(CmdMessage::info(
                "Restored state is in memory only; pass --commit to write the data file.",
            ));
        }
        Ok(result)
    }

    /// Persist the store and push a snapshot. Save failures abort (the
    /// in-memory store stays authoritative); snapshot failures degrade to a
    /// warning because the canonical file is already safe.
    fn flush(&self, result: &mut CmdResult) -> Result<()> {
        self.gateway.save(&self.store)?;
        if let Err(e) = self.backups.snapshot(&self.store, self.clock.now()) {
            warn!("snapshot failed after save: {}", e);
            result.add_message(CmdMessage::warning(format!("Backup snapshot failed: {}", e)));
        }
        Ok(())
    }
}
