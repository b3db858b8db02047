use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Location, PalletRecord, Status};
use crate::store::PalletStore;

/// Create one record per candidate id. Ids that already exist are skipped,
/// never overwritten; the batch is best-effort and reports both sides.
pub fn run<C: Clock>(
    store: &mut PalletStore,
    clock: &C,
    ids: &[String],
    location: Location,
    status: Status,
) -> Result<CmdResult> {
    let mut added = Vec::new();
    let mut skipped = Vec::new();

    for id in ids {
        let record = PalletRecord::new(id.clone(), location, status, clock.now());
        if store.insert(record) {
            added.push(id.clone());
        } else {
            skipped.push(id.clone());
        }
    }

    let mut result = CmdResult::default();
    if added.is_empty() {
        result.add_message(CmdMessage::info("No new pallets added."));
    } else {
        result.add_message(CmdMessage::success(format!("Added: {}", added.join(", "))));
    }
    if !skipped.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Skipped (already exists): {}",
            skipped.join(", ")
        )));
    }

    Ok(result.with_partition(added, skipped))
}
