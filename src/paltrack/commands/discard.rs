use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Status;
use crate::store::PalletStore;

/// Force status to `Discarded` for each existing id. Location is left
/// unchanged and the row stays in the store.
pub fn run<C: Clock>(store: &mut PalletStore, clock: &C, ids: &[String]) -> Result<CmdResult> {
    let mut discarded = Vec::new();
    let mut not_found = Vec::new();

    for id in ids {
        match store.get_mut(id) {
            Some(rec) => {
                rec.status = Status::Discarded;
                rec.touch(clock.now());
                discarded.push(id.clone());
            }
            None => not_found.push(id.clone()),
        }
    }

    let mut result = CmdResult::default();
    if discarded.is_empty() {
        result.add_message(CmdMessage::info("No pallets discarded."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Discarded: {}",
            discarded.join(", ")
        )));
    }
    if !not_found.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Not found: {}",
            not_found.join(", ")
        )));
    }

    Ok(result.with_partition(discarded, not_found))
}
