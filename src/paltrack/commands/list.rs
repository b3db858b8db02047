use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::PalletStore;

/// All records in insertion order. Read-only.
pub fn run(store: &PalletStore) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_records(store.records().to_vec());
    if result.records.is_empty() {
        result.add_message(CmdMessage::info("No pallets tracked yet."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::commands::add;
    use crate::model::{parse_date, Location, Status};

    #[test]
    fn lists_in_insertion_order() {
        let clock = FixedClock(parse_date("2025-03-01 08:00:00").unwrap());
        let mut store = PalletStore::new();
        add::run(
            &mut store,
            &clock,
            &["Z009".to_string(), "A001".to_string()],
            Location::Sgt,
            Status::ReceivedAt,
        )
        .unwrap();

        let result = run(&store).unwrap();
        let ids: Vec<&str> = result.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["Z009", "A001"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_gets_a_hint() {
        let result = run(&PalletStore::new()).unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
