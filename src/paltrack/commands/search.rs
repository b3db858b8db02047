use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::PalletStore;

/// Case-insensitive substring search over pallet number and location
/// label, preserving store order. Read-only.
pub fn run(store: &PalletStore, term: &str) -> Result<CmdResult> {
    let term_lower = term.to_lowercase();
    let matches: Vec<_> = store
        .iter()
        .filter(|rec| {
            rec.id.to_lowercase().contains(&term_lower)
                || rec.location.label().to_lowercase().contains(&term_lower)
        })
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No pallets match {:?}.", term)));
    }
    Ok(result.with_records(matches))
}

/// Exact lookup by pallet number. Read-only.
pub fn find(store: &PalletStore, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.get(id) {
        Some(rec) => result.records.push(rec.clone()),
        None => result.add_message(CmdMessage::error(format!("Pallet {} not found!", id))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::commands::add;
    use crate::model::{parse_date, Location, Status};

    fn seeded_store() -> PalletStore {
        let clock = FixedClock(parse_date("2025-03-01 08:00:00").unwrap());
        let mut store = PalletStore::new();
        add::run(
            &mut store,
            &clock,
            &["P001".to_string(), "P002".to_string()],
            Location::Sgt,
            Status::ReceivedAt,
        )
        .unwrap();
        add::run(
            &mut store,
            &clock,
            &["Q001".to_string()],
            Location::EndCustomer,
            Status::Delivered,
        )
        .unwrap();
        store
    }

    #[test]
    fn matches_id_substring_case_insensitively() {
        let store = seeded_store();
        let result = run(&store, "p00").unwrap();
        let ids: Vec<&str> = result.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["P001", "P002"]);
    }

    #[test]
    fn matches_location_label() {
        let store = seeded_store();
        let result = run(&store, "customer").unwrap();
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].id, "Q001");
    }

    #[test]
    fn no_match_reports_info_message() {
        let store = seeded_store();
        let result = run(&store, "zzz").unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn find_is_exact() {
        let store = seeded_store();
        assert_eq!(find(&store, "P001").unwrap().records.len(), 1);
        assert!(find(&store, "P0").unwrap().records.is_empty());
    }

    #[test]
    fn search_never_mutates() {
        let store = seeded_store();
        let before = store.records().to_vec();
        run(&store, "p").unwrap();
        find(&store, "P001").unwrap();
        assert_eq!(store.records(), before.as_slice());
    }
}
