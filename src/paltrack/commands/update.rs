use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Location, Status};
use crate::store::PalletStore;

/// Overwrite location and status for each existing id; unknown ids go to
/// the not-found partition and are never created.
pub fn run<C: Clock>(
    store: &mut PalletStore,
    clock: &C,
    ids: &[String],
    new_location: Location,
    new_status: Status,
) -> Result<CmdResult> {
    let mut updated = Vec::new();
    let mut not_found = Vec::new();

    for id in ids {
        match store.get_mut(id) {
            Some(rec) => {
                rec.location = new_location;
                rec.status = new_status;
                rec.touch(clock.now());
                updated.push(id.clone());
            }
            None => not_found.push(id.clone()),
        }
    }

    let mut result = CmdResult::default();
    if updated.is_empty() {
        result.add_message(CmdMessage::info("No pallets updated."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Updated: {}",
            updated.join(", ")
        )));
    }
    if !not_found.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Not found: {}",
            not_found.join(", ")
        )));
    }

    Ok(result.with_partition(updated, not_found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::commands::add;
    use crate::model::parse_date;

    fn clock_at(s: &str) -> FixedClock {
        FixedClock(parse_date(s).unwrap())
    }

    #[test]
    fn updates_existing_and_reports_missing() {
        let mut store = PalletStore::new();
        add::run(
            &mut store,
            &clock_at("2025-03-01 08:00:00"),
            &["P001".to_string()],
            Location::Sgt,
            Status::ReceivedAt,
        )
        .unwrap();

        let ids = vec!["P001".to_string(), "P002".to_string()];
        let result = run(
            &mut store,
            &clock_at("2025-03-02 09:00:00"),
            &ids,
            Location::Dkp,
            Status::Delivered,
        )
        .unwrap();

        assert_eq!(result.applied, vec!["P001"]);
        assert_eq!(result.rejected, vec!["P002"]);

        let rec = store.get("P001").unwrap();
        assert_eq!(rec.location, Location::Dkp);
        assert_eq!(rec.status, Status::Delivered);
        assert_eq!(rec.updated_at, parse_date("2025-03-02 09:00:00").unwrap());

        // Missing ids are not created.
        assert!(store.get("P002").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_on_empty_store_touches_nothing() {
        let mut store = PalletStore::new();
        let result = run(
            &mut store,
            &clock_at("2025-03-01 08:00:00"),
            &["P001".to_string()],
            Location::Ofc,
            Status::InTransitTo,
        )
        .unwrap();
        assert!(result.applied.is_empty());
        assert_eq!(result.rejected, vec!["P001"]);
        assert!(store.is_empty());
    }

    #[test]
    fn timestamp_never_regresses_on_update() {
        let mut store = PalletStore::new();
        add::run(
            &mut store,
            &clock_at("2025-03-05 12:00:00"),
            &["P001".to_string()],
            Location::Sgt,
            Status::ReceivedAt,
        )
        .unwrap();

        run(
            &mut store,
            &clock_at("2025-03-01 08:00:00"),
            &["P001".to_string()],
            Location::Dkp,
            Status::Delivered,
        )
        .unwrap();

        assert_eq!(
            store.get("P001").unwrap().updated_at,
            parse_date("2025-03-05 12:00:00").unwrap()
        );
    }
}
