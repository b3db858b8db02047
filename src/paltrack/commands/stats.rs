use crate::commands::{CmdMessage, CmdResult, StatusTally};
use crate::error::Result;
use crate::model::{Location, Status};
use crate::store::PalletStore;
use std::collections::HashMap;

/// Record counts grouped by location and status, in the fixed vocabulary
/// order. Empty buckets are omitted. This is the data behind the
/// distribution view; rendering belongs to the caller.
pub fn run(store: &PalletStore) -> Result<CmdResult> {
    let mut counts: HashMap<(Location, Status), usize> = HashMap::new();
    for rec in store.iter() {
        *counts.entry((rec.location, rec.status)).or_default() += 1;
    }

    let mut tallies = Vec::new();
    for location in Location::ALL {
        for status in Status::ALL {
            if let Some(&count) = counts.get(&(location, status)) {
                tallies.push(StatusTally {
                    location,
                    status,
                    count,
                });
            }
        }
    }

    let mut result = CmdResult::default();
    if tallies.is_empty() {
        result.add_message(CmdMessage::info("No pallets tracked yet."));
    }
    Ok(result.with_tallies(tallies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::commands::{add, discard};
    use crate::model::parse_date;

    #[test]
    fn counts_by_location_and_status() {
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
            &["P003".to_string()],
            Location::Dkp,
            Status::Delivered,
        )
        .unwrap();
        discard::run(&mut store, &clock, &["P002".to_string()]).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(
            result.tallies,
            vec![
                StatusTally {
                    location: Location::Sgt,
                    status: Status::ReceivedAt,
                    count: 1,
                },
                StatusTally {
                    location: Location::Sgt,
                    status: Status::Discarded,
                    count: 1,
                },
                StatusTally {
                    location: Location::Dkp,
                    status: Status::Delivered,
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn empty_store_yields_no_tallies() {
        let result = run(&PalletStore::new()).unwrap();
        assert!(result.tallies.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
