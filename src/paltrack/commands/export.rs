use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PalletError, Result};
use crate::model::DATE_FORMAT;
use crate::store::PalletStore;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated, opens directly in spreadsheet applications.
    Csv,
    /// Tab-separated plain text.
    Tsv,
}

impl ExportFormat {
    fn separator(&self) -> char {
        match self {
            ExportFormat::Csv => ',',
            ExportFormat::Tsv => '\t',
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }
}

/// Write the full store to `output`, or to a timestamped file in the
/// current directory. Read-only with respect to core state.
pub fn run(
    store: &PalletStore,
    format: ExportFormat,
    output: Option<PathBuf>,
    now: NaiveDateTime,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.is_empty() {
        result.add_message(CmdMessage::info("No pallets to export."));
        return Ok(result);
    }

    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "paltrack-{}.{}",
            now.format("%Y-%m-%d_%H%M%S"),
            format.extension()
        ))
    });
    let file = File::create(&path).map_err(PalletError::Io)?;
    write_delimited(file, store, format.separator())?;

    result.add_message(CmdMessage::success(format!(
        "Exported {} pallets to {}",
        store.len(),
        path.display()
    )));
    Ok(result)
}

fn write_delimited<W: Write>(mut writer: W, store: &PalletStore, sep: char) -> Result<()> {
    writeln!(
        writer,
        "Pallet_No{sep}Location{sep}Status{sep}Date",
        sep = sep
    )?;
    for rec in store.iter() {
        writeln!(
            writer,
            "{id}{sep}{loc}{sep}{status}{sep}{date}",
            id = rec.id,
            loc = rec.location,
            status = rec.status,
            date = rec.updated_at.format(DATE_FORMAT),
            sep = sep
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, FixedClock};
    use crate::commands::add;
    use crate::model::{parse_date, Location, Status};

    fn seeded_store() -> PalletStore {
        let clock = FixedClock(parse_date("2025-03-01 08:00:00").unwrap());
        let mut store = PalletStore::new();
        add::run(
            &mut store,
            &clock,
            &["P001".to_string(), "P002".to_string()],
            Location::EndCustomer,
            Status::Delivered,
        )
        .unwrap();
        store
    }

    #[test]
    fn writes_csv_rows() {
        let mut buf = Vec::new();
        write_delimited(&mut buf, &seeded_store(), ',').unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Pallet_No,Location,Status,Date\n\
             P001,End Customer,Delivered,2025-03-01 08:00:00\n\
             P002,End Customer,Delivered,2025-03-01 08:00:00\n"
        );
    }

    #[test]
    fn writes_tsv_rows() {
        let mut buf = Vec::new();
        write_delimited(&mut buf, &seeded_store(), '\t').unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Pallet_No\tLocation\tStatus\tDate\n"));
        assert!(text.contains("P001\tEnd Customer\tDelivered\t"));
    }

    #[test]
    fn empty_store_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("export.csv");
        let clock = FixedClock(parse_date("2025-03-01 08:00:00").unwrap());

        let result = run(
            &PalletStore::new(),
            ExportFormat::Csv,
            Some(out.clone()),
            clock.now(),
        )
        .unwrap();
        assert!(!out.exists());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn export_writes_to_requested_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("export.tsv");
        let clock = FixedClock(parse_date("2025-03-01 08:00:00").unwrap());

        run(
            &seeded_store(),
            ExportFormat::Tsv,
            Some(out.clone()),
            clock.now(),
        )
        .unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.contains("P002\tEnd Customer"));
    }
}
