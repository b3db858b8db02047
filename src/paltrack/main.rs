use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use paltrack::api::PalletApi;
use paltrack::backup::{BackupManager, SnapshotSelector};
use paltrack::clock::SystemClock;
use paltrack::commands::{CmdMessage, CmdResult, MessageLevel, StatusTally};
use paltrack::config::PaltrackConfig;
use paltrack::error::{PalletError, Result};
use paltrack::model::{PalletRecord, DATE_FORMAT};
use paltrack::store::csv::CsvGateway;
use paltrack::store::PalletStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{BackupCommands, Cli, Commands};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_context(&cli)?;

    match cli.command {
        Commands::Add {
            ref start,
            count,
            location,
            status,
        } => {
            let result = api.add_pallets(start, count, location, status)?;
            print_messages(&result.messages);
        }
        Commands::Update {
            ref start,
            count,
            location,
            status,
        } => {
            let result = api.update_pallets(start, count, location, status)?;
            print_messages(&result.messages);
        }
        Commands::Discard { ref start, count } => {
            let result = api.discard_pallets(start, count)?;
            print_messages(&result.messages);
        }
        Commands::List => {
            let result = api.list()?;
            print_result(&result);
        }
        Commands::Find { ref id } => {
            let result = api.find(id)?;
            print_result(&result);
        }
        Commands::Search { ref term } => {
            let result = api.search(term)?;
            print_result(&result);
        }
        Commands::Stats => {
            let result = api.stats()?;
            print_tallies(&result.tallies);
            print_messages(&result.messages);
        }
        Commands::Export { format, ref output } => {
            let result = api.export(format, output.clone())?;
            print_messages(&result.messages);
        }
        Commands::Backup(ref backup) => handle_backup(&mut api, backup)?,
    }
    Ok(())
}

fn init_context(cli: &Cli) -> Result<PalletApi<SystemClock>> {
    let data_dir = resolve_data_dir(cli)?;
    // A config file that exists but cannot be parsed must not silently
    // fall back to defaults: that would drop a configured credential gate.
    let config = PaltrackConfig::load(&data_dir)
        .map_err(|e| PalletError::Schema(format!("cannot read config.json: {}", e)))?;

    if let Some(creds) = &config.credentials {
        let user = cli
            .user
            .clone()
            .or_else(|| std::env::var("PALTRACK_USER").ok())
            .unwrap_or_default();
        let password = cli
            .password
            .clone()
            .or_else(|| std::env::var("PALTRACK_PASSWORD").ok())
            .unwrap_or_default();
        if !creds.verify(&user, &password) {
            return Err(PalletError::Auth(
                "invalid credentials (pass --user and --password)".into(),
            ));
        }
    }

    let gateway = CsvGateway::new(data_dir.join(&config.data_file));
    let backups = BackupManager::new(data_dir.join(&config.backup_dir));

    let store = match gateway.load() {
        Ok(store) => store,
        Err(PalletError::Schema(e)) => {
            eprintln!(
                "{}",
                format!(
                    "Warning: data file is malformed ({}); starting from an empty table.",
                    e
                )
                .yellow()
            );
            PalletStore::new()
        }
        Err(e) => return Err(e),
    };

    Ok(PalletApi::new(store, gateway, backups, SystemClock))
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "paltrack", "paltrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PalletError::Persistence("could not determine data directory".into()))
}

fn handle_backup(api: &mut PalletApi<SystemClock>, command: &BackupCommands) -> Result<()> {
    match command {
        BackupCommands::Create => {
            let result = api.snapshot()?;
            print_messages(&result.messages);
        }
        BackupCommands::List => {
            let entries = api.list_snapshots()?;
            if entries.is_empty() {
                println!("{}", "No snapshots yet.".dimmed());
            }
            for entry in entries {
                println!("{}", entry);
            }
        }
        BackupCommands::Restore { entry, commit } => {
            let selector = if entry == "latest" {
                SnapshotSelector::Latest
            } else {
                SnapshotSelector::Named(entry.clone())
            };
            let result = api.restore(&selector, *commit)?;
            print_records(api.store().records());
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn print_result(result: &CmdResult) {
    print_records(&result.records);
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_records(records: &[PalletRecord]) {
    if records.is_empty() {
        return;
    }

    let id_width = records
        .iter()
        .map(|r| r.id.width())
        .chain(std::iter::once("Pallet".width()))
        .max()
        .unwrap_or(0);
    let loc_width = records
        .iter()
        .map(|r| r.location.label().width())
        .chain(std::iter::once("Location".width()))
        .max()
        .unwrap_or(0);
    let status_width = records
        .iter()
        .map(|r| r.status.label().width())
        .chain(std::iter::once("Status".width()))
        .max()
        .unwrap_or(0);

    println!(
        "{}",
        format!(
            "{:<id$}  {:<loc$}  {:<st$}  Updated",
            "Pallet",
            "Location",
            "Status",
            id = id_width,
            loc = loc_width,
            st = status_width
        )
        .bold()
    );
    for rec in records {
        println!(
            "{:<id$}  {:<loc$}  {:<st$}  {}",
            rec.id,
            rec.location.label(),
            rec.status.label(),
            rec.updated_at.format(DATE_FORMAT).to_string().dimmed(),
            id = id_width,
            loc = loc_width,
            st = status_width
        );
    }
}

fn print_tallies(tallies: &[StatusTally]) {
    if tallies.is_empty() {
        return;
    }

    println!("{}", "Pallet distribution by location and status".bold());
    let mut last_location = None;
    for tally in tallies {
        if last_location != Some(tally.location) {
            println!("{}", tally.location.label().underline());
            last_location = Some(tally.location);
        }
        println!("  {:<14} {}", tally.status.label(), tally.count);
    }
}
