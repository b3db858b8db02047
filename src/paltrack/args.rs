use clap::{Parser, Subcommand};
use paltrack::commands::export::ExportFormat;
use paltrack::model::{Location, Status};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paltrack")]
#[command(about = "Single-user pallet inventory tracker", long_about = None, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Username, required when credentials are configured
    /// (falls back to PALTRACK_USER)
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Password, required when credentials are configured
    /// (falls back to PALTRACK_PASSWORD)
    #[arg(long, global = true)]
    pub password: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add sequentially numbered pallets
    #[command(alias = "a")]
    Add {
        /// Starting pallet number (e.g. P001)
        start: String,

        /// How many pallets to add
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Location for the new pallets
        #[arg(short, long, value_enum)]
        location: Location,

        /// Status for the new pallets
        #[arg(short, long, value_enum)]
        status: Status,
    },

    /// Update location and status for a pallet range
    #[command(alias = "u")]
    Update {
        /// Starting pallet number (e.g. P001)
        start: String,

        /// How many pallets to update
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// New location
        #[arg(short, long, value_enum)]
        location: Location,

        /// New status
        #[arg(short, long, value_enum)]
        status: Status,
    },

    /// Mark a pallet range as discarded
    #[command(alias = "d")]
    Discard {
        /// Starting pallet number (e.g. P001)
        start: String,

        /// How many pallets to discard
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// List all pallets
    #[command(alias = "ls")]
    List,

    /// Look up one pallet by exact number
    Find {
        /// Pallet number (e.g. P001)
        id: String,
    },

    /// Search pallets by number or location substring
    Search {
        /// Search term, matched case-insensitively
        term: String,
    },

    /// Show pallet counts by location and status
    Stats,

    /// Export the full table to a delimited file
    Export {
        /// Output format
        #[arg(value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output path (defaults to a timestamped file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Backup archive operations
    #[command(subcommand)]
    Backup(BackupCommands),
}

#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Write a snapshot of the current table
    Create,

    /// List snapshots, newest first
    List,

    /// Load a snapshot into memory
    Restore {
        /// Snapshot name, or "latest"
        #[arg(default_value = "latest")]
        entry: String,

        /// Also rewrite the canonical data file
        #[arg(long)]
        commit: bool,
    },
}
