//! # Paltrack Architecture
//!
//! Paltrack is a **UI-agnostic pallet tracking library** with a thin CLI
//! client. The library records where each physical pallet is and what state
//! it is in, drives bulk operations over sequentially numbered pallets, and
//! keeps the on-disk table and its backup archive consistent.
//!
//! ## Layers
//!
//! ```text
//! CLI layer (cli wiring in main.rs + args.rs)
//!   - argument parsing, colored output, exit codes
//!           │
//! API facade (api.rs)
//!   - PalletApi: sequence → batch command → save → snapshot
//!           │
//! Command layer (commands/*.rs)
//!   - pure business logic over the in-memory table
//!           │
//! Core (model, sequence, store, backup)
//!   - records and vocabulary, identifier sequencer,
//!     canonical-file gateway, snapshot archive
//! ```
//!
//! ## Key behaviors
//!
//! - **Batches are best-effort.** Add/update/discard process each derived
//!   identifier independently; duplicates and missing ids land in a report,
//!   they never abort the batch. Only syntactically invalid input aborts
//!   before anything is touched.
//! - **The file is the unit of durability.** Every mutation batch rewrites
//!   the whole canonical file through a temp-file-plus-rename, then pushes
//!   a snapshot into the bounded backup archive.
//! - **Restore is not commit.** Restoring a snapshot replaces the in-memory
//!   table; the canonical file changes only on an explicit save.
//! - **Time is injected.** All timestamps come from a [`clock::Clock`], so
//!   tests run against fixed instants.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every client goes through
//! - [`commands`]: one module per operation
//! - [`model`]: records, location/status vocabulary, date handling
//! - [`sequence`]: identifier sequencer
//! - [`store`]: in-memory table and the canonical-file gateway
//! - [`backup`]: snapshot archive with retention
//! - [`auth`]: credential gate for the CLI
//! - [`config`], [`clock`], [`error`]: ambient plumbing

pub mod api;
pub mod auth;
pub mod backup;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod sequence;
pub mod store;
