use crate::model::{Location, PalletRecord, Status};

pub mod add;
pub mod discard;
pub mod export;
pub mod list;
pub mod search;
pub mod stats;
pub mod update;

#[derive(Debug, Clone, PartialEq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One location × status bucket of the aggregate view.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTally {
    pub location: Location,
    pub status: Status,
    pub count: usize,
}

/// Structured outcome of a command. Batch commands report their
/// per-identifier partition in `applied`/`rejected`; read commands fill
/// `records` or `tallies`.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub records: Vec<PalletRecord>,
    pub applied: Vec<String>,
    pub rejected: Vec<String>,
    pub tallies: Vec<StatusTally>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<PalletRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_partition(mut self, applied: Vec<String>, rejected: Vec<String>) -> Self {
        self.applied = applied;
        self.rejected = rejected;
        self
    }

    pub fn with_tallies(mut self, tallies: Vec<StatusTally>) -> Self {
        self.tallies = tallies;
        self
    }
}
