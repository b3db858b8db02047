use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a pallet currently sits. Closed vocabulary; the wire labels match
/// the canonical file and backup documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Location {
    #[serde(rename = "SGT")]
    Sgt,
    #[serde(rename = "DKP")]
    Dkp,
    #[serde(rename = "OFC")]
    Ofc,
    #[serde(rename = "End Customer")]
    EndCustomer,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Sgt,
        Location::Dkp,
        Location::Ofc,
        Location::EndCustomer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Location::Sgt => "SGT",
            Location::Dkp => "DKP",
            Location::Ofc => "OFC",
            Location::EndCustomer => "End Customer",
        }
    }

    pub fn parse_label(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.label() == s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle status of a pallet. Any status may follow any other via an
/// update; `Discarded` is forced by the discard operation and is terminal
/// by convention, not by a transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Status {
    #[serde(rename = "Received At")]
    ReceivedAt,
    #[serde(rename = "In Transit To")]
    InTransitTo,
    #[serde(rename = "Delivered")]
    Delivered,
    #[serde(rename = "Discarded")]
    Discarded,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::ReceivedAt,
        Status::InTransitTo,
        Status::Delivered,
        Status::Discarded,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Status::ReceivedAt => "Received At",
            Status::InTransitTo => "In Transit To",
            Status::Delivered => "Delivered",
            Status::Discarded => "Discarded",
        }
    }

    pub fn parse_label(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|st| st.label() == s)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One tracked pallet. The serde field names mirror the canonical file
/// header so backup documents round-trip with the same vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalletRecord {
    #[serde(rename = "Pallet_No")]
    pub id: String,
    #[serde(rename = "Location")]
    pub location: Location,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Date", with = "date_format")]
    pub updated_at: NaiveDateTime,
}

impl PalletRecord {
    pub fn new(id: String, location: Location, status: Status, now: NaiveDateTime) -> Self {
        Self {
            id,
            location,
            status,
            updated_at: now,
        }
    }

    /// Refresh the timestamp. Clamped so `updated_at` never moves backwards
    /// even if the supplied clock does.
    pub fn touch(&mut self, now: NaiveDateTime) {
        self.updated_at = now.max(self.updated_at);
    }
}

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Parse a stored date, accepting both `YYYY-MM-DD HH:MM:SS` and the
/// date-only form written by older revisions of the data file.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, DATE_FORMAT) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, DATE_ONLY_FORMAT)
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

pub(crate) mod date_format {
    use super::{parse_date, DATE_FORMAT};
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_date(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", s)))
    }
}
