//! Time source abstraction.
//!
//! Business logic never reads the wall clock directly; it takes a [`Clock`]
//! so tests can supply fixed timestamps deterministically.

use chrono::{Local, NaiveDateTime};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Production clock, local time to match the dates users see in the file.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Fixed clock for tests and replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_date;

    #[test]
    fn fixed_clock_returns_its_instant() {
        let t = parse_date("2025-06-01 09:00:00").unwrap();
        assert_eq!(FixedClock(t).now(), t);
    }
}
