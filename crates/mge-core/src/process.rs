//! # Electoral Process
//!
//! A time-boxed election cycle with its own approved MGE. Dates are calendar
//! days (`chrono::NaiveDate`); both ends of the period are inclusive.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::MgeError;
use crate::identity::ProcessId;

/// An electoral process. Invariant: `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawProcess")]
pub struct ElectoralProcess {
    id: ProcessId,
    short_name: String,
    official_name: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl ElectoralProcess {
    /// Create a process, rejecting a period that ends before it starts.
    pub fn new(
        id: impl Into<ProcessId>,
        short_name: impl Into<String>,
        official_name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, MgeError> {
        let id = id.into();
        if start > end {
            return Err(MgeError::InvalidProcess(format!(
                "process {id} starts {start} after it ends {end}"
            )));
        }
        Ok(Self {
            id,
            short_name: short_name.into(),
            official_name: official_name.into(),
            start,
            end,
        })
    }

    pub fn id(&self) -> &ProcessId {
        &self.id
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn official_name(&self) -> &str {
        &self.official_name
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls within the process, inclusive on both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// First and last calendar year touched by the process.
    pub fn year_span(&self) -> (i32, i32) {
        (self.start.year(), self.end.year())
    }
}

impl std::fmt::Display for ElectoralProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (first, last) = self.year_span();
        if first == last {
            write!(f, "{} ({first})", self.short_name)
        } else {
            write!(
                f,
                "{} ({:02}-{:02})",
                self.short_name,
                first.rem_euclid(100),
                last.rem_euclid(100)
            )
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProcess {
    id: ProcessId,
    short_name: String,
    official_name: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawProcess> for ElectoralProcess {
    type Error = MgeError;

    fn try_from(raw: RawProcess) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.short_name, raw.official_name, raw.start, raw.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pe2024() -> ElectoralProcess {
        ElectoralProcess::new(
            "2024",
            "PE2024",
            "Proceso Electoral 2024",
            date(2024, 1, 1),
            date(2024, 12, 31),
        )
        .unwrap()
    }

    #[test]
    fn test_same_year_display() {
        assert_eq!(pe2024().to_string(), "PE2024 (2024)");
    }

    #[test]
    fn test_cross_year_display() {
        let pe = ElectoralProcess::new(
            "2425",
            "PE",
            "Proceso Electoral 2024-2025",
            date(2024, 11, 1),
            date(2025, 2, 28),
        )
        .unwrap();
        assert_eq!(pe.to_string(), "PE (24-25)");
    }

    #[test]
    fn test_contains_date_inclusive() {
        let pe = pe2024();
        assert!(pe.contains_date(date(2024, 6, 1)));
        assert!(pe.contains_date(pe.start()));
        assert!(pe.contains_date(pe.end()));
        assert!(!pe.contains_date(date(2025, 1, 1)));
        assert!(!pe.contains_date(date(2023, 12, 31)));
    }

    #[test]
    fn test_inverted_period_rejected() {
        let err = ElectoralProcess::new("x", "X", "X", date(2024, 2, 1), date(2024, 1, 1));
        assert!(matches!(err, Err(MgeError::InvalidProcess(_))));
    }

    #[test]
    fn test_single_day_process() {
        let pe = ElectoralProcess::new("d", "D", "D", date(2024, 6, 2), date(2024, 6, 2)).unwrap();
        assert_eq!(pe.duration_days(), 1);
        assert!(pe.contains_date(date(2024, 6, 2)));
    }

    #[test]
    fn test_duration_leap_year() {
        assert_eq!(pe2024().duration_days(), 366);
    }

    #[test]
    fn test_deserialize_validates_period() {
        let ok = r#"{"id":2024,"short_name":"PE2024","official_name":"PE","start":"2024-01-01","end":"2024-12-31"}"#;
        let pe: ElectoralProcess = serde_json::from_str(ok).unwrap();
        assert_eq!(pe.id().as_str(), "2024");

        let bad = r#"{"id":"2024","short_name":"PE","official_name":"PE","start":"2024-12-31","end":"2024-01-01"}"#;
        assert!(serde_json::from_str::<ElectoralProcess>(bad).is_err());
    }
}
