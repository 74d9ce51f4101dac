use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

/// Canonical-side record supplied by the caller.
/// Deserialization goes through [`TargetRecord::new`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "RawTargetRecord")]
pub struct TargetRecord {
    pub title: String,
    /// ISO date, optionally followed by a time component
    pub release_date: String,
}

impl TargetRecord {
    /// Build a target record, rejecting release dates that are not ISO dates
    pub fn new(title: impl Into<String>, release_date: impl Into<String>) -> AppResult<Self> {
        let record = Self {
            title: title.into(),
            release_date: release_date.into(),
        };
        record.release_day()?;
        Ok(record)
    }

    /// Calendar day of the release
    pub fn release_day(&self) -> AppResult<NaiveDate> {
        let day = self.release_date.get(..10).ok_or_else(|| {
            AppError::InvalidInput(format!("Release date '{}' is too short", self.release_date))
        })?;
        Ok(NaiveDate::parse_from_str(day, "%Y-%m-%d")?)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTargetRecord {
    title: String,
    release_date: String,
}

impl TryFrom<RawTargetRecord> for TargetRecord {
    type Error = AppError;

    fn try_from(raw: RawTargetRecord) -> AppResult<Self> {
        Self::new(raw.title, raw.release_date)
    }
}
