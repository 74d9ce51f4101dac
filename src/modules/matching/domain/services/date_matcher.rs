use chrono::{DateTime, Datelike, TimeZone};

use crate::modules::matching::domain::value_objects::PartialDate;

/// Date agreement between a canonical release date and a catalog date
pub struct DateMatcher;

impl DateMatcher {
    /// `YYYY-MM` prefix of an ISO date string
    pub fn month_bucket(iso_date: &str) -> Option<&str> {
        iso_date.get(..7)
    }

    /// Target release date and candidate start date fall in the same month.
    /// Fails when the candidate date is incomplete.
    pub fn matches_month_bucket(target_release: &str, candidate: &PartialDate) -> bool {
        let Some(target_bucket) = Self::month_bucket(target_release) else {
            return false;
        };

        candidate
            .normalize()
            .is_some_and(|normalized| Self::month_bucket(&normalized) == Some(target_bucket))
    }

    /// Year must agree; month and day are compared only when the partial
    /// date carries them.
    pub fn matches_full_date<Tz: TimeZone>(timestamp: &DateTime<Tz>, partial: &PartialDate) -> bool {
        let Some(year) = partial.year else {
            return false;
        };

        year == timestamp.year()
            && partial.month.map_or(true, |month| month == timestamp.month())
            && partial.day.map_or(true, |day| day == timestamp.day())
    }
}
