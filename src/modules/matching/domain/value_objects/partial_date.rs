use serde::{Deserialize, Serialize};

/// Date as reported by a catalog, where any component may be missing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl PartialDate {
    pub fn new(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Self {
        Self { year, month, day }
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new(Some(year), Some(month), Some(day))
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    /// A date is complete only when year, month and day are all present
    pub fn is_complete(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }

    /// Zero-padded `YYYY-MM-DD`, or `None` when the date is incomplete
    pub fn normalize(&self) -> Option<String> {
        match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => {
                Some(format!("{:04}-{:02}-{:02}", year, month, day))
            }
            _ => None,
        }
    }
}
