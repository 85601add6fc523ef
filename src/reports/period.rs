use chrono::{Datelike, Months, NaiveDate};

use crate::utils::errors::TrackerError;

/// One aggregation bucket: a calendar month, rendered as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self, TrackerError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TrackerError::validation("year must be between 1 and 9999"));
        }
        if !(1..=12).contains(&month) {
            return Err(TrackerError::validation("month must be between 1 and 12"));
        }

        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| TrackerError::validation("invalid year/month"))?;
        let end = start
            .checked_add_months(Months::new(1))
            .ok_or_else(|| TrackerError::validation("invalid year/month"))?;

        Ok(Self { start, end })
    }

    /// For rows coming back from the store, where year and month are plain integers.
    pub fn from_year_month(year: i32, month: i32) -> Result<Self, TrackerError> {
        let month = u32::try_from(month)
            .map_err(|_| TrackerError::validation("month must be between 1 and 12"))?;
        Self::new(year, month)
    }

    /// The month a stored expense date is charted under. Dates outside the
    /// supported years have no bucket and are rejected before they are written.
    pub fn containing(date: NaiveDate) -> Result<Self, TrackerError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// Half-open range `[first day, first day of next month)`.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
