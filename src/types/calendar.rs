//! Year-agnostic calendar positions and the date ranges users select with them.

use crate::types::day::IntoRecordDate;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Leap year used whenever a calendar position must become a concrete date,
/// so that February 29 is representable.
pub const REFERENCE_YEAR: i32 = 2000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Month {0} is outside 1..=12")]
    MonthOutOfRange(u32),

    #[error("Day {0} is outside 1..=31")]
    DayOutOfRange(u32),

    #[error("Cannot read a calendar date from '{0}'")]
    Unparsable(String),
}

/// A `(month, day)` position in the year, without a year.
///
/// Ordering is calendar order: by month, then by day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "CalendarDayRepr")]
pub struct CalendarDay {
    month: u32,
    day: u32,
}

#[derive(Deserialize)]
struct CalendarDayRepr {
    month: u32,
    day: u32,
}

impl TryFrom<CalendarDayRepr> for CalendarDay {
    type Error = CalendarError;

    fn try_from(repr: CalendarDayRepr) -> Result<Self, Self::Error> {
        CalendarDay::new(repr.month, repr.day)
    }
}

impl CalendarDay {
    /// Creates a calendar position. Only the `1..=12` / `1..=31` bounds are
    /// checked, so e.g. February 30 is accepted as a range endpoint.
    pub fn new(month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::MonthOutOfRange(month));
        }
        if !(1..=31).contains(&day) {
            return Err(CalendarError::DayOutOfRange(day));
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The calendar position of `date`; the year is discarded.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// This position as a date in [`REFERENCE_YEAR`], if such a date exists.
    pub fn to_reference_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        CalendarDay::of(date)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// An inclusive `[start, end]` window of calendar positions.
///
/// No ordering between `start` and `end` is enforced: a range whose start
/// month comes after its end month is representable (see
/// [`CalendarRange::wraps_year`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarRange {
    pub start: CalendarDay,
    pub end: CalendarDay,
}

impl Default for CalendarRange {
    /// June 1 through July 31.
    fn default() -> Self {
        Self {
            start: CalendarDay { month: 6, day: 1 },
            end: CalendarDay { month: 7, day: 31 },
        }
    }
}

impl CalendarRange {
    pub fn new(start: CalendarDay, end: CalendarDay) -> Self {
        Self { start, end }
    }

    /// Builds a range from two dates; their years are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use station_temps::CalendarRange;
    /// use chrono::NaiveDate;
    ///
    /// let range = CalendarRange::from_dates(
    ///     NaiveDate::from_ymd_opt(2000, 6, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(1999, 6, 10).unwrap(),
    /// );
    /// assert!(range.is_same_month());
    /// ```
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parses a range from two date strings such as `"2000-06-01"`.
    pub fn parse(start: &str, end: &str) -> Result<Self, CalendarError> {
        let start_date = start
            .into_record_date()
            .ok_or_else(|| CalendarError::Unparsable(start.to_string()))?;
        let end_date = end
            .into_record_date()
            .ok_or_else(|| CalendarError::Unparsable(end.to_string()))?;
        Ok(Self::from_dates(start_date, end_date))
    }

    pub fn is_same_month(&self) -> bool {
        self.start.month == self.end.month
    }

    /// True when the start month comes after the end month, e.g. November 15
    /// to February 15. Such ranges are filtered with the ordinary cross-month
    /// rule and therefore do not wrap around the new year.
    pub fn wraps_year(&self) -> bool {
        self.start.month > self.end.month
    }

    /// Converts a horizontal brush selection into a range.
    ///
    /// The brush spans one full reference year: January 1 at pixel 0 and
    /// December 31 at pixel `width`. Both pixel positions are mapped onto that
    /// time axis and rounded to the nearest day. Returns `None` for a
    /// non-positive width or non-finite positions.
    ///
    /// # Example
    ///
    /// ```
    /// use station_temps::CalendarRange;
    ///
    /// let range = CalendarRange::from_brush(0.0, 800.0, 800.0).unwrap();
    /// assert_eq!((range.start.month(), range.start.day()), (1, 1));
    /// assert_eq!((range.end.month(), range.end.day()), (12, 31));
    /// ```
    pub fn from_brush(x0: f64, x1: f64, width: f64) -> Option<Self> {
        if !(width > 0.0) || !x0.is_finite() || !x1.is_finite() {
            return None;
        }
        Some(Self {
            start: brush_position_to_day(x0, width)?,
            end: brush_position_to_day(x1, width)?,
        })
    }
}

fn brush_position_to_day(x: f64, width: f64) -> Option<CalendarDay> {
    let first = NaiveDate::from_ymd_opt(REFERENCE_YEAR, 1, 1)?;
    let last = NaiveDate::from_ymd_opt(REFERENCE_YEAR, 12, 31)?;
    let span_days = (last - first).num_days() as f64;
    let offset = ((x / width).clamp(0.0, 1.0) * span_days).round() as i64;
    Some(CalendarDay::of(first + Duration::days(offset)))
}

impl fmt::Display for CalendarRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
