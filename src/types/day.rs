//! Defines the [`Day`] record: one calendar day's average, high and low temperature
//! for a single station.

use crate::types::metric::Metric;
use crate::validation::error::{ValidationError, ViolationKind};
use chrono::{DateTime, Datelike, NaiveDate};
use serde::Serialize;

/// One calendar day's temperatures for a station, in degrees Celsius.
///
/// The `day`, `month` and `year` fields are redundant with `date`; the
/// validator guarantees they agree. Instances are only created through the
/// schema validator or [`Day::new`], both of which enforce that.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Day {
    date: NaiveDate,
    day: u32,
    month: u32,
    year: i32,
    avg: f64,
    high: f64,
    low: f64,
}

impl Day {
    /// Builds a day record from a date and its three temperature readings.
    ///
    /// The date can be anything implementing [`IntoRecordDate`], e.g. a
    /// `NaiveDate` or an ISO `"YYYY-MM-DD"` string.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] with kind [`ViolationKind::InvalidDate`] when
    /// the date cannot be coerced, or [`ViolationKind::NotFinite`] when a
    /// temperature is NaN or infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use station_temps::{Day, Metric};
    ///
    /// let day = Day::new("2000-06-15", 25.0, 30.5, 18.2).unwrap();
    /// assert_eq!(day.month(), 6);
    /// assert_eq!(day.value(Metric::Maximum), 30.5);
    /// ```
    pub fn new(
        date: impl IntoRecordDate,
        avg: f64,
        high: f64,
        low: f64,
    ) -> Result<Self, ValidationError> {
        let date = date
            .into_record_date()
            .ok_or_else(|| ValidationError::new("date", ViolationKind::InvalidDate))?;
        for (field, value) in [("avg", avg), ("high", high), ("low", low)] {
            if !value.is_finite() {
                return Err(ValidationError::new(field, ViolationKind::NotFinite(value)));
            }
        }
        Ok(Self::from_parts(date, avg, high, low))
    }

    /// Assembles a record from an already validated date.
    pub(crate) fn from_parts(date: NaiveDate, avg: f64, high: f64, low: f64) -> Self {
        Self {
            date,
            day: date.day(),
            month: date.month(),
            year: date.year(),
            avg,
            high,
            low,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Day of month, `1..=31`.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn avg(&self) -> f64 {
        self.avg
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the reading selected by `metric`.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Average => self.avg,
            Metric::Maximum => self.high,
            Metric::Minimum => self.low,
        }
    }
}

/// Coerces a value into the calendar date of a day record.
///
/// Strings are accepted either as a plain ISO date (`2000-06-01`) or as an
/// RFC 3339 timestamp, in which case the calendar date of the timestamp (as
/// written, offset ignored) is used.
pub trait IntoRecordDate {
    fn into_record_date(self) -> Option<NaiveDate>;
}

impl IntoRecordDate for NaiveDate {
    fn into_record_date(self) -> Option<NaiveDate> {
        Some(self)
    }
}

impl IntoRecordDate for &str {
    fn into_record_date(self) -> Option<NaiveDate> {
        let trimmed = self.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Some(date);
        }
        DateTime::parse_from_rfc3339(trimmed)
            .ok()
            .map(|timestamp| timestamp.date_naive())
    }
}

impl IntoRecordDate for String {
    fn into_record_date(self) -> Option<NaiveDate> {
        self.as_str().into_record_date()
    }
}

impl IntoRecordDate for &String {
    fn into_record_date(self) -> Option<NaiveDate> {
        self.as_str().into_record_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_iso_string() -> Result<(), ValidationError> {
        let day = Day::new("1987-02-28", -3.5, 1.0, -8.25)?;
        assert_eq!(day.date(), NaiveDate::from_ymd_opt(1987, 2, 28).unwrap());
        assert_eq!((day.day(), day.month(), day.year()), (28, 2, 1987));
        assert_eq!(day.value(Metric::Average), -3.5);
        assert_eq!(day.value(Metric::Minimum), -8.25);
        Ok(())
    }

    #[test]
    fn test_new_from_native_date() -> Result<(), ValidationError> {
        let date = NaiveDate::from_ymd_opt(2021, 12, 31).unwrap();
        let day = Day::new(date, 0.0, 0.0, 0.0)?;
        assert_eq!(day.year(), 2021);
        Ok(())
    }

    #[test]
    fn test_rfc3339_timestamp_keeps_written_date() {
        let date = "2000-06-01T23:30:00+02:00".into_record_date();
        assert_eq!(date, NaiveDate::from_ymd_opt(2000, 6, 1));
    }

    #[test]
    fn test_unparsable_date_is_rejected() {
        let err = Day::new("first of June", 1.0, 2.0, 0.0).unwrap_err();
        assert_eq!(err.kind(), &ViolationKind::InvalidDate);
        assert!(Day::new("2000-02-30", 1.0, 2.0, 0.0).is_err());
    }

    #[test]
    fn test_non_finite_temperature_is_rejected() {
        let err = Day::new("2000-06-01", f64::NAN, 2.0, 0.0).unwrap_err();
        assert_eq!(err.path(), "avg");
        assert!(matches!(err.kind(), ViolationKind::NotFinite(v) if v.is_nan()));

        let err = Day::new("2000-06-01", 1.0, 2.0, f64::NEG_INFINITY).unwrap_err();
        assert_eq!(err.path(), "low");
    }
}
