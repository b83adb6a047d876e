use crate::types::calendar::CalendarRange;
use crate::types::day::Day;

impl CalendarRange {
    /// Whether `day` falls inside this range by calendar position. The record's
    /// year is never consulted.
    ///
    /// * Same month: the month matches and `start.day <= day <= end.day`.
    /// * Different months: the month lies strictly between the two bounds, or
    ///   it is the start month on/after `start.day`, or the end month on/before
    ///   `end.day`.
    ///
    /// The second rule assumes `start.month < end.month`. A range that wraps the
    /// year boundary (November to February) is evaluated with it unchanged, so
    /// only the start-month tail and end-month head match.
    pub fn contains(&self, day: &Day) -> bool {
        let (month, dom) = (day.month(), day.day());
        let (start, end) = (self.start, self.end);
        if start.month() == end.month() {
            month == start.month() && start.day() <= dom && dom <= end.day()
        } else {
            (start.month() < month && month < end.month())
                || (month == start.month() && start.day() <= dom)
                || (month == end.month() && dom <= end.day())
        }
    }
}

/// Lazily yields the days of `days` that fall inside `range`, in input order.
///
/// Every record is evaluated (the series is not assumed sorted for this), and
/// an empty series simply yields nothing.
pub fn filter_range<'a>(
    range: CalendarRange,
    days: &'a [Day],
) -> impl Iterator<Item = &'a Day> + 'a {
    days.iter().filter(move |day| range.contains(day))
}

pub trait DaySeriesFilterExt {
    /// Filters a day series by an inclusive calendar range (year ignored).
    ///
    /// # Arguments
    /// * `range`: The calendar window, start and end inclusive.
    ///
    /// # Returns
    /// A lazy iterator over the matching records, in series order.
    fn filter_range(&self, range: CalendarRange) -> impl Iterator<Item = &Day>;

    /// Filters by calendar range and collects the matches.
    fn select_range(&self, range: CalendarRange) -> Vec<&Day> {
        self.filter_range(range).collect()
    }
}

impl DaySeriesFilterExt for [Day] {
    fn filter_range(&self, range: CalendarRange) -> impl Iterator<Item = &Day> {
        filter_range(range, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::calendar::CalendarDay;
    use chrono::{Duration, NaiveDate};

    fn day(date: &str) -> Day {
        Day::new(date, 10.0, 15.0, 5.0).unwrap()
    }

    fn range(start: (u32, u32), end: (u32, u32)) -> CalendarRange {
        CalendarRange::new(
            CalendarDay::new(start.0, start.1).unwrap(),
            CalendarDay::new(end.0, end.1).unwrap(),
        )
    }

    /// Every day of 1999 and 2000.
    fn two_years() -> Vec<Day> {
        let first = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
        (0..731)
            .map(|offset| Day::new(first + Duration::days(offset), 0.0, 1.0, -1.0).unwrap())
            .collect()
    }

    #[test]
    fn test_same_month_selects_exact_days() {
        let series = two_years();
        for (d0, d1) in [(1, 1), (1, 10), (5, 20), (28, 31)] {
            let matched: Vec<&Day> = series.filter_range(range((6, d0), (6, d1))).collect();
            let expected: Vec<&Day> = series
                .iter()
                .filter(|d| d.month() == 6 && d0 <= d.day() && d.day() <= d1)
                .collect();
            assert_eq!(matched, expected, "range June {d0}..={d1}");
        }
    }

    #[test]
    fn test_cross_month_includes_whole_middle_months() {
        let series = two_years();
        let matched = series.select_range(range((3, 20), (6, 5)));
        for month in [4, 5] {
            let in_month = matched.iter().filter(|d| d.month() == month).count();
            // April has 30 days, May 31, each in two years.
            assert_eq!(in_month, if month == 4 { 60 } else { 62 });
        }
        assert!(matched.iter().all(|d| d.month() != 3 || d.day() >= 20));
        assert!(matched.iter().all(|d| d.month() != 6 || d.day() <= 5));
        assert_eq!(matched.iter().filter(|d| d.month() == 3).count(), 24);
        assert_eq!(matched.iter().filter(|d| d.month() == 6).count(), 10);
    }

    #[test]
    fn test_years_are_ignored() {
        let series = vec![day("1961-06-05"), day("1990-06-05"), day("2021-06-05")];
        assert_eq!(series.filter_range(range((6, 5), (6, 5))).count(), 3);
    }

    #[test]
    fn test_empty_series_yields_nothing() {
        let series: Vec<Day> = Vec::new();
        assert_eq!(series.filter_range(range((1, 1), (12, 31))).count(), 0);
        assert_eq!(filter_range(range((6, 1), (6, 1)), &series).count(), 0);
    }

    #[test]
    fn test_unsorted_series_is_fully_scanned() {
        let series = vec![day("2000-07-31"), day("2000-01-01"), day("2000-06-15")];
        let matched: Vec<String> = series
            .filter_range(range((6, 1), (7, 31)))
            .map(|d| d.date().to_string())
            .collect();
        assert_eq!(matched, ["2000-07-31", "2000-06-15"]);
    }

    #[test]
    fn test_year_wrapping_range_keeps_documented_behavior() {
        let wrap = range((11, 15), (2, 15));
        assert!(wrap.wraps_year());
        // Start-month tail and end-month head match.
        assert!(wrap.contains(&day("2000-11-20")));
        assert!(wrap.contains(&day("2000-02-10")));
        // December and January are not "strictly between" 11 and 2.
        assert!(!wrap.contains(&day("2000-12-25")));
        assert!(!wrap.contains(&day("2000-01-10")));
        assert!(!wrap.contains(&day("2000-11-01")));
    }
}
