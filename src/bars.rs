//! Maps filtered day records through [`ChartScales`] into drawable marks.

use crate::config::{ChartConfig, DEFAULT_TITLE_DATE_FORMAT};
use crate::scales::{ChartScales, PositionScale};
use crate::types::calendar::CalendarDay;
use crate::types::day::Day;
use log::warn;
use serde::Serialize;
use std::fmt::Write;

/// A renderer-agnostic rectangle for one day record.
///
/// The mark is a thin horizontal tick rather than a bar rising from an axis,
/// since many years are overplotted at the same x position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSpec {
    pub fill: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Hover label, `"<date>: <value> °C"`. Not used for layout.
    pub title: String,
}

/// Produces one [`BarSpec`] per record of `days`, in the same order.
///
/// * fill: color scale applied to the record's year;
/// * x/width: day-of-month layout places the tick at `position(day - 0.5)`
///   with the fixed [`ChartConfig::day_bar_width`]; calendar-band layout uses
///   the band start and bandwidth of the record's `(month, day)`;
/// * y: value scale applied to the record's metric reading;
/// * height: [`ChartConfig::tick_height`], or
///   [`ChartConfig::highlight_tick_height`] for years in a highlight bucket.
///
/// A [`ChartConfig::title_date_format`] that cannot render a date is replaced
/// by [`DEFAULT_TITLE_DATE_FORMAT`].
pub fn generate_bars(days: &[&Day], scales: &ChartScales, config: &ChartConfig) -> Vec<BarSpec> {
    let date_format = title_date_format(days, &config.title_date_format);
    days.iter()
        .map(|day| bar_for(day, scales, config, date_format))
        .collect()
}

/// Renders the first date with `format` to find out whether chrono accepts it.
/// Unknown specifiers (`%Q`) and time fields (`%H`) both fail on a plain date.
fn title_date_format<'a>(days: &[&Day], format: &'a str) -> &'a str {
    let Some(first) = days.first() else {
        return format;
    };
    let mut rendered = String::new();
    if write!(rendered, "{}", first.date().format(format)).is_ok() {
        format
    } else {
        warn!(
            "Title date format '{}' cannot format dates, using '{}'",
            format, DEFAULT_TITLE_DATE_FORMAT
        );
        DEFAULT_TITLE_DATE_FORMAT
    }
}

fn bar_for(day: &Day, scales: &ChartScales, config: &ChartConfig, date_format: &str) -> BarSpec {
    let value = day.value(scales.metric);

    let (x, width) = match &scales.position {
        PositionScale::DayOfMonth(scale) => {
            (scale.apply(day.day() as f64 - 0.5), config.day_bar_width)
        }
        PositionScale::CalendarBand(band) => {
            let x = band
                .position(CalendarDay::of(day.date()))
                .unwrap_or(band.range().0);
            (x, band.bandwidth())
        }
    };

    let height = if scales.color.is_highlighted(day.year()) {
        config.highlight_tick_height
    } else {
        config.tick_height
    };

    BarSpec {
        fill: scales.color.apply(day.year()).to_string(),
        x,
        y: scales.value.apply(value),
        width,
        height,
        title: format!(
            "{}: {} °C",
            day.date().format(date_format),
            value
        ),
    }
}
