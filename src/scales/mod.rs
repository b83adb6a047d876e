//! Derives the value, position and color scales of a chart from a filtered
//! day series.
//!
//! Both chart layouts share [`ChartScales::derive`]; the [`ChartLayout`] tag
//! only selects the position strategy.

pub mod band;
pub mod color;
pub mod linear;

use crate::config::ChartConfig;
use crate::scales::band::BandScale;
use crate::scales::color::ColorScale;
use crate::scales::linear::LinearScale;
use crate::types::calendar::CalendarDay;
use crate::types::day::Day;
use crate::types::layout::ChartLayout;
use crate::types::metric::Metric;
use ordered_float::OrderedFloat;
use serde::Serialize;
use thiserror::Error;

/// Degrees added below the minimum and above the maximum of the value domain.
pub const VALUE_PADDING: f64 = 2.0;

#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    /// Scales need at least one record. Check the filtered series first and
    /// show a "no data" state instead.
    #[error("Cannot derive chart scales from an empty series")]
    EmptySeries,

    #[error("Invalid color scale: {0}")]
    InvalidColorScale(String),

    #[error("Calendar day {0} has no date in the reference year")]
    UnrepresentableDay(CalendarDay),
}

/// Horizontal placement strategy, one per [`ChartLayout`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PositionScale {
    /// `[1, max day of month]` onto the horizontal extent.
    DayOfMonth(LinearScale),
    /// One band per calendar day between the earliest and latest present.
    CalendarBand(BandScale),
}

impl PositionScale {
    pub fn layout(&self) -> ChartLayout {
        match self {
            PositionScale::DayOfMonth(_) => ChartLayout::DayOfMonth,
            PositionScale::CalendarBand(_) => ChartLayout::CalendarBand,
        }
    }
}

/// Every scale needed to place and color the marks of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartScales {
    pub metric: Metric,
    pub value: LinearScale,
    pub position: PositionScale,
    pub color: ColorScale,
}

impl ChartScales {
    /// Derives scales for `days` charted by `metric` in `layout`.
    ///
    /// * value: `[min - 2, max + 2]` of the metric onto the inverted vertical
    ///   extent, so even a single record gets a 4-degree domain;
    /// * position: see [`PositionScale`];
    /// * color: the configured (or layout default) [`ColorPolicy`](crate::ColorPolicy).
    ///
    /// # Errors
    ///
    /// [`ScaleError::EmptySeries`] when `days` is empty.
    pub fn derive(
        days: &[&Day],
        metric: Metric,
        layout: ChartLayout,
        config: &ChartConfig,
    ) -> Result<ChartScales, ScaleError> {
        let (min_value, max_value) = value_extent(days, metric).ok_or(ScaleError::EmptySeries)?;
        let value = LinearScale::new(
            (min_value - VALUE_PADDING, max_value + VALUE_PADDING),
            config.y_range(),
        );

        let position = match layout {
            ChartLayout::DayOfMonth => {
                let max_day = days
                    .iter()
                    .map(|d| d.day())
                    .max()
                    .ok_or(ScaleError::EmptySeries)?;
                PositionScale::DayOfMonth(LinearScale::new(
                    (1.0, max_day as f64),
                    config.x_range(),
                ))
            }
            ChartLayout::CalendarBand => PositionScale::CalendarBand(BandScale::new(
                calendar_span(days)?,
                config.x_range(),
                config.band_padding,
            )),
        };

        Ok(ChartScales {
            metric,
            value,
            position,
            color: ColorScale::from_policy(config.color_policy_for(layout)),
        })
    }

    pub fn layout(&self) -> ChartLayout {
        self.position.layout()
    }
}

fn value_extent(days: &[&Day], metric: Metric) -> Option<(f64, f64)> {
    let values = days.iter().map(|d| OrderedFloat(d.value(metric)));
    let min = values.clone().min()?;
    let max = values.max()?;
    Some((min.into_inner(), max.into_inner()))
}

/// Every calendar day from the earliest to the latest `(month, day)` present,
/// inclusive, enumerated in the reference year.
fn calendar_span(days: &[&Day]) -> Result<Vec<CalendarDay>, ScaleError> {
    let positions = days.iter().map(|d| CalendarDay::of(d.date()));
    let first = positions.clone().min().ok_or(ScaleError::EmptySeries)?;
    let last = positions.max().ok_or(ScaleError::EmptySeries)?;

    let first_date = first
        .to_reference_date()
        .ok_or(ScaleError::UnrepresentableDay(first))?;
    let last_date = last
        .to_reference_date()
        .ok_or(ScaleError::UnrepresentableDay(last))?;

    Ok(first_date
        .iter_days()
        .take_while(|date| *date <= last_date)
        .map(CalendarDay::of)
        .collect())
}
