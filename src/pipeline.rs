//! Single entry point from a loaded [`Dataset`] and a [`Selection`] to a
//! render-ready [`ChartSpec`].

use crate::axes::{legend, position_axis, value_axis, AxisSpec, LegendSpec};
use crate::bars::{generate_bars, BarSpec};
use crate::config::ChartConfig;
use crate::filtering::DaySeriesFilterExt;
use crate::scales::{ChartScales, ScaleError};
use crate::types::calendar::CalendarRange;
use crate::types::dataset::Dataset;
use crate::types::day::Day;
use crate::types::layout::ChartLayout;
use crate::types::metric::Metric;
use bon::Builder;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to chart. Owned by the caller and passed into every render.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct Selection {
    #[builder(into)]
    pub station_id: String,
    #[builder(default)]
    #[serde(default)]
    pub metric: Metric,
    #[builder(default)]
    #[serde(default)]
    pub layout: ChartLayout,
    #[builder(default)]
    #[serde(default)]
    pub range: CalendarRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub bars: Vec<BarSpec>,
    pub scales: ChartScales,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub legend: LegendSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "chart", rename_all = "snake_case")]
pub enum ChartOutcome {
    Chart(ChartSpec),
    /// The station has no records in the selected range.
    NoData,
}

impl ChartOutcome {
    pub fn chart(&self) -> Option<&ChartSpec> {
        match self {
            ChartOutcome::Chart(spec) => Some(spec),
            ChartOutcome::NoData => None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    #[error("Station '{0}' is not in the dataset")]
    StationNotFound(String),

    #[error(transparent)]
    Scale(#[from] ScaleError),
}

/// Filters the selected station's records to the selected range, derives the
/// scales and produces bars, axes and legend.
///
/// An empty filter result is [`ChartOutcome::NoData`], not an error.
pub fn render_chart(
    dataset: &Dataset,
    selection: &Selection,
    config: &ChartConfig,
) -> Result<ChartOutcome, PipelineError> {
    let station = dataset
        .station(&selection.station_id)
        .ok_or_else(|| PipelineError::StationNotFound(selection.station_id.clone()))?;

    if selection.range.wraps_year() {
        warn!(
            "Range {} wraps the year boundary; only the start-month tail and end-month head are selected",
            selection.range
        );
    }

    let days: Vec<&Day> = station.temps().select_range(selection.range);
    if days.is_empty() {
        debug!(
            "No records for station {} in {}",
            station.id(),
            selection.range
        );
        return Ok(ChartOutcome::NoData);
    }

    let scales = ChartScales::derive(&days, selection.metric, selection.layout, config)?;
    let bars = generate_bars(&days, &scales, config);
    debug!(
        "Rendered {} bars for station {} ({}, {})",
        bars.len(),
        station.id(),
        selection.metric,
        selection.layout
    );

    Ok(ChartOutcome::Chart(ChartSpec {
        x_axis: position_axis(&scales, config),
        y_axis: value_axis(&scales),
        legend: legend(&scales.color, config),
        bars,
        scales,
    }))
}
