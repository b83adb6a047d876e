//! Tick and legend descriptors for the renderer.
//!
//! These only describe where ticks and swatches go and what they say; drawing
//! them is up to the rendering layer.

use crate::config::ChartConfig;
use crate::scales::color::ColorScale;
use crate::scales::linear::LinearScale;
use crate::scales::{ChartScales, PositionScale};
use serde::Serialize;

/// Ticks requested from the linear axes.
const LINEAR_TICK_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    /// Pixel coordinate along the axis.
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub ticks: Vec<Tick>,
}

/// Vertical axis: nice temperature values labelled `"<v> °C"`.
pub fn value_axis(scales: &ChartScales) -> AxisSpec {
    let ticks = scales
        .value
        .ticks(LINEAR_TICK_COUNT)
        .into_iter()
        .map(|v| Tick {
            position: scales.value.apply(v),
            label: format!("{v} °C"),
        })
        .collect();
    AxisSpec { ticks }
}

/// Horizontal axis.
///
/// Day-of-month layout gets nice integer day ticks. Calendar-band layout gets
/// about one tick per [`ChartConfig::x_tick_spacing`] pixels, placed at band
/// centres and labelled like `Jun 01`.
pub fn position_axis(scales: &ChartScales, config: &ChartConfig) -> AxisSpec {
    match &scales.position {
        PositionScale::DayOfMonth(scale) => AxisSpec {
            ticks: scale
                .ticks(LINEAR_TICK_COUNT)
                .into_iter()
                .filter(|v| v.fract() == 0.0)
                .map(|v| Tick {
                    position: scale.apply(v),
                    label: format!("{v}"),
                })
                .collect(),
        },
        PositionScale::CalendarBand(band) => {
            let domain = band.domain();
            let wanted = (config.width / config.x_tick_spacing).floor().max(1.0) as usize;
            let stride = domain.len().div_ceil(wanted).max(1);
            let ticks = domain
                .iter()
                .step_by(stride)
                .filter_map(|day| {
                    let date = day.to_reference_date()?;
                    Some(Tick {
                        position: band.center(*day)?,
                        label: date.format("%b %d").to_string(),
                    })
                })
                .collect();
            AxisSpec { ticks }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub fill: String,
    pub x: f64,
    pub width: f64,
}

/// A horizontal color legend: one swatch per color bucket, with the bucket
/// thresholds as ticks on the boundaries between swatches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSpec {
    pub width: f64,
    pub height: f64,
    pub swatches: Vec<Swatch>,
    pub ticks: Vec<Tick>,
}

pub fn legend(color: &ColorScale, config: &ChartConfig) -> LegendSpec {
    let buckets = color.colors().len() as f64;
    let x = LinearScale::new((-1.0, buckets - 1.0), (0.0, config.legend_width));
    let at = |i: f64| x.apply(i).round();

    let swatches = color
        .colors()
        .iter()
        .enumerate()
        .map(|(i, fill)| {
            let left = at(i as f64 - 1.0);
            Swatch {
                fill: fill.clone(),
                x: left,
                width: at(i as f64) - left,
            }
        })
        .collect();

    let ticks = color
        .thresholds()
        .iter()
        .enumerate()
        .map(|(i, threshold)| Tick {
            position: at(i as f64),
            label: threshold.to_string(),
        })
        .collect();

    LegendSpec {
        width: config.legend_width,
        height: config.legend_height,
        swatches,
        ticks,
    }
}
