//! Chart geometry and styling settings.
//!
//! Every field has a default, so `ChartConfig::default()` or
//! `ChartConfig::builder().build()` gives a ready-to-use 800x700 chart. The
//! same defaults apply when a config is deserialized from a settings file with
//! fields missing.

use crate::types::layout::ChartLayout;
use bon::Builder;
use serde::{Deserialize, Serialize};

/// Year from which records count as "recent" in the highlight color policy.
pub const DEFAULT_HIGHLIGHT_FROM_YEAR: i32 = 2019;

/// Date format used in mark titles when none is configured, or when the
/// configured one cannot render a date.
pub const DEFAULT_TITLE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    #[builder(default = 20.0)]
    pub top: f64,
    #[builder(default = 40.0)]
    pub right: f64,
    #[builder(default = 20.0)]
    pub bottom: f64,
    #[builder(default = 40.0)]
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Margin::builder().build()
    }
}

/// How record years are bucketed into fill colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ColorPolicy {
    /// Two colors: years at or after `from_year` are highlighted, the rest muted.
    Highlight { from_year: i32 },
    /// One color per decade band (…-1970, 1971-1980, …, 2021-…).
    Decades,
}

impl ColorPolicy {
    /// The policy each layout uses unless configured otherwise.
    pub fn default_for(layout: ChartLayout) -> Self {
        match layout {
            ChartLayout::CalendarBand => ColorPolicy::Decades,
            ChartLayout::DayOfMonth => ColorPolicy::Highlight {
                from_year: DEFAULT_HIGHLIGHT_FROM_YEAR,
            },
        }
    }
}

/// Size, spacing and styling of a chart.
///
/// # Examples
///
/// ```
/// use station_temps::{ChartConfig, ColorPolicy};
///
/// let config = ChartConfig::builder()
///     .width(1200.0)
///     .color_policy(ColorPolicy::Highlight { from_year: 2015 })
///     .build();
/// assert_eq!(config.height, 700.0);
/// assert_eq!(config.band_padding, 0.1);
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Total SVG width.
    #[builder(default = 800.0)]
    pub width: f64,
    /// Total SVG height.
    #[builder(default = 700.0)]
    pub height: f64,
    #[builder(default)]
    pub margin: Margin,
    /// Extra gap between the y axis and the first mark.
    #[builder(default = 20.0)]
    pub left_inset: f64,
    /// Inner padding between calendar bands, as a fraction of the step.
    #[builder(default = 0.1)]
    pub band_padding: f64,
    /// Height of an ordinary tick mark.
    #[builder(default = 3.0)]
    pub tick_height: f64,
    /// Height of a tick mark in the highlighted bucket.
    #[builder(default = 5.0)]
    pub highlight_tick_height: f64,
    /// Fixed mark width in the day-of-month layout.
    #[builder(default = 20.0)]
    pub day_bar_width: f64,
    /// Desired pixels per x-axis tick in the calendar-band layout.
    #[builder(default = 80.0)]
    pub x_tick_spacing: f64,
    /// Width of the color legend.
    #[builder(default = 200.0)]
    pub legend_width: f64,
    /// Height of the color legend swatches.
    #[builder(default = 10.0)]
    pub legend_height: f64,
    /// `chrono` format string for the date in mark titles.
    #[builder(default = String::from(DEFAULT_TITLE_DATE_FORMAT))]
    pub title_date_format: String,
    /// Overrides [`ColorPolicy::default_for`] when set.
    pub color_policy: Option<ColorPolicy>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig::builder().build()
    }
}

impl ChartConfig {
    pub fn color_policy_for(&self, layout: ChartLayout) -> ColorPolicy {
        self.color_policy
            .unwrap_or_else(|| ColorPolicy::default_for(layout))
    }

    /// Horizontal pixel extent available to marks.
    pub fn x_range(&self) -> (f64, f64) {
        (
            self.margin.left + self.left_inset,
            self.width - self.margin.right,
        )
    }

    /// Vertical pixel extent, bottom first since temperatures grow upwards.
    pub fn y_range(&self) -> (f64, f64) {
        (self.height - self.margin.bottom, self.margin.top)
    }
}
