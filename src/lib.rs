//! Turns daily weather-station temperature records into render-ready chart
//! descriptions.
//!
//! A [`Dataset`] is loaded once (see [`DatasetLoader`] and [`spawn_load`]),
//! then every chart is produced by [`render_chart`] from an explicit
//! [`Selection`]:
//!
//! ```
//! use station_temps::{
//!     render_chart, validate_dataset, CalendarRange, ChartConfig, ChartOutcome, Metric, Selection,
//! };
//!
//! let document = serde_json::json!({
//!     "X": { "name": "Station X", "temps": [
//!         { "date": "2000-06-01", "day": 1, "month": 6, "year": 2000, "avg": 20, "high": 26, "low": 14 },
//!         { "date": "2000-06-15", "day": 15, "month": 6, "year": 2000, "avg": 25, "high": 31, "low": 18 }
//!     ]}
//! });
//! let dataset = validate_dataset(&document)?;
//!
//! let selection = Selection::builder()
//!     .station_id("X")
//!     .metric(Metric::Maximum)
//!     .range(CalendarRange::parse("2000-06-01", "2000-06-30")?)
//!     .build();
//!
//! match render_chart(&dataset, &selection, &ChartConfig::default())? {
//!     ChartOutcome::Chart(chart) => assert_eq!(chart.bars.len(), 2),
//!     ChartOutcome::NoData => unreachable!(),
//! }
//! # Ok::<(), station_temps::StationTempsError>(())
//! ```

mod axes;
mod bars;
mod config;
mod error;
mod filtering;
mod loader;
mod pipeline;
mod scales;
mod types;
mod validation;

pub use error::StationTempsError;

pub use config::*;
pub use pipeline::*;

pub use axes::*;
pub use bars::*;
pub use filtering::*;

pub use scales::band::BandScale;
pub use scales::color::*;
pub use scales::linear::*;
pub use scales::{ChartScales, PositionScale, ScaleError, VALUE_PADDING};

pub use types::calendar::*;
pub use types::dataset::*;
pub use types::day::*;
pub use types::layout::*;
pub use types::metric::*;
pub use types::station::*;

pub use loader::background::*;
pub use loader::dataset_loader::*;
pub use loader::error::LoadError;

pub use validation::error::*;
pub use validation::schema::validate_dataset;
