//! Defines the data structures representing a weather station and its daily series.

use crate::types::day::Day;
use serde::Serialize;

/// A weather station and its chronologically sorted daily records.
///
/// Stations are only produced by the schema validator, which guarantees that
/// `name` is non-empty, `temps` is non-empty, records are unique per calendar
/// date and sorted ascending by date. The fields are private so those
/// invariants cannot be broken afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    /// Station identifier, the key it is stored under in the dataset (e.g. "B2BTUR01").
    id: String,
    /// Display label (e.g. "Brno, Tuřany").
    name: String,
    /// Daily records, ascending by date.
    temps: Vec<Day>,
}

impl Station {
    /// Wraps already validated parts. The caller must uphold the invariants
    /// listed on [`Station`].
    pub(crate) fn from_validated(id: String, name: String, temps: Vec<Day>) -> Self {
        debug_assert!(!temps.is_empty());
        debug_assert!(temps.windows(2).all(|w| w[0].date() < w[1].date()));
        Self { id, name, temps }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full daily series, ascending by date. Never empty.
    pub fn temps(&self) -> &[Day] {
        &self.temps
    }

    pub fn summary(&self) -> StationSummary {
        StationSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// The `(id, name)` pair a station selector needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationSummary {
    pub id: String,
    pub name: String,
}
