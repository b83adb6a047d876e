//! Defines [`Dataset`], the immutable mapping from station id to [`Station`].

use crate::types::station::{Station, StationSummary};
use std::collections::BTreeMap;

/// Every station of a loaded dataset, keyed by station id.
///
/// Built once by the schema validator and never mutated afterwards; a reload
/// replaces the whole value. Share it between consumers as `Arc<Dataset>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    stations: BTreeMap<String, Station>,
}

impl Dataset {
    pub(crate) fn from_stations(stations: BTreeMap<String, Station>) -> Self {
        Self { stations }
    }

    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Stations ordered by id.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    pub fn station_ids(&self) -> impl Iterator<Item = &str> {
        self.stations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Total number of day records across all stations.
    pub fn record_count(&self) -> usize {
        self.stations.values().map(|s| s.temps().len()).sum()
    }
}

/// Lists `(id, name)` pairs for a station selector, ordered by id.
pub fn station_list(dataset: &Dataset) -> Vec<StationSummary> {
    dataset.stations().map(Station::summary).collect()
}
