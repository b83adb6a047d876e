//! Defines [`Metric`], the selector for which temperature reading is charted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which of a day's three readings is being visualized.
///
/// Parses from (and displays as) the selector identifiers `average`,
/// `maximum` and `minimum`.
///
/// # Examples
///
/// ```
/// use station_temps::Metric;
///
/// let metric: Metric = "maximum".parse().unwrap();
/// assert_eq!(metric, Metric::Maximum);
/// assert_eq!(metric.field(), "high");
/// assert_eq!(metric.plural(), "maxima");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Daily average temperature (`avg`).
    #[default]
    Average,
    /// Daily high (`high`).
    Maximum,
    /// Daily low (`low`).
    Minimum,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Average, Metric::Maximum, Metric::Minimum];

    /// Selector identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Average => "average",
            Metric::Maximum => "maximum",
            Metric::Minimum => "minimum",
        }
    }

    /// Name of the JSON field holding this reading.
    pub fn field(&self) -> &'static str {
        match self {
            Metric::Average => "avg",
            Metric::Maximum => "high",
            Metric::Minimum => "low",
        }
    }

    /// Label used by metric selectors, e.g. "Showing temperature averages".
    pub fn plural(&self) -> &'static str {
        match self {
            Metric::Average => "averages",
            Metric::Maximum => "maxima",
            Metric::Minimum => "minima",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown metric '{0}', expected one of: average, maximum, minimum")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.name() == s)
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for metric in Metric::ALL {
            assert_eq!(metric.name().parse::<Metric>(), Ok(metric));
        }
    }

    #[test]
    fn test_parse_rejects_field_names() {
        let err = "avg".parse::<Metric>().unwrap_err();
        assert_eq!(err, UnknownMetric("avg".to_string()));
    }
}
