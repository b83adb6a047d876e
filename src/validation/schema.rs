//! Turns an untyped JSON document into a [`Dataset`], checking every structural
//! rule on the way.
//!
//! Validation is all-or-nothing: the first violation aborts the parse and no
//! partially valid dataset is ever returned.

use crate::types::dataset::Dataset;
use crate::types::day::{Day, IntoRecordDate};
use crate::types::station::Station;
use crate::validation::error::{ValidationError, ViolationKind};
use chrono::Datelike;
use log::debug;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

const ROOT: &str = "stations";

/// A station as it appears in the document, before the semantic checks.
#[derive(Debug, Deserialize)]
struct RawStation {
    name: String,
    temps: Vec<RawDay>,
}

#[derive(Debug, Deserialize)]
struct RawDay {
    avg: f64,
    high: f64,
    low: f64,
    #[serde(deserialize_with = "integral")]
    day: i64,
    #[serde(deserialize_with = "integral")]
    month: i64,
    #[serde(deserialize_with = "integral")]
    year: i64,
    date: String,
}

/// Reads an integral number, accepting `6` as well as `6.0`.
fn integral<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(de::Error::invalid_value(Unexpected::Float(value), &"an integer"))
    }
}

/// Validates a parsed JSON document shaped as
/// `{ "<station id>": { "name": string, "temps": Day[] } }`.
///
/// Any number of stations, including none, is accepted. Each station needs a
/// non-empty `name` and a non-empty `temps` array. Each day needs numeric
/// `avg`, `high` and `low`, integral `day`, `month` and `year`, and a `date`
/// string that agrees with them. Records are returned sorted by date.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, with the JSON path of the
/// offending value.
///
/// # Example
///
/// ```
/// use station_temps::validate_dataset;
/// use serde_json::json;
///
/// let doc = json!({
///     "X": { "name": "Station X", "temps": [
///         { "date": "2000-06-01", "day": 1, "month": 6, "year": 2000,
///           "avg": 20.0, "high": 25.0, "low": 15.0 }
///     ]}
/// });
/// let dataset = validate_dataset(&doc).unwrap();
/// assert_eq!(dataset.station("X").unwrap().temps().len(), 1);
///
/// let empty = json!({ "X": { "name": "Station X", "temps": [] } });
/// assert!(validate_dataset(&empty).is_err());
/// ```
pub fn validate_dataset(document: &Value) -> Result<Dataset, ValidationError> {
    let raw: BTreeMap<String, RawStation> =
        serde_path_to_error::deserialize(document).map_err(|err| {
            let path = if err.path().iter().next().is_none() {
                ROOT.to_string()
            } else {
                format!("{ROOT}.{}", err.path())
            };
            ValidationError::new(path, ViolationKind::Malformed(err.into_inner().to_string()))
        })?;

    let mut stations = BTreeMap::new();
    for (id, station) in raw {
        let station = validate_station(&id, station)?;
        stations.insert(id, station);
    }

    let dataset = Dataset::from_stations(stations);
    debug!(
        "Validated {} stations with {} daily records",
        dataset.len(),
        dataset.record_count()
    );
    Ok(dataset)
}

fn validate_station(id: &str, raw: RawStation) -> Result<Station, ValidationError> {
    let path = format!("{ROOT}.{id}");
    if raw.name.is_empty() {
        return Err(ValidationError::new(format!("{path}.name"), ViolationKind::EmptyName));
    }

    let temps_path = format!("{path}.temps");
    if raw.temps.is_empty() {
        return Err(ValidationError::new(temps_path, ViolationKind::EmptySeries));
    }

    let mut days = raw
        .temps
        .iter()
        .enumerate()
        .map(|(index, day)| validate_day(&format!("{temps_path}[{index}]"), day).map(|day| (index, day)))
        .collect::<Result<Vec<(usize, Day)>, ValidationError>>()?;

    // Stable sort, so on duplicates the later record in the document is blamed.
    days.sort_by_key(|(_, day)| day.date());
    if let Some(pair) = days.windows(2).find(|w| w[0].1.date() == w[1].1.date()) {
        let (index, day) = &pair[1];
        return Err(ValidationError::new(
            format!("{temps_path}[{index}].date"),
            ViolationKind::DuplicateDay(day.date()),
        ));
    }

    let temps = days.into_iter().map(|(_, day)| day).collect();
    Ok(Station::from_validated(id.to_string(), raw.name, temps))
}

fn validate_day(path: &str, raw: &RawDay) -> Result<Day, ValidationError> {
    let day = in_range(raw.day, 1, 31, path, "day")? as u32;
    let month = in_range(raw.month, 1, 12, path, "month")? as u32;
    let year = in_range(raw.year, i32::MIN as i64, i32::MAX as i64, path, "year")? as i32;

    let date_path = format!("{path}.date");
    let date = raw
        .date
        .as_str()
        .into_record_date()
        .ok_or_else(|| ValidationError::new(&date_path, ViolationKind::InvalidDate))?;

    if date.day() != day || date.month() != month || date.year() != year {
        return Err(ValidationError::new(
            date_path,
            ViolationKind::DateMismatch {
                date,
                day,
                month,
                year,
            },
        ));
    }

    Ok(Day::from_parts(date, raw.avg, raw.high, raw.low))
}

fn in_range(value: i64, min: i64, max: i64, parent: &str, field: &str) -> Result<i64, ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::new(
            format!("{parent}.{field}"),
            ViolationKind::OutOfRange { value, min, max },
        ));
    }
    Ok(value)
}
