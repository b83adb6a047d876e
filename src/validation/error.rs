use chrono::NaiveDate;
use thiserror::Error;

/// What was wrong with the offending field.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ViolationKind {
    /// The document does not have the dataset shape: a missing field, or a
    /// value of the wrong type. Carries the decoder's message.
    #[error("{0}")]
    Malformed(String),

    #[error("value {0} is not a finite number")]
    NotFinite(f64),

    #[error("station has no daily records")]
    EmptySeries,

    #[error("station name is empty")]
    EmptyName,

    #[error("date cannot be parsed")]
    InvalidDate,

    #[error("value {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("date {date} does not match day {day}, month {month}, year {year}")]
    DateMismatch {
        date: NaiveDate,
        day: u32,
        month: u32,
        year: i32,
    },

    #[error("more than one record for {0}")]
    DuplicateDay(NaiveDate),
}

/// The first structural violation found in a dataset document.
///
/// `path` locates the offending value, e.g. `stations.B2BTUR01.temps[3].date`.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Invalid dataset at '{path}': {kind}")]
pub struct ValidationError {
    path: String,
    kind: ViolationKind,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> &ViolationKind {
        &self.kind
    }
}
