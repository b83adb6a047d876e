//! Defines [`ChartLayout`], the tag selecting the horizontal position strategy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The two supported chart layouts.
///
/// Both share the value and color scales; they differ only in how a record's
/// horizontal position is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartLayout {
    /// Continuous calendar progression: one band per `(month, day)` between the
    /// earliest and latest calendar day present. Identifier `first`.
    #[default]
    #[serde(rename = "first")]
    CalendarBand,
    /// Records positioned by day of month only, so the same day of different
    /// months and years stacks in one slot. Identifier `single-day`.
    #[serde(rename = "single-day")]
    DayOfMonth,
}

impl ChartLayout {
    pub const ALL: [ChartLayout; 2] = [ChartLayout::CalendarBand, ChartLayout::DayOfMonth];

    pub fn id(&self) -> &'static str {
        match self {
            ChartLayout::CalendarBand => "first",
            ChartLayout::DayOfMonth => "single-day",
        }
    }
}

impl fmt::Display for ChartLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown chart layout '{0}', expected 'first' or 'single-day'")]
pub struct UnknownLayout(pub String);

impl FromStr for ChartLayout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartLayout::ALL
            .into_iter()
            .find(|layout| layout.id() == s)
            .ok_or_else(|| UnknownLayout(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_ids() {
        assert_eq!("first".parse(), Ok(ChartLayout::CalendarBand));
        assert_eq!("single-day".parse(), Ok(ChartLayout::DayOfMonth));
        assert!("bar".parse::<ChartLayout>().is_err());
        assert_eq!(ChartLayout::DayOfMonth.to_string(), "single-day");
    }

    #[test]
    fn test_serde_uses_ids() -> Result<(), serde_json::Error> {
        let layout: ChartLayout = serde_json::from_str("\"single-day\"")?;
        assert_eq!(layout, ChartLayout::DayOfMonth);
        Ok(())
    }
}
