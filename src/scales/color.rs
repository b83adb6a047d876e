use crate::config::ColorPolicy;
use crate::scales::ScaleError;
use serde::Serialize;

/// Muted fill for records before the highlight cutoff.
pub const HIGHLIGHT_BASE_COLOR: &str = "#d7d7d7";
/// Fill for records at or after the highlight cutoff.
pub const HIGHLIGHT_COLOR: &str = "crimson";

/// Lower bounds of the decade buckets after the first.
pub const DECADE_THRESHOLDS: [i32; 6] = [1971, 1981, 1991, 2001, 2011, 2021];
/// One color per decade bucket, light to dark.
pub const DECADE_PALETTE: [&str; 7] = [
    "#dbeff9", "#b3d8e3", "#98bdcd", "#89a1b8", "#8283a3", "#7f648f", "#7d417b",
];

/// A step function from a year to a fill color.
///
/// With thresholds `t0 < t1 < … < tn-1` and colors `c0 … cn`, a year maps to
/// `c0` when below `t0`, to `ci` when in `[ti-1, ti)`, and to `cn` from `tn-1`
/// on. The mapping is a pure function of the year and the configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorScale {
    thresholds: Vec<i32>,
    colors: Vec<String>,
    highlight_from: Option<i32>,
}

impl ColorScale {
    /// Builds a threshold scale.
    ///
    /// # Errors
    ///
    /// [`ScaleError::InvalidColorScale`] unless there is exactly one more color
    /// than thresholds and the thresholds are strictly increasing.
    pub fn new(thresholds: Vec<i32>, colors: Vec<String>) -> Result<Self, ScaleError> {
        if colors.len() != thresholds.len() + 1 {
            return Err(ScaleError::InvalidColorScale(format!(
                "{} thresholds need {} colors, got {}",
                thresholds.len(),
                thresholds.len() + 1,
                colors.len()
            )));
        }
        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ScaleError::InvalidColorScale(
                "thresholds must be strictly increasing".to_string(),
            ));
        }
        Ok(Self {
            thresholds,
            colors,
            highlight_from: None,
        })
    }

    /// Binary highlight: `highlight` from `from_year` on, `base` before.
    pub fn highlight(from_year: i32, base: &str, highlight: &str) -> Self {
        Self {
            thresholds: vec![from_year],
            colors: vec![base.to_string(), highlight.to_string()],
            highlight_from: Some(from_year),
        }
    }

    /// Decade banding with [`DECADE_THRESHOLDS`] and [`DECADE_PALETTE`].
    pub fn decades() -> Self {
        Self {
            thresholds: DECADE_THRESHOLDS.to_vec(),
            colors: DECADE_PALETTE.iter().map(|c| c.to_string()).collect(),
            highlight_from: None,
        }
    }

    pub fn from_policy(policy: ColorPolicy) -> Self {
        match policy {
            ColorPolicy::Highlight { from_year } => {
                Self::highlight(from_year, HIGHLIGHT_BASE_COLOR, HIGHLIGHT_COLOR)
            }
            ColorPolicy::Decades => Self::decades(),
        }
    }

    pub fn apply(&self, year: i32) -> &str {
        let bucket = self.thresholds.partition_point(|&threshold| threshold <= year);
        &self.colors[bucket]
    }

    /// Whether `year` falls in the emphasized bucket of a highlight scale.
    /// Always false for multi-bucket scales.
    pub fn is_highlighted(&self, year: i32) -> bool {
        self.highlight_from.is_some_and(|from| year >= from)
    }

    pub fn thresholds(&self) -> &[i32] {
        &self.thresholds
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}
