use crate::types::calendar::CalendarDay;
use serde::Serialize;

/// A discrete scale giving each calendar day an equal-width band.
///
/// Layout follows the usual band-scale rules with rounding enabled, outer
/// padding 0 and alignment 0.5: the step is floored to whole pixels, the
/// leftover space is split evenly on both sides, and band start and width are
/// rounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandScale {
    domain: Vec<CalendarDay>,
    range: (f64, f64),
    padding_inner: f64,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// `domain` must be sorted in calendar order; lookups rely on it.
    pub fn new(domain: Vec<CalendarDay>, range: (f64, f64), padding_inner: f64) -> Self {
        let padding_inner = padding_inner.clamp(0.0, 1.0);
        let n = domain.len() as f64;
        let (low, high) = if range.1 < range.0 {
            (range.1, range.0)
        } else {
            (range.0, range.1)
        };

        let step = ((high - low) / (n - padding_inner).max(1.0)).floor();
        let start = (low + (high - low - step * (n - padding_inner)) * 0.5).round();
        let bandwidth = (step * (1.0 - padding_inner)).round();

        Self {
            domain,
            range,
            padding_inner,
            start,
            step,
            bandwidth,
        }
    }

    pub fn domain(&self) -> &[CalendarDay] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn padding_inner(&self) -> f64 {
        self.padding_inner
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Left edge of the band for `day`, or `None` if `day` is not in the domain.
    pub fn position(&self, day: CalendarDay) -> Option<f64> {
        self.domain
            .binary_search(&day)
            .ok()
            .map(|index| self.start + self.step * index as f64)
    }

    /// Horizontal centre of the band for `day`.
    pub fn center(&self, day: CalendarDay) -> Option<f64> {
        self.position(day).map(|x| x + self.bandwidth / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(days: std::ops::RangeInclusive<u32>) -> Vec<CalendarDay> {
        days.map(|d| CalendarDay::new(6, d).unwrap()).collect()
    }

    #[test]
    fn test_even_bands() {
        // 10 bands over 100 px with padding 0: 10 px each, no leftover.
        let scale = BandScale::new(june(1..=10), (0.0, 100.0), 0.0);
        assert_eq!(scale.step(), 10.0);
        assert_eq!(scale.bandwidth(), 10.0);
        assert_eq!(scale.position(CalendarDay::new(6, 1).unwrap()), Some(0.0));
        assert_eq!(scale.position(CalendarDay::new(6, 10).unwrap()), Some(90.0));
    }

    #[test]
    fn test_padding_and_rounding() {
        // step = floor(700 / (30 - 0.1)) = 23, leftover centred.
        let scale = BandScale::new(june(1..=30), (60.0, 760.0), 0.1);
        assert_eq!(scale.step(), 23.0);
        assert_eq!(scale.bandwidth(), 21.0);
        let first = scale.position(CalendarDay::new(6, 1).unwrap()).unwrap();
        // 60 + (700 - 23 * 29.9) / 2 = 60 + 6.15 -> 66
        assert_eq!(first, 66.0);
        assert_eq!(scale.position(CalendarDay::new(6, 2).unwrap()), Some(89.0));
    }

    #[test]
    fn test_single_band_is_visible() {
        let scale = BandScale::new(june(15..=15), (60.0, 760.0), 0.1);
        assert!(scale.bandwidth() > 0.0);
        let x = scale.position(CalendarDay::new(6, 15).unwrap()).unwrap();
        assert!(x >= 60.0 && x + scale.bandwidth() <= 760.0);
    }

    #[test]
    fn test_unknown_day() {
        let scale = BandScale::new(june(1..=5), (0.0, 100.0), 0.1);
        assert_eq!(scale.position(CalendarDay::new(7, 1).unwrap()), None);
    }
}
