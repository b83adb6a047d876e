use serde::Serialize;

/// A continuous linear mapping from a numeric domain onto a pixel range.
///
/// Either side may be inverted (e.g. a temperature domain mapped onto a
/// bottom-to-top pixel range). A degenerate domain (`d0 == d1`) maps every
/// value onto the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Maps a domain value to a range value. Values outside the domain are
    /// extrapolated, not clamped.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return r0 + (r1 - r0) * 0.5;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Maps a range value back to the domain.
    pub fn invert(&self, position: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r0 == r1 {
            return d0 + (d1 - d0) * 0.5;
        }
        d0 + (position - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Roughly `count` evenly spaced, human-friendly values spanning the domain
    /// (multiples of 1, 2 or 5 times a power of ten).
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Human-friendly tick values between `start` and `stop`, inclusive of both
/// when they land on a step. Returned in the direction `start -> stop`.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };

    let Some(spec) = TickSpec::compute(low, high, count as f64) else {
        return Vec::new();
    };
    if spec.last < spec.first {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = (spec.first..=spec.last).map(|i| spec.value(i)).collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Tick `i` sits at `i * step` when `step` is at least one, otherwise at
/// `i / inverse_step` to avoid accumulating float error on small steps.
struct TickSpec {
    first: i64,
    last: i64,
    increment: f64,
    fractional: bool,
}

impl TickSpec {
    fn compute(low: f64, high: f64, count: f64) -> Option<TickSpec> {
        let step = (high - low) / count;
        if !step.is_finite() || step <= 0.0 {
            return None;
        }
        let power = step.log10().floor();
        let error = step / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

        let spec = if power < 0.0 {
            let increment = 10f64.powf(-power) / factor;
            let mut first = (low * increment).round() as i64;
            let mut last = (high * increment).round() as i64;
            if (first as f64) / increment < low {
                first += 1;
            }
            if (last as f64) / increment > high {
                last -= 1;
            }
            TickSpec {
                first,
                last,
                increment,
                fractional: true,
            }
        } else {
            let increment = 10f64.powf(power) * factor;
            let mut first = (low / increment).round() as i64;
            let mut last = (high / increment).round() as i64;
            if (first as f64) * increment < low {
                first += 1;
            }
            if (last as f64) * increment > high {
                last -= 1;
            }
            TickSpec {
                first,
                last,
                increment,
                fractional: false,
            }
        };

        if spec.last < spec.first && (0.5..2.0).contains(&count) {
            return TickSpec::compute(low, high, count * 2.0);
        }
        Some(spec)
    }

    fn value(&self, i: i64) -> f64 {
        if self.fractional {
            i as f64 / self.increment
        } else {
            i as f64 * self.increment
        }
    }
}
