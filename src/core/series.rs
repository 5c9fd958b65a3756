use rust_decimal::Decimal;

use crate::core::primitives::decimal_to_f64;
use crate::error::{PlotError, PlotResult};

/// Minimum sample count of evenly spaced series helpers.
pub const MIN_SERIES_SAMPLES: usize = 2;

/// Evenly spaced sample positions over `[begin, end]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleLayout {
    pub positions: Vec<f64>,
    pub step: f64,
}

impl SampleLayout {
    /// Places `count` samples so that sample `i` sits at `begin + i * (end - begin) / (count - 1)`.
    ///
    /// Positions are computed in decimal arithmetic from the index, so the
    /// first and last sample land exactly on `begin` and `end`.
    pub fn even(begin: Decimal, end: Decimal, count: usize) -> PlotResult<Self> {
        if begin >= end {
            return Err(PlotError::Config(format!(
                "series interval must satisfy {begin} < {end}"
            )));
        }
        if count < MIN_SERIES_SAMPLES {
            return Err(PlotError::DegenerateInput {
                actual: count,
                required: MIN_SERIES_SAMPLES,
            });
        }

        let intervals = Decimal::from(count - 1);
        let step = (end - begin)
            .checked_div(intervals)
            .ok_or_else(|| PlotError::Config("series step is not representable".to_owned()))?;

        let mut positions = Vec::with_capacity(count);
        for i in 0..count {
            let offset = Decimal::from(i)
                .checked_mul(step)
                .and_then(|offset| begin.checked_add(offset))
                .ok_or_else(|| PlotError::Config("series position overflows".to_owned()))?;
            positions.push(decimal_to_f64(offset, "series position")?);
        }

        Ok(Self {
            positions,
            step: decimal_to_f64(step, "series step")?,
        })
    }
}

/// Data-space rectangle given by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl DataRect {
    /// Bar from `x = 0` to `x = value`, centered on `y`.
    #[must_use]
    pub fn horizontal_bar(value: f64, y: f64, thickness: f64) -> Self {
        let half = thickness / 2.0;
        Self {
            x1: 0.0,
            y1: y - half,
            x2: value,
            y2: y + half,
        }
    }

    /// Bar from `y = 0` to `y = value`, centered on `x`.
    #[must_use]
    pub fn vertical_bar(x: f64, value: f64, thickness: f64) -> Self {
        let half = thickness / 2.0;
        Self {
            x1: x - half,
            y1: 0.0,
            x2: x + half,
            y2: value,
        }
    }
}

/// Splits a mapped point sequence into maximal runs of finite points.
#[must_use]
pub fn finite_runs<T: Copy>(points: &[T], is_finite: impl Fn(&T) -> bool) -> Vec<Vec<T>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for point in points {
        if is_finite(point) {
            current.push(*point);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().expect("decimal literal")
    }

    #[test]
    fn nine_samples_cover_interval_ends() {
        let layout = SampleLayout::even(dec("0.25"), dec("0.65"), 9).expect("layout");
        assert_eq!(layout.positions.len(), 9);
        assert_eq!(layout.positions[0], 0.25);
        assert_eq!(layout.positions[8], 0.65);
        assert_eq!(layout.step, 0.05);
        for (i, position) in layout.positions.iter().enumerate() {
            assert!((position - (0.25 + i as f64 * 0.05)).abs() < 1e-12);
        }
    }

    #[test]
    fn rejects_degenerate_inputs() {
        let err = SampleLayout::even(dec("0"), dec("1"), 1).expect_err("single sample");
        assert!(matches!(
            err,
            PlotError::DegenerateInput {
                actual: 1,
                required: 2
            }
        ));
        let err = SampleLayout::even(dec("1"), dec("1"), 4).expect_err("empty interval");
        assert!(matches!(err, PlotError::Config(_)));
    }

    #[test]
    fn bars_span_from_zero() {
        let bar = DataRect::vertical_bar(0.3, 0.5, 0.02);
        assert_eq!((bar.y1, bar.y2), (0.0, 0.5));
        assert!((bar.x1 - 0.29).abs() < 1e-12 && (bar.x2 - 0.31).abs() < 1e-12);

        let bar = DataRect::horizontal_bar(0.3, 0.5, 0.02);
        assert_eq!((bar.x1, bar.x2), (0.0, 0.3));
    }

    #[test]
    fn runs_break_on_non_finite_points() {
        let runs = finite_runs(&[1.0, f64::NAN, 2.0, 3.0, f64::INFINITY], |v: &f64| v.is_finite());
        assert_eq!(runs, vec![vec![1.0], vec![2.0, 3.0]]);
    }
}
