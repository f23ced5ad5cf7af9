// SPDX-License-Identifier: MPL-2.0
//! Validated slider bounds.
//!
//! A [`Range`] is the only way the rest of the crate learns about `min`,
//! `max` and `step`, so every percent/width computation downstream can
//! divide by `max - min` and `step` without checking for zero.

use crate::error::{Error, Result};

/// Bounds of a slider with an optional quantization step.
///
/// Guaranteed: both bounds are finite, `min < max`, and a present step is
/// finite and strictly positive. A step that does not divide `max - min`
/// evenly is accepted; the last interval is simply shorter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
    step: Option<f64>,
}

impl Range {
    /// Creates a range, rejecting bounds or steps that would make the
    /// value/width math produce `NaN` or infinities.
    pub fn new(min: f64, max: f64, step: Option<f64>) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(Error::InvalidRange { min, max });
        }
        if let Some(step) = step {
            if !step.is_finite() || step <= 0.0 {
                return Err(Error::InvalidStep(step));
            }
        }
        Ok(Self { min, max, step })
    }

    /// Creates a range without a step.
    pub fn continuous(min: f64, max: f64) -> Result<Self> {
        Self::new(min, max, None)
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn step(&self) -> Option<f64> {
        self.step
    }

    /// Distance between the bounds, always positive.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Number of whole steps that fit in the range (`floor(span / step)`).
    ///
    /// Zero when the range has no step.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn num_ticks(&self) -> usize {
        self.step
            .map_or(0, |step| (self.span() / step).floor() as usize)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self {
            min: crate::config::DEFAULT_MIN,
            max: crate::config::DEFAULT_MAX,
            step: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordered_bounds() {
        let range = Range::new(-10.0, 10.0, Some(5.0)).expect("valid range");
        assert_eq!(range.min(), -10.0);
        assert_eq!(range.max(), 10.0);
        assert_eq!(range.step(), Some(5.0));
        assert_eq!(range.span(), 20.0);
    }

    #[test]
    fn rejects_equal_bounds() {
        assert_eq!(
            Range::continuous(3.0, 3.0),
            Err(Error::InvalidRange { min: 3.0, max: 3.0 })
        );
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert!(matches!(
            Range::continuous(10.0, 0.0),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(Range::continuous(f64::NEG_INFINITY, 0.0).is_err());
        assert!(Range::continuous(0.0, f64::NAN).is_err());
    }

    #[test]
    fn rejects_zero_and_negative_steps() {
        assert_eq!(Range::new(0.0, 10.0, Some(0.0)), Err(Error::InvalidStep(0.0)));
        assert_eq!(
            Range::new(0.0, 10.0, Some(-2.0)),
            Err(Error::InvalidStep(-2.0))
        );
    }

    #[test]
    fn num_ticks_floors_partial_interval() {
        let range = Range::new(0.0, 10.0, Some(3.0)).expect("valid range");
        assert_eq!(range.num_ticks(), 3);
    }

    #[test]
    fn num_ticks_is_zero_without_step() {
        let range = Range::continuous(0.0, 10.0).expect("valid range");
        assert_eq!(range.num_ticks(), 0);
    }

    #[test]
    fn default_range_is_zero_to_hundred() {
        let range = Range::default();
        assert_eq!((range.min(), range.max(), range.step()), (0.0, 100.0, None));
    }
}
