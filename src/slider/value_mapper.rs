// SPDX-License-Identifier: MPL-2.0
//! Conversions between raw values, track percentages and emitted values.
//!
//! Every function here is pure. Percentages are expressed on a `0..=100`
//! scale, the same scale used for the thumb offset.

use super::range::Range;
use serde::{Deserialize, Serialize};

/// Origin of the quantization grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuantizeAnchor {
    /// Grid starts at the range minimum: `min, min + step, ...`.
    #[default]
    RangeMin,
    /// Grid starts at zero regardless of the range: `..., -step, 0, step, ...`.
    Zero,
}

impl QuantizeAnchor {
    /// Returns the grid origin for `range`.
    #[must_use]
    pub fn origin(self, range: &Range) -> f64 {
        match self {
            QuantizeAnchor::RangeMin => range.min(),
            QuantizeAnchor::Zero => 0.0,
        }
    }
}

/// Restricts `value` to `[min, max]`.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Rounds `value` to the nearest point of the grid `origin + k * step`.
#[must_use]
pub fn quantize(value: f64, origin: f64, step: f64) -> f64 {
    ((value - origin) / step).round() * step + origin
}

/// Maps a track percentage (`0..=100`) to a value by linear interpolation.
#[must_use]
pub fn to_value(percent: f64, min: f64, max: f64) -> f64 {
    min + (percent / 100.0) * (max - min)
}

/// Maps a value to the percentage of the track it covers.
///
/// Results below `min_visible` collapse to exactly `0.0`.
#[must_use]
pub fn to_width_percent(value: f64, min: f64, max: f64, min_visible: f64) -> f64 {
    let percent = clamp((value - min) / (max - min) * 100.0, 0.0, 100.0);
    if percent < min_visible {
        0.0
    } else {
        percent
    }
}

/// Runs the set-value pipeline: clamp, quantize when snapping, then coerce.
///
/// Continuous values are truncated toward zero, matching the whole-number
/// granularity of the widget. Snapped values keep the step grid as their
/// granularity and are clamped again so a partial final interval can never
/// push them past `max`.
#[must_use]
pub fn normalize(value: f64, range: &Range, snap: Option<QuantizeAnchor>) -> f64 {
    let clamped = clamp(value, range.min(), range.max());
    match (snap, range.step()) {
        (Some(anchor), Some(step)) => clamp(
            quantize(clamped, anchor.origin(range), step),
            range.min(),
            range.max(),
        ),
        _ => clamped.trunc(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_VISIBLE_WIDTH_PERCENT;
    use proptest::prelude::*;

    fn range(min: f64, max: f64, step: Option<f64>) -> Range {
        Range::new(min, max, step).expect("valid range")
    }

    #[test]
    fn clamp_limits_both_ends() {
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(7.5, 0.0, 10.0), 7.5);
    }

    #[test]
    fn quantize_rounds_to_nearest_grid_point() {
        assert_eq!(quantize(4.9, 0.0, 2.0), 4.0);
        assert_eq!(quantize(5.1, 0.0, 2.0), 6.0);
    }

    #[test]
    fn quantize_grid_follows_origin() {
        // Grid 1, 3, 5, ... when anchored at 1.
        assert_eq!(quantize(4.2, 1.0, 2.0), 5.0);
        // Grid 0, 2, 4, ... when anchored at zero.
        assert_eq!(quantize(4.2, 0.0, 2.0), 4.0);
    }

    #[test]
    fn to_value_interpolates() {
        assert_eq!(to_value(0.0, 10.0, 20.0), 10.0);
        assert_eq!(to_value(50.0, 10.0, 20.0), 15.0);
        assert_eq!(to_value(100.0, 10.0, 20.0), 20.0);
    }

    #[test]
    fn width_below_threshold_snaps_to_zero() {
        // 0.1% of the track.
        assert_eq!(to_width_percent(1.0, 0.0, 1000.0, MIN_VISIBLE_WIDTH_PERCENT), 0.0);
    }

    #[test]
    fn width_above_threshold_is_kept() {
        // 0.2% of the track.
        let width = to_width_percent(2.0, 0.0, 1000.0, MIN_VISIBLE_WIDTH_PERCENT);
        assert!((width - 0.2).abs() < 1e-9);
    }

    #[test]
    fn round_trip_breaks_only_below_threshold() {
        let (min, max) = (0.0, 1000.0);
        let below = 1.0;
        let above = 2.0;
        let back_below = to_value(
            to_width_percent(below, min, max, MIN_VISIBLE_WIDTH_PERCENT),
            min,
            max,
        );
        let back_above = to_value(
            to_width_percent(above, min, max, MIN_VISIBLE_WIDTH_PERCENT),
            min,
            max,
        );
        assert_eq!(back_below, min);
        assert!((back_above - above).abs() < 1e-9);
    }

    #[test]
    fn normalize_truncates_continuous_values() {
        let continuous = range(0.0, 100.0, None);
        assert_eq!(normalize(49.9, &continuous, None), 49.0);
        assert_eq!(normalize(150.0, &continuous, None), 100.0);
    }

    #[test]
    fn normalize_snaps_to_range_anchored_grid() {
        let stepped = range(1.0, 11.0, Some(2.0));
        assert_eq!(normalize(4.2, &stepped, Some(QuantizeAnchor::RangeMin)), 5.0);
        assert_eq!(normalize(4.2, &stepped, Some(QuantizeAnchor::Zero)), 4.0);
    }

    #[test]
    fn normalize_keeps_partial_final_interval_in_range() {
        let stepped = range(0.0, 10.0, Some(4.0));
        // round(10 / 4) * 4 = 12, clamped back to the bound.
        assert_eq!(normalize(10.0, &stepped, Some(QuantizeAnchor::RangeMin)), 10.0);
    }

    #[test]
    fn normalize_keeps_fractional_steps() {
        let stepped = range(0.0, 1.0, Some(0.25));
        assert_eq!(normalize(0.3, &stepped, Some(QuantizeAnchor::RangeMin)), 0.25);
    }

    #[test]
    fn normalize_without_step_ignores_snap() {
        let continuous = range(0.0, 10.0, None);
        assert_eq!(normalize(3.7, &continuous, Some(QuantizeAnchor::RangeMin)), 3.0);
    }

    proptest! {
        #[test]
        fn clamp_is_idempotent_and_bounded(
            value in -1.0e6f64..1.0e6,
            min in -1.0e3f64..0.0,
            span in 1.0e-3f64..1.0e3,
        ) {
            let max = min + span;
            let once = clamp(value, min, max);
            prop_assert_eq!(clamp(once, min, max), once);
            prop_assert!(once >= min && once <= max);
        }

        #[test]
        fn quantize_is_stable(
            value in -1.0e4f64..1.0e4,
            origin in -100.0f64..100.0,
            step in 0.01f64..50.0,
        ) {
            let once = quantize(value, origin, step);
            let twice = quantize(once, origin, step);
            prop_assert!((once - twice).abs() <= step * 1e-9);
        }

        #[test]
        fn width_round_trip_reproduces_value(
            min in -1.0e3f64..1.0e3,
            span in 1.0f64..1.0e3,
            fraction in 0.0f64..=1.0,
        ) {
            let max = min + span;
            let value = min + fraction * span;
            let width = to_width_percent(value, min, max, MIN_VISIBLE_WIDTH_PERCENT);
            let back = to_value(width, min, max);
            let tolerance = span * MIN_VISIBLE_WIDTH_PERCENT / 100.0 + 1e-9;
            prop_assert!((back - value).abs() <= tolerance);
        }
    }
}
