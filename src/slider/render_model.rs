// SPDX-License-Identifier: MPL-2.0
//! Visual state derived from the value.
//!
//! Nothing in here is a source of truth: a [`RenderModel`] is recomputed
//! from the visual width, the value and the settings after every change.

use super::geometry::Orientation;
use super::range::Range;
use super::settings::SliderSettings;
use crate::config::{
    DISABLED_SCALE_INSET, EDGE_OFFSET_PX, FILL_OFFSET_ABOVE_PERCENT, MAX_TICKS,
    MIN_VISIBLE_WIDTH_PERCENT, SCALE_CUTOFF, TRACK_OFFSET_BELOW_PERCENT,
};
use serde::{Deserialize, Serialize};

/// Empirical corrections that keep the track, fill and thumb visually joined
/// near both ends of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderTuning {
    /// Widths (percent) below this are drawn as zero.
    pub min_visible_width: f64,
    /// Scales below this collapse to zero unless a thumb label is shown.
    pub scale_cutoff: f64,
    /// Subtracted from scales while disabled.
    pub disabled_scale_inset: f64,
    /// Pixel shift for the track/fill end corrections.
    pub edge_offset_px: f64,
    /// Idle track is shifted when the width is below this percent.
    pub track_offset_below: f64,
    /// Fill is shifted back when the width is above this percent.
    pub fill_offset_above: f64,
}

impl Default for RenderTuning {
    fn default() -> Self {
        Self {
            min_visible_width: MIN_VISIBLE_WIDTH_PERCENT,
            scale_cutoff: SCALE_CUTOFF,
            disabled_scale_inset: DISABLED_SCALE_INSET,
            edge_offset_px: EDGE_OFFSET_PX,
            track_offset_below: TRACK_OFFSET_BELOW_PERCENT,
            fill_offset_above: FILL_OFFSET_ABOVE_PERCENT,
        }
    }
}

/// Edge the thumb offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbSide {
    Left,
    Bottom,
}

impl From<Orientation> for ThumbSide {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => ThumbSide::Left,
            Orientation::Vertical => ThumbSide::Bottom,
        }
    }
}

/// Everything a renderer needs to draw the slider.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    /// Thumb position in percent of the track, from [`RenderModel::thumb_side`].
    pub thumb_offset: f64,
    pub thumb_side: ThumbSide,
    /// Fraction of the track occupied by the unfilled part.
    pub track_scale: f64,
    pub track_translate_px: f64,
    /// Fraction of the track occupied by the filled part.
    pub fill_scale: f64,
    pub fill_translate_px: f64,
    /// Tick positions in percent; empty without a step.
    pub ticks: Vec<f64>,
    /// Label text, present only while dragging with labels enabled.
    pub thumb_label: Option<String>,
    pub active: bool,
    /// The thumb has left the minimum.
    pub dirty: bool,
    pub disabled: bool,
    pub show_ticks: bool,
}

impl RenderModel {
    /// Projects the visual state for `value` drawn at `visual_width` percent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn derive(visual_width: f64, value: f64, settings: &SliderSettings, active: bool) -> Self {
        let tuning = settings.tuning();
        let thumb_label = settings.thumb_label();
        let disabled = settings.disabled();

        let track_translate_px = if visual_width < tuning.track_offset_below && !active {
            tuning.edge_offset_px
        } else {
            0.0
        };
        let fill_translate_px = if visual_width > tuning.fill_offset_above && !thumb_label {
            -tuning.edge_offset_px
        } else {
            0.0
        };

        let ticks = tick_positions(settings.range());

        Self {
            thumb_offset: visual_width,
            thumb_side: settings.orientation().into(),
            track_scale: scale(1.0 - visual_width / 100.0, thumb_label, disabled, tuning),
            track_translate_px,
            fill_scale: scale(visual_width / 100.0, thumb_label, disabled, tuning),
            fill_translate_px,
            show_ticks: !disabled && !ticks.is_empty(),
            ticks,
            thumb_label: (thumb_label && active).then(|| format!("{}", value.trunc() as i64)),
            active,
            dirty: visual_width > 0.0,
            disabled,
        }
    }
}

/// Applies the cutoff and disabled inset to a track or fill scale.
#[must_use]
pub fn scale(value: f64, thumb_label: bool, disabled: bool, tuning: &RenderTuning) -> f64 {
    if value < tuning.scale_cutoff && !thumb_label {
        return 0.0;
    }
    if disabled {
        (value - tuning.disabled_scale_inset).max(0.0)
    } else {
        value
    }
}

/// Uniformly spaced tick positions, `num_ticks + 1` of them including both ends.
///
/// Empty when the range has no step or more than [`MAX_TICKS`] intervals.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tick_positions(range: &Range) -> Vec<f64> {
    let count = range.num_ticks();
    if count == 0 || count > MAX_TICKS {
        return Vec::new();
    }
    let interval = 100.0 / count as f64;
    (0..=count).map(|i| i as f64 * interval).collect()
}
