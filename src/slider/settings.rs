// SPDX-License-Identifier: MPL-2.0
//! Validated slider configuration.

use super::geometry::Orientation;
use super::range::Range;
use super::render_model::RenderTuning;
use super::value_mapper::QuantizeAnchor;
use crate::error::{Error, Result};

/// Everything the slider core needs besides the value itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SliderSettings {
    range: Range,
    snap: Option<QuantizeAnchor>,
    disabled: bool,
    orientation: Orientation,
    thumb_label: bool,
    drag_from_track: bool,
    tuning: RenderTuning,
}

impl SliderSettings {
    #[must_use]
    pub fn new(range: Range) -> Self {
        Self {
            range,
            ..Self::default()
        }
    }

    /// Enables snapping to the step grid anchored as `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingStep`] when the range has no step.
    pub fn with_snap(mut self, anchor: QuantizeAnchor) -> Result<Self> {
        if self.range.step().is_none() {
            return Err(Error::MissingStep);
        }
        self.snap = Some(anchor);
        Ok(self)
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_thumb_label(mut self, thumb_label: bool) -> Self {
        self.thumb_label = thumb_label;
        self
    }

    /// Lets a pointer-down on the track open a drag session, not only the thumb.
    #[must_use]
    pub fn with_drag_from_track(mut self, drag_from_track: bool) -> Self {
        self.drag_from_track = drag_from_track;
        self
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: RenderTuning) -> Self {
        self.tuning = tuning;
        self
    }

    #[must_use]
    pub fn range(&self) -> &Range {
        &self.range
    }

    /// Quantization anchor, present only while snapping.
    #[must_use]
    pub fn snap_anchor(&self) -> Option<QuantizeAnchor> {
        self.snap
    }

    #[must_use]
    pub fn is_snapping(&self) -> bool {
        self.snap.is_some()
    }

    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn thumb_label(&self) -> bool {
        self.thumb_label
    }

    #[must_use]
    pub fn drag_from_track(&self) -> bool {
        self.drag_from_track
    }

    #[must_use]
    pub fn tuning(&self) -> &RenderTuning {
        &self.tuning
    }
}
