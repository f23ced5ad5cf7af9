// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all slider configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Range**: Default bounds of a freshly created slider
//! - **Render**: Visual corrections applied by the render model
//! - **Geometry**: Widget sizes used by the Iced canvas

// ==========================================================================
// Range Defaults
// ==========================================================================

/// Default lower bound.
pub const DEFAULT_MIN: f64 = 0.0;

/// Default upper bound.
pub const DEFAULT_MAX: f64 = 100.0;

// ==========================================================================
// Render Defaults
// ==========================================================================

/// Widths (in percent) below this value are drawn as exactly zero so the
/// thumb never looks detached from the start of the track.
pub const MIN_VISIBLE_WIDTH_PERCENT: f64 = 0.15;

/// Track and fill scales below this fraction collapse to zero.
pub const SCALE_CUTOFF: f64 = 0.02;

/// Amount subtracted from track and fill scales while disabled.
pub const DISABLED_SCALE_INSET: f64 = 0.015;

/// Pixel shift applied to the track or fill near the range ends.
pub const EDGE_OFFSET_PX: f64 = 8.0;

/// Visual width (percent) under which an idle track is shifted right.
pub const TRACK_OFFSET_BELOW_PERCENT: f64 = 1.0;

/// Visual width (percent) above which the fill is shifted left.
pub const FILL_OFFSET_ABOVE_PERCENT: f64 = 99.0;

// ==========================================================================
// Keyboard Defaults
// ==========================================================================

/// Multiplier applied while Shift is held.
pub const SHIFT_MULTIPLIER: f64 = 3.0;

/// Multiplier applied while Ctrl is held (and Shift is not).
pub const CTRL_MULTIPLIER: f64 = 2.0;

/// Nudge amount for continuous sliders.
pub const CONTINUOUS_NUDGE: f64 = 1.0;

// ==========================================================================
// Widget Geometry Defaults
// ==========================================================================

/// Default widget width in logical pixels.
pub const WIDGET_WIDTH: f32 = 240.0;

/// Default widget height; leaves room above the track for the thumb label.
pub const WIDGET_HEIGHT: f32 = 56.0;

/// Thickness of the track bar.
pub const TRACK_THICKNESS: f32 = 2.0;

/// Radius of the thumb circle.
pub const THUMB_RADIUS: f32 = 6.0;

/// Radius of the thumb while dragging.
pub const THUMB_ACTIVE_RADIUS: f32 = 8.0;

/// Side length of a tick mark.
pub const TICK_SIZE: f32 = 2.0;

/// Upper bound on drawn tick marks; denser grids are not drawn at all.
pub const MAX_TICKS: usize = 1000;
