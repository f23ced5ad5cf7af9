// SPDX-License-Identifier: MPL-2.0
//! Track geometry sampling and pointer-to-percent conversion.
//!
//! Geometry is read fresh for every pointer event: the track can move or
//! resize in the middle of a drag (window resize, responsive layout), so a
//! rectangle cached at drag start would map later moves to stale positions.

use super::value_mapper::clamp;
use iced::{Point, Rectangle};

/// On-screen bounding box of the track, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl TrackGeometry {
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

impl From<Rectangle> for TrackGeometry {
    fn from(bounds: Rectangle) -> Self {
        Self::new(bounds.x, bounds.y, bounds.width, bounds.height)
    }
}

/// Source of the current track geometry.
pub trait TrackSampler {
    /// Reads the geometry as it is right now.
    fn sample_track(&self) -> TrackGeometry;
}

impl TrackSampler for TrackGeometry {
    fn sample_track(&self) -> TrackGeometry {
        *self
    }
}

impl<F> TrackSampler for F
where
    F: Fn() -> TrackGeometry,
{
    fn sample_track(&self) -> TrackGeometry {
        self()
    }
}

/// Axis along which the thumb travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    /// Values grow from the bottom edge upwards.
    Vertical,
}

/// Converts a horizontal pointer coordinate into a `0..=100` percentage.
#[must_use]
pub fn pointer_to_percent(client_x: f32, geometry: &TrackGeometry) -> f64 {
    if geometry.width <= 0.0 {
        return 0.0;
    }
    let percent = f64::from(client_x - geometry.left) / f64::from(geometry.width) * 100.0;
    clamp(percent, 0.0, 100.0)
}

/// Converts a vertical pointer coordinate into a `0..=100` percentage,
/// measured from the bottom edge.
#[must_use]
pub fn pointer_to_percent_vertical(client_y: f32, geometry: &TrackGeometry) -> f64 {
    if geometry.height <= 0.0 {
        return 0.0;
    }
    let percent = f64::from(geometry.bottom() - client_y) / f64::from(geometry.height) * 100.0;
    clamp(percent, 0.0, 100.0)
}

/// Samples the track and converts `position` along `orientation`.
#[must_use]
pub fn sample_percent<G: TrackSampler + ?Sized>(
    sampler: &G,
    position: Point,
    orientation: Orientation,
) -> f64 {
    let geometry = sampler.sample_track();
    match orientation {
        Orientation::Horizontal => pointer_to_percent(position.x, &geometry),
        Orientation::Vertical => pointer_to_percent_vertical(position.y, &geometry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn midpoint_maps_to_fifty_percent() {
        let track = TrackGeometry::new(0.0, 0.0, 200.0, 4.0);
        assert_eq!(pointer_to_percent(100.0, &track), 50.0);
    }

    #[test]
    fn offset_track_is_measured_from_its_left_edge() {
        let track = TrackGeometry::new(50.0, 0.0, 100.0, 4.0);
        assert_eq!(pointer_to_percent(75.0, &track), 25.0);
    }

    #[test]
    fn pointer_outside_track_is_clamped() {
        let track = TrackGeometry::new(50.0, 0.0, 100.0, 4.0);
        assert_eq!(pointer_to_percent(0.0, &track), 0.0);
        assert_eq!(pointer_to_percent(500.0, &track), 100.0);
    }

    #[test]
    fn zero_width_track_maps_to_zero() {
        let track = TrackGeometry::new(10.0, 0.0, 0.0, 4.0);
        assert_eq!(pointer_to_percent(10.0, &track), 0.0);
    }

    #[test]
    fn vertical_percent_grows_upwards() {
        let track = TrackGeometry::new(0.0, 100.0, 4.0, 200.0);
        assert_eq!(pointer_to_percent_vertical(300.0, &track), 0.0);
        assert_eq!(pointer_to_percent_vertical(250.0, &track), 25.0);
        assert_eq!(pointer_to_percent_vertical(100.0, &track), 100.0);
    }

    #[test]
    fn sample_percent_reads_geometry_each_call() {
        let left = Cell::new(0.0_f32);
        let sampler = || TrackGeometry::new(left.get(), 0.0, 100.0, 4.0);
        let position = Point::new(50.0, 0.0);

        assert_eq!(sample_percent(&sampler, position, Orientation::Horizontal), 50.0);
        left.set(25.0);
        assert_eq!(sample_percent(&sampler, position, Orientation::Horizontal), 25.0);
    }

    #[test]
    fn rectangle_converts_to_geometry() {
        let geometry = TrackGeometry::from(Rectangle::new(
            Point::new(1.0, 2.0),
            iced::Size::new(3.0, 4.0),
        ));
        assert_eq!(geometry, TrackGeometry::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(geometry.bottom(), 6.0);
    }
}
