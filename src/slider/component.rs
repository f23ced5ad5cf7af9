// SPDX-License-Identifier: MPL-2.0
//! Slider core: ties value mapping, geometry sampling, drag tracking and
//! keyboard nudging to an [`InputHost`].
//!
//! Every handler runs to completion synchronously. After each mutation the
//! visual width is recomputed from the normalized value, so the drawn thumb
//! can never drift from the value the host holds.

use super::drag::{DragController, PointerInput, PointerTarget};
use super::geometry::{sample_percent, TrackSampler};
use super::host::InputHost;
use super::keyboard::{nudge, NavigationKey, NudgeModifiers};
use super::render_model::RenderModel;
use super::settings::SliderSettings;
use super::surface::{InteractionSurface, ListenerRegistry};
use super::value_mapper::{normalize, to_value, to_width_percent};

/// Headless slider state for one widget instance.
#[derive(Debug)]
pub struct SliderCore<S = ListenerRegistry> {
    settings: SliderSettings,
    drag: DragController,
    surface: Option<S>,
    visual_width: f64,
    laid_out: bool,
}

impl<S: InteractionSurface> SliderCore<S> {
    /// Creates the core. Without a surface the slider still works, but a
    /// drag is only followed while the pointer stays over the widget.
    pub fn new(settings: SliderSettings, surface: Option<S>) -> Self {
        if surface.is_none() {
            log::warn!(
                "slider created without an interaction surface; \
                 drags will not be tracked outside the widget bounds"
            );
        }
        Self {
            settings,
            drag: DragController::new(),
            surface,
            visual_width: 0.0,
            laid_out: false,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &SliderSettings {
        &self.settings
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.drag.is_active()
    }

    #[must_use]
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Cached thumb position in percent; zero until the first layout.
    #[must_use]
    pub fn visual_width(&self) -> f64 {
        self.visual_width
    }

    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    /// Pushes the host's initial value through the set-value pipeline.
    pub fn mount<H: InputHost + ?Sized>(&mut self, host: &mut H) -> Option<f64> {
        let initial = host.value();
        self.set_value(host, initial)
    }

    /// One-shot deferred width computation, run once geometry exists.
    ///
    /// Returns `false` on every call after the first.
    pub fn after_first_layout<H: InputHost + ?Sized>(&mut self, host: &H) -> bool {
        if self.laid_out {
            return false;
        }
        self.laid_out = true;
        self.refresh(host.value());
        true
    }

    /// Recomputes the visual width after the host changed the value.
    pub fn sync<H: InputHost + ?Sized>(&mut self, host: &H) {
        self.refresh(host.value());
    }

    /// Replaces the settings and renormalizes the host value against them.
    pub fn reconfigure<H: InputHost + ?Sized>(
        &mut self,
        settings: SliderSettings,
        host: &mut H,
    ) -> Option<f64> {
        if settings == self.settings {
            return None;
        }
        self.settings = settings;
        let current = host.value();
        let emitted = self.set_value(host, current);
        self.refresh(host.value());
        emitted
    }

    /// Clamps, quantizes and coerces `raw`, then stores it in the host.
    ///
    /// Emits a change only when the normalized value differs from the
    /// host's current one; returns the emitted value.
    #[allow(clippy::float_cmp)]
    pub fn set_value<H: InputHost + ?Sized>(&mut self, host: &mut H, raw: f64) -> Option<f64> {
        let value = normalize(raw, self.settings.range(), self.settings.snap_anchor());
        self.refresh(value);

        if value == host.value() {
            return None;
        }
        host.set_value(value);
        host.emit_change(value);
        Some(value)
    }

    /// Pointer-down on the thumb or track.
    ///
    /// Opens a drag session for thumb presses, and for track presses when
    /// dragging from the track is enabled (the value jumps first). Returns
    /// whether a session was opened.
    pub fn on_pointer_down<H, G>(
        &mut self,
        host: &mut H,
        target: PointerTarget,
        input: &PointerInput,
        sampler: &G,
    ) -> bool
    where
        H: InputHost + ?Sized,
        G: TrackSampler + ?Sized,
    {
        if self.settings.disabled() {
            return false;
        }
        match target {
            PointerTarget::Thumb => {}
            PointerTarget::Track if self.settings.drag_from_track() => {
                self.seek(host, input, sampler);
            }
            PointerTarget::Track => return false,
        }
        self.drag.activate(input.kind(), self.surface.as_mut())
    }

    /// Move event while dragging; ignored when idle.
    pub fn on_pointer_move<H, G>(
        &mut self,
        host: &mut H,
        input: &PointerInput,
        sampler: &G,
    ) -> Option<f64>
    where
        H: InputHost + ?Sized,
        G: TrackSampler + ?Sized,
    {
        if !self.drag.is_active() {
            return None;
        }
        self.seek(host, input, sampler)
    }

    /// Pointer-up or touch-end anywhere. Safe to call when idle.
    pub fn on_pointer_up(&mut self) -> bool {
        self.drag.deactivate(self.surface.as_mut())
    }

    /// Click-to-seek: a click on the track while idle jumps to that position
    /// without opening a drag session.
    pub fn on_track_click<H, G>(
        &mut self,
        host: &mut H,
        input: &PointerInput,
        sampler: &G,
    ) -> Option<f64>
    where
        H: InputHost + ?Sized,
        G: TrackSampler + ?Sized,
    {
        if self.drag.is_active() || self.settings.disabled() {
            return None;
        }
        log::debug!("slider track clicked at {:?}", input.position());
        self.seek(host, input, sampler)
    }

    /// Arrow-key nudge.
    pub fn on_key_down<H: InputHost + ?Sized>(
        &mut self,
        host: &mut H,
        key: NavigationKey,
        modifiers: NudgeModifiers,
    ) -> Option<f64> {
        if self.settings.disabled() {
            return None;
        }
        let next = nudge(
            host.value(),
            key,
            modifiers,
            self.settings.range(),
            self.settings.is_snapping(),
        )?;
        self.set_value(host, next)
    }

    /// Current visual state.
    #[must_use]
    pub fn render_model<H: InputHost + ?Sized>(&self, host: &H) -> RenderModel {
        RenderModel::derive(
            self.visual_width,
            host.value(),
            &self.settings,
            self.drag.is_active(),
        )
    }

    fn seek<H, G>(&mut self, host: &mut H, input: &PointerInput, sampler: &G) -> Option<f64>
    where
        H: InputHost + ?Sized,
        G: TrackSampler + ?Sized,
    {
        let position = input.position()?;
        let percent = sample_percent(sampler, position, self.settings.orientation());
        let range = self.settings.range();
        let raw = to_value(percent, range.min(), range.max());
        self.set_value(host, raw)
    }

    fn refresh(&mut self, value: f64) {
        if !self.laid_out {
            return;
        }
        let range = self.settings.range();
        self.visual_width = to_width_percent(
            value,
            range.min(),
            range.max(),
            self.settings.tuning().min_visible_width,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::drag::PointerKind;
    use crate::slider::geometry::{Orientation, TrackGeometry};
    use crate::slider::host::ValueCell;
    use crate::slider::range::Range;
    use crate::slider::surface::ListenerKind;
    use crate::slider::value_mapper::QuantizeAnchor;
    use iced::Point;
    use std::cell::Cell;

    const TRACK: TrackGeometry = TrackGeometry {
        left: 0.0,
        top: 0.0,
        width: 200.0,
        height: 4.0,
    };

    fn continuous() -> SliderSettings {
        SliderSettings::new(Range::continuous(0.0, 100.0).expect("valid range"))
    }

    fn stepped() -> SliderSettings {
        SliderSettings::new(Range::new(0.0, 10.0, Some(2.0)).expect("valid range"))
            .with_snap(QuantizeAnchor::RangeMin)
            .expect("step present")
    }

    fn mounted(settings: SliderSettings, value: f64) -> (SliderCore, ValueCell) {
        let mut core = SliderCore::new(settings, Some(ListenerRegistry::new()));
        let mut host = ValueCell::new(value);
        core.mount(&mut host);
        core.after_first_layout(&host);
        (core, host)
    }

    fn at(x: f32) -> PointerInput {
        PointerInput::mouse(Point::new(x, 2.0))
    }

    #[test]
    fn width_is_deferred_until_first_layout() {
        let mut core = SliderCore::new(continuous(), Some(ListenerRegistry::new()));
        let mut host = ValueCell::new(40.0);
        core.mount(&mut host);
        assert_eq!(core.visual_width(), 0.0);

        assert!(core.after_first_layout(&host));
        assert_eq!(core.visual_width(), 40.0);
        assert!(!core.after_first_layout(&host));
    }

    #[test]
    fn mount_normalizes_out_of_range_value() {
        let mut core = SliderCore::new(continuous(), Some(ListenerRegistry::new()));
        let mut host = ValueCell::new(150.0);
        assert_eq!(core.mount(&mut host), Some(100.0));
        assert_eq!(host.value(), 100.0);
    }

    #[test]
    fn set_value_skips_redundant_notifications() {
        let (mut core, mut host) = mounted(continuous(), 10.0);
        assert_eq!(core.set_value(&mut host, 10.4), None);
        assert_eq!(core.set_value(&mut host, 10.9), None);
        assert_eq!(core.set_value(&mut host, 11.2), Some(11.0));
        assert_eq!(host.changes(), &[11.0]);
    }

    #[test]
    fn drag_moves_value_and_stops_on_release() {
        let (mut core, mut host) = mounted(continuous(), 0.0);

        assert!(core.on_pointer_down(&mut host, PointerTarget::Thumb, &at(0.0), &TRACK));
        assert!(core.is_active());
        assert_eq!(core.on_pointer_move(&mut host, &at(100.0), &TRACK), Some(50.0));
        assert_eq!(core.visual_width(), 50.0);

        assert!(core.on_pointer_up());
        assert_eq!(core.on_pointer_move(&mut host, &at(150.0), &TRACK), None);
        assert_eq!(host.value(), 50.0);
    }

    #[test]
    fn pointer_down_twice_keeps_one_listener_pair() {
        let (mut core, mut host) = mounted(continuous(), 0.0);
        core.on_pointer_down(&mut host, PointerTarget::Thumb, &at(0.0), &TRACK);
        core.on_pointer_down(&mut host, PointerTarget::Thumb, &at(0.0), &TRACK);
        for x in [10.0, 20.0, 30.0] {
            core.on_pointer_move(&mut host, &at(x), &TRACK);
        }

        let registry = core.surface().expect("surface present");
        assert_eq!(registry.count(ListenerKind::MouseMove), 1);
        assert_eq!(registry.count(ListenerKind::MouseUp), 1);
    }

    #[test]
    fn touch_drag_uses_first_touch_point() {
        let (mut core, mut host) = mounted(continuous(), 0.0);
        let touch = PointerInput::touch(vec![Point::new(50.0, 0.0), Point::new(190.0, 0.0)]);

        core.on_pointer_down(&mut host, PointerTarget::Thumb, &touch, &TRACK);
        assert_eq!(core.drag().pointer_kind(), Some(PointerKind::Touch));
        assert_eq!(core.on_pointer_move(&mut host, &touch, &TRACK), Some(25.0));
    }

    #[test]
    fn geometry_is_resampled_for_every_move() {
        let (mut core, mut host) = mounted(continuous(), 0.0);
        let left = Cell::new(0.0_f32);
        let sampler = || TrackGeometry::new(left.get(), 0.0, 200.0, 4.0);

        core.on_pointer_down(&mut host, PointerTarget::Thumb, &at(0.0), &sampler);
        assert_eq!(core.on_pointer_move(&mut host, &at(100.0), &sampler), Some(50.0));
        left.set(50.0);
        assert_eq!(core.on_pointer_move(&mut host, &at(100.0), &sampler), Some(25.0));
    }

    #[test]
    fn track_press_does_not_drag_by_default() {
        let (mut core, mut host) = mounted(continuous(), 0.0);
        assert!(!core.on_pointer_down(&mut host, PointerTarget::Track, &at(100.0), &TRACK));
        assert!(!core.is_active());
        assert!(host.changes().is_empty());
    }

    #[test]
    fn track_press_drags_when_enabled() {
        let (mut core, mut host) = mounted(continuous().with_drag_from_track(true), 0.0);
        assert!(core.on_pointer_down(&mut host, PointerTarget::Track, &at(100.0), &TRACK));
        assert!(core.is_active());
        assert_eq!(host.value(), 50.0);
    }

    #[test]
    fn click_to_seek_is_ignored_while_dragging() {
        let (mut core, mut host) = mounted(continuous(), 0.0);
        core.on_pointer_down(&mut host, PointerTarget::Thumb, &at(0.0), &TRACK);
        assert_eq!(core.on_track_click(&mut host, &at(50.0), &TRACK), None);
    }

    #[test]
    fn disabled_slider_ignores_input() {
        let (mut core, mut host) = mounted(stepped().with_disabled(true), 4.0);
        assert!(!core.on_pointer_down(&mut host, PointerTarget::Thumb, &at(0.0), &TRACK));
        assert_eq!(core.on_track_click(&mut host, &at(100.0), &TRACK), None);
        assert_eq!(
            core.on_key_down(&mut host, NavigationKey::Right, NudgeModifiers::NONE),
            None
        );
        assert_eq!(host.value(), 4.0);
    }

    #[test]
    fn keyboard_nudges_through_pipeline() {
        let (mut core, mut host) = mounted(stepped(), 4.0);
        assert_eq!(
            core.on_key_down(&mut host, NavigationKey::Right, NudgeModifiers::CTRL),
            Some(8.0)
        );
        assert_eq!(
            core.on_key_down(&mut host, NavigationKey::Other, NudgeModifiers::NONE),
            None
        );
        assert_eq!(core.visual_width(), 80.0);
    }

    #[test]
    fn vertical_slider_samples_y_from_bottom() {
        let settings = continuous().with_orientation(Orientation::Vertical);
        let (mut core, mut host) = mounted(settings, 0.0);
        let column = TrackGeometry::new(0.0, 0.0, 4.0, 200.0);

        let input = PointerInput::mouse(Point::new(2.0, 50.0));
        assert_eq!(core.on_track_click(&mut host, &input, &column), Some(75.0));
    }

    #[test]
    fn reconfigure_renormalizes_value() {
        let (mut core, mut host) = mounted(continuous(), 80.0);
        let narrower = SliderSettings::new(Range::continuous(0.0, 50.0).expect("valid range"));

        assert_eq!(core.reconfigure(narrower, &mut host), Some(50.0));
        assert_eq!(core.visual_width(), 100.0);
    }

    #[test]
    fn sync_follows_external_value_changes() {
        let (mut core, mut host) = mounted(continuous(), 0.0);
        host.set_value(60.0);
        core.sync(&host);
        assert_eq!(core.visual_width(), 60.0);
        assert_eq!(core.render_model(&host).thumb_offset, 60.0);
    }

    #[test]
    fn works_without_surface() {
        let mut core: SliderCore = SliderCore::new(continuous(), None);
        let mut host = ValueCell::new(0.0);
        core.after_first_layout(&host);

        assert!(core.on_pointer_down(&mut host, PointerTarget::Thumb, &at(0.0), &TRACK));
        assert_eq!(core.on_pointer_move(&mut host, &at(20.0), &TRACK), Some(10.0));
        assert!(core.on_pointer_up());
        assert!(!core.on_pointer_up());
    }
}
