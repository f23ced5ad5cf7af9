// SPDX-License-Identifier: MPL-2.0
//! Slider widget drawn on an Iced canvas.
//!
//! The application owns the value: it passes it in on every `view` and gets
//! changes back through `on_change`. The canvas state keeps the headless
//! [`SliderCore`] (drag session, listener registry, focus) between frames.
//!
//! Canvas programs receive every window event, so the listener registry of
//! the core plays the role of the window-level interaction surface: move and
//! release events are only routed to the core while a drag listener is
//! attached, wherever the pointer is.

use crate::config::{
    THUMB_ACTIVE_RADIUS, THUMB_RADIUS, TICK_SIZE, TRACK_THICKNESS, WIDGET_HEIGHT, WIDGET_WIDTH,
};
use crate::slider::value_mapper::to_width_percent;
use crate::slider::{
    InputHost, ListenerKind, NavigationKey, NudgeModifiers, Orientation, PointerInput,
    PointerTarget, RenderModel, SliderCore, SliderSettings, TrackGeometry,
};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles::slider as style;
use iced::widget::canvas::{self, Frame, Geometry, Path, Text};
use iced::widget::{Action, Canvas};
use iced::{keyboard, mouse, touch, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme};

/// A single-value slider.
pub struct Slider<'a, Message> {
    settings: SliderSettings,
    value: f64,
    on_change: Box<dyn Fn(f64) -> Message + 'a>,
    width: Length,
    height: Length,
}

impl<'a, Message> Slider<'a, Message> {
    /// Creates a slider showing `value` that reports changes through `on_change`.
    pub fn new(settings: SliderSettings, value: f64, on_change: impl Fn(f64) -> Message + 'a) -> Self {
        let (width, height) = match settings.orientation() {
            Orientation::Horizontal => (WIDGET_WIDTH, WIDGET_HEIGHT),
            Orientation::Vertical => (WIDGET_HEIGHT, WIDGET_WIDTH),
        };
        Self {
            settings,
            value,
            on_change: Box::new(on_change),
            width: Length::Fixed(width),
            height: Length::Fixed(height),
        }
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    fn render_model(&self, active: bool) -> RenderModel {
        let range = self.settings.range();
        let visual_width = to_width_percent(
            self.value,
            range.min(),
            range.max(),
            self.settings.tuning().min_visible_width,
        );
        RenderModel::derive(visual_width, self.value, &self.settings, active)
    }
}

impl<'a, Message: 'a> Slider<'a, Message> {
    /// Creates a Canvas element from this slider.
    pub fn into_element(self) -> Element<'a, Message> {
        let (width, height) = (self.width, self.height);
        Canvas::new(self).width(width).height(height).into()
    }
}

impl<'a, Message: 'a> From<Slider<'a, Message>> for Element<'a, Message> {
    fn from(slider: Slider<'a, Message>) -> Self {
        slider.into_element()
    }
}

/// Helper function to create a slider.
pub fn slider<'a, Message>(
    settings: SliderSettings,
    value: f64,
    on_change: impl Fn(f64) -> Message + 'a,
) -> Slider<'a, Message> {
    Slider::new(settings, value, on_change)
}

/// Per-widget canvas state.
#[derive(Debug, Default)]
pub struct State {
    core: Option<SliderCore>,
    focused: bool,
    pressed_on_track: bool,
    touches: Vec<(touch::Finger, Point)>,
    pending: Option<PendingChange>,
}

/// A published value the app has not fed back yet.
#[derive(Debug, Clone, Copy)]
struct PendingChange {
    /// Value the app passed in when the change was published.
    base: f64,
    emitted: f64,
}

/// Result of routing one event.
struct Handled<Message> {
    message: Option<Message>,
    captured: bool,
}

impl State {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.core.as_ref().is_some_and(SliderCore::is_active)
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

fn touch_input(touches: &[(touch::Finger, Point)]) -> PointerInput {
    PointerInput::touch(touches.iter().map(|(_, point)| *point).collect())
}

/// Host backed by the value passed to the widget; a change becomes the
/// message published by the canvas.
struct PublishingHost<'h, Message> {
    value: f64,
    on_change: &'h dyn Fn(f64) -> Message,
    message: Option<Message>,
}

impl<Message> InputHost for PublishingHost<'_, Message> {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    fn emit_change(&mut self, value: f64) {
        self.message = Some((self.on_change)(value));
    }
}

impl<Message> Slider<'_, Message> {
    /// Routes one window event to the core.
    fn handle(
        &self,
        state: &mut State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Handled<Message> {
        // Events of one batch arrive before the app feeds back a published value
        #[allow(clippy::float_cmp)]
        let fed_back = state.pending.is_some_and(|pending| pending.base != self.value);
        if fed_back {
            state.pending = None;
        }
        let seed = state.pending.map_or(self.value, |pending| pending.emitted);
        let mut host = PublishingHost {
            value: seed,
            on_change: self.on_change.as_ref(),
            message: None,
        };
        let track = track_geometry(bounds, self.settings.orientation());

        let core = state
            .core
            .get_or_insert_with(|| SliderCore::new(self.settings.clone(), Some(Default::default())));
        if core.is_laid_out() {
            if core.settings() != &self.settings {
                core.reconfigure(self.settings.clone(), &mut host);
            }
            core.sync(&host);
        } else {
            core.mount(&mut host);
            core.after_first_layout(&host);
        }

        let captured = match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds) {
                    state.focused = true;
                    let target = hit_target(position, &track, core.render_model(&host).thumb_offset, &self.settings);
                    let input = PointerInput::mouse(position);
                    let opened = core.on_pointer_down(&mut host, target, &input, &track);
                    state.pressed_on_track = target == PointerTarget::Track && !opened;
                    true
                } else {
                    state.focused = false;
                    false
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if is_listening(core, ListenerKind::MouseMove) {
                    core.on_pointer_move(&mut host, &PointerInput::mouse(*position), &track);
                    true
                } else {
                    false
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let pressed_on_track = std::mem::take(&mut state.pressed_on_track);
                if end_drag(core, ListenerKind::MouseUp) {
                    true
                } else if let (true, Some(position)) = (pressed_on_track, cursor.position_over(bounds)) {
                    core.on_track_click(&mut host, &PointerInput::mouse(position), &track);
                    true
                } else {
                    false
                }
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                state.touches.push((*id, *position));
                if state.touches.len() == 1 && bounds.contains(*position) {
                    state.focused = true;
                    let target = hit_target(*position, &track, core.render_model(&host).thumb_offset, &self.settings);
                    let opened = core.on_pointer_down(&mut host, target, &touch_input(&state.touches), &track);
                    state.pressed_on_track = target == PointerTarget::Track && !opened;
                    true
                } else {
                    false
                }
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if let Some(entry) = state.touches.iter_mut().find(|(finger, _)| finger == id) {
                    entry.1 = *position;
                }
                if is_listening(core, ListenerKind::TouchMove) {
                    core.on_pointer_move(&mut host, &touch_input(&state.touches), &track);
                    true
                } else {
                    false
                }
            }
            Event::Touch(
                touch::Event::FingerLifted { id, position } | touch::Event::FingerLost { id, position },
            ) => {
                state.touches.retain(|(finger, _)| finger != id);
                if !state.touches.is_empty() {
                    false
                } else if end_drag(core, ListenerKind::TouchEnd) {
                    true
                } else if std::mem::take(&mut state.pressed_on_track) && bounds.contains(*position) {
                    let tap = PointerInput::touch(vec![*position]);
                    core.on_track_click(&mut host, &tap, &track);
                    true
                } else {
                    false
                }
            }
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) if state.focused => core
                .on_key_down(
                    &mut host,
                    NavigationKey::from(key),
                    NudgeModifiers::from(*modifiers),
                )
                .is_some(),
            _ => false,
        };

        let message = host.message.take();
        if message.is_some() {
            state.pending = Some(PendingChange {
                base: self.value,
                emitted: host.value,
            });
        }
        Handled { message, captured }
    }
}

impl<Message> canvas::Program<Message> for Slider<'_, Message> {
    type State = State;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let handled = self.handle(state, event, bounds, cursor);
        match handled.message {
            Some(message) => Some(Action::publish(message).and_capture()),
            None if handled.captured => Some(Action::request_redraw().and_capture()),
            None => None,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let orientation = self.settings.orientation();
        let track = track_geometry(Rectangle::new(Point::ORIGIN, bounds.size()), orientation);
        let model = self.render_model(state.is_active());
        let colors = style::colors(theme, model.disabled);
        let length = track_length(&track, orientation);

        // Unfilled part: the end of the track, shifted off the thumb at the minimum
        let track_from = (length * (1.0 - model.track_scale as f32) + model.track_translate_px as f32)
            .min(length);
        let (origin, size) = bar(&track, orientation, track_from, length);
        frame.fill_rectangle(origin, size, colors.track);

        // Filled part: from the start of the track to the thumb
        let fill_to = (length * model.fill_scale as f32 + model.fill_translate_px as f32).max(0.0);
        if fill_to > 0.0 {
            let (origin, size) = bar(&track, orientation, 0.0, fill_to);
            frame.fill_rectangle(origin, size, colors.fill);
        }

        if model.show_ticks {
            for tick in &model.ticks {
                let center = point_along(&track, orientation, length * *tick as f32 / 100.0);
                frame.fill_rectangle(
                    Point::new(center.x - TICK_SIZE / 2.0, center.y - TICK_SIZE / 2.0),
                    Size::new(TICK_SIZE, TICK_SIZE),
                    colors.tick,
                );
            }
        }

        let thumb = point_along(&track, orientation, length * model.thumb_offset as f32 / 100.0);
        let thumb_radius = if model.active {
            THUMB_ACTIVE_RADIUS
        } else {
            THUMB_RADIUS
        };
        frame.fill(&Path::circle(thumb, thumb_radius), colors.thumb);

        if let Some(label) = &model.thumb_label {
            let top_left = label_origin(thumb, orientation);
            frame.fill(
                &Path::rounded_rectangle(
                    top_left,
                    Size::new(sizing::LABEL_WIDTH, sizing::LABEL_HEIGHT),
                    radius::SM.into(),
                ),
                colors.label_background,
            );
            #[allow(clippy::cast_precision_loss)]
            let text_width = label.chars().count() as f32 * typography::CAPTION * 0.6;
            frame.fill_text(Text {
                content: label.clone(),
                position: Point::new(
                    top_left.x + (sizing::LABEL_WIDTH - text_width) / 2.0,
                    top_left.y + (sizing::LABEL_HEIGHT - typography::CAPTION) / 2.0,
                ),
                color: colors.label_text,
                size: typography::CAPTION.into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.settings.disabled() {
            return mouse::Interaction::default();
        }
        if state.is_active() {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_over(bounds) {
            Some(position) => {
                let track = track_geometry(bounds, self.settings.orientation());
                let offset = self.render_model(false).thumb_offset;
                match hit_target(position, &track, offset, &self.settings) {
                    PointerTarget::Thumb => mouse::Interaction::Grab,
                    PointerTarget::Track => mouse::Interaction::Pointer,
                }
            }
            None => mouse::Interaction::default(),
        }
    }
}

/// Places the track inside the widget bounds, leaving room for the thumb at
/// both ends and for the label above (or beside) it.
#[must_use]
pub fn track_geometry(bounds: Rectangle, orientation: Orientation) -> TrackGeometry {
    let inset = THUMB_ACTIVE_RADIUS;
    match orientation {
        Orientation::Horizontal => TrackGeometry::new(
            bounds.x + inset,
            bounds.y + bounds.height - inset - spacing::XS - TRACK_THICKNESS / 2.0,
            (bounds.width - 2.0 * inset).max(0.0),
            TRACK_THICKNESS,
        ),
        Orientation::Vertical => TrackGeometry::new(
            bounds.x + inset + spacing::XS - TRACK_THICKNESS / 2.0,
            bounds.y + inset,
            TRACK_THICKNESS,
            (bounds.height - 2.0 * inset).max(0.0),
        ),
    }
}

/// Decides whether `position` grabs the thumb or lands on the track.
#[must_use]
pub fn hit_target(
    position: Point,
    track: &TrackGeometry,
    thumb_offset: f64,
    settings: &SliderSettings,
) -> PointerTarget {
    let orientation = settings.orientation();
    #[allow(clippy::cast_possible_truncation)]
    let along = track_length(track, orientation) * thumb_offset as f32 / 100.0;
    let thumb = point_along(track, orientation, along);
    let reach = sizing::THUMB_HIT_SIZE / 2.0;
    if (position.x - thumb.x).abs() <= reach && (position.y - thumb.y).abs() <= reach {
        PointerTarget::Thumb
    } else {
        PointerTarget::Track
    }
}

fn is_listening(core: &SliderCore, kind: ListenerKind) -> bool {
    core.surface().is_some_and(|surface| surface.is_listening(kind))
}

/// Delivers an end event to the surface and closes the drag session.
///
/// An end event of the other pointer kind leaves the session open.
fn end_drag(core: &mut SliderCore, kind: ListenerKind) -> bool {
    if core
        .drag()
        .pointer_kind()
        .is_some_and(|pointer| pointer.end_listener() != kind)
    {
        return false;
    }
    if let Some(surface) = core.surface_mut() {
        surface.dispatch(kind);
    }
    core.on_pointer_up()
}

fn track_length(track: &TrackGeometry, orientation: Orientation) -> f32 {
    match orientation {
        Orientation::Horizontal => track.width,
        Orientation::Vertical => track.height,
    }
}

/// Point on the track centerline, `distance` from the minimum end.
fn point_along(track: &TrackGeometry, orientation: Orientation, distance: f32) -> Point {
    match orientation {
        Orientation::Horizontal => Point::new(track.left + distance, track.top + track.height / 2.0),
        Orientation::Vertical => Point::new(track.left + track.width / 2.0, track.bottom() - distance),
    }
}

/// Rectangle covering the track between two distances from the minimum end.
fn bar(track: &TrackGeometry, orientation: Orientation, from: f32, to: f32) -> (Point, Size) {
    let extent = (to - from).max(0.0);
    match orientation {
        Orientation::Horizontal => (
            Point::new(track.left + from, track.top),
            Size::new(extent, track.height),
        ),
        Orientation::Vertical => (
            Point::new(track.left, track.bottom() - to),
            Size::new(track.width, extent),
        ),
    }
}

fn label_origin(thumb: Point, orientation: Orientation) -> Point {
    let gap = THUMB_ACTIVE_RADIUS + sizing::LABEL_GAP;
    match orientation {
        Orientation::Horizontal => Point::new(
            thumb.x - sizing::LABEL_WIDTH / 2.0,
            thumb.y - gap - sizing::LABEL_HEIGHT,
        ),
        Orientation::Vertical => Point::new(thumb.x + gap, thumb.y - sizing::LABEL_HEIGHT / 2.0),
    }
}
