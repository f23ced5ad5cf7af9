// SPDX-License-Identifier: MPL-2.0
//! Drag session lifecycle.
//!
//! `Idle -> Active` on pointer-down over the thumb (or the track when
//! configured), `Active -> Idle` on pointer-up or touch-end anywhere. While
//! active, one move listener and one end listener are attached to the
//! interaction surface; they are detached with the exact options they were
//! attached with.

use super::surface::{InteractionSurface, ListenerId, ListenerKind, ListenerOptions};
use iced::Point;

/// Input device that started a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    #[must_use]
    pub fn move_listener(self) -> ListenerKind {
        match self {
            PointerKind::Mouse => ListenerKind::MouseMove,
            PointerKind::Touch => ListenerKind::TouchMove,
        }
    }

    #[must_use]
    pub fn end_listener(self) -> ListenerKind {
        match self {
            PointerKind::Mouse => ListenerKind::MouseUp,
            PointerKind::Touch => ListenerKind::TouchEnd,
        }
    }
}

/// A pointer event normalized over mouse and touch input.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    Mouse { position: Point },
    /// Active touch points, oldest first.
    Touch { touches: Vec<Point> },
}

impl PointerInput {
    #[must_use]
    pub fn mouse(position: Point) -> Self {
        PointerInput::Mouse { position }
    }

    #[must_use]
    pub fn touch(touches: Vec<Point>) -> Self {
        PointerInput::Touch { touches }
    }

    /// Device kind, decided by the presence of a touch-point list.
    #[must_use]
    pub fn kind(&self) -> PointerKind {
        match self {
            PointerInput::Mouse { .. } => PointerKind::Mouse,
            PointerInput::Touch { .. } => PointerKind::Touch,
        }
    }

    /// Pointer position: the mouse position or the first touch point.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerInput::Mouse { position } => Some(*position),
            PointerInput::Touch { touches } => touches.first().copied(),
        }
    }
}

/// Part of the widget a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Thumb,
    Track,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct AttachedListener {
    id: ListenerId,
    options: ListenerOptions,
}

#[derive(Debug, Clone, PartialEq)]
struct DragSession {
    kind: PointerKind,
    // `None` while running without a surface.
    listeners: Option<[AttachedListener; 2]>,
}

/// Owns the drag session and its surface listeners.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Kind of the pointer driving the current session.
    #[must_use]
    pub fn pointer_kind(&self) -> Option<PointerKind> {
        self.session.as_ref().map(|s| s.kind)
    }

    /// Opens a session for `kind`.
    ///
    /// Returns `false` without touching the surface when a session is
    /// already open, so repeated pointer-downs never stack listeners.
    pub fn activate<S>(&mut self, kind: PointerKind, surface: Option<&mut S>) -> bool
    where
        S: InteractionSurface + ?Sized,
    {
        if self.session.is_some() {
            return false;
        }

        let listeners = surface.map(|surface| {
            let move_options = ListenerOptions::PASSIVE;
            let end_options = ListenerOptions::PASSIVE_ONCE;
            [
                AttachedListener {
                    id: surface.add_listener(kind.move_listener(), move_options),
                    options: move_options,
                },
                AttachedListener {
                    id: surface.add_listener(kind.end_listener(), end_options),
                    options: end_options,
                },
            ]
        });

        log::debug!("slider drag started ({kind:?})");
        self.session = Some(DragSession { kind, listeners });
        true
    }

    /// Closes the session and detaches its listeners.
    ///
    /// Idempotent: returns `false` when no session was open. A `once` end
    /// listener that already fired is simply not found on removal.
    pub fn deactivate<S>(&mut self, surface: Option<&mut S>) -> bool
    where
        S: InteractionSurface + ?Sized,
    {
        let Some(session) = self.session.take() else {
            return false;
        };

        if let (Some(listeners), Some(surface)) = (session.listeners, surface) {
            for listener in listeners {
                surface.remove_listener(listener.id, listener.options);
            }
        }

        log::debug!("slider drag ended ({:?})", session.kind);
        true
    }
}
