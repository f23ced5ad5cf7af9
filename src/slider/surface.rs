// SPDX-License-Identifier: MPL-2.0
//! Interaction surface: the shared listener registry a drag session
//! attaches to while the pointer is down.
//!
//! The surface sits above the widget (window or application root) so moves
//! keep being tracked after the pointer leaves the widget bounds.

/// Pointer events a drag session can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    MouseMove,
    MouseUp,
    TouchMove,
    TouchEnd,
}

/// Options a listener was registered with.
///
/// Removal must present the same options; a mismatch leaves the listener
/// attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerOptions {
    /// The listener never prevents default handling.
    pub passive: bool,
    /// The listener is dropped after its first dispatch.
    pub once: bool,
}

impl ListenerOptions {
    pub const PASSIVE: Self = Self {
        passive: true,
        once: false,
    };

    pub const PASSIVE_ONCE: Self = Self {
        passive: true,
        once: true,
    };
}

/// Handle returned by [`InteractionSurface::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Capability to attach and detach surface-wide listeners.
pub trait InteractionSurface {
    /// Attaches a listener and returns its handle.
    fn add_listener(&mut self, kind: ListenerKind, options: ListenerOptions) -> ListenerId;

    /// Detaches a listener. Returns `false` when nothing matched, which
    /// includes an already removed listener and mismatched options.
    fn remove_listener(&mut self, id: ListenerId, options: ListenerOptions) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct Registered {
    id: ListenerId,
    kind: ListenerKind,
    options: ListenerOptions,
}

/// In-memory [`InteractionSurface`] used by the Iced widget and tests.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<Registered>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Number of attached listeners of `kind`.
    #[must_use]
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.listeners.iter().filter(|l| l.kind == kind).count()
    }

    #[must_use]
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.count(kind) > 0
    }

    /// Delivers an event of `kind`: returns whether any listener received
    /// it and drops `once` listeners that fired.
    pub fn dispatch(&mut self, kind: ListenerKind) -> bool {
        let delivered = self.is_listening(kind);
        self.listeners
            .retain(|l| !(l.kind == kind && l.options.once));
        delivered
    }
}

impl InteractionSurface for ListenerRegistry {
    fn add_listener(&mut self, kind: ListenerKind, options: ListenerOptions) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Registered { id, kind, options });
        id
    }

    fn remove_listener(&mut self, id: ListenerId, options: ListenerOptions) -> bool {
        let before = self.listeners.len();
        self.listeners
            .retain(|l| !(l.id == id && l.options == options));
        self.listeners.len() != before
    }
}
