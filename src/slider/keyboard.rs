// SPDX-License-Identifier: MPL-2.0
//! Arrow-key nudging.

use super::range::Range;
use super::value_mapper::clamp;
use crate::config::{CONTINUOUS_NUDGE, CTRL_MULTIPLIER, SHIFT_MULTIPLIER};
use iced::keyboard;

/// Keys the slider distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    Left,
    Right,
    Other,
}

impl NavigationKey {
    /// `-1` for left, `+1` for right, nothing for any other key.
    #[must_use]
    pub fn direction(self) -> Option<f64> {
        match self {
            NavigationKey::Left => Some(-1.0),
            NavigationKey::Right => Some(1.0),
            NavigationKey::Other => None,
        }
    }
}

impl From<&keyboard::Key> for NavigationKey {
    fn from(key: &keyboard::Key) -> Self {
        match key {
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => NavigationKey::Left,
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => NavigationKey::Right,
            _ => NavigationKey::Other,
        }
    }
}

/// Modifier state relevant to nudging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NudgeModifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl NudgeModifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };

    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };

    /// Exactly one multiplier applies; Shift wins over Ctrl.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        if self.shift {
            SHIFT_MULTIPLIER
        } else if self.ctrl {
            CTRL_MULTIPLIER
        } else {
            1.0
        }
    }
}

impl From<keyboard::Modifiers> for NudgeModifiers {
    fn from(modifiers: keyboard::Modifiers) -> Self {
        Self {
            shift: modifiers.shift(),
            ctrl: modifiers.control(),
        }
    }
}

/// Base nudge: the step when snapping, one whole unit otherwise.
#[must_use]
pub fn step_amount(range: &Range, snap: bool) -> f64 {
    match range.step() {
        Some(step) if snap => step,
        _ => CONTINUOUS_NUDGE,
    }
}

/// Computes the value after pressing `key` from `current`.
///
/// Returns `None` for keys that do not move the slider.
#[must_use]
pub fn nudge(
    current: f64,
    key: NavigationKey,
    modifiers: NudgeModifiers,
    range: &Range,
    snap: bool,
) -> Option<f64> {
    let direction = key.direction()?;
    let delta = direction * step_amount(range, snap) * modifiers.multiplier();
    Some(clamp(current + delta, range.min(), range.max()))
}
