// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.
//!
//! Provides consistent colors for the slider canvas. Adapts to Light/Dark
//! theme and fades everything while disabled.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};

/// Colors used to draw one slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderColors {
    /// Unfilled part of the track.
    pub track: Color,
    /// Filled part, from the minimum to the thumb.
    pub fill: Color,
    pub thumb: Color,
    pub tick: Color,
    pub label_background: Color,
    pub label_text: Color,
}

/// Returns the slider colors for `theme`.
#[must_use]
pub fn colors(theme: &Theme, disabled: bool) -> SliderColors {
    let is_light = matches!(theme, Theme::Light);

    if disabled {
        // Low contrast appearance, clearly non-interactive
        let muted = if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        };
        return SliderColors {
            track: Color {
                a: opacity::DISABLED,
                ..muted
            },
            fill: muted,
            thumb: muted,
            tick: Color {
                a: opacity::TRANSPARENT,
                ..muted
            },
            label_background: muted,
            label_text: palette::GRAY_400,
        };
    }

    let (track, accent) = if is_light {
        (palette::GRAY_400, palette::PRIMARY_500)
    } else {
        (palette::GRAY_200, palette::PRIMARY_400)
    };

    let tick = if is_light {
        palette::GRAY_900
    } else {
        palette::GRAY_100
    };

    SliderColors {
        track: Color {
            a: opacity::SUBTLE,
            ..track
        },
        fill: accent,
        thumb: accent,
        tick: Color {
            a: opacity::OVERLAY_STRONG,
            ..tick
        },
        label_background: accent,
        label_text: palette::WHITE,
    }
}
