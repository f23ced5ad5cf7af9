// SPDX-License-Identifier: MPL-2.0
//! User interface pieces built on Iced.
//!
//! - [`widgets`] - The canvas slider widget
//! - [`styles`] - Theme-aware slider colors
//! - [`design_tokens`] - Shared palette, spacing and sizing constants

pub mod design_tokens;
pub mod styles;
pub mod widgets;
