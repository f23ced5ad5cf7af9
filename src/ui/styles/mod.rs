// SPDX-License-Identifier: MPL-2.0
//! Styles for the slider widget.

pub mod slider;
