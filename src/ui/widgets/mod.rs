// SPDX-License-Identifier: MPL-2.0
pub mod slider;

pub use slider::{slider, Slider};
