// SPDX-License-Identifier: MPL-2.0
//! Headless slider logic.
//!
//! # Architecture
//!
//! - [`value_mapper`]: pure conversions between values, percentages and
//!   emitted values
//! - [`geometry`]: track sampling and pointer-to-percent conversion
//! - [`drag`]: drag session lifecycle and surface listener pairing
//! - [`keyboard`]: arrow-key nudging
//! - [`render_model`]: visual state derived from the value
//! - [`component`]: [`SliderCore`], which wires the above to an [`InputHost`]
//!
//! Data flows one way: pointer and key events go through the controllers,
//! the resulting raw value is normalized and written to the host, and the
//! render model is recomputed from what the host now holds.

pub mod component;
pub mod drag;
pub mod geometry;
pub mod host;
pub mod keyboard;
pub mod range;
pub mod render_model;
pub mod settings;
pub mod surface;
pub mod value_mapper;

pub use component::SliderCore;
pub use drag::{DragController, PointerInput, PointerKind, PointerTarget};
pub use geometry::{Orientation, TrackGeometry, TrackSampler};
pub use host::{InputHost, ValueCell};
pub use keyboard::{NavigationKey, NudgeModifiers};
pub use range::Range;
pub use render_model::{RenderModel, RenderTuning, ThumbSide};
pub use settings::SliderSettings;
pub use surface::{InteractionSurface, ListenerId, ListenerKind, ListenerOptions, ListenerRegistry};
pub use value_mapper::QuantizeAnchor;
