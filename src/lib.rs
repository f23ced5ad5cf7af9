// SPDX-License-Identifier: MPL-2.0
//! `iced_slider` is a draggable single-value slider for the Iced GUI toolkit.
//!
//! The [`slider`] module holds the headless core: value mapping, track
//! geometry sampling, drag sessions, keyboard nudging and the render model.
//! [`ui::widgets::slider`] draws that core on an Iced canvas, and [`app`] is
//! a small demo that hosts one slider configured from `slider.toml`.

#![doc(html_root_url = "https://docs.rs/iced_slider/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod slider;
pub mod ui;
