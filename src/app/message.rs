// SPDX-License-Identifier: MPL-2.0
//! Messages and launch flags of the demo application.

use std::path::PathBuf;

/// Command-line overrides applied on top of the persisted configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    /// Directory holding `slider.toml`; the user config dir when absent.
    pub config_dir: Option<PathBuf>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub snap: bool,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ValueChanged(f64),
    SaveRequested,
}
