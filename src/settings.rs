// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use std::path::PathBuf;

use serde::Deserialize;

/// CLI settings loaded from environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Log level (default: warn)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "json" or "pretty" (default: pretty)
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Attributes file used when no `--config` is given
    #[serde(default)]
    pub block_config: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Settings {
    /// Load settings from environment variables.
    ///
    /// Variables are uppercase with underscore separators:
    /// `LOG_LEVEL`, `LOG_FORMAT`, `BLOCK_CONFIG`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}
