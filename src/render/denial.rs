// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use serde::Serialize;
use thiserror::Error;

/// Why protected content was withheld from a viewer.
///
/// Every variant is non-fatal: the renderer turns it into a restricted
/// message instead of surfacing it to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Denial {
    #[error("Viewer is not logged in")]
    NotLoggedIn,
    #[error("Email pattern does not compile: {detail}")]
    InvalidPattern { detail: String },
    #[error("Email does not match the configured pattern")]
    NoMatch,
}

impl Denial {
    /// Short machine-readable tag for the denial reason
    pub fn code(&self) -> &'static str {
        match self {
            Denial::NotLoggedIn => "not_logged_in",
            Denial::InvalidPattern { .. } => "invalid_pattern",
            Denial::NoMatch => "no_match",
        }
    }

    /// Whether the viewer was authenticated when they were denied
    pub fn is_logged_in_denial(&self) -> bool {
        !matches!(self, Denial::NotLoggedIn)
    }
}
