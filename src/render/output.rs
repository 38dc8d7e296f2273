// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use serde::{Deserialize, Serialize};

/// CSS class carried by every rendered block
pub const BLOCK_CLASS: &str = "email-restriction-content-block";

/// Extra CSS class carried when content is withheld
pub const RESTRICTED_CLASS: &str = "restricted";

/// The fragment chosen for one render.
///
/// Messages are already sanitized. Allowed content is trusted output of the
/// authoring system and is carried unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "html", rename_all = "snake_case")]
pub enum RenderResult {
    NotLoggedIn(String),
    LoggedInRejected(String),
    Allowed(String),
}

impl RenderResult {
    /// Whether the protected content was withheld
    pub fn is_restricted(&self) -> bool {
        !matches!(self, RenderResult::Allowed(_))
    }

    /// Short tag naming the outcome
    pub fn outcome(&self) -> &'static str {
        match self {
            RenderResult::NotLoggedIn(_) => "not_logged_in",
            RenderResult::LoggedInRejected(_) => "logged_in_rejected",
            RenderResult::Allowed(_) => "allowed",
        }
    }

    /// The inner fragment without its container
    pub fn body(&self) -> &str {
        match self {
            RenderResult::NotLoggedIn(html)
            | RenderResult::LoggedInRejected(html)
            | RenderResult::Allowed(html) => html,
        }
    }

    /// Wrap the fragment in the block container
    pub fn to_html(&self) -> String {
        if self.is_restricted() {
            format!(
                "<div class=\"{} {}\">{}</div>",
                BLOCK_CLASS,
                RESTRICTED_CLASS,
                self.body()
            )
        } else {
            format!("<div class=\"{}\">{}</div>", BLOCK_CLASS, self.body())
        }
    }
}

impl std::fmt::Display for RenderResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_html())
    }
}
