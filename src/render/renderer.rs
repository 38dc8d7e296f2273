// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use tracing::{debug, warn};

use crate::block::config::BlockConfig;
use crate::block::pattern::EmailPattern;
use crate::render::denial::Denial;
use crate::render::output::RenderResult;
use crate::render::sanitize::MessageSanitizer;
use crate::viewer::{IdentityProvider, ViewerIdentity};

/// Decides what a viewer may see and renders the matching fragment.
///
/// Holds no per-request state; one renderer can serve every request.
#[derive(Debug, Default)]
pub struct BlockRenderer {
    sanitizer: MessageSanitizer,
}

impl BlockRenderer {
    /// Create a renderer with the default message allow-list
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether `viewer` may see the protected content
    pub fn decide(&self, config: &BlockConfig, viewer: &ViewerIdentity) -> Result<(), Denial> {
        let email = match viewer {
            ViewerIdentity::Anonymous => return Err(Denial::NotLoggedIn),
            ViewerIdentity::Authenticated { email } => email,
        };

        let pattern = EmailPattern::compile(config.effective_pattern()).map_err(|e| {
            warn!(
                pattern = config.effective_pattern(),
                error = %e,
                "email pattern failed to compile, withholding content"
            );
            Denial::InvalidPattern {
                detail: e.to_string(),
            }
        })?;

        if pattern.is_match(email) {
            Ok(())
        } else {
            Err(Denial::NoMatch)
        }
    }

    /// Render the tagged fragment for `viewer`
    pub fn render_result(
        &self,
        config: &BlockConfig,
        viewer: &ViewerIdentity,
        inner_content: &str,
    ) -> RenderResult {
        match self.decide(config, viewer) {
            Ok(()) => {
                debug!("viewer allowed, rendering inner content");
                RenderResult::Allowed(inner_content.to_string())
            }
            Err(Denial::NotLoggedIn) => {
                debug!("viewer not logged in");
                RenderResult::NotLoggedIn(
                    self.sanitizer
                        .clean(config.effective_not_logged_in_message()),
                )
            }
            Err(denial) => {
                debug!(reason = denial.code(), "logged-in viewer denied");
                RenderResult::LoggedInRejected(
                    self.sanitizer.clean(config.effective_logged_in_message()),
                )
            }
        }
    }

    /// Render the block HTML for `viewer`
    pub fn render(&self, config: &BlockConfig, viewer: &ViewerIdentity, inner_content: &str) -> String {
        self.render_result(config, viewer, inner_content).to_html()
    }

    /// Render the block HTML for whoever the host reports as the current viewer
    pub fn render_for(
        &self,
        config: &BlockConfig,
        identity: &dyn IdentityProvider,
        inner_content: &str,
    ) -> String {
        let viewer = identity.current_viewer();
        self.render(config, &viewer, inner_content)
    }
}
