// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pattern used when the author leaves `emailPattern` empty
pub const DEFAULT_EMAIL_PATTERN: &str = r"@.*\.edu";

/// Shown to logged-in viewers whose email is rejected
pub const DEFAULT_LOGGED_IN_MESSAGE: &str = "Your email address does not have access to this content. Please <a href=\"/contact\">contact the site administrator</a>.";

/// Shown to anonymous viewers
pub const DEFAULT_NOT_LOGGED_IN_MESSAGE: &str = "Please <a href=\"/wp-login.php\">log in</a> with an authorized email address to view this content.";

/// Errors that can occur while loading block attributes
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse YAML attributes: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON attributes: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read attributes file: {0}")]
    Io(#[from] std::io::Error),
}

/// Author-supplied attributes of a restricted content block.
///
/// Field names follow the host's camelCase attribute keys. Missing keys take
/// the same defaults the host registers for the block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockConfig {
    #[serde(default = "default_email_pattern")]
    pub email_pattern: String,
    #[serde(default)]
    pub logged_in_restricted_message: String,
    #[serde(default)]
    pub not_logged_in_message: String,
}

fn default_email_pattern() -> String {
    DEFAULT_EMAIL_PATTERN.to_string()
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            email_pattern: default_email_pattern(),
            logged_in_restricted_message: String::new(),
            not_logged_in_message: String::new(),
        }
    }
}

impl BlockConfig {
    /// Create attributes with the given pattern and default messages
    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        Self {
            email_pattern: pattern.into(),
            ..Self::default()
        }
    }

    /// Set the message for logged-in viewers whose email is rejected
    pub fn logged_in_message(mut self, message: impl Into<String>) -> Self {
        self.logged_in_restricted_message = message.into();
        self
    }

    /// Set the message for anonymous viewers
    pub fn not_logged_in_message(mut self, message: impl Into<String>) -> Self {
        self.not_logged_in_message = message.into();
        self
    }

    /// Parse attributes from the host's JSON attribute object
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse attributes from a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize the attributes to a YAML document
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load attributes from a file, choosing JSON for `.json` and YAML otherwise
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json(&raw),
            _ => Self::from_yaml(&raw),
        }
    }

    /// The pattern actually enforced: the configured one, or the default when empty
    pub fn effective_pattern(&self) -> &str {
        non_empty_or(&self.email_pattern, DEFAULT_EMAIL_PATTERN)
    }

    /// Message for logged-in viewers who are denied, falling back to the default
    pub fn effective_logged_in_message(&self) -> &str {
        non_empty_or(&self.logged_in_restricted_message, DEFAULT_LOGGED_IN_MESSAGE)
    }

    /// Message for anonymous viewers, falling back to the default
    pub fn effective_not_logged_in_message(&self) -> &str {
        non_empty_or(&self.not_logged_in_message, DEFAULT_NOT_LOGGED_IN_MESSAGE)
    }
}

/// Hosts store an unset attribute as either `""` or `"0"`; both mean "use the default"
fn is_unset(value: &str) -> bool {
    value.is_empty() || value == "0"
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if is_unset(value) {
        fallback
    } else {
        value
    }
}
