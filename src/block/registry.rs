// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
//! Block Registration
//!
//! The host content pipeline knows blocks by name. Each registered block
//! carries the metadata the editor needs (title, icon, attribute schema) and
//! a render callback the pipeline invokes with the stored attributes, the
//! rendered inner blocks and the current viewer.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::block::config::{BlockConfig, ConfigError, DEFAULT_EMAIL_PATTERN};
use crate::render::renderer::BlockRenderer;
use crate::viewer::{IdentityProvider, ViewerIdentity};

/// Registered name of the restricted content block
pub const RESTRICTED_CONTENT_BLOCK: &str = "email-restriction-content-block/restricted-content";

/// Help text shown under the pattern field in the editor
pub const EMAIL_PATTERN_HELP: &str = "Enter a regex pattern (without delimiters) to match email addresses (e.g., @.*\\.edu for .edu emails, @specific-university\\.edu for a specific domain).";

/// Errors that can occur when registering or rendering blocks
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Block type already registered: {0}")]
    DuplicateBlock(String),
    #[error("Unknown block type: {0}")]
    UnknownBlock(String),
    #[error("Invalid block attributes: {0}")]
    InvalidAttributes(#[from] ConfigError),
}

/// Schema entry for one block attribute
#[derive(Debug, Clone, Serialize)]
pub struct AttributeSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
}

/// Editor-facing description of a block type
#[derive(Debug, Clone, Serialize)]
pub struct BlockType {
    pub name: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub icon: String,
    pub attributes: Vec<(String, AttributeSpec)>,
}

impl BlockType {
    /// Metadata for the restricted content block
    pub fn restricted_content() -> Self {
        let string_attr = |default: Value| AttributeSpec {
            kind: "string",
            default,
            help: None,
        };

        Self {
            name: RESTRICTED_CONTENT_BLOCK.to_string(),
            title: "Restricted Content".to_string(),
            description: "A block to display nested blocks only to logged-in users with an email matching a specified pattern.".to_string(),
            category: "common".to_string(),
            icon: "lock".to_string(),
            attributes: vec![
                (
                    "emailPattern".to_string(),
                    AttributeSpec {
                        help: Some(EMAIL_PATTERN_HELP),
                        ..string_attr(json!(DEFAULT_EMAIL_PATTERN))
                    },
                ),
                (
                    "loggedInRestrictedMessage".to_string(),
                    string_attr(json!("")),
                ),
                ("notLoggedInMessage".to_string(), string_attr(json!(""))),
            ],
        }
    }

    /// Attribute schema as a JSON object keyed by attribute name
    pub fn attribute_schema(&self) -> Value {
        let schema: serde_json::Map<String, Value> = self
            .attributes
            .iter()
            .map(|(name, spec)| (name.clone(), json!(spec)))
            .collect();
        Value::Object(schema)
    }

    /// Full block metadata as the host expects it at registration
    pub fn metadata_json(&self) -> Value {
        json!({
            "name": self.name,
            "title": self.title,
            "description": self.description,
            "category": self.category,
            "icon": self.icon,
            "attributes": self.attribute_schema(),
        })
    }
}

/// Callback the content pipeline invokes to render a block
pub trait RenderCallback: Send + Sync {
    fn render(&self, attributes: &BlockConfig, content: &str, viewer: &ViewerIdentity) -> String;
}

impl RenderCallback for BlockRenderer {
    fn render(&self, attributes: &BlockConfig, content: &str, viewer: &ViewerIdentity) -> String {
        BlockRenderer::render(self, attributes, viewer, content)
    }
}

struct Registration {
    block_type: BlockType,
    callback: Box<dyn RenderCallback>,
}

/// Named render callbacks, as registered with the host
#[derive(Default)]
pub struct BlockRegistry {
    blocks: HashMap<String, Registration>,
}

impl BlockRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the restricted content block registered
    pub fn with_restricted_content() -> Self {
        let mut registry = Self::new();
        registry.blocks.insert(
            RESTRICTED_CONTENT_BLOCK.to_string(),
            Registration {
                block_type: BlockType::restricted_content(),
                callback: Box::new(BlockRenderer::new()),
            },
        );
        registry
    }

    /// Register a block type under its name
    pub fn register(
        &mut self,
        block_type: BlockType,
        callback: Box<dyn RenderCallback>,
    ) -> Result<(), RegistryError> {
        if self.blocks.contains_key(&block_type.name) {
            return Err(RegistryError::DuplicateBlock(block_type.name));
        }
        debug!(block = %block_type.name, "registering block type");
        self.blocks.insert(
            block_type.name.clone(),
            Registration {
                block_type,
                callback,
            },
        );
        Ok(())
    }

    /// Get the metadata of a registered block
    pub fn block_type(&self, name: &str) -> Option<&BlockType> {
        self.blocks.get(name).map(|r| &r.block_type)
    }

    /// Names of all registered blocks
    pub fn block_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.blocks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Render a block from the host's stored attribute JSON
    pub fn render(
        &self,
        name: &str,
        attributes_json: &str,
        content: &str,
        identity: &dyn IdentityProvider,
    ) -> Result<String, RegistryError> {
        let registration = self
            .blocks
            .get(name)
            .ok_or_else(|| RegistryError::UnknownBlock(name.to_string()))?;

        let attributes = BlockConfig::from_json(attributes_json)?;
        let viewer = identity.current_viewer();
        Ok(registration.callback.render(&attributes, content, &viewer))
    }
}

impl std::fmt::Debug for BlockRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockRegistry")
            .field("blocks", &self.block_names())
            .finish()
    }
}
