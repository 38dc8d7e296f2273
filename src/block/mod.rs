// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
pub mod config;
pub mod pattern;
pub mod registry;

pub use config::{
    BlockConfig, ConfigError, DEFAULT_EMAIL_PATTERN, DEFAULT_LOGGED_IN_MESSAGE,
    DEFAULT_NOT_LOGGED_IN_MESSAGE,
};
pub use pattern::{EmailPattern, PatternError};
pub use registry::{
    BlockRegistry, BlockType, RegistryError, RenderCallback, RESTRICTED_CONTENT_BLOCK,
};
