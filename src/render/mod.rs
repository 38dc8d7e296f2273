// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
pub mod denial;
pub mod output;
pub mod renderer;
pub mod sanitize;

pub use denial::Denial;
pub use output::{RenderResult, BLOCK_CLASS, RESTRICTED_CLASS};
pub use renderer::BlockRenderer;
pub use sanitize::MessageSanitizer;
