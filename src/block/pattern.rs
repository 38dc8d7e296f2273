// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
//! Email patterns
//!
//! Patterns are regular expression bodies without delimiters, compiled with
//! the `regex` crate dialect (no backreferences, no lookaround, linear-time
//! matching). Matching is an unanchored search: `@.*\.edu` accepts
//! `alice@school.edu` and also `alice@school.edu.example.com`. Authors who
//! want a full match must anchor the pattern themselves with `^` and `$`.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Upper bound on the compiled program size of an author-supplied pattern
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Errors raised when a pattern cannot be used
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    #[error("Invalid email pattern: {0}")]
    Invalid(#[from] regex::Error),
}

/// A compiled email pattern ready for matching
#[derive(Debug, Clone)]
pub struct EmailPattern {
    regex: Regex,
}

impl EmailPattern {
    /// Compile a pattern body.
    ///
    /// Compilation is the whole validity check: a pattern that compiles
    /// cannot fail at match time.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(pattern)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()?;
        Ok(Self { regex })
    }

    /// Check whether a pattern body compiles
    pub fn is_valid(pattern: &str) -> bool {
        Self::compile(pattern).is_ok()
    }

    /// Unanchored search for the pattern anywhere in `email`
    pub fn is_match(&self, email: &str) -> bool {
        self.regex.is_match(email)
    }

    /// The pattern body as written by the author
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
