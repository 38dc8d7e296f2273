// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
//! Allow-list sanitizer for author-supplied messages.
//!
//! Messages are rich text written in the block editor: paragraphs, emphasis
//! and links survive, scripts, event handler attributes and `javascript:`
//! URLs do not. `class`, inline `style` and link `target` are kept as the
//! editor emits them. Relative links such as `/contact` are kept as written and no
//! `rel` attribute is injected.

use ammonia::Builder;

/// Cleans message HTML before it is written into a restricted container
#[derive(Debug)]
pub struct MessageSanitizer {
    builder: Builder<'static>,
}

impl MessageSanitizer {
    /// Create a sanitizer with the post-content allow-list
    pub fn new() -> Self {
        let mut builder = Builder::default();
        builder
            .link_rel(None)
            .add_generic_attributes(&["class", "style"])
            .add_tag_attributes("a", &["target"]);
        Self { builder }
    }

    /// Strip everything outside the allow-list from `html`
    pub fn clean(&self, html: &str) -> String {
        self.builder.clean(html).to_string()
    }
}

impl Default for MessageSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::config::{DEFAULT_LOGGED_IN_MESSAGE, DEFAULT_NOT_LOGGED_IN_MESSAGE};

    #[test]
    fn test_default_messages_pass_unchanged() {
        let sanitizer = MessageSanitizer::new();
        assert_eq!(
            sanitizer.clean(DEFAULT_LOGGED_IN_MESSAGE),
            DEFAULT_LOGGED_IN_MESSAGE
        );
        assert_eq!(
            sanitizer.clean(DEFAULT_NOT_LOGGED_IN_MESSAGE),
            DEFAULT_NOT_LOGGED_IN_MESSAGE
        );
    }

    #[test]
    fn test_script_is_removed() {
        let sanitizer = MessageSanitizer::new();
        let cleaned = sanitizer.clean("<p>Hi</p><script>alert(1)</script>");
        assert_eq!(cleaned, "<p>Hi</p>");
    }

    #[test]
    fn test_event_handlers_are_removed() {
        let sanitizer = MessageSanitizer::new();
        let cleaned = sanitizer.clean(r#"<a href="/x" onclick="steal()">x</a>"#);
        assert!(!cleaned.contains("onclick"));
        assert!(cleaned.contains(r#"href="/x""#));
    }

    #[test]
    fn test_javascript_urls_are_removed() {
        let sanitizer = MessageSanitizer::new();
        let cleaned = sanitizer.clean(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!cleaned.contains("javascript:"));
    }

    #[test]
    fn test_formatting_survives() {
        let sanitizer = MessageSanitizer::new();
        let html = "<p><strong>Staff</strong> and <em>students</em> only.</p>";
        assert_eq!(sanitizer.clean(html), html);
    }

    #[test]
    fn test_editor_attributes_survive() {
        let sanitizer = MessageSanitizer::new();
        let cleaned = sanitizer.clean(
            r#"<p class="notice" style="color:red">Please <a href="/wp-login.php" target="_blank">log in</a></p>"#,
        );
        assert!(cleaned.contains(r#"class="notice""#));
        assert!(cleaned.contains(r#"style="color:red""#));
        assert!(cleaned.contains(r#"target="_blank""#));
        assert!(cleaned.contains(r#"href="/wp-login.php""#));
    }

    #[test]
    fn test_plain_text_passes() {
        let sanitizer = MessageSanitizer::new();
        assert_eq!(sanitizer.clean("Members only"), "Members only");
    }
}
