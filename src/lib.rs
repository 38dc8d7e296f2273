//! Email Restriction Content Block - access-gated rendering of nested content
//!
//! This crate decides, for one viewer, which of three fragments a restricted
//! content block renders: a message asking anonymous visitors to log in, a
//! message telling logged-in visitors their email is not allowed, or the
//! protected inner content itself.
//!
//! # Example
//!
//! ```rust
//! use email_restriction_block::{BlockConfig, BlockRenderer, ViewerIdentity};
//!
//! let config = BlockConfig::with_pattern(r"@.*\.edu");
//! let renderer = BlockRenderer::new();
//!
//! let html = renderer.render(
//!     &config,
//!     &ViewerIdentity::authenticated("alice@school.edu"),
//!     "<p>Lecture notes</p>",
//! );
//! assert_eq!(
//!     html,
//!     "<div class=\"email-restriction-content-block\"><p>Lecture notes</p></div>"
//! );
//!
//! let html = renderer.render(
//!     &config,
//!     &ViewerIdentity::authenticated("bob@company.com"),
//!     "<p>Lecture notes</p>",
//! );
//! assert!(html.starts_with("<div class=\"email-restriction-content-block restricted\">"));
//! ```

pub mod block;
pub mod render;
pub mod viewer;

// Re-export commonly used types at the crate root
pub use block::{BlockConfig, BlockRegistry, EmailPattern};
pub use render::{BlockRenderer, Denial, RenderResult};
pub use viewer::{IdentityProvider, ViewerIdentity};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render a restricted block for a single viewer
///
/// This is a convenience function for one-off renders. Hosts rendering many
/// blocks should keep a [`BlockRenderer`] around instead.
///
/// # Example
///
/// ```rust
/// use email_restriction_block::{render_block, BlockConfig, ViewerIdentity};
///
/// let html = render_block(&BlockConfig::default(), &ViewerIdentity::anonymous(), "<p>x</p>");
/// assert!(html.contains("log in"));
/// ```
pub fn render_block(config: &BlockConfig, viewer: &ViewerIdentity, inner_content: &str) -> String {
    BlockRenderer::new().render(config, viewer, inner_content)
}
