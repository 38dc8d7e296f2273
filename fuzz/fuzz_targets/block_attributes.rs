#![no_main]

use email_restriction_block::block::{BlockRegistry, RESTRICTED_CONTENT_BLOCK};
use email_restriction_block::ViewerIdentity;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary attribute JSON should only ever produce errors, never panics
    let registry = BlockRegistry::with_restricted_content();
    let viewer = ViewerIdentity::authenticated("fuzz@school.edu");
    let _ = registry.render(RESTRICTED_CONTENT_BLOCK, data, "<p>x</p>", &viewer);
});
