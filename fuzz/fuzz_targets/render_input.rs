#![no_main]

use arbitrary::Arbitrary;
use email_restriction_block::{BlockConfig, BlockRenderer, RenderResult, ViewerIdentity};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    email_pattern: String,
    logged_in_message: String,
    not_logged_in_message: String,
    email: Option<String>,
    content: String,
}

fuzz_target!(|input: FuzzInput| {
    let config = BlockConfig::with_pattern(input.email_pattern)
        .logged_in_message(input.logged_in_message)
        .not_logged_in_message(input.not_logged_in_message);

    let viewer = ViewerIdentity::from_parts(input.email.is_some(), input.email);
    let renderer = BlockRenderer::new();

    // Rendering must never panic, and only an allowed viewer may see content
    let result = renderer.render_result(&config, &viewer, &input.content);
    match result {
        RenderResult::NotLoggedIn(_) => assert!(!viewer.is_logged_in()),
        RenderResult::LoggedInRejected(_) | RenderResult::Allowed(_) => {
            assert!(viewer.is_logged_in())
        }
    }
    let _ = result.to_html();
});
