use email_restriction_block::block::{
    BlockRegistry, DEFAULT_LOGGED_IN_MESSAGE, DEFAULT_NOT_LOGGED_IN_MESSAGE,
    RESTRICTED_CONTENT_BLOCK,
};
use email_restriction_block::{BlockConfig, BlockRenderer, RenderResult, ViewerIdentity};
use proptest::prelude::*;

const CONTENT: &str = "<p>Syllabus and reading list</p>";

fn rejected_html(message: &str) -> String {
    format!(
        "<div class=\"email-restriction-content-block restricted\">{}</div>",
        message
    )
}

#[test]
fn test_student_email_sees_content() {
    let renderer = BlockRenderer::new();
    let config = BlockConfig::with_pattern(r"@.*\.edu");

    let html = renderer.render(
        &config,
        &ViewerIdentity::authenticated("alice@school.edu"),
        CONTENT,
    );

    assert_eq!(
        html,
        format!("<div class=\"email-restriction-content-block\">{}</div>", CONTENT)
    );
}

#[test]
fn test_company_email_sees_rejected_message() {
    let renderer = BlockRenderer::new();
    let config = BlockConfig::with_pattern(r"@.*\.edu");

    let html = renderer.render(
        &config,
        &ViewerIdentity::authenticated("bob@company.com"),
        CONTENT,
    );

    assert_eq!(html, rejected_html(DEFAULT_LOGGED_IN_MESSAGE));
}

#[test]
fn test_configured_rejected_message() {
    let renderer = BlockRenderer::new();
    let config = BlockConfig::default().logged_in_message("<p>Students only.</p>");

    let html = renderer.render(
        &config,
        &ViewerIdentity::authenticated("bob@company.com"),
        CONTENT,
    );

    assert_eq!(html, rejected_html("<p>Students only.</p>"));
}

#[test]
fn test_anonymous_viewer_sees_login_prompt() {
    let renderer = BlockRenderer::new();

    for pattern in ["", r"@.*\.edu", "(unclosed", ".*"] {
        let html = renderer.render(
            &BlockConfig::with_pattern(pattern),
            &ViewerIdentity::anonymous(),
            CONTENT,
        );
        assert_eq!(html, rejected_html(DEFAULT_NOT_LOGGED_IN_MESSAGE));
    }
}

#[test]
fn test_unclosed_group_rejects_not_login_prompt() {
    let renderer = BlockRenderer::new();
    let config = BlockConfig::with_pattern("(unclosed")
        .logged_in_message("Rejected")
        .not_logged_in_message("Log in");

    let result = renderer.render_result(
        &config,
        &ViewerIdentity::authenticated("alice@school.edu"),
        CONTENT,
    );

    assert_eq!(result, RenderResult::LoggedInRejected("Rejected".to_string()));
}

#[test]
fn test_host_attributes_through_registry() {
    let registry = BlockRegistry::with_restricted_content();
    let attributes = r#"{
        "emailPattern": "@example\\.org$",
        "loggedInRestrictedMessage": "<p>Members only</p>",
        "notLoggedInMessage": ""
    }"#;

    let member = ViewerIdentity::authenticated("carol@example.org");
    let html = registry
        .render(RESTRICTED_CONTENT_BLOCK, attributes, CONTENT, &member)
        .unwrap();
    assert!(html.contains(CONTENT));

    let outsider = ViewerIdentity::authenticated("carol@example.org.evil.com");
    let html = registry
        .render(RESTRICTED_CONTENT_BLOCK, attributes, CONTENT, &outsider)
        .unwrap();
    assert_eq!(html, rejected_html("<p>Members only</p>"));

    let html = registry
        .render(
            RESTRICTED_CONTENT_BLOCK,
            attributes,
            CONTENT,
            &ViewerIdentity::anonymous(),
        )
        .unwrap();
    assert_eq!(html, rejected_html(DEFAULT_NOT_LOGGED_IN_MESSAGE));
}

#[test]
fn test_yaml_attributes_file() {
    let yaml = r#"
emailPattern: "@(staff|faculty)\\.school\\.edu"
loggedInRestrictedMessage: "Staff area"
"#;
    let config = BlockConfig::from_yaml(yaml).unwrap();
    let renderer = BlockRenderer::new();

    let staff = ViewerIdentity::authenticated("dan@faculty.school.edu");
    let student = ViewerIdentity::authenticated("erin@students.school.edu");

    assert!(renderer.decide(&config, &staff).is_ok());
    assert_eq!(
        renderer.render(&config, &student, CONTENT),
        rejected_html("Staff area")
    );
}

proptest! {
    #[test]
    fn prop_anonymous_always_not_logged_in(pattern in ".{0,20}", content in ".{0,40}") {
        let renderer = BlockRenderer::new();
        let result = renderer.render_result(
            &BlockConfig::with_pattern(pattern),
            &ViewerIdentity::anonymous(),
            &content,
        );
        prop_assert_eq!(
            result,
            RenderResult::NotLoggedIn(DEFAULT_NOT_LOGGED_IN_MESSAGE.to_string())
        );
    }

    #[test]
    fn prop_invalid_pattern_always_rejected(prefix in "[a-z]{0,8}", email in ".{0,30}") {
        let renderer = BlockRenderer::new();
        let config = BlockConfig::with_pattern(format!("{}(", prefix));
        let result = renderer.render_result(
            &config,
            &ViewerIdentity::authenticated(email),
            CONTENT,
        );
        prop_assert_eq!(
            result,
            RenderResult::LoggedInRejected(DEFAULT_LOGGED_IN_MESSAGE.to_string())
        );
    }

    #[test]
    fn prop_matching_email_gets_content_unmodified(
        user in "[a-z0-9.]{1,12}",
        host in "[a-z]{1,10}",
        content in ".{0,60}",
    ) {
        let renderer = BlockRenderer::new();
        let email = format!("{}@{}.edu", user, host);
        let html = renderer.render(
            &BlockConfig::default(),
            &ViewerIdentity::authenticated(email),
            &content,
        );
        prop_assert_eq!(
            html,
            format!("<div class=\"email-restriction-content-block\">{}</div>", content)
        );
    }

    #[test]
    fn prop_non_matching_email_rejected(user in "[a-z0-9]{1,12}", host in "[a-z]{1,10}") {
        let renderer = BlockRenderer::new();
        let email = format!("{}@{}.com", user, host);
        let result = renderer.render_result(
            &BlockConfig::default(),
            &ViewerIdentity::authenticated(email),
            CONTENT,
        );
        prop_assert_eq!(
            result,
            RenderResult::LoggedInRejected(DEFAULT_LOGGED_IN_MESSAGE.to_string())
        );
    }

    #[test]
    fn prop_empty_pattern_equals_default(email in ".{0,30}") {
        let renderer = BlockRenderer::new();
        let viewer = ViewerIdentity::authenticated(email);
        prop_assert_eq!(
            renderer.render(&BlockConfig::with_pattern(""), &viewer, CONTENT),
            renderer.render(&BlockConfig::default(), &viewer, CONTENT)
        );
    }
}
