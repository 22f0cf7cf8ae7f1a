//! tests/api/waitlist.rs

use crate::helpers::{spawn_app, LandingPage, TestApp, PRIMARY_PATH, SECONDARY_PATH};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

async fn both_endpoints_respond_with(
    app: &TestApp,
    primary: ResponseTemplate,
    secondary: ResponseTemplate,
) {
    Mock::given(path(PRIMARY_PATH))
        .and(method("POST"))
        .respond_with(primary)
        .expect(1)
        .mount(&app.primary_endpoint)
        .await;
    Mock::given(path(SECONDARY_PATH))
        .and(method("POST"))
        .respond_with(secondary)
        .expect(1)
        .mount(&app.secondary_endpoint)
        .await;
}

fn rejection(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(400)
        .set_body_json(serde_json::json!({ "errors": [{ "message": message }] }))
}

fn accepted() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "next": "/thanks", "ok": true }))
}

#[tokio::test]
async fn joining_with_a_valid_email_shows_the_confirmation() {
    // Arrange
    let app = spawn_app().await;
    both_endpoints_respond_with(&app, accepted(), accepted()).await;

    // Act
    let page = app.join_waitlist("user@example.com").await;

    // Assert
    assert!(page.has_confirmation());
    assert!(!page.has_form());
    let confirmation = page.confirmation_text().unwrap();
    assert!(confirmation.contains("You're In!"));
    assert!(confirmation.contains("We'll notify you when Crelyzor launches."));
}

#[tokio::test]
async fn joining_delivers_the_email_to_both_endpoints() {
    // Arrange
    let app = spawn_app().await;
    both_endpoints_respond_with(&app, accepted(), accepted()).await;

    // Act
    app.join_waitlist("user@example.com").await;

    // Assert
    for server in [&app.primary_endpoint, &app.secondary_endpoint] {
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains(r#"name="email""#));
        assert!(body.contains("user@example.com"));
    }
}

#[tokio::test]
async fn invalid_emails_are_rejected_without_contacting_the_endpoints() {
    // Arrange
    let app = spawn_app().await;
    for server in [&app.primary_endpoint, &app.secondary_endpoint] {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(server)
            .await;
    }
    let test_cases = vec![
        ("", "Email is required"),
        ("ab", "Email is too short"),
        ("abc", "Please include '@' in your email"),
        ("a@b", "Please include a valid domain"),
        ("ursula.le@guin", "Please enter a valid email address"),
    ];

    for (invalid_email, expected_message) in test_cases {
        // Act
        let page = app.join_waitlist(invalid_email).await;

        // Assert
        assert!(page.has_form());
        assert_eq!(
            page.error_message().as_deref(),
            Some(expected_message),
            "The form did not show the expected error when the email was `{}`.",
            invalid_email
        );
        assert_eq!(page.email_value().as_deref(), Some(invalid_email));
    }
}

#[tokio::test]
async fn a_missing_email_field_is_treated_as_empty() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.post_waitlist(&[("name", "Ursula")]).await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let page = LandingPage::parse(&response.text().await.unwrap());
    assert_eq!(page.error_message().as_deref(), Some("Email is required"));
}

#[tokio::test]
async fn primary_endpoint_error_is_shown_and_input_retained() {
    // Arrange
    let app = spawn_app().await;
    both_endpoints_respond_with(&app, rejection("Email already subscribed"), accepted()).await;

    // Act
    let page = app.join_waitlist("user@example.com").await;

    // Assert
    assert!(page.has_form());
    assert_eq!(
        page.error_message().as_deref(),
        Some("Email already subscribed")
    );
    assert_eq!(page.email_value().as_deref(), Some("user@example.com"));
}

#[tokio::test]
async fn primary_endpoint_error_wins_when_both_fail() {
    // Arrange
    let app = spawn_app().await;
    both_endpoints_respond_with(
        &app,
        rejection("Email already subscribed"),
        rejection("Form is disabled"),
    )
    .await;

    // Act
    let page = app.join_waitlist("user@example.com").await;

    // Assert
    assert_eq!(
        page.error_message().as_deref(),
        Some("Email already subscribed")
    );
}

#[tokio::test]
async fn secondary_endpoint_error_is_shown_when_primary_has_none() {
    // Arrange
    let app = spawn_app().await;
    both_endpoints_respond_with(
        &app,
        ResponseTemplate::new(500).set_body_json(serde_json::json!({})),
        rejection("Form is disabled"),
    )
    .await;

    // Act
    let page = app.join_waitlist("user@example.com").await;

    // Assert
    assert_eq!(page.error_message().as_deref(), Some("Form is disabled"));
}

#[tokio::test]
async fn unstructured_rejection_shows_the_generic_retry_message() {
    // Arrange
    let app = spawn_app().await;
    both_endpoints_respond_with(
        &app,
        accepted(),
        ResponseTemplate::new(429).set_body_json(serde_json::json!({ "errors": [] })),
    )
    .await;

    // Act
    let page = app.join_waitlist("user@example.com").await;

    // Assert
    assert_eq!(
        page.error_message().as_deref(),
        Some("Something went wrong. Please try again.")
    );
}

#[tokio::test]
async fn unreadable_endpoint_replies_show_the_try_again_later_message() {
    // Arrange
    let app = spawn_app().await;
    // empty bodies are not valid JSON
    both_endpoints_respond_with(
        &app,
        ResponseTemplate::new(503),
        ResponseTemplate::new(503),
    )
    .await;

    // Act
    let page = app.join_waitlist("user@example.com").await;

    // Assert
    assert_eq!(
        page.error_message().as_deref(),
        Some("Something went wrong. Please try again later.")
    );
    assert_eq!(page.email_value().as_deref(), Some("user@example.com"));
}

#[tokio::test]
async fn malformed_structured_error_shows_the_generic_retry_message() {
    // Arrange
    let app = spawn_app().await;
    both_endpoints_respond_with(
        &app,
        ResponseTemplate::new(400).set_body_json(serde_json::json!({ "errors": "boom" })),
        accepted(),
    )
    .await;

    // Act
    let page = app.join_waitlist("user@example.com").await;

    // Assert
    assert_eq!(
        page.error_message().as_deref(),
        Some("Something went wrong. Please try again.")
    );
    assert_eq!(page.email_value().as_deref(), Some("user@example.com"));
}
