//! Verifier over HTTP against a mock `siteverify` service.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use mockito::{Matcher, Server, ServerGuard};
use recaptcha_v3::{Error, HttpTransport, Verifier, VerifierConfig};
use std::time::Duration;

const PATH: &str = "/recaptcha/api/siteverify";

fn endpoint(server: &ServerGuard) -> String {
    format!("{}{PATH}", server.url())
}

#[tokio::test]
async fn test_posts_form_and_admits_high_score() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_header("user-agent", Matcher::Regex("^recaptcha-v3/".to_string()))
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("secret".to_string(), "site-secret".to_string()),
            Matcher::UrlEncoded("response".to_string(), "token-abc".to_string()),
            Matcher::UrlEncoded("remoteip".to_string(), "203.0.113.7".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"success": true, "challenge_ts": "2024-03-01T12:30:00Z", "hostname": "example.com", "score": 0.9, "action": "login"}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let verifier = Verifier::new("site-secret", 0.5).with_endpoint(endpoint(&server));
    let admitted = verifier
        .verify("token-abc", "203.0.113.7")
        .await
        .expect("should verify");

    assert!(admitted);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_low_score_is_not_an_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"success": true, "hostname": "example.com", "score": 0.1, "action": "login"}"#)
        .create_async()
        .await;

    let verifier = Verifier::new("s", 0.5).with_endpoint(endpoint(&server));
    let admitted = verifier.verify("t", "").await.expect("should verify");

    assert!(!admitted);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_service_error_codes_are_rejected() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"success": false, "error-codes": ["invalid-input-response"]}"#)
        .create_async()
        .await;

    let verifier = Verifier::new("s", 0.5).with_endpoint(endpoint(&server));
    let err = verifier.verify("t", "").await.expect_err("should fail");

    assert!(matches!(err, Error::Rejected { .. }));
    assert!(err.to_string().contains("invalid-input-response"));
}

#[tokio::test]
async fn test_non_success_status_is_transport_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let verifier = Verifier::new("s", 0.5).with_endpoint(endpoint(&server));
    let err = verifier.verify("t", "").await.expect_err("should fail");

    assert!(matches!(err, Error::Transport(_)), "got: {err:?}");
    assert!(err.to_string().contains("503"), "got: {err}");
}

#[tokio::test]
async fn test_html_body_is_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body("<html>captive portal</html>")
        .create_async()
        .await;

    let verifier = Verifier::new("s", 0.5).with_endpoint(endpoint(&server));
    let err = verifier.verify("t", "").await.expect_err("should fail");

    assert!(matches!(err, Error::Decode(_)), "got: {err:?}");
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let transport = HttpTransport::with_timeout(Duration::from_secs(2)).expect("client");
    let verifier = Verifier::with_transport("s", 0.5, transport)
        .with_endpoint(format!("http://127.0.0.1:1{PATH}"));

    let err = verifier.verify("t", "").await.expect_err("should fail");
    assert!(matches!(err, Error::Transport(_)), "got: {err:?}");
}

#[tokio::test]
async fn test_from_config_uses_configured_endpoint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_body(Matcher::UrlEncoded(
            "secret".to_string(),
            "from-config".to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"success": true, "score": 0.3}"#)
        .create_async()
        .await;

    let config = VerifierConfig {
        secret: "from-config".to_string(),
        min_score: 0.3,
        endpoint: endpoint(&server),
        ..Default::default()
    };
    let verifier = Verifier::from_config(&config).expect("valid config");

    assert!(verifier.verify("t", "").await.expect("should verify"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_from_config_rejects_invalid_threshold() {
    let config = VerifierConfig {
        min_score: 2.0,
        ..Default::default()
    };
    let result = Verifier::from_config(&config);
    assert!(matches!(result, Err(Error::Config(_))));
}
