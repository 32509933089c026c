//! Contact submissions end to end: browser POST → router → controller →
//! relay (wiremock) → rendered view.

use std::sync::Arc;

use agcp_contact::{FAILURE_MESSAGE, HttpFormRelay};
use agcp_core::logging::capture_logs;
use agcp_server::{ServerConfig, SiteServer};
use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;
use tracing::Level;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JANE: [(&str, &str); 9] = [
    ("form-name", "contact"),
    ("bot-field", ""),
    ("name", "Jane Doe"),
    ("company", "Acme Pharma"),
    ("role", "VP BD"),
    ("email", "jane@acme.com"),
    ("phone", ""),
    ("inquiryType", "Partnership Interest"),
    ("message", "Interested in BBB platform."),
];

fn app_for(relay_uri: &str) -> Router {
    let relay = HttpFormRelay::new(relay_uri, None).unwrap();
    let handle = PrometheusBuilder::new().build_recorder().handle();
    SiteServer::new(ServerConfig::default(), Arc::new(relay), handle).router()
}

async fn post_contact(app: Router, fields: &[(&str, &str)]) -> (StatusCode, String) {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/contact")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn with_value<'a>(key: &str, value: &'a str) -> Vec<(&'static str, &'a str)> {
    JANE.iter()
        .map(|&(k, v)| if k == key { (k, value) } else { (k, v) })
        .collect()
}

#[tokio::test]
async fn delivered_inquiry_shows_confirmation() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("name=Jane+Doe"))
        .and(body_string_contains("inquiryType=Partnership+Interest"))
        .and(body_string_contains("form-name=contact"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&relay)
        .await;

    let (status, html) = post_contact(app_for(&relay.uri()), &JANE).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Thank You for Your Inquiry"));
    assert!(html.contains("Send Another Inquiry"));
    assert!(!html.contains("Submit Inquiry"));
}

#[tokio::test]
async fn relay_outage_keeps_draft_and_shows_banner() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&relay)
        .await;

    let (status, html) = post_contact(app_for(&relay.uri()), &JANE).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(FAILURE_MESSAGE));
    assert!(html.contains(r#"value="Jane Doe""#));
    assert!(html.contains(r#"value="Acme Pharma""#));
    assert!(html.contains(r#"value="VP BD""#));
    assert!(html.contains(r#"value="jane@acme.com""#));
    assert!(html.contains(r#"<option value="Partnership Interest" selected>"#));
    assert!(html.contains("Interested in BBB platform.</textarea>"));
    assert!(html.contains("Submit Inquiry"));
    assert!(!html.contains("Thank You for Your Inquiry"));
}

#[tokio::test]
async fn unreachable_relay_looks_like_outage() {
    // bind then drop so nothing listens on the port
    let relay = MockServer::start().await;
    let uri = relay.uri();
    drop(relay);

    let (status, html) = post_contact(app_for(&uri), &JANE).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(FAILURE_MESSAGE));
    assert!(html.contains(r#"value="Jane Doe""#));
}

#[tokio::test]
async fn missing_required_field_is_blocked_without_relay_call() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&relay)
        .await;

    let (status, html) = post_contact(app_for(&relay.uri()), &with_value("role", "")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!html.contains(FAILURE_MESSAGE));
    assert!(html.contains(r#"name="role" value="" placeholder"#));
    assert!(html.contains(r#"aria-invalid="true""#));
}

#[tokio::test]
async fn malformed_email_is_blocked() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&relay)
        .await;

    let (status, _) = post_contact(app_for(&relay.uri()), &with_value("email", "jane.acme.com")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn filled_honeypot_is_dropped_silently() {
    let (logs, _guard) = capture_logs();
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&relay)
        .await;

    let (status, html) =
        post_contact(app_for(&relay.uri()), &with_value("bot-field", "http://spam.example")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Thank You for Your Inquiry"));
    assert!(logs.has_event(Level::WARN, "honeypot"));
}

#[tokio::test]
async fn unknown_inquiry_type_falls_back_to_general() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("inquiryType=General+Inquiry"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&relay)
        .await;

    let (status, html) = post_contact(app_for(&relay.uri()), &with_value("inquiryType", "Sales")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Thank You for Your Inquiry"));
}

#[tokio::test]
async fn last_value_wins_for_repeated_keys() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("name=Janet+Doe"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&relay)
        .await;

    let mut fields = JANE.to_vec();
    fields.push(("name", "Janet Doe"));
    let (status, _) = post_contact(app_for(&relay.uri()), &fields).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn non_form_body_is_rejected() {
    let relay = MockServer::start().await;
    let req = Request::builder()
        .method(Method::POST)
        .uri("/contact")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let resp = app_for(&relay.uri()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
