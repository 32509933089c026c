//! Public directory, real listener and shutdown, and the metrics endpoint
//! against the global recorder.

use std::sync::{Arc, OnceLock};

use agcp_contact::HttpFormRelay;
use agcp_server::metrics::install_recorder;
use agcp_server::{ServerConfig, ServerError, SiteServer};
use assert_matches::assert_matches;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

fn global_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    HANDLE
        .get_or_init(|| install_recorder().unwrap())
        .clone()
}

fn server_with(config: ServerConfig) -> SiteServer {
    let relay = HttpFormRelay::new("http://127.0.0.1:9", None).unwrap();
    SiteServer::new(config, Arc::new(relay), global_handle())
}

async fn fetch(server: &SiteServer, uri: &str) -> (StatusCode, Option<String>, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = server.router().oneshot(req).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned());
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn public_files_are_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("robots.txt"), "User-agent: *\n").unwrap();
    std::fs::write(dir.path().join("30.jpeg"), [0xff_u8, 0xd8, 0xff]).unwrap();

    let server = server_with(ServerConfig {
        public_dir: dir.path().to_path_buf(),
        ..ServerConfig::default()
    });

    let (status, content_type, body) = fetch(&server, "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(body, "User-agent: *\n");

    let (status, content_type, _) = fetch(&server, "/30.jpeg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/jpeg"));
}

#[tokio::test]
async fn missing_public_file_renders_404_page() {
    let dir = tempfile::tempdir().unwrap();
    let server = server_with(ServerConfig {
        public_dir: dir.path().to_path_buf(),
        ..ServerConfig::default()
    });

    let (status, content_type, body) = fetch(&server, "/Alex3-1-1-edited-200x300.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(body.contains("Page Not Found"));
    assert!(body.contains("Back to Home"));
}

#[tokio::test]
async fn page_views_are_counted() {
    let server = server_with(ServerConfig::default());

    let (status, _, _) = fetch(&server, "/science-validation").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _, _) = fetch(&server, "/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, content_type, body) = fetch(&server, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; version=0.0.4"));
    assert!(body.contains(r#"page_views_total{page="science"}"#));
    assert!(body.contains(r#"page_views_total{page="not_found"}"#));
}

#[tokio::test]
async fn listener_serves_until_shutdown() {
    let server = server_with(ServerConfig::default());
    let (addr, handle) = server.listen().await.unwrap();

    let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let health: serde_json::Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(health["status"], "ok");

    let resp = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert!(resp.text().await.unwrap().contains("AGCP"));

    assert!(server.shutdown_and_wait(handle).await);
    assert!(server.is_shutting_down());
    assert!(reqwest::get(format!("http://{addr}/health")).await.is_err());
}

#[tokio::test]
async fn occupied_port_reports_bind_error() {
    let first = server_with(ServerConfig::default());
    let (addr, handle) = first.listen().await.unwrap();

    let second = server_with(ServerConfig {
        port: addr.port(),
        ..ServerConfig::default()
    });
    assert_matches!(second.listen().await, Err(ServerError::Bind { .. }));

    assert!(first.shutdown_and_wait(handle).await);
}

#[tokio::test]
async fn site_root_refuses_form_posts() {
    let server = server_with(ServerConfig::default());
    let req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("form-name=contact&name=Jane+Doe"))
        .unwrap();

    let resp = server.router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
