//! Test harness with a mock upstream for integration testing.
//!
//! Each test gets its own `wiremock::MockServer` standing in for the listings
//! page, and an app built exactly as the binary builds it, pointed at it.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use locations_core::{server::build_app, Config};
use serde_json::Value;
use std::time::Duration;
use test_context::AsyncTestContext;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const UPSTREAM_PATH: &str = "/te-koop";

pub struct TestHarness {
    pub upstream: MockServer,
    pub app: Router,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await
    }

    async fn teardown(self) {
        // Mock server shuts down on drop
    }
}

impl TestHarness {
    pub async fn new() -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let upstream = MockServer::start().await;
        let config = Config {
            upstream_url: format!("{}{}", upstream.uri(), UPSTREAM_PATH),
            fetch_timeout: Duration::from_secs(2),
            ..Config::default()
        };
        let app = build_app(&config).expect("Failed to build app");

        Self { upstream, app }
    }

    /// Serve `html` from the upstream page with a 200.
    pub async fn upstream_serves(&self, html: &str) {
        self.upstream_responds(ResponseTemplate::new(200).set_body_string(html))
            .await;
    }

    /// Answer the upstream page with an arbitrary response.
    pub async fn upstream_responds(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(UPSTREAM_PATH))
            .respond_with(response)
            .mount(&self.upstream)
            .await;
    }

    /// Number of requests the upstream has seen.
    pub async fn upstream_hits(&self) -> usize {
        self.upstream
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        get_json(&self.app, uri).await
    }

    pub async fn get_text(&self, uri: &str) -> (StatusCode, String) {
        let (status, bytes) = get_raw(&self.app, uri).await;
        (status, String::from_utf8(bytes).expect("Body is not UTF-8"))
    }
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = get_raw(app, uri).await;
    let body = serde_json::from_slice(&bytes).expect("Body is not JSON");
    (status, body)
}

async fn get_raw(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    (status, bytes.to_vec())
}
