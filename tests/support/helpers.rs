// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use craftstore::application::{
    ApplicationServices, ServiceDependencies,
    ports::{ClockPort, SlugGeneratorPort, TokenVerifierPort},
};
use craftstore::domain::{
    category::CategoryRepository,
    enquiry::EnquiryRepository,
    product::{ProductReadRepository, ProductWriteRepository, services::EnquiryLinkBuilder},
    validation::InputValidator,
};
use craftstore::infrastructure::{security::StaticTokenVerifier, util::DefaultSlugGenerator};
use craftstore::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{FailingStore, FixedClock, MemoryStore, TEST_TOKEN};

pub const TEST_WHATSAPP_PHONE: &str = "919812345678";

/// Repository set handed to the services under test.
pub struct TestRepos {
    pub product_write: Arc<dyn ProductWriteRepository>,
    pub product_read: Arc<dyn ProductReadRepository>,
    pub category: Arc<dyn CategoryRepository>,
    pub enquiry: Arc<dyn EnquiryRepository>,
}

impl TestRepos {
    pub fn memory(store: &MemoryStore) -> Self {
        Self {
            product_write: Arc::new(store.clone()),
            product_read: Arc::new(store.clone()),
            category: Arc::new(store.clone()),
            enquiry: Arc::new(store.clone()),
        }
    }

    pub fn failing() -> Self {
        Self {
            product_write: Arc::new(FailingStore),
            product_read: Arc::new(FailingStore),
            category: Arc::new(FailingStore),
            enquiry: Arc::new(FailingStore),
        }
    }
}

pub fn build_services(repos: TestRepos) -> Arc<ApplicationServices> {
    let token_verifier: Arc<TokenVerifierPort> = Arc::new(StaticTokenVerifier::new(TEST_TOKEN));
    let clock: Arc<ClockPort> = Arc::new(FixedClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    Arc::new(ApplicationServices::new(ServiceDependencies {
        product_write_repo: repos.product_write,
        product_read_repo: repos.product_read,
        category_repo: repos.category,
        enquiry_repo: repos.enquiry,
        token_verifier,
        clock,
        slugger,
        validator: InputValidator::default(),
        enquiry_links: EnquiryLinkBuilder::new(TEST_WHATSAPP_PHONE),
    }))
}

pub fn build_test_state(repos: TestRepos) -> HttpState {
    HttpState {
        services: build_services(repos),
    }
}

pub fn make_router(repos: TestRepos) -> Router {
    build_router(
        build_test_state(repos),
        &["http://localhost:3000".to_string()],
    )
}

/// Router over a fresh in-memory store, plus the store for seeding and
/// inspection.
pub fn make_test_router() -> (Router, MemoryStore) {
    let store = MemoryStore::new();
    (make_router(TestRepos::memory(&store)), store)
}

/// Fire one request and decode the JSON response body (`Null` when empty).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = app.clone().oneshot(request).await.expect("router call");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, json)
}

/// `send` with the admin token attached.
pub async fn send_admin(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send(app, method, uri, Some(TEST_TOKEN), body).await
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    msg_field.to_string()
}

pub fn message_of(body: &Value) -> &str {
    body.get("message").and_then(Value::as_str).unwrap_or("")
}
