// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use notes_core::application::services::ApplicationServices;
use notes_core::infrastructure::security::session_store::InMemorySessionRevocationStore;
use notes_core::infrastructure::util::DefaultSlugGenerator;
use notes_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::ServiceExt as _;

use super::mocks::{
    FixedClock, InMemoryNoteRepo, InMemoryUserRepo, PlainPasswordHasher, TestTokenManager,
};

/// Router wired to in-memory doubles, with handles on the doubles so tests
/// can seed and inspect storage.
pub struct TestApp {
    pub router: Router,
    pub notes: Arc<InMemoryNoteRepo>,
    pub users: Arc<InMemoryUserRepo>,
    pub sessions: Arc<InMemorySessionRevocationStore>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_notes(InMemoryNoteRepo::new())
    }

    pub fn with_notes(notes: InMemoryNoteRepo) -> Self {
        let notes = Arc::new(notes);
        let users = Arc::new(InMemoryUserRepo::new());
        let sessions = Arc::new(InMemorySessionRevocationStore::new());

        let services = Arc::new(ApplicationServices::new(
            users.clone(),
            notes.clone(),
            notes.clone(),
            Arc::new(PlainPasswordHasher),
            Arc::new(TestTokenManager),
            sessions.clone(),
            Arc::new(FixedClock),
            Arc::new(DefaultSlugGenerator),
        ));

        let router = build_router(HttpState {
            services: Arc::clone(&services),
        });

        Self {
            router,
            notes,
            users,
            sessions,
            services,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(Method::DELETE, uri, token, None).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form(
        &self,
        uri: &str,
        token: Option<&str>,
        fields: &[(&str, &str)],
    ) -> Response {
        let body = serde_urlencoded::to_string(fields).expect("encode form");
        self.send(Method::POST, uri, token, Some(body)).await
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        form: Option<String>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match form {
            Some(form) => {
                builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form)
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).expect("build request"))
            .await
            .expect("router is infallible")
    }
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

pub fn location(resp: &Response) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

/// Assert a `302 Found` pointing at `expected`.
pub fn assert_redirect(resp: &Response, expected: &str) {
    assert_eq!(resp.status(), StatusCode::FOUND, "expected a redirect");
    assert_eq!(location(resp), Some(expected));
}

pub fn assert_login_redirect(resp: &Response, next: &str) {
    assert_redirect(resp, &format!("/auth/login/?next={next}"));
}

/// Assert an ErrorResponse JSON with the expected status and error string,
/// returning the body for further checks.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
    json
}

/// The messages reported for `field` in a rejected form.
pub fn field_errors(json: &Value, field: &str) -> Vec<String> {
    json.pointer(&format!("/fields/{field}"))
        .and_then(Value::as_array)
        .map(|messages| {
            messages
                .iter()
                .filter_map(|m| m.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
