// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, notes, pages},
    middleware::rate_limit::auth_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    /// Throttle signup and login per client address.
    pub rate_limit: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            rate_limit: false,
        }
    }
}

/// Router with default options and no rate limiting.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, RouterOptions::default())
}

pub fn build_router_with_options(state: HttpState, options: RouterOptions) -> Router {
    let mut credential_routes = Router::new()
        .route("/auth/signup/", get(auth::signup_form).post(auth::signup))
        .route("/auth/login/", get(auth::login_form).post(auth::login));

    if options.rate_limit {
        match auth_rate_limit_layer() {
            Some(layer) => credential_routes = credential_routes.layer(layer),
            None => tracing::warn!("auth routes are not rate limited"),
        }
    }

    Router::new()
        .route("/", get(pages::home))
        .route("/notes/", get(notes::list_notes))
        .route("/add/", get(notes::add_note_form).post(notes::add_note))
        .route("/done/", get(notes::note_done))
        .route("/note/{slug}/", get(notes::note_detail))
        .route(
            "/edit/{slug}/",
            get(notes::edit_note_form).post(notes::edit_note),
        )
        .route(
            "/delete/{slug}/",
            get(notes::delete_note_confirm)
                .post(notes::delete_note)
                .delete(notes::delete_note),
        )
        .route("/auth/logout/", get(auth::logout).post(auth::logout))
        .merge(credential_routes)
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::serve_openapi))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security([]),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
