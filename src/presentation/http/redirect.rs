// src/presentation/http/redirect.rs
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

pub const SUCCESS_PATH: &str = "/done/";

/// `302 Found` to `location`. Browsers and form posts expect 302 here rather
/// than the 303 that `axum::response::Redirect::to` produces.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

pub fn to_success() -> Response {
    found(SUCCESS_PATH)
}
