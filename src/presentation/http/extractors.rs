// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::{error::HttpError, redirect::found};

pub const LOGIN_PATH: &str = "/auth/login/";

/// A caller with a valid, unrevoked bearer token. Anonymous callers are sent
/// to the login page with the requested path in `next`.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// The caller if they presented a valid token. Bad tokens count as anonymous.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

#[derive(Debug)]
pub enum AuthRejection {
    Login { next: String },
    Error(HttpError),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Login { next } => found(&login_url(&next)),
            Self::Error(err) => err.into_response(),
        }
    }
}

pub fn login_url(next: &str) -> String {
    format!("{LOGIN_PATH}?next={}", encode_next(next))
}

// percent-encode everything outside the unreserved set, keeping '/' readable;
// serde_urlencoded would escape '/' and break `?next=/add/`
fn encode_next(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~' | b'/') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

fn app_state(parts: &Parts) -> Result<HttpState, HttpError> {
    parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
    })
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_string())
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = app_state(parts).map_err(AuthRejection::Error)?;

        let Some(token) = bearer_token(parts) else {
            let next = parts
                .uri
                .path_and_query()
                .map_or_else(|| parts.uri.path().to_string(), ToString::to_string);
            return Err(AuthRejection::Login { next });
        };

        let user = state
            .services
            .authenticate(&token)
            .await
            .map_err(|err| AuthRejection::Error(HttpError::from_error(err)))?;

        Ok(Self(user))
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = app_state(parts)?;

        let Some(token) = bearer_token(parts) else {
            return Ok(Self(None));
        };

        match state.services.authenticate(&token).await {
            Ok(user) => Ok(Self(Some(user))),
            Err(ApplicationError::Unauthorized(reason)) => {
                tracing::debug!(%reason, "ignoring unusable bearer token");
                Ok(Self(None))
            }
            Err(err) => Err(HttpError::from_error(err)),
        }
    }
}
