// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::{AuthTokenDto, UserDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Form, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Describes the fields an auth form expects.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthFormPage {
    pub fields: Vec<String>,
}

impl AuthFormPage {
    fn credentials() -> Self {
        Self {
            fields: vec!["username".into(), "password".into()],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

#[utoipa::path(
    get,
    path = "/auth/signup/",
    responses((status = 200, description = "Signup form.", body = AuthFormPage)),
    security([]),
    tag = "Auth"
)]
pub async fn signup_form() -> Json<AuthFormPage> {
    Json(AuthFormPage::credentials())
}

#[utoipa::path(
    post,
    path = "/auth/signup/",
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Account created.", body = UserDto),
        (status = 400, description = "Form rejected, see `fields`.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Auth"
)]
pub async fn signup(
    Extension(state): Extension<HttpState>,
    Form(form): Form<CredentialsForm>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = RegisterUserCommand {
        username: form.username,
        password: form.password,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/auth/login/",
    responses((status = 200, description = "Login form.", body = AuthFormPage)),
    security([]),
    tag = "Auth"
)]
pub async fn login_form() -> Json<AuthFormPage> {
    Json(AuthFormPage::credentials())
}

#[utoipa::path(
    post,
    path = "/auth/login/",
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Bearer token for the new session.", body = LoginResponse),
        (status = 401, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Account disabled.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Form(form): Form<CredentialsForm>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        username: form.username,
        password: form.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user,
    }))
}

#[utoipa::path(
    post,
    path = "/auth/logout/",
    responses((status = 200, description = "Session revoked when one was presented.", body = StatusResponse)),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(user): MaybeAuthenticated,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .user_commands
        .logout(user.as_ref())
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "logged_out".into(),
    }))
}
