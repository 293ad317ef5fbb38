// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::pages::home,
        crate::presentation::http::controllers::notes::list_notes,
        crate::presentation::http::controllers::notes::add_note_form,
        crate::presentation::http::controllers::notes::add_note,
        crate::presentation::http::controllers::notes::note_done,
        crate::presentation::http::controllers::notes::note_detail,
        crate::presentation::http::controllers::notes::edit_note_form,
        crate::presentation::http::controllers::notes::edit_note,
        crate::presentation::http::controllers::notes::delete_note_confirm,
        crate::presentation::http::controllers::notes::delete_note,
        crate::presentation::http::controllers::auth::signup_form,
        crate::presentation::http::controllers::auth::signup,
        crate::presentation::http::controllers::auth::login_form,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::pages::HomePage,
            crate::presentation::http::controllers::auth::CredentialsForm,
            crate::presentation::http::controllers::auth::AuthFormPage,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::application::forms::NoteForm,
            crate::application::forms::FormErrors,
            crate::application::dto::NoteDto,
            crate::application::dto::NoteListDto,
            crate::application::dto::NoteFormView,
            crate::application::dto::UserDto,
            crate::application::dto::AuthTokenDto
        )
    ),
    tags(
        (name = "Pages", description = "Public pages"),
        (name = "Notes", description = "Notes owned by the caller"),
        (name = "Auth", description = "Signup, login and logout"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&BearerAuth),
    security(("bearerAuth" = [])),
    info(
        title = "Notes API",
        description = "Personal notes with per-author visibility and unique slugs",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH`, returning the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(output_path)
}
