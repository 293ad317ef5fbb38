// src/presentation/http/controllers/notes.rs
use crate::application::{
    commands::notes::{CreateNoteCommand, DeleteNoteCommand, UpdateNoteCommand},
    dto::{NoteDto, NoteFormView, NoteListDto},
    forms::NoteForm,
    queries::notes::GetNoteBySlugQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::redirect::to_success;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::Path,
    response::Response,
};

#[utoipa::path(
    get,
    path = "/notes/",
    responses(
        (status = 200, description = "The caller's notes, oldest first.", body = NoteListDto),
        (status = 302, description = "Anonymous caller, redirected to login.")
    ),
    tag = "Notes"
)]
pub async fn list_notes(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<NoteListDto>> {
    state
        .services
        .note_queries
        .list_notes(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/add/",
    responses(
        (status = 200, description = "Empty note form.", body = NoteFormView),
        (status = 302, description = "Anonymous caller, redirected to login.")
    ),
    tag = "Notes"
)]
pub async fn add_note_form(Authenticated(_user): Authenticated) -> Json<NoteFormView> {
    Json(NoteFormView::blank())
}

#[utoipa::path(
    post,
    path = "/add/",
    request_body(content = NoteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Note created, redirected to the success page."),
        (status = 400, description = "Form rejected, see `fields`.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn add_note(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Form(form): Form<NoteForm>,
) -> HttpResult<Response> {
    state
        .services
        .note_commands
        .create_note(&user, CreateNoteCommand { form })
        .await
        .into_http()?;
    Ok(to_success())
}

#[utoipa::path(
    get,
    path = "/done/",
    responses(
        (status = 200, description = "Confirmation after a successful change.", body = StatusResponse)
    ),
    tag = "Notes"
)]
pub async fn note_done(Authenticated(_user): Authenticated) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "done".into(),
    })
}

#[utoipa::path(
    get,
    path = "/note/{slug}/",
    params(("slug" = String, Path, description = "Note slug")),
    responses(
        (status = 200, description = "The note.", body = NoteDto),
        (status = 404, description = "No such note for this caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn note_detail(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<NoteDto>> {
    state
        .services
        .note_queries
        .get_note_by_slug(&user, GetNoteBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/edit/{slug}/",
    params(("slug" = String, Path, description = "Note slug")),
    responses(
        (status = 200, description = "Note form pre-filled with the current values.", body = NoteFormView),
        (status = 404, description = "No such note for this caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn edit_note_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<NoteFormView>> {
    let note = state
        .services
        .note_queries
        .get_owned_note(&user, GetNoteBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(Json(NoteFormView::for_note(&note)))
}

#[utoipa::path(
    post,
    path = "/edit/{slug}/",
    params(("slug" = String, Path, description = "Current note slug")),
    request_body(content = NoteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Note saved, redirected to the success page."),
        (status = 400, description = "Form rejected, see `fields`.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such note for this caller.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "The note changed concurrently.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn edit_note(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Form(form): Form<NoteForm>,
) -> HttpResult<Response> {
    state
        .services
        .note_commands
        .update_note(&user, UpdateNoteCommand { slug, form })
        .await
        .into_http()?;
    Ok(to_success())
}

#[utoipa::path(
    get,
    path = "/delete/{slug}/",
    params(("slug" = String, Path, description = "Note slug")),
    responses(
        (status = 200, description = "The note to confirm deletion of.", body = NoteDto),
        (status = 404, description = "No such note for this caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn delete_note_confirm(
    Extension(state): Extension<HttpState>,
    authenticated: Authenticated,
    path: Path<String>,
) -> HttpResult<Json<NoteDto>> {
    note_detail(Extension(state), authenticated, path).await
}

#[utoipa::path(
    post,
    path = "/delete/{slug}/",
    params(("slug" = String, Path, description = "Note slug")),
    responses(
        (status = 302, description = "Note deleted, redirected to the success page."),
        (status = 404, description = "No such note for this caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn delete_note(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    state
        .services
        .note_commands
        .delete_note(&user, DeleteNoteCommand { slug })
        .await
        .into_http()?;
    Ok(to_success())
}
