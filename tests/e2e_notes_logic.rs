use axum::http::StatusCode;
use notes_core::domain::note::SLUG_WARNING;

mod support;

use support::{
    AUTHOR_ID, AUTHOR_TOKEN, InMemoryNoteRepo, NoteBuilder, READER_TOKEN, TestApp,
    assert_error_response, assert_login_redirect, assert_redirect, field_errors,
};

const SLUG: &str = "note-slug";

fn form<'a>(title: &'a str, text: &'a str, slug: &'a str) -> [(&'static str, &'a str); 3] {
    [("title", title), ("text", text), ("slug", slug)]
}

fn app_with_note() -> TestApp {
    TestApp::with_notes(InMemoryNoteRepo::with_notes(vec![
        NoteBuilder::new()
            .slug(SLUG)
            .title("Заголовок")
            .text("Текст")
            .build(),
    ]))
}

#[tokio::test]
async fn anonymous_user_cannot_create_a_note() {
    let app = TestApp::new();
    let resp = app
        .post_form("/add/", None, &form("Заголовок", "Текст", SLUG))
        .await;

    assert_login_redirect(&resp, "/add/");
    assert_eq!(app.notes.len(), 0);
}

#[tokio::test]
async fn user_can_create_a_note() {
    let app = TestApp::new();
    let resp = app
        .post_form("/add/", Some(AUTHOR_TOKEN), &form("Заголовок", "Текст", SLUG))
        .await;

    assert_redirect(&resp, "/done/");
    assert_eq!(app.notes.len(), 1);
    let note = app.notes.get(SLUG).expect("note stored under submitted slug");
    assert_eq!(note.title.as_str(), "Заголовок");
    assert_eq!(note.text.as_str(), "Текст");
    assert_eq!(i64::from(note.author_id), AUTHOR_ID);
}

#[tokio::test]
async fn not_unique_slug_is_rejected() {
    let app = app_with_note();
    let resp = app
        .post_form("/add/", Some(AUTHOR_TOKEN), &form("Другой", "Текст", SLUG))
        .await;

    let json = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert_eq!(field_errors(&json, "slug"), vec![format!("{SLUG}{SLUG_WARNING}")]);
    assert_eq!(app.notes.len(), 1);
}

#[tokio::test]
async fn empty_slug_is_derived_from_the_title() {
    let app = TestApp::new();
    let resp = app
        .post_form("/add/", Some(AUTHOR_TOKEN), &form("Заголовок", "Текст", ""))
        .await;

    assert_redirect(&resp, "/done/");
    assert_eq!(app.notes.len(), 1);
    assert!(app.notes.get("zagolovok").is_some());
}

#[tokio::test]
async fn omitted_slug_field_behaves_like_an_empty_one() {
    let app = TestApp::new();
    let resp = app
        .post_form(
            "/add/",
            Some(AUTHOR_TOKEN),
            &[("title", "Заголовок"), ("text", "Текст")],
        )
        .await;

    assert_redirect(&resp, "/done/");
    assert!(app.notes.get("zagolovok").is_some());
}

#[tokio::test]
async fn author_can_edit_note() {
    let app = app_with_note();
    let resp = app
        .post_form(
            &format!("/edit/{SLUG}/"),
            Some(AUTHOR_TOKEN),
            &form("Новый заголовок", "Новый текст", "new-slug"),
        )
        .await;

    assert_redirect(&resp, "/done/");
    assert!(app.notes.get(SLUG).is_none());
    let note = app.notes.get("new-slug").expect("note moved to new slug");
    assert_eq!(note.title.as_str(), "Новый заголовок");
    assert_eq!(note.text.as_str(), "Новый текст");
}

#[tokio::test]
async fn author_can_resubmit_the_same_slug() {
    let app = app_with_note();
    let resp = app
        .post_form(
            &format!("/edit/{SLUG}/"),
            Some(AUTHOR_TOKEN),
            &form("Заголовок 2", "Текст 2", SLUG),
        )
        .await;

    assert_redirect(&resp, "/done/");
    assert_eq!(app.notes.get(SLUG).unwrap().title.as_str(), "Заголовок 2");
}

#[tokio::test]
async fn other_user_cant_edit_note() {
    let app = app_with_note();
    let resp = app
        .post_form(
            &format!("/edit/{SLUG}/"),
            Some(READER_TOKEN),
            &form("Новый заголовок", "Новый текст", "new-slug"),
        )
        .await;

    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    let note = app.notes.get(SLUG).expect("note untouched");
    assert_eq!(note.title.as_str(), "Заголовок");
    assert_eq!(note.text.as_str(), "Текст");
}

#[tokio::test]
async fn author_can_delete_note() {
    let app = app_with_note();
    let resp = app
        .post_form(&format!("/delete/{SLUG}/"), Some(AUTHOR_TOKEN), &[])
        .await;

    assert_redirect(&resp, "/done/");
    assert_eq!(app.notes.len(), 0);
}

#[tokio::test]
async fn author_can_delete_note_with_delete_method() {
    let app = app_with_note();
    let resp = app.delete(&format!("/delete/{SLUG}/"), Some(AUTHOR_TOKEN)).await;

    assert_redirect(&resp, "/done/");
    assert_eq!(app.notes.len(), 0);
}

#[tokio::test]
async fn other_user_cant_delete_note() {
    let app = app_with_note();
    let resp = app.delete(&format!("/delete/{SLUG}/"), Some(READER_TOKEN)).await;

    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    assert_eq!(app.notes.len(), 1);
}

#[tokio::test]
async fn missing_fields_are_reported_per_field() {
    let app = TestApp::new();
    let resp = app
        .post_form("/add/", Some(AUTHOR_TOKEN), &form("", "", ""))
        .await;

    let json = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert_eq!(field_errors(&json, "title").len(), 1);
    assert_eq!(field_errors(&json, "text").len(), 1);
    assert_eq!(app.notes.len(), 0);
}
