use crate::application::forms::{FormErrors, NoteForm};
use crate::domain::note::Note;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteDto {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub slug: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            id: note.id.into(),
            title: note.title.into_inner(),
            text: note.text.into_inner(),
            slug: note.slug.into_inner(),
            author_id: note.author_id.into(),
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// The caller's own notes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteListDto {
    pub object_list: Vec<NoteDto>,
}

impl From<Vec<Note>> for NoteListDto {
    fn from(notes: Vec<Note>) -> Self {
        Self {
            object_list: notes.into_iter().map(Into::into).collect(),
        }
    }
}

/// A note form as rendered on the add and edit pages.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteFormView {
    pub form: NoteForm,
    pub errors: FormErrors,
}

impl NoteFormView {
    pub fn blank() -> Self {
        Self {
            form: NoteForm::default(),
            errors: FormErrors::new(),
        }
    }

    pub fn for_note(note: &Note) -> Self {
        Self {
            form: NoteForm::from_note(note),
            errors: FormErrors::new(),
        }
    }
}
