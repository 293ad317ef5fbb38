// src/domain/note/entity.rs
use crate::domain::note::value_objects::{NoteId, NoteSlug, NoteText, NoteTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Note {
    pub id: NoteId,
    pub title: NoteTitle,
    pub text: NoteText,
    pub slug: NoteSlug,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    pub fn set_content(&mut self, title: NoteTitle, text: NoteText, now: DateTime<Utc>) {
        self.title = title;
        self.text = text;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: NoteSlug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: NoteTitle,
    pub text: NoteText,
    pub slug: NoteSlug,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of a note's editable fields. The author never changes.
#[derive(Debug, Clone)]
pub struct NoteUpdate {
    pub id: NoteId,
    pub title: NoteTitle,
    pub text: NoteText,
    pub slug: NoteSlug,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NoteUpdate {
    pub fn from_note(note: &Note, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            text: note.text.clone(),
            slug: note.slug.clone(),
            original_updated_at,
            updated_at: note.updated_at,
        }
    }
}
