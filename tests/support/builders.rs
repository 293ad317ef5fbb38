// tests/support/builders.rs
use notes_core::domain::note::{Note, NoteId, NoteSlug, NoteText, NoteTitle};
use notes_core::domain::user::{PasswordHash, User, UserId, Username};

use super::mocks::{AUTHOR_ID, fixed_now};

pub struct NoteBuilder {
    id: i64,
    title: String,
    text: String,
    slug: String,
    author_id: i64,
}

impl NoteBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Заголовок".into(),
            text: "Текст".into(),
            slug: "note-slug".into(),
            author_id: AUTHOR_ID,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn build(self) -> Note {
        Note {
            id: NoteId::new(self.id).unwrap(),
            title: NoteTitle::new(self.title).unwrap(),
            text: NoteText::new(self.text).unwrap(),
            slug: NoteSlug::new(self.slug).unwrap(),
            author_id: UserId::new(self.author_id).unwrap(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

/// Active user whose stored hash matches `PlainPasswordHasher`.
pub fn user_with_password(id: i64, username: &str, password: &str) -> User {
    User {
        id: UserId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
        password_hash: PasswordHash::new(format!("plain${password}")).unwrap(),
        is_active: true,
        created_at: fixed_now(),
    }
}
