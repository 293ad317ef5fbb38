// tests/support/mocks/note_repo.rs
use async_trait::async_trait;
use notes_core::domain::errors::{DomainError, DomainResult};
use notes_core::domain::note::{
    ExistingSlugs, NewNote, Note, NoteId, NoteReadRepository, NoteSlug, NoteUpdate,
    NoteWriteRepository,
};
use notes_core::domain::user::UserId;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Notes table in memory. Like the real schema it refuses a second note with
/// the same slug, independently of the slug snapshot served to readers.
#[derive(Default)]
pub struct InMemoryNoteRepo {
    notes: Mutex<Vec<Note>>,
    stale_snapshots: AtomicBool,
}

impl InMemoryNoteRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Mutex::new(notes),
            ..Self::default()
        }
    }

    /// Serve empty slug snapshots, as if another writer committed between the
    /// uniqueness check and the insert.
    pub fn serve_stale_snapshots(&self) {
        self.stale_snapshots.store(true, Ordering::SeqCst);
    }

    pub fn all(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }

    pub fn get(&self, slug: &str) -> Option<Note> {
        self.all().into_iter().find(|n| n.slug.as_str() == slug)
    }

    pub fn len(&self) -> usize {
        self.notes.lock().unwrap().len()
    }

    fn slug_taken(notes: &[Note], slug: &NoteSlug, excluding: Option<NoteId>) -> bool {
        notes
            .iter()
            .any(|n| &n.slug == slug && Some(n.id) != excluding)
    }
}

#[async_trait]
impl NoteWriteRepository for InMemoryNoteRepo {
    async fn insert(&self, note: NewNote) -> DomainResult<Note> {
        let mut notes = self.notes.lock().unwrap();
        if Self::slug_taken(&notes, &note.slug, None) {
            return Err(DomainError::DuplicateSlug {
                slug: note.slug.into_inner(),
            });
        }

        let id = notes.iter().map(|n| i64::from(n.id)).max().unwrap_or(0) + 1;
        let created = Note {
            id: NoteId::new(id)?,
            title: note.title,
            text: note.text,
            slug: note.slug,
            author_id: note.author_id,
            created_at: note.created_at,
            updated_at: note.updated_at,
        };
        notes.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: NoteUpdate) -> DomainResult<Note> {
        let mut notes = self.notes.lock().unwrap();
        if Self::slug_taken(&notes, &update.slug, Some(update.id)) {
            return Err(DomainError::DuplicateSlug {
                slug: update.slug.into_inner(),
            });
        }

        let stored = notes
            .iter_mut()
            .find(|n| n.id == update.id && n.updated_at == update.original_updated_at)
            .ok_or_else(|| DomainError::Conflict("note update conflict, please retry".into()))?;
        stored.title = update.title;
        stored.text = update.text;
        stored.slug = update.slug;
        stored.updated_at = update.updated_at;
        Ok(stored.clone())
    }

    async fn delete(&self, id: NoteId) -> DomainResult<()> {
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(DomainError::NotFound("note not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl NoteReadRepository for InMemoryNoteRepo {
    async fn find_by_slug(&self, slug: &NoteSlug) -> DomainResult<Option<Note>> {
        Ok(self.get(slug.as_str()))
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Note>> {
        let mut notes: Vec<Note> = self
            .all()
            .into_iter()
            .filter(|n| n.author_id == author_id)
            .collect();
        notes.sort_by_key(|n| i64::from(n.id));
        Ok(notes)
    }

    async fn existing_slugs(
        &self,
        candidate: &NoteSlug,
        excluding: Option<NoteId>,
    ) -> DomainResult<ExistingSlugs> {
        if self.stale_snapshots.load(Ordering::SeqCst) {
            return Ok(ExistingSlugs::new());
        }
        let notes = self.notes.lock().unwrap();
        Ok(notes
            .iter()
            .filter(|n| &n.slug == candidate && Some(n.id) != excluding)
            .map(|n| n.slug.to_string())
            .collect())
    }
}
