use crate::domain::errors::DomainResult;
use crate::domain::note::entity::{NewNote, Note, NoteUpdate};
use crate::domain::note::services::ExistingSlugs;
use crate::domain::note::value_objects::{NoteId, NoteSlug};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait NoteWriteRepository: Send + Sync {
    async fn insert(&self, note: NewNote) -> DomainResult<Note>;
    async fn update(&self, update: NoteUpdate) -> DomainResult<Note>;
    async fn delete(&self, id: NoteId) -> DomainResult<()>;
}

#[async_trait]
pub trait NoteReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &NoteSlug) -> DomainResult<Option<Note>>;
    /// Notes owned by `author_id`, ordered by id.
    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Note>>;
    /// Snapshot of persisted slugs equal to `candidate`, optionally ignoring
    /// the note identified by `excluding`.
    async fn existing_slugs(
        &self,
        candidate: &NoteSlug,
        excluding: Option<NoteId>,
    ) -> DomainResult<ExistingSlugs>;
}
