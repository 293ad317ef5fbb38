// src/application/commands/notes/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        forms::{CleanedNoteForm, field_message},
        ports::time::Clock,
    },
    domain::{
        errors::DomainError,
        note::{NoteId, NoteReadRepository, NoteSlug, NoteSlugResolver, NoteWriteRepository},
    },
};

pub struct NoteCommandService {
    pub(super) write_repo: Arc<dyn NoteWriteRepository>,
    pub(super) read_repo: Arc<dyn NoteReadRepository>,
    pub(super) slug_resolver: Arc<NoteSlugResolver>,
    pub(super) clock: Arc<dyn Clock>,
}

impl NoteCommandService {
    pub fn new(
        write_repo: Arc<dyn NoteWriteRepository>,
        read_repo: Arc<dyn NoteReadRepository>,
        slug_resolver: Arc<NoteSlugResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_resolver,
            clock,
        }
    }

    /// Resolves the slug for a cleaned form against the slugs currently in
    /// storage. `editing` is excluded from the snapshot so a note may keep
    /// its own slug.
    pub(super) async fn resolve_slug(
        &self,
        form: &CleanedNoteForm,
        editing: Option<NoteId>,
    ) -> ApplicationResult<NoteSlug> {
        let candidate = self
            .slug_resolver
            .candidate(&form.title, form.slug.as_deref())
            .map_err(slug_field_error)?;
        let existing = self.read_repo.existing_slugs(&candidate, editing).await?;
        NoteSlugResolver::ensure_unique(candidate, &existing).map_err(slug_field_error)
    }
}

/// Attributes slug failures, including storage-level uniqueness conflicts,
/// to the `slug` form field.
pub(super) fn slug_field_error(err: DomainError) -> ApplicationError {
    match err {
        DomainError::DuplicateSlug { ref slug } => {
            tracing::warn!(%slug, "rejected duplicate note slug");
            ApplicationError::field("slug", err.to_string())
        }
        DomainError::Validation(_) => ApplicationError::field("slug", field_message(err)),
        other => ApplicationError::Domain(other),
    }
}
