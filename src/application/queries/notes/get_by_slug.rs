use super::NoteQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, NoteDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::note::{
        Note, NoteReadRepository, NoteSlug,
        specifications::{CanAccessNoteSpec, NoteSpecification},
    },
};

pub struct GetNoteBySlugQuery {
    pub slug: String,
}

/// Loads a note the actor is allowed to see. Notes of other users are
/// reported as missing rather than forbidden.
pub(crate) async fn find_owned_note(
    read_repo: &dyn NoteReadRepository,
    actor: &AuthenticatedUser,
    slug: String,
) -> ApplicationResult<Note> {
    let slug = NoteSlug::new(slug).map_err(|_| ApplicationError::not_found("note not found"))?;
    let note = read_repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApplicationError::not_found("note not found"))?;

    if !CanAccessNoteSpec::new(&note, actor.id).is_satisfied() {
        tracing::debug!(slug = %note.slug, user_id = %actor.id, "note hidden from non-author");
        return Err(ApplicationError::not_found("note not found"));
    }

    Ok(note)
}

impl NoteQueryService {
    pub async fn get_note_by_slug(
        &self,
        actor: &AuthenticatedUser,
        query: GetNoteBySlugQuery,
    ) -> ApplicationResult<NoteDto> {
        find_owned_note(self.read_repo.as_ref(), actor, query.slug)
            .await
            .map(Into::into)
    }

    /// The note itself rather than its DTO, for pages that render a form from it.
    pub async fn get_owned_note(
        &self,
        actor: &AuthenticatedUser,
        query: GetNoteBySlugQuery,
    ) -> ApplicationResult<Note> {
        find_owned_note(self.read_repo.as_ref(), actor, query.slug).await
    }
}
