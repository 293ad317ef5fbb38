use super::{NoteCommandService, service::slug_field_error};
use crate::{
    application::{
        dto::{AuthenticatedUser, NoteDto},
        error::{ApplicationError, ApplicationResult},
        forms::NoteForm,
        queries::notes::find_owned_note,
    },
    domain::note::NoteUpdate,
};

pub struct UpdateNoteCommand {
    /// Slug the note is currently stored under.
    pub slug: String,
    pub form: NoteForm,
}

impl NoteCommandService {
    pub async fn update_note(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateNoteCommand,
    ) -> ApplicationResult<NoteDto> {
        let mut note = find_owned_note(self.read_repo.as_ref(), actor, command.slug).await?;
        let cleaned = command.form.clean().map_err(ApplicationError::Form)?;
        let slug = self.resolve_slug(&cleaned, Some(note.id)).await?;

        let original_updated_at = note.updated_at;
        let now = self.clock.now();
        note.set_content(cleaned.title, cleaned.text, now);
        note.set_slug(slug, now);

        let update = NoteUpdate::from_note(&note, original_updated_at);
        let updated = self
            .write_repo
            .update(update)
            .await
            .map_err(slug_field_error)?;

        tracing::info!(
            note_id = i64::from(updated.id),
            slug = %updated.slug,
            "note updated"
        );
        Ok(updated.into())
    }
}
