// src/application/commands/notes/create.rs
use super::{NoteCommandService, service::slug_field_error};
use crate::{
    application::{
        dto::{AuthenticatedUser, NoteDto},
        error::{ApplicationError, ApplicationResult},
        forms::NoteForm,
    },
    domain::note::NewNote,
};

pub struct CreateNoteCommand {
    pub form: NoteForm,
}

impl NoteCommandService {
    pub async fn create_note(
        &self,
        actor: &AuthenticatedUser,
        command: CreateNoteCommand,
    ) -> ApplicationResult<NoteDto> {
        let cleaned = command.form.clean().map_err(ApplicationError::Form)?;
        let slug = self.resolve_slug(&cleaned, None).await?;
        let now = self.clock.now();

        let new_note = NewNote {
            title: cleaned.title,
            text: cleaned.text,
            slug,
            author_id: actor.id,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .write_repo
            .insert(new_note)
            .await
            .map_err(slug_field_error)?;

        tracing::info!(
            note_id = i64::from(created.id),
            slug = %created.slug,
            author_id = i64::from(created.author_id),
            "note created"
        );
        Ok(created.into())
    }
}
