use super::NoteCommandService;
use crate::application::{
    dto::AuthenticatedUser, error::ApplicationResult, queries::notes::find_owned_note,
};

pub struct DeleteNoteCommand {
    pub slug: String,
}

impl NoteCommandService {
    pub async fn delete_note(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteNoteCommand,
    ) -> ApplicationResult<()> {
        let note = find_owned_note(self.read_repo.as_ref(), actor, command.slug).await?;

        self.write_repo.delete(note.id).await?;
        tracing::info!(note_id = i64::from(note.id), slug = %note.slug, "note deleted");
        Ok(())
    }
}
