use super::NoteQueryService;
use crate::application::{
    dto::{AuthenticatedUser, NoteListDto},
    error::ApplicationResult,
};

impl NoteQueryService {
    pub async fn list_notes(&self, actor: &AuthenticatedUser) -> ApplicationResult<NoteListDto> {
        let notes = self.read_repo.list_by_author(actor.id).await?;
        Ok(notes.into())
    }
}
