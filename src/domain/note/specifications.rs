use crate::domain::note::entity::Note;
use crate::domain::user::UserId;

pub trait NoteSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Notes are private: only the author may view, edit or delete them.
pub struct CanAccessNoteSpec<'a> {
    note: &'a Note,
    user_id: UserId,
}

impl<'a> CanAccessNoteSpec<'a> {
    pub fn new(note: &'a Note, user_id: UserId) -> Self {
        Self { note, user_id }
    }
}

impl NoteSpecification for CanAccessNoteSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.note.is_authored_by(self.user_id)
    }
}
