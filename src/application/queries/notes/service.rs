use std::sync::Arc;

use crate::domain::note::NoteReadRepository;

pub struct NoteQueryService {
    pub(super) read_repo: Arc<dyn NoteReadRepository>,
}

impl NoteQueryService {
    pub fn new(read_repo: Arc<dyn NoteReadRepository>) -> Self {
        Self { read_repo }
    }
}
