mod get_by_slug;
mod list;
mod service;

pub(crate) use get_by_slug::find_owned_note;
pub use get_by_slug::GetNoteBySlugQuery;
pub use service::NoteQueryService;
