pub mod auth;
pub mod notes;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use notes::{NoteDto, NoteFormView, NoteListDto};
pub use users::UserDto;
