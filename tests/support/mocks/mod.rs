// tests/support/mocks/mod.rs
pub mod note_repo;
pub mod security;
pub mod time;
pub mod user_repo;

pub use note_repo::InMemoryNoteRepo;
pub use security::{
    AUTHOR_ID, AUTHOR_TOKEN, EXPIRED_TOKEN, PlainPasswordHasher, READER_ID, READER_TOKEN,
    SESSION_ID, SESSION_TOKEN, TestTokenManager,
};
pub use time::{FixedClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
