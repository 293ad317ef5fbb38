// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_note;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_note::{PostgresNoteReadRepository, PostgresNoteWriteRepository};
pub use postgres_user::PostgresUserRepository;
