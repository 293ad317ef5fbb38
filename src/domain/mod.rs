pub mod errors;
pub mod note;
pub mod user;
