// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of timestamps for note creation and edits.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
