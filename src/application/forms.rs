// src/application/forms.rs
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;
use crate::domain::note::{Note, NoteText, NoteTitle};

pub const REQUIRED_FIELD: &str = "This field is required.";

/// Validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Raw note form as submitted by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub slug: String,
}

impl NoteForm {
    /// Form pre-filled with a note's current values, as shown on the edit page.
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.to_string(),
            text: note.text.as_str().to_string(),
            slug: note.slug.to_string(),
        }
    }

    /// Field-level validation of title and text. Slug checks need the
    /// resolved title and the stored slugs, so they happen in the command.
    pub fn clean(self) -> Result<CleanedNoteForm, FormErrors> {
        let mut errors = FormErrors::new();

        let title = match required(&self.title) {
            Some(value) => NoteTitle::new(value)
                .map_err(|err| errors.add("title", field_message(err)))
                .ok(),
            None => {
                errors.add("title", REQUIRED_FIELD);
                None
            }
        };

        let text = match required(&self.text) {
            Some(value) => NoteText::new(value)
                .map_err(|err| errors.add("text", field_message(err)))
                .ok(),
            None => {
                errors.add("text", REQUIRED_FIELD);
                None
            }
        };

        let slug = required(&self.slug).map(str::to_string);

        match (title, text) {
            (Some(title), Some(text)) => errors.into_result(CleanedNoteForm { title, text, slug }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanedNoteForm {
    pub title: NoteTitle,
    pub text: NoteText,
    pub slug: Option<String>,
}

fn required(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Message shown next to a field for a domain validation failure.
pub fn field_message(err: DomainError) -> String {
    match err {
        DomainError::Validation(message) => message,
        other => other.to_string(),
    }
}
