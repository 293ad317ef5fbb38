// src/domain/note/services/mod.rs
use std::collections::HashSet;
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::note::value_objects::{MAX_SLUG_LENGTH, NoteSlug, NoteTitle};

/// Appended to a colliding slug to form the message shown next to the slug field.
pub const SLUG_WARNING: &str = " - such a slug already exists, please choose a unique value!";

/// Snapshot of slugs already taken by persisted notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingSlugs(HashSet<String>);

impl ExistingSlugs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.0.contains(slug)
    }

}

impl<S: Into<String>> FromIterator<S> for ExistingSlugs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Domain service turning a title and an optional user-supplied slug into the
/// slug a note is stored under.
pub struct NoteSlugResolver {
    generator: Arc<dyn SlugGenerator>,
}

impl NoteSlugResolver {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Picks the slug to check: the submitted one verbatim, or one derived
    /// from the title when nothing was submitted.
    pub fn candidate(&self, title: &NoteTitle, submitted: Option<&str>) -> DomainResult<NoteSlug> {
        match submitted.filter(|slug| !slug.is_empty()) {
            Some(slug) => NoteSlug::new(slug),
            None => self.derive(title),
        }
    }

    pub fn ensure_unique(candidate: NoteSlug, existing: &ExistingSlugs) -> DomainResult<NoteSlug> {
        if existing.contains(candidate.as_str()) {
            return Err(DomainError::DuplicateSlug {
                slug: candidate.into_inner(),
            });
        }
        Ok(candidate)
    }

    pub fn resolve(
        &self,
        title: &NoteTitle,
        submitted: Option<&str>,
        existing: &ExistingSlugs,
    ) -> DomainResult<NoteSlug> {
        let candidate = self.candidate(title, submitted)?;
        Self::ensure_unique(candidate, existing)
    }

    fn derive(&self, title: &NoteTitle) -> DomainResult<NoteSlug> {
        let mut derived = self.generator.slugify(title.as_str());
        if derived.len() > MAX_SLUG_LENGTH {
            // slugified output is ASCII, so byte truncation is char-safe
            derived.truncate(MAX_SLUG_LENGTH);
            let trimmed_len = derived.trim_end_matches('-').len();
            derived.truncate(trimmed_len);
        }

        if derived.is_empty() {
            return Err(DomainError::Validation(
                "cannot derive a slug from this title, please enter one".into(),
            ));
        }

        NoteSlug::new(derived)
    }
}
