// src/application/ports/util.rs

/// Turns free text into a URL-safe slug: non-ASCII letters transliterated,
/// lowercased, separator runs collapsed to a single `-`, no leading or
/// trailing separators.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
