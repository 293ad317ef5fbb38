use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Transliterating slug generator backed by the `slug` crate.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
