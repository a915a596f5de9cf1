use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Transliterates to ASCII before slugifying, so Bangla titles keep a
/// readable slug.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, title: &str) -> String {
        slugify(title)
    }
}
