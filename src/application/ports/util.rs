// src/application/ports/util.rs

/// Turns an article title into the readable part of a slug. May return an
/// empty string for titles with nothing transliterable.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, title: &str) -> String;
}
