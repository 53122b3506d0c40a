// src/application/ports/util.rs

/// Turns free text into a slug candidate. Returns an empty string when the
/// input has nothing URL-safe left.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
