// src/application/ports/util.rs

/// Turns a human title into a URL-safe base slug. Output may be empty
/// when the input has no slugifiable characters.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
