// src/domain/slug/generator.rs
//! Pure slug derivation and collision resolution.

use std::collections::HashSet;

/// First numeric suffix tried when the bare candidate is taken.
const FIRST_SUFFIX: u64 = 2;

/// Lowercase `name` and collapse every run of characters outside `[a-z0-9]`
/// into a single hyphen, trimming hyphens from both ends.
///
/// Input without any ASCII alphanumerics yields an empty string.
pub fn generate_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Return `candidate` unchanged when it is free, otherwise the first of
/// `candidate-2`, `candidate-3`, ... that is absent from `existing`.
pub fn generate_unique_slug(candidate: &str, existing: &HashSet<String>) -> String {
    if !existing.contains(candidate) {
        return candidate.to_string();
    }

    (FIRST_SUFFIX..)
        .map(|suffix| format!("{candidate}-{suffix}"))
        .find(|numbered| !existing.contains(numbered))
        .unwrap_or_else(|| candidate.to_string())
}

/// True when `value` is a well-formed slug: non-empty, `[a-z0-9]` runs
/// separated by single hyphens.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .split('-')
            .all(|segment| {
                !segment.is_empty()
                    && segment
                        .chars()
                        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
            })
}
