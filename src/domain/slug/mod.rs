// src/domain/slug/mod.rs
mod generator;
pub mod service;

pub use generator::{generate_slug, generate_unique_slug, is_valid_slug};
pub use service::{SlugCollection, SlugService};

use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// URL-safe identifier, unique within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_valid_slug(&value) {
            return Err(DomainError::Validation(format!(
                "slug '{value}' may only contain lowercase letters, digits and single hyphens"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
