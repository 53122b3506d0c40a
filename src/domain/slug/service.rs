// src/domain/slug/service.rs
use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use super::{Slug, generate_unique_slug};
use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;

const FALLBACK_TOKEN_LEN: usize = 8;

/// Collections that own an independent slug namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugCollection {
    Products,
    Categories,
}

impl SlugCollection {
    fn fallback_prefix(self) -> &'static str {
        match self {
            Self::Products => "product",
            Self::Categories => "category",
        }
    }
}

/// Domain service producing unique slugs for catalog records.
///
/// The caller supplies the snapshot of slugs already present in the
/// collection; uniqueness under concurrent writers is enforced by the store.
pub struct SlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Derive the candidate slug: an explicitly requested slug wins over the
    /// display name; both are normalised through the generator. Falls back
    /// to a random token when nothing URL-safe remains.
    pub fn candidate(
        &self,
        collection: SlugCollection,
        requested: Option<&str>,
        name: &str,
    ) -> String {
        let source = requested
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(name);

        let base = self.generator.slugify(source);
        if base.is_empty() {
            let token = Uuid::new_v4().simple().to_string();
            let token = &token[..FALLBACK_TOKEN_LEN];
            tracing::debug!(source, "derived slug was empty, using random fallback");
            format!("{}-{token}", collection.fallback_prefix())
        } else {
            base
        }
    }

    pub fn unique_slug(&self, candidate: &str, existing: &HashSet<String>) -> DomainResult<Slug> {
        Slug::new(generate_unique_slug(candidate, existing))
    }
}
