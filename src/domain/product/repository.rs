use std::collections::HashSet;

use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::product::entity::{NewProduct, Product, ProductUpdate};
use crate::domain::product::value_objects::ProductId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter {
    pub category_id: Option<CategoryId>,
}

impl ProductFilter {
    pub fn in_category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
        }
    }
}

#[async_trait]
pub trait ProductWriteRepository: Send + Sync {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;
    async fn update(&self, update: ProductUpdate) -> DomainResult<Product>;
    async fn delete(&self, id: ProductId) -> DomainResult<()>;
}

#[async_trait]
pub trait ProductReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>>;
    /// Newest first.
    async fn list(&self, filter: ProductFilter) -> DomainResult<Vec<Product>>;
    /// Every persisted slug except the one owned by `exclude`.
    async fn list_slugs(&self, exclude: Option<ProductId>) -> DomainResult<HashSet<String>>;
}
