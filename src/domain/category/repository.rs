use std::collections::HashSet;

use crate::domain::category::entity::{Category, CategoryUpdate, CategoryWithCount, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    /// Products in the category are left uncategorised.
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    /// Look up a category by exact name, ignoring `exclude`.
    async fn find_by_name(
        &self,
        name: &CategoryName,
        exclude: Option<CategoryId>,
    ) -> DomainResult<Option<Category>>;
    /// Ordered by name.
    async fn list(&self) -> DomainResult<Vec<Category>>;
    async fn list_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>>;
    /// Every persisted slug except the one owned by `exclude`.
    async fn list_slugs(&self, exclude: Option<CategoryId>) -> DomainResult<HashSet<String>>;
}
