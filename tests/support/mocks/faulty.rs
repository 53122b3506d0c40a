// tests/support/mocks/faulty.rs
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use craftstore::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategoryUpdate, CategoryWithCount,
    NewCategory,
};
use craftstore::domain::enquiry::{Enquiry, EnquiryId, EnquiryPatch, EnquiryRepository, NewEnquiry};
use craftstore::domain::errors::{DomainError, DomainResult};
use craftstore::domain::product::{
    NewProduct, Product, ProductFilter, ProductId, ProductName, ProductReadRepository,
    ProductUpdate, ProductWriteRepository,
};
use craftstore::domain::slug::Slug;

use super::memory::MemoryStore;

/// Detail that must never reach a response body.
pub const STORE_FAILURE_DETAIL: &str = "connection reset by peer (10.0.0.7:5432)";

fn fail<T>() -> DomainResult<T> {
    Err(DomainError::Persistence(STORE_FAILURE_DETAIL.into()))
}

/// Every call fails as if the database were unreachable.
#[derive(Clone, Default)]
pub struct FailingStore;

#[async_trait]
impl ProductWriteRepository for FailingStore {
    async fn insert(&self, _product: NewProduct) -> DomainResult<Product> {
        fail()
    }
    async fn update(&self, _update: ProductUpdate) -> DomainResult<Product> {
        fail()
    }
    async fn delete(&self, _id: ProductId) -> DomainResult<()> {
        fail()
    }
}

#[async_trait]
impl ProductReadRepository for FailingStore {
    async fn find_by_id(&self, _id: ProductId) -> DomainResult<Option<Product>> {
        fail()
    }
    async fn find_by_slug(&self, _slug: &Slug) -> DomainResult<Option<Product>> {
        fail()
    }
    async fn list(&self, _filter: ProductFilter) -> DomainResult<Vec<Product>> {
        fail()
    }
    async fn list_slugs(&self, _exclude: Option<ProductId>) -> DomainResult<HashSet<String>> {
        fail()
    }
}

#[async_trait]
impl CategoryRepository for FailingStore {
    async fn insert(&self, _category: NewCategory) -> DomainResult<Category> {
        fail()
    }
    async fn update(&self, _update: CategoryUpdate) -> DomainResult<Category> {
        fail()
    }
    async fn delete(&self, _id: CategoryId) -> DomainResult<()> {
        fail()
    }
    async fn find_by_id(&self, _id: CategoryId) -> DomainResult<Option<Category>> {
        fail()
    }
    async fn find_by_slug(&self, _slug: &Slug) -> DomainResult<Option<Category>> {
        fail()
    }
    async fn find_by_name(
        &self,
        _name: &CategoryName,
        _exclude: Option<CategoryId>,
    ) -> DomainResult<Option<Category>> {
        fail()
    }
    async fn list(&self) -> DomainResult<Vec<Category>> {
        fail()
    }
    async fn list_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>> {
        fail()
    }
    async fn list_slugs(&self, _exclude: Option<CategoryId>) -> DomainResult<HashSet<String>> {
        fail()
    }
}

#[async_trait]
impl EnquiryRepository for FailingStore {
    async fn insert(&self, _enquiry: NewEnquiry) -> DomainResult<Enquiry> {
        fail()
    }
    async fn update(&self, _patch: EnquiryPatch) -> DomainResult<Enquiry> {
        fail()
    }
    async fn delete(&self, _id: EnquiryId) -> DomainResult<()> {
        fail()
    }
    async fn find_by_id(&self, _id: EnquiryId) -> DomainResult<Option<Enquiry>> {
        fail()
    }
    async fn list(&self, _product_id: Option<ProductId>) -> DomainResult<Vec<Enquiry>> {
        fail()
    }
}

/// Simulates a concurrent writer: for the first `races` inserts, a rival
/// product claims the chosen slug just before our insert lands.
pub struct RacingProductWrite {
    inner: MemoryStore,
    races_left: AtomicUsize,
}

impl RacingProductWrite {
    pub fn new(inner: MemoryStore, races: usize) -> Self {
        Self {
            inner,
            races_left: AtomicUsize::new(races),
        }
    }
}

#[async_trait]
impl ProductWriteRepository for RacingProductWrite {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let raced = self
            .races_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if raced {
            let mut rival = product.clone();
            rival.name = ProductName::new("Rival listing")?;
            ProductWriteRepository::insert(&self.inner, rival).await?;
        }
        ProductWriteRepository::insert(&self.inner, product).await
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        ProductWriteRepository::update(&self.inner, update).await
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        ProductWriteRepository::delete(&self.inner, id).await
    }
}
