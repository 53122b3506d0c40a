// tests/support/mocks/memory.rs
//! In-memory store that mirrors the constraints of the Postgres schema:
//! unique slugs and category names, `ON DELETE SET NULL` for a product's
//! category and `ON DELETE CASCADE` for enquiries.
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use craftstore::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategorySummary, CategoryUpdate,
    CategoryWithCount, NewCategory,
};
use craftstore::domain::enquiry::{
    Enquiry, EnquiryId, EnquiryPatch, EnquiryProductSummary, EnquiryRepository, EnquiryStatus,
    NewEnquiry,
};
use craftstore::domain::errors::{DomainError, DomainResult};
use craftstore::domain::product::{
    NewProduct, Product, ProductFilter, ProductId, ProductReadRepository, ProductUpdate,
    ProductWriteRepository,
};
use craftstore::domain::slug::Slug;

#[derive(Default)]
struct State {
    categories: Vec<Category>,
    products: Vec<Product>,
    enquiries: Vec<Enquiry>,
    next_category_id: i64,
    next_product_id: i64,
    next_enquiry_id: i64,
}

impl State {
    fn category_summary(&self, id: Option<CategoryId>) -> Option<CategorySummary> {
        let id = id?;
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(Category::summary)
    }

    fn hydrate_product(&self, mut product: Product) -> Product {
        product.category = self.category_summary(product.category_id);
        product
    }

    fn hydrate_enquiry(&self, mut enquiry: Enquiry) -> Enquiry {
        enquiry.product = self
            .products
            .iter()
            .find(|p| p.id == enquiry.product_id)
            .map(|p| EnquiryProductSummary {
                id: p.id,
                name: p.name.as_str().to_string(),
                slug: p.slug.as_str().to_string(),
                price: p.price.get(),
                offer_price: p.offer_price.map(|v| v.get()),
            });
        enquiry
    }

    fn ensure_category(&self, id: Option<CategoryId>) -> DomainResult<()> {
        match id {
            Some(id) if !self.categories.iter().any(|c| c.id == id) => {
                Err(DomainError::NotFound("category not found".into()))
            }
            _ => Ok(()),
        }
    }

    fn product_slug_taken(&self, slug: &Slug, owner: Option<ProductId>) -> bool {
        self.products
            .iter()
            .any(|p| &p.slug == slug && Some(p.id) != owner)
    }

    fn category_slug_taken(&self, slug: &Slug, owner: Option<CategoryId>) -> bool {
        self.categories
            .iter()
            .any(|c| &c.slug == slug && Some(c.id) != owner)
    }

    fn category_name_taken(&self, name: &CategoryName, owner: Option<CategoryId>) -> bool {
        self.categories
            .iter()
            .any(|c| &c.name == name && Some(c.id) != owner)
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("memory store poisoned")
    }

    pub fn products(&self) -> Vec<Product> {
        let state = self.lock();
        state
            .products
            .iter()
            .cloned()
            .map(|p| state.hydrate_product(p))
            .collect()
    }

    pub fn enquiry_count(&self) -> usize {
        self.lock().enquiries.len()
    }
}

#[async_trait]
impl ProductWriteRepository for MemoryStore {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let mut state = self.lock();
        state.ensure_category(product.category_id)?;
        if state.product_slug_taken(&product.slug, None) {
            return Err(DomainError::SlugTaken("products_slug_key".into()));
        }
        state.next_product_id += 1;
        let created = Product {
            id: ProductId(state.next_product_id),
            name: product.name,
            slug: product.slug,
            description: product.description,
            price: product.price,
            offer_price: product.offer_price,
            images: product.images,
            video_url: product.video_url,
            category_id: product.category_id,
            category: None,
            created_at: product.created_at,
            updated_at: product.updated_at,
        };
        state.products.push(created.clone());
        Ok(state.hydrate_product(created))
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let mut state = self.lock();
        state.ensure_category(update.category_id)?;
        if state.product_slug_taken(&update.slug, Some(update.id)) {
            return Err(DomainError::SlugTaken("products_slug_key".into()));
        }
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;
        product.name = update.name;
        product.slug = update.slug;
        product.description = update.description;
        product.price = update.price;
        product.offer_price = update.offer_price;
        product.images = update.images;
        product.video_url = update.video_url;
        product.category_id = update.category_id;
        product.updated_at = update.updated_at;
        let updated = product.clone();
        Ok(state.hydrate_product(updated))
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut state = self.lock();
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Err(DomainError::NotFound("product not found".into()));
        }
        state.enquiries.retain(|e| e.product_id != id);
        Ok(())
    }
}

#[async_trait]
impl ProductReadRepository for MemoryStore {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let state = self.lock();
        Ok(state
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .map(|p| state.hydrate_product(p)))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let state = self.lock();
        Ok(state
            .products
            .iter()
            .find(|p| &p.slug == slug)
            .cloned()
            .map(|p| state.hydrate_product(p)))
    }

    async fn list(&self, filter: ProductFilter) -> DomainResult<Vec<Product>> {
        let state = self.lock();
        let mut products: Vec<Product> = state
            .products
            .iter()
            .filter(|p| filter.category_id.is_none() || p.category_id == filter.category_id)
            .cloned()
            .map(|p| state.hydrate_product(p))
            .collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(products)
    }

    async fn list_slugs(&self, exclude: Option<ProductId>) -> DomainResult<HashSet<String>> {
        let state = self.lock();
        Ok(state
            .products
            .iter()
            .filter(|p| Some(p.id) != exclude)
            .map(|p| p.slug.as_str().to_string())
            .collect())
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.lock();
        if state.category_name_taken(&category.name, None) {
            return Err(DomainError::Validation(
                "Category with this name already exists".into(),
            ));
        }
        if state.category_slug_taken(&category.slug, None) {
            return Err(DomainError::SlugTaken("categories_slug_key".into()));
        }
        state.next_category_id += 1;
        let created = Category {
            id: CategoryId(state.next_category_id),
            name: category.name,
            slug: category.slug,
            description: category.description,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        state.categories.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut state = self.lock();
        if state.category_name_taken(&update.name, Some(update.id)) {
            return Err(DomainError::Validation(
                "Category with this name already exists".into(),
            ));
        }
        if state.category_slug_taken(&update.slug, Some(update.id)) {
            return Err(DomainError::SlugTaken("categories_slug_key".into()));
        }
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        category.name = update.name;
        category.slug = update.slug;
        category.description = update.description;
        category.updated_at = update.updated_at;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut state = self.lock();
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        if state.categories.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        for product in state.products.iter_mut() {
            if product.category_id == Some(id) {
                product.category_id = None;
            }
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.lock().categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self
            .lock()
            .categories
            .iter()
            .find(|c| &c.slug == slug)
            .cloned())
    }

    async fn find_by_name(
        &self,
        name: &CategoryName,
        exclude: Option<CategoryId>,
    ) -> DomainResult<Option<Category>> {
        Ok(self
            .lock()
            .categories
            .iter()
            .find(|c| &c.name == name && Some(c.id) != exclude)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories = self.lock().categories.clone();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }

    async fn list_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>> {
        let state = self.lock();
        let mut counted: Vec<CategoryWithCount> = state
            .categories
            .iter()
            .map(|c| CategoryWithCount {
                category: c.clone(),
                product_count: state
                    .products
                    .iter()
                    .filter(|p| p.category_id == Some(c.id))
                    .count() as i64,
            })
            .collect();
        counted.sort_by(|a, b| a.category.name.as_str().cmp(b.category.name.as_str()));
        Ok(counted)
    }

    async fn list_slugs(&self, exclude: Option<CategoryId>) -> DomainResult<HashSet<String>> {
        Ok(self
            .lock()
            .categories
            .iter()
            .filter(|c| Some(c.id) != exclude)
            .map(|c| c.slug.as_str().to_string())
            .collect())
    }
}

#[async_trait]
impl EnquiryRepository for MemoryStore {
    async fn insert(&self, enquiry: NewEnquiry) -> DomainResult<Enquiry> {
        let mut state = self.lock();
        if !state.products.iter().any(|p| p.id == enquiry.product_id) {
            return Err(DomainError::NotFound("product not found".into()));
        }
        state.next_enquiry_id += 1;
        let created = Enquiry {
            id: EnquiryId(state.next_enquiry_id),
            product_id: enquiry.product_id,
            status: EnquiryStatus::Pending,
            description: enquiry.description,
            customer_name: enquiry.customer_name,
            customer_phone: enquiry.customer_phone,
            customer_email: enquiry.customer_email,
            notes: None,
            product: None,
            created_at: enquiry.created_at,
            updated_at: enquiry.created_at,
        };
        state.enquiries.push(created.clone());
        Ok(state.hydrate_enquiry(created))
    }

    async fn update(&self, patch: EnquiryPatch) -> DomainResult<Enquiry> {
        let mut state = self.lock();
        let enquiry = state
            .enquiries
            .iter_mut()
            .find(|e| e.id == patch.id)
            .ok_or_else(|| DomainError::NotFound("enquiry not found".into()))?;
        enquiry.apply(patch);
        let updated = enquiry.clone();
        Ok(state.hydrate_enquiry(updated))
    }

    async fn delete(&self, id: EnquiryId) -> DomainResult<()> {
        let mut state = self.lock();
        let before = state.enquiries.len();
        state.enquiries.retain(|e| e.id != id);
        if state.enquiries.len() == before {
            return Err(DomainError::NotFound("enquiry not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: EnquiryId) -> DomainResult<Option<Enquiry>> {
        let state = self.lock();
        Ok(state
            .enquiries
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .map(|e| state.hydrate_enquiry(e)))
    }

    async fn list(&self, product_id: Option<ProductId>) -> DomainResult<Vec<Enquiry>> {
        let state = self.lock();
        let mut enquiries: Vec<Enquiry> = state
            .enquiries
            .iter()
            .filter(|e| product_id.is_none() || Some(e.product_id) == product_id)
            .cloned()
            .map(|e| state.hydrate_enquiry(e))
            .collect();
        enquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(enquiries)
    }
}
