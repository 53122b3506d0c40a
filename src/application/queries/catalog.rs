// src/application/queries/catalog.rs
//! Read side of the public storefront.
use std::sync::Arc;

use crate::{
    application::{
        dto::{CatalogProductDto, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryRepository,
        product::{ProductFilter, ProductReadRepository, services::EnquiryLinkBuilder},
        slug::Slug,
    },
};

#[derive(Debug, Default)]
pub struct CatalogQuery {
    /// Category slug; `None` lists every product.
    pub category: Option<String>,
}

pub struct CatalogQueryService {
    product_repo: Arc<dyn ProductReadRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    links: EnquiryLinkBuilder,
}

impl CatalogQueryService {
    pub fn new(
        product_repo: Arc<dyn ProductReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        links: EnquiryLinkBuilder,
    ) -> Self {
        Self {
            product_repo,
            category_repo,
            links,
        }
    }

    pub async fn list_catalog(&self, query: CatalogQuery) -> ApplicationResult<Vec<ProductDto>> {
        let category = query
            .category
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let filter = match category {
            Some(slug) => {
                let category = self
                    .category_repo
                    .find_by_slug(&parse_slug(slug, "category not found")?)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("category not found"))?;
                ProductFilter::in_category(category.id)
            }
            None => ProductFilter::default(),
        };

        let products = self.product_repo.list(filter).await?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_slug(&self, slug: String) -> ApplicationResult<CatalogProductDto> {
        let slug = parse_slug(slug, "product not found")?;
        let product = self
            .product_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let display_price = product.display_price().get();
        let primary_image = product.primary_image().to_string();
        let enquiry_url = self.links.url(&product);

        Ok(CatalogProductDto {
            product: product.into(),
            display_price,
            primary_image,
            enquiry_url,
        })
    }
}

/// A malformed slug can never match a stored record.
fn parse_slug(value: String, missing: &str) -> ApplicationResult<Slug> {
    Slug::new(value).map_err(|_| ApplicationError::not_found(missing))
}
