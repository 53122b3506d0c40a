// src/domain/product/entity.rs
use crate::domain::category::{CategoryId, CategorySummary};
use crate::domain::errors::DomainResult;
use crate::domain::product::value_objects::{
    ImageUrl, Price, ProductDescription, ProductId, ProductName,
};
use crate::domain::slug::Slug;
use crate::domain::validation::ProductInput;
use chrono::{DateTime, Utc};

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x800?text=No+Image";

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub slug: Slug,
    pub description: ProductDescription,
    pub price: Price,
    pub offer_price: Option<Price>,
    pub images: Vec<ImageUrl>,
    pub video_url: Option<String>,
    pub category_id: Option<CategoryId>,
    pub category: Option<CategorySummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Offer price when one is set, otherwise the regular price.
    pub fn display_price(&self) -> Price {
        self.offer_price.unwrap_or(self.price)
    }

    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(ImageUrl::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Normalised product fields, built from input that already passed
/// [`InputValidator::validate_product`](crate::domain::validation::InputValidator::validate_product).
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: ProductName,
    pub description: ProductDescription,
    pub price: Price,
    pub offer_price: Option<Price>,
    pub images: Vec<ImageUrl>,
    pub video_url: Option<String>,
    pub category_id: Option<CategoryId>,
    pub requested_slug: Option<String>,
}

impl ProductDraft {
    pub fn from_input(input: ProductInput) -> DomainResult<Self> {
        let ProductInput {
            name,
            description,
            price,
            offer_price,
            images,
            video_url,
            slug,
            category_id,
        } = input;

        Ok(Self {
            name: ProductName::new(name.unwrap_or_default())?,
            description: ProductDescription::new(description.unwrap_or_default())?,
            price: Price::new(price.unwrap_or_default())?,
            offer_price: offer_price.map(Price::new).transpose()?,
            images: images
                .unwrap_or_default()
                .into_iter()
                .map(ImageUrl::new)
                .collect::<DomainResult<Vec<_>>>()?,
            video_url: video_url
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            category_id: category_id.map(CategoryId::new).transpose()?,
            requested_slug: slug
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub slug: Slug,
    pub description: ProductDescription,
    pub price: Price,
    pub offer_price: Option<Price>,
    pub images: Vec<ImageUrl>,
    pub video_url: Option<String>,
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewProduct {
    pub fn from_draft(draft: ProductDraft, slug: Slug, now: DateTime<Utc>) -> Self {
        Self {
            name: draft.name,
            slug,
            description: draft.description,
            price: draft.price,
            offer_price: draft.offer_price,
            images: draft.images,
            video_url: draft.video_url,
            category_id: draft.category_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full replacement of a product's editable fields.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub name: ProductName,
    pub slug: Slug,
    pub description: ProductDescription,
    pub price: Price,
    pub offer_price: Option<Price>,
    pub images: Vec<ImageUrl>,
    pub video_url: Option<String>,
    pub category_id: Option<CategoryId>,
    pub updated_at: DateTime<Utc>,
}

impl ProductUpdate {
    pub fn from_draft(id: ProductId, draft: ProductDraft, slug: Slug, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            slug,
            description: draft.description,
            price: draft.price,
            offer_price: draft.offer_price,
            images: draft.images,
            video_url: draft.video_url,
            category_id: draft.category_id,
            updated_at: now,
        }
    }
}
