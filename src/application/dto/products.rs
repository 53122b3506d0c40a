use crate::domain::category::CategorySummary;
use crate::domain::product::{ImageUrl, Product};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategorySummaryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<CategorySummary> for CategorySummaryDto {
    fn from(summary: CategorySummary) -> Self {
        Self {
            id: summary.id.into(),
            name: summary.name,
            slug: summary.slug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub offer_price: Option<f64>,
    pub images: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummaryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            name: product.name.into_inner(),
            slug: product.slug.into_inner(),
            description: product.description.into_inner(),
            price: product.price.get(),
            offer_price: product.offer_price.map(|p| p.get()),
            images: product.images.into_iter().map(ImageUrl::into_inner).collect(),
            video_url: product.video_url,
            category_id: product.category_id.map(Into::into),
            category: product.category.map(Into::into),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Public product page payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogProductDto {
    #[serde(flatten)]
    pub product: ProductDto,
    pub display_price: f64,
    pub primary_image: String,
    pub enquiry_url: String,
}
