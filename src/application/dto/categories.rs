use crate::domain::category::{Category, CategoryWithCount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            description: category.description.map(|d| d.into_inner()),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminCategoryDto {
    #[serde(flatten)]
    pub category: CategoryDto,
    pub product_count: i64,
}

impl From<CategoryWithCount> for AdminCategoryDto {
    fn from(value: CategoryWithCount) -> Self {
        Self {
            category: value.category.into(),
            product_count: value.product_count,
        }
    }
}
