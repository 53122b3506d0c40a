// src/infrastructure/repositories/postgres_product.rs
use std::collections::HashSet;

use super::map_sqlx;
use crate::domain::category::{CategoryId, CategorySummary};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{
    ImageUrl, NewProduct, Price, Product, ProductDescription, ProductFilter, ProductId,
    ProductName, ProductReadRepository, ProductUpdate, ProductWriteRepository,
};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// Projection shared by every product query; expects the product aliased
/// as `p` and a `LEFT JOIN categories c`.
const PRODUCT_COLUMNS: &str = "p.id, p.name, p.slug, p.description, p.price, p.offer_price, \
     p.images, p.video_url, p.category_id, c.name AS category_name, c.slug AS category_slug, \
     p.created_at, p.updated_at";

#[derive(Clone)]
pub struct PostgresProductWriteRepository {
    pool: PgPool,
}

impl PostgresProductWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresProductReadRepository {
    pool: PgPool,
}

impl PostgresProductReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    slug: String,
    description: String,
    price: f64,
    offer_price: Option<f64>,
    images: Vec<String>,
    video_url: Option<String>,
    category_id: Option<i64>,
    category_name: Option<String>,
    category_slug: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category_id = row.category_id.map(CategoryId::new).transpose()?;
        let category = match (category_id, row.category_name, row.category_slug) {
            (Some(id), Some(name), Some(slug)) => Some(CategorySummary { id, name, slug }),
            _ => None,
        };

        Ok(Product {
            id: ProductId::new(row.id)?,
            name: ProductName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            description: ProductDescription::new(row.description)?,
            price: Price::new(row.price)?,
            offer_price: row.offer_price.map(Price::new).transpose()?,
            images: row
                .images
                .into_iter()
                .map(ImageUrl::new)
                .collect::<DomainResult<Vec<_>>>()?,
            video_url: row.video_url,
            category_id,
            category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn image_strings(images: Vec<ImageUrl>) -> Vec<String> {
    images.into_iter().map(ImageUrl::into_inner).collect()
}

#[async_trait]
impl ProductWriteRepository for PostgresProductWriteRepository {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let NewProduct {
            name,
            slug,
            description,
            price,
            offer_price,
            images,
            video_url,
            category_id,
            created_at,
            updated_at,
        } = product;

        let sql = format!(
            "WITH p AS (
                INSERT INTO products (name, slug, description, price, offer_price, images, video_url, category_id, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                RETURNING *
             )
             SELECT {PRODUCT_COLUMNS} FROM p LEFT JOIN categories c ON c.id = p.category_id"
        );

        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(name.as_str())
            .bind(slug.as_str())
            .bind(description.as_str())
            .bind(price.get())
            .bind(offer_price.map(Price::get))
            .bind(image_strings(images))
            .bind(video_url)
            .bind(category_id.map(i64::from))
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Product::try_from(row)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let ProductUpdate {
            id,
            name,
            slug,
            description,
            price,
            offer_price,
            images,
            video_url,
            category_id,
            updated_at,
        } = update;

        let sql = format!(
            "WITH p AS (
                UPDATE products
                SET name = $2, slug = $3, description = $4, price = $5, offer_price = $6,
                    images = $7, video_url = $8, category_id = $9, updated_at = $10
                WHERE id = $1
                RETURNING *
             )
             SELECT {PRODUCT_COLUMNS} FROM p LEFT JOIN categories c ON c.id = p.category_id"
        );

        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(i64::from(id))
            .bind(name.as_str())
            .bind(slug.as_str())
            .bind(description.as_str())
            .bind(price.get())
            .bind(offer_price.map(Price::get))
            .bind(image_strings(images))
            .bind(video_url)
            .bind(category_id.map(i64::from))
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;

        Product::try_from(row)
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("product not found".into()));
        }
        Ok(())
    }
}

impl PostgresProductReadRepository {
    fn select() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new(format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p LEFT JOIN categories c ON c.id = p.category_id"
        ))
    }

    async fn fetch_one_where(
        &self,
        mut builder: QueryBuilder<'_, Postgres>,
    ) -> DomainResult<Option<Product>> {
        builder
            .build_query_as::<ProductRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .map(Product::try_from)
            .transpose()
    }
}

#[async_trait]
impl ProductReadRepository for PostgresProductReadRepository {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let mut builder = Self::select();
        builder.push(" WHERE p.id = ").push_bind(i64::from(id));
        self.fetch_one_where(builder).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let mut builder = Self::select();
        builder
            .push(" WHERE p.slug = ")
            .push_bind(slug.as_str().to_string());
        self.fetch_one_where(builder).await
    }

    async fn list(&self, filter: ProductFilter) -> DomainResult<Vec<Product>> {
        let mut builder = Self::select();
        if let Some(category_id) = filter.category_id {
            builder
                .push(" WHERE p.category_id = ")
                .push_bind(i64::from(category_id));
        }
        builder.push(" ORDER BY p.created_at DESC, p.id DESC");

        let rows = builder
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn list_slugs(&self, exclude: Option<ProductId>) -> DomainResult<HashSet<String>> {
        let slugs: Vec<String> = match exclude {
            Some(id) => sqlx::query_scalar::<_, String>("SELECT slug FROM products WHERE id <> $1")
                .bind(i64::from(id))
                .fetch_all(&self.pool)
                .await,
            None => sqlx::query_scalar::<_, String>("SELECT slug FROM products")
                .fetch_all(&self.pool)
                .await,
        }
        .map_err(map_sqlx)?;

        Ok(slugs.into_iter().collect())
    }
}
