// src/application/queries/products.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ProductDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryId,
        product::{ProductFilter, ProductId, ProductReadRepository},
    },
};

#[derive(Debug, Default)]
pub struct ListProductsQuery {
    pub category_id: Option<i64>,
}

pub struct ProductQueryService {
    read_repo: Arc<dyn ProductReadRepository>,
}

impl ProductQueryService {
    pub fn new(read_repo: Arc<dyn ProductReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_products(&self, query: ListProductsQuery) -> ApplicationResult<Vec<ProductDto>> {
        let filter = match query.category_id {
            Some(id) => ProductFilter::in_category(CategoryId::new(id)?),
            None => ProductFilter::default(),
        };
        let products = self.read_repo.list(filter).await?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    pub async fn get_product(&self, id: i64) -> ApplicationResult<ProductDto> {
        let id = ProductId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("product not found"))
    }
}
