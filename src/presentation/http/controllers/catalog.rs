// src/presentation/http/controllers/catalog.rs
use crate::application::{
    dto::{CatalogProductDto, ProductDto},
    queries::catalog::CatalogQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogParams {
    /// Category slug to filter by.
    #[serde(default)]
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/catalog/products",
    params(CatalogParams),
    responses(
        (status = 200, description = "Catalog, newest first.", body = [ProductDto]),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Catalog"
)]
pub async fn list_catalog(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CatalogParams>,
) -> HttpResult<Json<Vec<ProductDto>>> {
    state
        .services
        .catalog
        .list_catalog(CatalogQuery {
            category: params.category,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/catalog/products/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product page with display price and WhatsApp link.", body = CatalogProductDto),
        (status = 404, description = "Product not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Catalog"
)]
pub async fn get_catalog_product(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CatalogProductDto>> {
    state
        .services
        .catalog
        .get_by_slug(slug)
        .await
        .into_http()
        .map(Json)
}
