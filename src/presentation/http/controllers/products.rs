// src/presentation/http/controllers/products.rs
use crate::application::{
    commands::products::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand},
    dto::ProductDto,
    queries::products::ListProductsQuery,
};
use crate::domain::validation::ProductInput;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// Price as sent by clients. Numbers pass through and numeric strings are
/// parsed. Blank strings and `null` count as absent. Any other value becomes
/// NaN so the price rules reject it.
fn amount(value: Option<Value>) -> Option<f64> {
    match value? {
        Value::Null => None,
        Value::Number(number) => Some(number.as_f64().unwrap_or(f64::NAN)),
        Value::String(raw) => {
            let raw = raw.trim();
            if raw.is_empty() {
                None
            } else {
                Some(raw.parse::<f64>().unwrap_or(f64::NAN))
            }
        }
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => Some(f64::NAN),
    }
}

/// Offer price: a falsy value (`0`, `false`, `""`, `null`) means "no offer".
fn offer_amount(value: Option<Value>) -> Option<f64> {
    match value? {
        Value::Bool(false) => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => amount(Some(other)),
    }
}

/// Anything that is not a list counts as an empty list, and entries that are
/// not strings count as blank. The image rules then report them in order.
fn image_list(value: Option<Value>) -> Option<Vec<String>> {
    match value? {
        Value::Null => None,
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(url) => url,
                    _ => String::new(),
                })
                .collect(),
        ),
        _ => Some(Vec::new()),
    }
}

/// Price and images are decoded loosely; a wrongly typed value surfaces
/// through the product rules in rule order.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Number or numeric string.
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Value>,
    /// Number or numeric string; `0` means no offer.
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub offer_price: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub images: Option<Value>,
    #[serde(default)]
    pub video_url: Option<String>,
    /// Requested slug; derived from the name when omitted.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl From<ProductRequest> for ProductInput {
    fn from(request: ProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: amount(request.price),
            offer_price: offer_amount(request.offer_price),
            images: image_list(request.images),
            video_url: request.video_url,
            slug: request.slug,
            category_id: request.category_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(flatten)]
    pub product: ProductRequest,
    /// Derive a fresh slug from the name instead of keeping the current one.
    #[serde(default)]
    pub regenerate_slug: bool,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    /// Only products filed under this category.
    #[serde(default)]
    pub category_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/products",
    params(ProductListParams),
    responses(
        (status = 200, description = "All products, newest first.", body = [ProductDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Products"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Query(params): Query<ProductListParams>,
) -> HttpResult<Json<Vec<ProductDto>>> {
    state
        .services
        .product_queries
        .list_products(ListProductsQuery {
            category_id: params.category_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/products/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product.", body = ProductDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Product not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Products"
)]
pub async fn get_product(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created.", body = ProductDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Referenced category not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "No unique slug could be allocated.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Products"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    JsonBody(payload): JsonBody<ProductRequest>,
) -> HttpResult<(StatusCode, Json<ProductDto>)> {
    tracing::debug!(admin = %admin.subject, "create product requested");
    let command = CreateProductCommand {
        input: payload.into(),
    };

    state
        .services
        .product_commands
        .create_product(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/products/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product replaced.", body = ProductDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Product or category not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "No unique slug could be allocated.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Products"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<UpdateProductRequest>,
) -> HttpResult<Json<ProductDto>> {
    let command = UpdateProductCommand {
        id,
        input: payload.product.into(),
        regenerate_slug: payload.regenerate_slug,
    };

    state
        .services
        .product_commands
        .update_product(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/products/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product deleted.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Product not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .product_commands
        .delete_product(DeleteProductCommand { id })
        .await
        .into_http()?;

    Ok(super::deleted())
}
