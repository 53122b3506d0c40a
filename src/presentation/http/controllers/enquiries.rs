// src/presentation/http/controllers/enquiries.rs
use crate::application::{
    commands::enquiries::{CreateEnquiryCommand, DeleteEnquiryCommand, UpdateEnquiryCommand},
    dto::EnquiryDto,
    queries::enquiries::ListEnquiriesQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer};
use utoipa::{IntoParams, ToSchema};

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateEnquiryRequest {
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
}

/// Fields left out are unchanged; `null` clears them.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEnquiryRequest {
    /// `pending`, `contacted`, `sale_done`, `sale_failed` or `cancelled`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub customer_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub customer_phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub customer_email: Option<Option<String>>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EnquiryListParams {
    #[serde(default)]
    pub product_id: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/api/v1/enquiries",
    request_body = CreateEnquiryRequest,
    responses(
        (status = 201, description = "Enquiry recorded as pending.", body = EnquiryDto),
        (status = 400, description = "Product ID missing.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Product not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Enquiries"
)]
pub async fn create_enquiry(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateEnquiryRequest>,
) -> HttpResult<(StatusCode, Json<EnquiryDto>)> {
    let command = CreateEnquiryCommand {
        product_id: payload.product_id,
        description: payload.description,
        customer_name: payload.customer_name,
        customer_phone: payload.customer_phone,
        customer_email: payload.customer_email,
    };

    state
        .services
        .enquiry_commands
        .create_enquiry(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/enquiries",
    params(EnquiryListParams),
    responses(
        (status = 200, description = "Enquiries, newest first.", body = [EnquiryDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Enquiries"
)]
pub async fn list_enquiries(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Query(params): Query<EnquiryListParams>,
) -> HttpResult<Json<Vec<EnquiryDto>>> {
    state
        .services
        .enquiry_queries
        .list_enquiries(ListEnquiriesQuery {
            product_id: params.product_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/enquiries/{id}",
    params(("id" = i64, Path, description = "Enquiry identifier")),
    responses(
        (status = 200, description = "Enquiry.", body = EnquiryDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Enquiry not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Enquiries"
)]
pub async fn get_enquiry(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<EnquiryDto>> {
    state
        .services
        .enquiry_queries
        .get_enquiry(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/admin/enquiries/{id}",
    params(("id" = i64, Path, description = "Enquiry identifier")),
    request_body = UpdateEnquiryRequest,
    responses(
        (status = 200, description = "Enquiry updated.", body = EnquiryDto),
        (status = 400, description = "Unknown status.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Enquiry not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Enquiries"
)]
pub async fn update_enquiry(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<UpdateEnquiryRequest>,
) -> HttpResult<Json<EnquiryDto>> {
    let command = UpdateEnquiryCommand {
        id,
        status: payload.status,
        description: payload.description,
        notes: payload.notes,
        customer_name: payload.customer_name,
        customer_phone: payload.customer_phone,
        customer_email: payload.customer_email,
    };

    state
        .services
        .enquiry_commands
        .update_enquiry(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/enquiries/{id}",
    params(("id" = i64, Path, description = "Enquiry identifier")),
    responses(
        (status = 200, description = "Enquiry deleted.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Enquiry not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Enquiries"
)]
pub async fn delete_enquiry(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .enquiry_commands
        .delete_enquiry(DeleteEnquiryCommand { id })
        .await
        .into_http()?;

    Ok(super::deleted())
}
