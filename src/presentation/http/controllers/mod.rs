// src/presentation/http/controllers/mod.rs
pub mod catalog;
pub mod categories;
pub mod enquiries;
pub mod products;

use crate::presentation::http::openapi::StatusResponse;
use axum::Json;

pub(crate) fn deleted() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "deleted".into(),
    })
}
