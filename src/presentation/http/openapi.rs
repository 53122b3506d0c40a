// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::catalog::list_catalog,
        crate::presentation::http::controllers::catalog::get_catalog_product,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::get_category,
        crate::presentation::http::controllers::categories::list_admin_categories,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::products::list_products,
        crate::presentation::http::controllers::products::get_product,
        crate::presentation::http::controllers::products::create_product,
        crate::presentation::http::controllers::products::update_product,
        crate::presentation::http::controllers::products::delete_product,
        crate::presentation::http::controllers::enquiries::create_enquiry,
        crate::presentation::http::controllers::enquiries::list_enquiries,
        crate::presentation::http::controllers::enquiries::get_enquiry,
        crate::presentation::http::controllers::enquiries::update_enquiry,
        crate::presentation::http::controllers::enquiries::delete_enquiry
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::products::ProductRequest,
            crate::presentation::http::controllers::products::UpdateProductRequest,
            crate::presentation::http::controllers::categories::CategoryRequest,
            crate::presentation::http::controllers::categories::UpdateCategoryRequest,
            crate::presentation::http::controllers::enquiries::CreateEnquiryRequest,
            crate::presentation::http::controllers::enquiries::UpdateEnquiryRequest,
            crate::application::dto::ProductDto,
            crate::application::dto::CatalogProductDto,
            crate::application::dto::CategorySummaryDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::AdminCategoryDto,
            crate::application::dto::EnquiryDto,
            crate::application::dto::EnquiryProductDto
        )
    ),
    tags(
        (name = "Catalog", description = "Public storefront"),
        (name = "Categories", description = "Category listing and management"),
        (name = "Products", description = "Product management"),
        (name = "Enquiries", description = "Customer enquiries"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Craftstore API",
        description = "Handcrafted products storefront and admin back-office",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi))
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
