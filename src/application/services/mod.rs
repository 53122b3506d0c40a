// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            categories::CategoryCommandService, enquiries::EnquiryCommandService,
            products::ProductCommandService,
        },
        dto::AdminUser,
        ports::{ClockPort, SlugGeneratorPort, TokenVerifierPort},
        queries::{
            catalog::CatalogQueryService, categories::CategoryQueryService,
            enquiries::EnquiryQueryService, products::ProductQueryService,
        },
    },
    domain::{
        category::CategoryRepository,
        enquiry::EnquiryRepository,
        product::{ProductReadRepository, ProductWriteRepository, services::EnquiryLinkBuilder},
        slug::SlugService,
        validation::InputValidator,
    },
};

/// Repositories and adapters the services are wired from.
pub struct ServiceDependencies {
    pub product_write_repo: Arc<dyn ProductWriteRepository>,
    pub product_read_repo: Arc<dyn ProductReadRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub enquiry_repo: Arc<dyn EnquiryRepository>,
    pub token_verifier: Arc<TokenVerifierPort>,
    pub clock: Arc<ClockPort>,
    pub slugger: Arc<SlugGeneratorPort>,
    pub validator: InputValidator,
    pub enquiry_links: EnquiryLinkBuilder,
}

pub struct ApplicationServices {
    pub product_commands: Arc<ProductCommandService>,
    pub product_queries: Arc<ProductQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub enquiry_commands: Arc<EnquiryCommandService>,
    pub enquiry_queries: Arc<EnquiryQueryService>,
    pub catalog: Arc<CatalogQueryService>,
    token_verifier: Arc<TokenVerifierPort>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            product_write_repo,
            product_read_repo,
            category_repo,
            enquiry_repo,
            token_verifier,
            clock,
            slugger,
            validator,
            enquiry_links,
        } = deps;

        let slug_service = Arc::new(SlugService::new(slugger));
        let validator = Arc::new(validator);

        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&product_write_repo),
            Arc::clone(&product_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&slug_service),
            Arc::clone(&validator),
            Arc::clone(&clock),
        ));
        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slug_service),
            Arc::clone(&validator),
            Arc::clone(&clock),
        ));
        let enquiry_commands = Arc::new(EnquiryCommandService::new(
            Arc::clone(&enquiry_repo),
            Arc::clone(&product_read_repo),
            Arc::clone(&clock),
        ));

        let product_queries = Arc::new(ProductQueryService::new(Arc::clone(&product_read_repo)));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));
        let enquiry_queries = Arc::new(EnquiryQueryService::new(Arc::clone(&enquiry_repo)));
        let catalog = Arc::new(CatalogQueryService::new(
            Arc::clone(&product_read_repo),
            Arc::clone(&category_repo),
            enquiry_links,
        ));

        Self {
            product_commands,
            product_queries,
            category_commands,
            category_queries,
            enquiry_commands,
            enquiry_queries,
            catalog,
            token_verifier,
        }
    }

    /// Resolve a raw bearer token to an admin identity.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AdminUser> {
        self.token_verifier.verify(token).await
    }
}
