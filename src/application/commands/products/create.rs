// src/application/commands/products/create.rs
use super::{MAX_SLUG_ATTEMPTS, ProductCommandService};
use crate::{
    application::{
        dto::ProductDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        product::{NewProduct, ProductDraft},
        slug::SlugCollection,
        validation::ProductInput,
    },
};

pub struct CreateProductCommand {
    pub input: ProductInput,
}

impl ProductCommandService {
    pub async fn create_product(
        &self,
        command: CreateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        self.validator.validate_product(&command.input)?;
        let draft = ProductDraft::from_input(command.input)?;
        self.ensure_category_exists(draft.category_id).await?;

        let candidate = self.slug_service.candidate(
            SlugCollection::Products,
            draft.requested_slug.as_deref(),
            draft.name.as_str(),
        );

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let existing = self.read_repo.list_slugs(None).await?;
            let slug = self.slug_service.unique_slug(&candidate, &existing)?;
            let now = self.clock.now();
            let new_product = NewProduct::from_draft(draft.clone(), slug, now);

            match self.write_repo.insert(new_product).await {
                Ok(created) => {
                    tracing::info!(product_id = %created.id, slug = %created.slug, "product created");
                    return Ok(created.into());
                }
                Err(DomainError::SlugTaken(slug)) => {
                    tracing::warn!(%slug, attempt, "product slug claimed concurrently, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ApplicationError::conflict(format!(
            "could not allocate a unique slug for '{candidate}'"
        )))
    }
}
