// src/application/commands/products/update.rs
use super::{MAX_SLUG_ATTEMPTS, ProductCommandService};
use crate::{
    application::{
        dto::ProductDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        product::{ProductDraft, ProductId, ProductUpdate},
        slug::SlugCollection,
        validation::ProductInput,
    },
};

/// Full replacement of a product. The body is validated before the product
/// is looked up. The stored slug is kept unless `regenerate_slug` is set or
/// the input carries a new slug.
pub struct UpdateProductCommand {
    pub id: i64,
    pub input: ProductInput,
    pub regenerate_slug: bool,
}

impl ProductCommandService {
    pub async fn update_product(
        &self,
        command: UpdateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        self.validator.validate_product(&command.input)?;
        let draft = ProductDraft::from_input(command.input)?;

        let id = ProductId::new(command.id)?;
        let current = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;
        self.ensure_category_exists(draft.category_id).await?;

        let wants_new_slug = command.regenerate_slug || draft.requested_slug.is_some();
        let candidate = if wants_new_slug {
            self.slug_service.candidate(
                SlugCollection::Products,
                draft.requested_slug.as_deref(),
                draft.name.as_str(),
            )
        } else {
            current.slug.as_str().to_string()
        };

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = if candidate == current.slug.as_str() {
                current.slug.clone()
            } else {
                let existing = self.read_repo.list_slugs(Some(id)).await?;
                self.slug_service.unique_slug(&candidate, &existing)?
            };
            let update = ProductUpdate::from_draft(id, draft.clone(), slug, self.clock.now());

            match self.write_repo.update(update).await {
                Ok(updated) => {
                    tracing::info!(product_id = %updated.id, slug = %updated.slug, "product updated");
                    return Ok(updated.into());
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
