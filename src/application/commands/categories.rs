// src/application/commands/categories.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        category::{
            CategoryDescription, CategoryId, CategoryName, CategoryRepository, CategoryUpdate,
            NewCategory,
        },
        errors::DomainError,
        slug::{SlugCollection, SlugService},
        validation::{CategoryInput, InputValidator},
    },
};

use super::products::MAX_SLUG_ATTEMPTS;

pub struct CreateCategoryCommand {
    pub input: CategoryInput,
}

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub input: CategoryInput,
    pub regenerate_slug: bool,
}

pub struct DeleteCategoryCommand {
    pub id: i64,
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
    slug_service: Arc<SlugService>,
    validator: Arc<InputValidator>,
    clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<SlugService>,
        validator: Arc<InputValidator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            validator,
            clock,
        }
    }

    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let CategoryInput {
            name,
            description,
            slug,
        } = self.checked(command.input)?;
        let name = CategoryName::new(name.unwrap_or_default())?;
        self.ensure_name_available(&name, None).await?;
        let description = CategoryDescription::parse(description);

        let candidate =
            self.slug_service
                .candidate(SlugCollection::Categories, slug.as_deref(), name.as_str());

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let existing = self.repo.list_slugs(None).await?;
            let slug = self.slug_service.unique_slug(&candidate, &existing)?;
            let now = self.clock.now();
            let new_category = NewCategory {
                name: name.clone(),
                slug,
                description: description.clone(),
                created_at: now,
                updated_at: now,
            };

            match self.repo.insert(new_category).await {
                Ok(created) => {
                    tracing::info!(category_id = %created.id, slug = %created.slug, "category created");
                    return Ok(created.into());
                }
                Err(DomainError::SlugTaken(slug)) => {
                    tracing::warn!(%slug, attempt, "category slug claimed concurrently, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ApplicationError::conflict(format!(
            "could not allocate a unique slug for '{candidate}'"
        )))
    }

    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let CategoryInput {
            name,
            description,
            slug,
        } = self.checked(command.input)?;

        let id = CategoryId::new(command.id)?;
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        let name = CategoryName::new(name.unwrap_or_default())?;
        self.ensure_name_available(&name, Some(id)).await?;
        let description = CategoryDescription::parse(description);

        let requested = slug.filter(|s| !s.trim().is_empty());
        let candidate = if command.regenerate_slug || requested.is_some() {
            self.slug_service.candidate(
                SlugCollection::Categories,
                requested.as_deref(),
                name.as_str(),
            )
        } else {
            current.slug.as_str().to_string()
        };

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = if candidate == current.slug.as_str() {
                current.slug.clone()
            } else {
                let existing = self.repo.list_slugs(Some(id)).await?;
                self.slug_service.unique_slug(&candidate, &existing)?
            };
            let update = CategoryUpdate {
                id,
                name: name.clone(),
                slug,
                description: description.clone(),
                updated_at: self.clock.now(),
            };

            match self.repo.update(update).await {
                Ok(updated) => {
                    tracing::info!(category_id = %updated.id, slug = %updated.slug, "category updated");
                    return Ok(updated.into());
                }
                Err(DomainError::SlugTaken(slug)) => {
                    tracing::warn!(%slug, attempt, "category slug claimed concurrently, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ApplicationError::conflict(format!(
            "could not allocate a unique slug for '{candidate}'"
        )))
    }

    /// Products in the category become uncategorised.
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        self.repo.delete(id).await?;
        tracing::info!(category_id = %id, "category deleted");
        Ok(())
    }

    fn checked(&self, input: CategoryInput) -> ApplicationResult<CategoryInput> {
        self.validator.validate_category(&input)?;
        Ok(input)
    }

    async fn ensure_name_available(
        &self,
        name: &CategoryName,
        exclude: Option<CategoryId>,
    ) -> ApplicationResult<()> {
        if self.repo.find_by_name(name, exclude).await?.is_some() {
            return Err(ApplicationError::validation(
                "Category with this name already exists",
            ));
        }
        Ok(())
    }
}
