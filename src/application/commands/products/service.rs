// src/application/commands/products/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        category::{CategoryId, CategoryRepository},
        product::{ProductReadRepository, ProductWriteRepository},
        slug::SlugService,
        validation::InputValidator,
    },
};

/// Slug selections attempted before a unique-constraint race is reported
/// as a conflict.
pub const MAX_SLUG_ATTEMPTS: usize = 3;

pub struct ProductCommandService {
    pub(super) write_repo: Arc<dyn ProductWriteRepository>,
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) validator: Arc<InputValidator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProductCommandService {
    pub fn new(
        write_repo: Arc<dyn ProductWriteRepository>,
        read_repo: Arc<dyn ProductReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<SlugService>,
        validator: Arc<InputValidator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_service,
            validator,
            clock,
        }
    }

    pub(super) async fn ensure_category_exists(
        &self,
        category_id: Option<CategoryId>,
    ) -> ApplicationResult<()> {
        let Some(id) = category_id else {
            return Ok(());
        };
        match self.category_repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::not_found("category not found")),
        }
    }
}
