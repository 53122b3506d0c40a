// src/application/commands/products/delete.rs
use super::ProductCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::product::ProductId,
};

pub struct DeleteProductCommand {
    pub id: i64,
}

impl ProductCommandService {
    /// Enquiries referencing the product are removed with it.
    pub async fn delete_product(&self, command: DeleteProductCommand) -> ApplicationResult<()> {
        let id = ProductId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        self.write_repo.delete(id).await?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }
}
