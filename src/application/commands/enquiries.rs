// src/application/commands/enquiries.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::EnquiryDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        enquiry::{
            ContactField, EnquiryId, EnquiryPatch, EnquiryRepository, EnquiryStatus, NewEnquiry,
        },
        product::{ProductId, ProductReadRepository},
    },
};

/// Submitted by a shopper from the product page.
#[derive(Debug, Default)]
pub struct CreateEnquiryCommand {
    pub product_id: Option<i64>,
    pub description: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
}

/// Admin edit. Outer `None` leaves a field alone; `Some(None)` or a blank
/// string clears it.
#[derive(Debug, Default)]
pub struct UpdateEnquiryCommand {
    pub id: i64,
    pub status: Option<String>,
    pub description: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub customer_name: Option<Option<String>>,
    pub customer_phone: Option<Option<String>>,
    pub customer_email: Option<Option<String>>,
}

pub struct DeleteEnquiryCommand {
    pub id: i64,
}

pub struct EnquiryCommandService {
    repo: Arc<dyn EnquiryRepository>,
    product_repo: Arc<dyn ProductReadRepository>,
    clock: Arc<dyn Clock>,
}

impl EnquiryCommandService {
    pub fn new(
        repo: Arc<dyn EnquiryRepository>,
        product_repo: Arc<dyn ProductReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            product_repo,
            clock,
        }
    }

    pub async fn create_enquiry(
        &self,
        command: CreateEnquiryCommand,
    ) -> ApplicationResult<EnquiryDto> {
        let product_id = command
            .product_id
            .ok_or_else(|| ApplicationError::validation("Product ID is required"))?;
        let product_id = ProductId::new(product_id)?;
        self.product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let enquiry = NewEnquiry {
            product_id,
            description: ContactField::parse(command.description),
            customer_name: ContactField::parse(command.customer_name),
            customer_phone: ContactField::parse(command.customer_phone),
            customer_email: ContactField::parse(command.customer_email),
            created_at: self.clock.now(),
        };

        let created = self.repo.insert(enquiry).await?;
        tracing::info!(enquiry_id = created.id.0, product_id = %created.product_id, "enquiry received");
        Ok(created.into())
    }

    pub async fn update_enquiry(
        &self,
        command: UpdateEnquiryCommand,
    ) -> ApplicationResult<EnquiryDto> {
        let id = EnquiryId::new(command.id)?;
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("enquiry not found"))?;

        let mut patch = EnquiryPatch::new(id, self.clock.now());
        if let Some(status) = command.status {
            patch = patch.with_status(status.parse::<EnquiryStatus>()?);
        }
        patch.description = command.description.map(ContactField::parse);
        patch.notes = command.notes.map(ContactField::parse);
        patch.customer_name = command.customer_name.map(ContactField::parse);
        patch.customer_phone = command.customer_phone.map(ContactField::parse);
        patch.customer_email = command.customer_email.map(ContactField::parse);

        if patch.is_empty() {
            return Ok(current.into());
        }

        let updated = self.repo.update(patch).await?;
        tracing::info!(enquiry_id = updated.id.0, status = %updated.status, "enquiry updated");
        Ok(updated.into())
    }

    pub async fn delete_enquiry(&self, command: DeleteEnquiryCommand) -> ApplicationResult<()> {
        let id = EnquiryId::new(command.id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("enquiry not found"))?;

        self.repo.delete(id).await?;
        tracing::info!(enquiry_id = id.0, "enquiry deleted");
        Ok(())
    }
}
