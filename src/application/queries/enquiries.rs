// src/application/queries/enquiries.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::EnquiryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        enquiry::{EnquiryId, EnquiryRepository},
        product::ProductId,
    },
};

#[derive(Debug, Default)]
pub struct ListEnquiriesQuery {
    pub product_id: Option<i64>,
}

pub struct EnquiryQueryService {
    repo: Arc<dyn EnquiryRepository>,
}

impl EnquiryQueryService {
    pub fn new(repo: Arc<dyn EnquiryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_enquiries(&self, query: ListEnquiriesQuery) -> ApplicationResult<Vec<EnquiryDto>> {
        let product_id = query.product_id.map(ProductId::new).transpose()?;
        let enquiries = self.repo.list(product_id).await?;
        Ok(enquiries.into_iter().map(Into::into).collect())
    }

    pub async fn get_enquiry(&self, id: i64) -> ApplicationResult<EnquiryDto> {
        let id = EnquiryId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("enquiry not found"))
    }
}
