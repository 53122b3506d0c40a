use crate::domain::enquiry::entity::{Enquiry, EnquiryPatch, NewEnquiry};
use crate::domain::enquiry::value_objects::EnquiryId;
use crate::domain::errors::DomainResult;
use crate::domain::product::ProductId;
use async_trait::async_trait;

#[async_trait]
pub trait EnquiryRepository: Send + Sync {
    /// New enquiries always start as `pending`. A missing product surfaces
    /// as `DomainError::NotFound`.
    async fn insert(&self, enquiry: NewEnquiry) -> DomainResult<Enquiry>;
    async fn update(&self, patch: EnquiryPatch) -> DomainResult<Enquiry>;
    async fn delete(&self, id: EnquiryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: EnquiryId) -> DomainResult<Option<Enquiry>>;
    /// Newest first, optionally restricted to one product.
    async fn list(&self, product_id: Option<ProductId>) -> DomainResult<Vec<Enquiry>>;
}
