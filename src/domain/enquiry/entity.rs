// src/domain/enquiry/entity.rs
use crate::domain::enquiry::value_objects::{ContactField, EnquiryId, EnquiryStatus};
use crate::domain::product::ProductId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Enquiry {
    pub id: EnquiryId,
    pub product_id: ProductId,
    pub status: EnquiryStatus,
    pub description: Option<ContactField>,
    pub customer_name: Option<ContactField>,
    pub customer_phone: Option<ContactField>,
    pub customer_email: Option<ContactField>,
    pub notes: Option<ContactField>,
    pub product: Option<EnquiryProductSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnquiryProductSummary {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub price: f64,
    pub offer_price: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct NewEnquiry {
    pub product_id: ProductId,
    pub description: Option<ContactField>,
    pub customer_name: Option<ContactField>,
    pub customer_phone: Option<ContactField>,
    pub customer_email: Option<ContactField>,
    pub created_at: DateTime<Utc>,
}

/// Partial update; `None` leaves the stored value untouched, `Some(None)`
/// clears it.
#[derive(Debug, Clone)]
pub struct EnquiryPatch {
    pub id: EnquiryId,
    pub status: Option<EnquiryStatus>,
    pub description: Option<Option<ContactField>>,
    pub notes: Option<Option<ContactField>>,
    pub customer_name: Option<Option<ContactField>>,
    pub customer_phone: Option<Option<ContactField>>,
    pub customer_email: Option<Option<ContactField>>,
    pub updated_at: DateTime<Utc>,
}

impl EnquiryPatch {
    pub fn new(id: EnquiryId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            status: None,
            description: None,
            notes: None,
            customer_name: None,
            customer_phone: None,
            customer_email: None,
            updated_at,
        }
    }

    pub fn with_status(mut self, status: EnquiryStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.description.is_none()
            && self.notes.is_none()
            && self.customer_name.is_none()
            && self.customer_phone.is_none()
            && self.customer_email.is_none()
    }
}

impl Enquiry {
    /// Apply a patch in memory; mirrors what the store does on update.
    pub fn apply(&mut self, patch: EnquiryPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(value) = patch.description {
            self.description = value;
        }
        if let Some(value) = patch.notes {
            self.notes = value;
        }
        if let Some(value) = patch.customer_name {
            self.customer_name = value;
        }
        if let Some(value) = patch.customer_phone {
            self.customer_phone = value;
        }
        if let Some(value) = patch.customer_email {
            self.customer_email = value;
        }
        self.updated_at = patch.updated_at;
    }
}
