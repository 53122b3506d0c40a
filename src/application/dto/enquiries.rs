use crate::domain::enquiry::{ContactField, Enquiry, EnquiryProductSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnquiryProductDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub price: f64,
    #[serde(default)]
    pub offer_price: Option<f64>,
}

impl From<EnquiryProductSummary> for EnquiryProductDto {
    fn from(summary: EnquiryProductSummary) -> Self {
        Self {
            id: summary.id.into(),
            name: summary.name,
            slug: summary.slug,
            price: summary.price,
            offer_price: summary.offer_price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnquiryDto {
    pub id: i64,
    pub product_id: i64,
    /// One of `pending`, `contacted`, `sale_done`, `sale_failed`, `cancelled`.
    pub status: String,
    pub description: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<EnquiryProductDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Enquiry> for EnquiryDto {
    fn from(enquiry: Enquiry) -> Self {
        let text = |field: Option<ContactField>| field.map(ContactField::into_inner);
        Self {
            id: enquiry.id.into(),
            product_id: enquiry.product_id.into(),
            status: enquiry.status.as_str().to_string(),
            description: text(enquiry.description),
            customer_name: text(enquiry.customer_name),
            customer_phone: text(enquiry.customer_phone),
            customer_email: text(enquiry.customer_email),
            notes: text(enquiry.notes),
            product: enquiry.product.map(Into::into),
            created_at: enquiry.created_at,
            updated_at: enquiry.updated_at,
        }
    }
}
