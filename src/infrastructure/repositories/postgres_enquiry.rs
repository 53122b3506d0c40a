// src/infrastructure/repositories/postgres_enquiry.rs
use super::map_sqlx;
use crate::domain::enquiry::{
    ContactField, Enquiry, EnquiryId, EnquiryPatch, EnquiryProductSummary, EnquiryRepository,
    EnquiryStatus, NewEnquiry,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::ProductId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ENQUIRY_COLUMNS: &str = "e.id, e.product_id, e.status, e.description, e.customer_name, \
     e.customer_phone, e.customer_email, e.notes, e.created_at, e.updated_at, \
     p.name AS product_name, p.slug AS product_slug, p.price AS product_price, \
     p.offer_price AS product_offer_price";

#[derive(Clone)]
pub struct PostgresEnquiryRepository {
    pool: PgPool,
}

impl PostgresEnquiryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EnquiryRow {
    id: i64,
    product_id: i64,
    status: String,
    description: Option<String>,
    customer_name: Option<String>,
    customer_phone: Option<String>,
    customer_email: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    product_name: Option<String>,
    product_slug: Option<String>,
    product_price: Option<f64>,
    product_offer_price: Option<f64>,
}

impl TryFrom<EnquiryRow> for Enquiry {
    type Error = DomainError;

    fn try_from(row: EnquiryRow) -> Result<Self, Self::Error> {
        let product_id = ProductId::new(row.product_id)?;
        let product = match (row.product_name, row.product_slug, row.product_price) {
            (Some(name), Some(slug), Some(price)) => Some(EnquiryProductSummary {
                id: product_id,
                name,
                slug,
                price,
                offer_price: row.product_offer_price,
            }),
            _ => None,
        };

        Ok(Enquiry {
            id: EnquiryId::new(row.id)?,
            product_id,
            status: row.status.parse::<EnquiryStatus>()?,
            description: ContactField::parse(row.description),
            customer_name: ContactField::parse(row.customer_name),
            customer_phone: ContactField::parse(row.customer_phone),
            customer_email: ContactField::parse(row.customer_email),
            notes: ContactField::parse(row.notes),
            product,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn text(field: Option<ContactField>) -> Option<String> {
    field.map(ContactField::into_inner)
}

impl PostgresEnquiryRepository {
    /// Wrap a data-modifying statement aliased as `e` so the product summary
    /// comes back in the same round trip.
    fn joined(statement: &str) -> String {
        format!(
            "WITH e AS ({statement} RETURNING *)
             SELECT {ENQUIRY_COLUMNS} FROM e LEFT JOIN products p ON p.id = e.product_id"
        )
    }
}

#[async_trait]
impl EnquiryRepository for PostgresEnquiryRepository {
    async fn insert(&self, enquiry: NewEnquiry) -> DomainResult<Enquiry> {
        let sql = Self::joined(
            "INSERT INTO enquiries (product_id, status, description, customer_name, customer_phone, customer_email, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)",
        );
        let row = sqlx::query_as::<_, EnquiryRow>(&sql)
            .bind(i64::from(enquiry.product_id))
            .bind(EnquiryStatus::Pending.as_str())
            .bind(text(enquiry.description))
            .bind(text(enquiry.customer_name))
            .bind(text(enquiry.customer_phone))
            .bind(text(enquiry.customer_email))
            .bind(enquiry.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Enquiry::try_from(row)
    }

    async fn update(&self, patch: EnquiryPatch) -> DomainResult<Enquiry> {
        let EnquiryPatch {
            id,
            status,
            description,
            notes,
            customer_name,
            customer_phone,
            customer_email,
            updated_at,
        } = patch;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("WITH e AS (UPDATE enquiries SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(status) = status {
            builder.push(", status = ").push_bind(status.as_str());
        }
        for (column, value) in [
            ("description", description),
            ("notes", notes),
            ("customer_name", customer_name),
            ("customer_phone", customer_phone),
            ("customer_email", customer_email),
        ] {
            if let Some(value) = value {
                builder.push(format!(", {column} = ")).push_bind(text(value));
            }
        }

        builder.push(" WHERE id = ").push_bind(i64::from(id));
        builder.push(format!(
            " RETURNING *) SELECT {ENQUIRY_COLUMNS} FROM e LEFT JOIN products p ON p.id = e.product_id"
        ));

        let row = builder
            .build_query_as::<EnquiryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("enquiry not found".into()))?;

        Enquiry::try_from(row)
    }

    async fn delete(&self, id: EnquiryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM enquiries WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("enquiry not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: EnquiryId) -> DomainResult<Option<Enquiry>> {
        let sql = format!(
            "SELECT {ENQUIRY_COLUMNS} FROM enquiries e
             LEFT JOIN products p ON p.id = e.product_id
             WHERE e.id = $1"
        );
        sqlx::query_as::<_, EnquiryRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .map(Enquiry::try_from)
            .transpose()
    }

    async fn list(&self, product_id: Option<ProductId>) -> DomainResult<Vec<Enquiry>> {
        let sql = format!(
            "SELECT {ENQUIRY_COLUMNS} FROM enquiries e
             LEFT JOIN products p ON p.id = e.product_id
             WHERE ($1::BIGINT IS NULL OR e.product_id = $1)
             ORDER BY e.created_at DESC, e.id DESC"
        );
        let rows = sqlx::query_as::<_, EnquiryRow>(&sql)
            .bind(product_id.map(i64::from))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Enquiry::try_from).collect()
    }
}
