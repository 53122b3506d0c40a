use crate::domain::errors::DomainError;

const CNT_PRODUCT_SLUG: &str = "products_slug_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_CATEGORY_NAME: &str = "categories_name_key";
const CNT_PRODUCT_CATEGORY: &str = "products_category_id_fkey";
const CNT_ENQUIRY_PRODUCT: &str = "enquiries_product_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                match constraint {
                    CNT_PRODUCT_SLUG | CNT_CATEGORY_SLUG => {
                        return DomainError::SlugTaken(constraint.to_string());
                    }
                    CNT_CATEGORY_NAME => {
                        return DomainError::Validation(
                            "Category with this name already exists".into(),
                        );
                    }
                    CNT_PRODUCT_CATEGORY => {
                        return DomainError::NotFound("category not found".into());
                    }
                    CNT_ENQUIRY_PRODUCT => {
                        return DomainError::NotFound("product not found".into());
                    }
                    _ => {}
                }
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_persistence_failures() {
        let err = map_sqlx(sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::Persistence(_)));
    }

    #[test]
    fn pool_timeouts_are_persistence_failures() {
        let err = map_sqlx(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
