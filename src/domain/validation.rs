// src/domain/validation.rs
//! Business-rule validation for catalog records.
//!
//! Rules are evaluated in a fixed order and the first violation is returned;
//! callers and tests rely on the surfaced message, so the order is part of
//! the contract. Validation never mutates its input.

use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_NAME_MAX_LENGTH: usize = 200;
pub const DEFAULT_DESCRIPTION_MAX_LENGTH: usize = 5000;
pub const DEFAULT_MIN_PRICE: f64 = 0.01;
pub const DEFAULT_MAX_IMAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationLimits {
    pub name_max_length: usize,
    pub description_max_length: usize,
    pub min_price: f64,
    pub max_images: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
            description_max_length: DEFAULT_DESCRIPTION_MAX_LENGTH,
            min_price: DEFAULT_MIN_PRICE,
            max_images: DEFAULT_MAX_IMAGES,
        }
    }
}

/// Product fields as received at the boundary, before any rule is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub offer_price: Option<f64>,
    pub images: Option<Vec<String>>,
    pub video_url: Option<String>,
    pub slug: Option<String>,
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    limits: ValidationLimits,
}

impl InputValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    pub fn validate_product(&self, input: &ProductInput) -> DomainResult<()> {
        let limits = &self.limits;

        let name = trimmed(input.name.as_deref());
        if name.is_empty() {
            return invalid("Product name is required");
        }
        if name.chars().count() > limits.name_max_length {
            return invalid(format!(
                "Product name must be less than {} characters",
                limits.name_max_length
            ));
        }

        let description = trimmed(input.description.as_deref());
        if description.is_empty() {
            return invalid("Product description is required");
        }
        if description.chars().count() > limits.description_max_length {
            return invalid(format!(
                "Product description must be less than {} characters",
                limits.description_max_length
            ));
        }

        let Some(price) = input.price else {
            return invalid("Product price is required");
        };
        if !self.meets_min_price(price) {
            return invalid(format!("Price must be at least {}", limits.min_price));
        }

        if let Some(offer_price) = input.offer_price {
            if !self.meets_min_price(offer_price) {
                return invalid(format!("Offer price must be at least {}", limits.min_price));
            }
            if offer_price >= price {
                return invalid("Offer price must be less than regular price");
            }
        }

        let images = match input.images.as_deref() {
            Some(images) if !images.is_empty() => images,
            _ => return invalid("At least one image is required"),
        };
        if images.len() > limits.max_images {
            return invalid(format!("Maximum {} images allowed", limits.max_images));
        }
        if images.iter().any(|image| image.trim().is_empty()) {
            return invalid("All images must be valid URLs");
        }

        Ok(())
    }

    /// Field rules for categories. Name uniqueness needs the store and is
    /// checked by the caller.
    pub fn validate_category(&self, input: &CategoryInput) -> DomainResult<()> {
        let limits = &self.limits;

        let name = trimmed(input.name.as_deref());
        if name.is_empty() {
            return invalid("Category name is required");
        }
        if name.chars().count() > limits.name_max_length {
            return invalid(format!(
                "Category name must be less than {} characters",
                limits.name_max_length
            ));
        }

        let description = trimmed(input.description.as_deref());
        if description.chars().count() > limits.description_max_length {
            return invalid(format!(
                "Category description must be less than {} characters",
                limits.description_max_length
            ));
        }

        Ok(())
    }

    fn meets_min_price(&self, value: f64) -> bool {
        value.is_finite() && value >= self.limits.min_price
    }
}

fn trimmed(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or_default()
}

fn invalid<T>(message: impl Into<String>) -> DomainResult<T> {
    Err(DomainError::Validation(message.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_product() -> ProductInput {
        ProductInput {
            name: Some("Woven Basket".into()),
            description: Some("Hand woven from river reeds".into()),
            price: Some(9.99),
            offer_price: None,
            images: Some(vec!["url1".into()]),
            ..ProductInput::default()
        }
    }

    fn message_of(result: DomainResult<()>) -> String {
        match result {
            Err(DomainError::Validation(msg)) => msg,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    fn validator() -> InputValidator {
        InputValidator::default()
    }

    #[test]
    fn valid_product_passes() {
        assert!(validator().validate_product(&valid_product()).is_ok());
    }

    #[test]
    fn empty_name_reported_before_empty_description() {
        let input = ProductInput {
            name: Some("   ".into()),
            description: Some(String::new()),
            ..valid_product()
        };
        assert_eq!(
            message_of(validator().validate_product(&input)),
            "Product name is required"
        );
    }

    #[test]
    fn name_length_uses_trimmed_characters() {
        let at_limit = "é".repeat(DEFAULT_NAME_MAX_LENGTH);
        let input = ProductInput {
            name: Some(format!("  {at_limit}  ")),
            ..valid_product()
        };
        assert!(validator().validate_product(&input).is_ok());

        let input = ProductInput {
            name: Some("a".repeat(DEFAULT_NAME_MAX_LENGTH + 1)),
            ..valid_product()
        };
        assert_eq!(
            message_of(validator().validate_product(&input)),
            "Product name must be less than 200 characters"
        );
    }

    #[test]
    fn missing_description_is_rejected() {
        let input = ProductInput {
            description: None,
            ..valid_product()
        };
        assert_eq!(
            message_of(validator().validate_product(&input)),
            "Product description is required"
        );
    }

    #[test]
    fn overlong_description_is_rejected() {
        let input = ProductInput {
            description: Some("d".repeat(DEFAULT_DESCRIPTION_MAX_LENGTH + 1)),
            ..valid_product()
        };
        assert_eq!(
            message_of(validator().validate_product(&input)),
            "Product description must be less than 5000 characters"
        );
    }

    #[test]
    fn price_must_be_present_and_above_minimum() {
        let missing = ProductInput {
            price: None,
            ..valid_product()
        };
        assert_eq!(
            message_of(validator().validate_product(&missing)),
            "Product price is required"
        );

        for price in [0.0, 0.009, -5.0, f64::NAN, f64::INFINITY] {
            let input = ProductInput {
                price: Some(price),
                ..valid_product()
            };
            assert_eq!(
                message_of(validator().validate_product(&input)),
                "Price must be at least 0.01",
                "price {price}"
            );
        }
    }

    #[test]
    fn equal_offer_price_is_rejected() {
        let input = ProductInput {
            name: Some("A".into()),
            description: Some("d".into()),
            price: Some(10.0),
            offer_price: Some(10.0),
            images: Some(vec!["x".into()]),
            ..ProductInput::default()
        };
        assert_eq!(
            message_of(validator().validate_product(&input)),
            "Offer price must be less than regular price"
        );
    }

    #[test]
    fn offer_price_below_minimum_is_rejected_first() {
        let input = ProductInput {
            offer_price: Some(0.0),
            ..valid_product()
        };
        assert_eq!(
            message_of(validator().validate_product(&input)),
            "Offer price must be at least 0.01"
        );
    }

    #[test]
    fn lower_offer_price_passes() {
        let input = ProductInput {
            price: Some(10.0),
            offer_price: Some(7.5),
            ..valid_product()
        };
        assert!(validator().validate_product(&input).is_ok());
    }

    #[test]
    fn images_are_required() {
        let empty = ProductInput {
            name: Some("A".into()),
            description: Some("d".into()),
            price: Some(10.0),
            images: Some(vec![]),
            ..ProductInput::default()
        };
        assert_eq!(
            message_of(validator().validate_product(&empty)),
            "At least one image is required"
        );

        let missing = ProductInput {
            images: None,
            ..valid_product()
        };
        assert_eq!(
            message_of(validator().validate_product(&missing)),
            "At least one image is required"
        );
    }

    #[test]
    fn too_many_images_are_rejected() {
        let input = ProductInput {
            images: Some((0..6).map(|i| format!("https://cdn/{i}.jpg")).collect()),
            ..valid_product()
        };
        assert_eq!(
            message_of(validator().validate_product(&input)),
            "Maximum 5 images allowed"
        );
    }

    #[test]
    fn blank_image_entries_are_rejected() {
        let input = ProductInput {
            images: Some(vec!["https://cdn/1.jpg".into(), "  ".into()]),
            ..valid_product()
        };
        assert_eq!(
            message_of(validator().validate_product(&input)),
            "All images must be valid URLs"
        );
    }

    #[test]
    fn configured_limits_are_honoured() {
        let validator = InputValidator::new(ValidationLimits {
            max_images: 1,
            min_price: 1.0,
            ..ValidationLimits::default()
        });
        let input = ProductInput {
            price: Some(0.5),
            ..valid_product()
        };
        assert_eq!(
            message_of(validator.validate_product(&input)),
            "Price must be at least 1"
        );

        let input = ProductInput {
            images: Some(vec!["a".into(), "b".into()]),
            ..valid_product()
        };
        assert_eq!(
            message_of(validator.validate_product(&input)),
            "Maximum 1 images allowed"
        );
    }

    #[test]
    fn validation_leaves_input_untouched() {
        let input = ProductInput {
            name: Some("  padded  ".into()),
            ..valid_product()
        };
        let before = input.clone();
        validator().validate_product(&input).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn category_name_is_required() {
        let input = CategoryInput {
            name: Some("  ".into()),
            ..CategoryInput::default()
        };
        assert_eq!(
            message_of(validator().validate_category(&input)),
            "Category name is required"
        );
    }

    #[test]
    fn category_description_is_optional() {
        let input = CategoryInput {
            name: Some("Pottery".into()),
            ..CategoryInput::default()
        };
        assert!(validator().validate_category(&input).is_ok());
    }
}
