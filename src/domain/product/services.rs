// src/domain/product/services.rs
use crate::domain::product::entity::Product;

pub const DEFAULT_WHATSAPP_PHONE: &str = "7418769579";
const WHATSAPP_BASE_URL: &str = "https://wa.me";
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Marks `encodeURIComponent` leaves literal, paired with the escape
/// `urlencoding` emits for them.
const UNRESERVED_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode a query component the way browsers' `encodeURIComponent`
/// does. Every `%` in the encoded text starts an escape triplet, so the
/// replacements cannot touch an escaped literal `%`.
fn encode_component(text: &str) -> String {
    UNRESERVED_MARKS
        .iter()
        .fold(urlencoding::encode(text).into_owned(), |encoded, (escaped, mark)| {
            encoded.replace(escaped, mark)
        })
}

/// Builds the pre-filled WhatsApp chat link shown on product pages.
#[derive(Debug, Clone)]
pub struct EnquiryLinkBuilder {
    phone: String,
}

impl Default for EnquiryLinkBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_WHATSAPP_PHONE)
    }
}

impl EnquiryLinkBuilder {
    /// `phone` is the full international number without a leading `+`.
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
        }
    }

    pub fn message(&self, product: &Product) -> String {
        let preview: String = product
            .description
            .as_str()
            .chars()
            .take(DESCRIPTION_PREVIEW_CHARS)
            .collect();
        format!(
            "Hi! I'm interested in {} - {}... Price: ₹{:.2}",
            product.name,
            preview,
            product.display_price().get()
        )
    }

    pub fn url(&self, product: &Product) -> String {
        let message = self.message(product);
        format!(
            "{WHATSAPP_BASE_URL}/{}?text={}",
            self.phone,
            encode_component(&message)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::{Price, ProductDescription, ProductId, ProductName};
    use crate::domain::slug::Slug;
    use chrono::Utc;

    fn product(description: &str, offer: Option<f64>) -> Product {
        Product {
            id: ProductId::new(1).unwrap(),
            name: ProductName::new("Clay Cup").unwrap(),
            slug: Slug::new("clay-cup").unwrap(),
            description: ProductDescription::new(description).unwrap(),
            price: Price::new(250.0).unwrap(),
            offer_price: offer.map(|v| Price::new(v).unwrap()),
            images: vec![],
            video_url: None,
            category_id: None,
            category: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn message_uses_display_price_with_two_decimals() {
        let links = EnquiryLinkBuilder::default();
        let message = links.message(&product("Wheel thrown", Some(199.5)));
        assert_eq!(
            message,
            "Hi! I'm interested in Clay Cup - Wheel thrown... Price: ₹199.50"
        );
    }

    #[test]
    fn description_preview_is_truncated() {
        let links = EnquiryLinkBuilder::default();
        let long = "x".repeat(150);
        let message = links.message(&product(&long, None));
        assert!(message.contains(&format!("{}...", "x".repeat(100))));
        assert!(!message.contains(&"x".repeat(101)));
    }

    #[test]
    fn url_targets_configured_phone_and_encodes_text() {
        let links = EnquiryLinkBuilder::new("919876543210");
        let url = links.url(&product("Wheel thrown", None));
        assert!(url.starts_with("https://wa.me/919876543210?text=Hi!%20I'm%20interested"));
        assert!(url.ends_with("%E2%82%B9250.00"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn component_encoding_keeps_unreserved_marks() {
        assert_eq!(
            encode_component("Pot (large)* & 50% off!"),
            "Pot%20(large)*%20%26%2050%25%20off!"
        );
        assert_eq!(encode_component("100%21"), "100%2521");
    }
}
