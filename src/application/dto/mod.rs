pub mod auth;
pub mod categories;
pub mod enquiries;
pub mod products;

pub use auth::AdminUser;
pub use categories::{AdminCategoryDto, CategoryDto};
pub use enquiries::{EnquiryDto, EnquiryProductDto};
pub use products::{CatalogProductDto, CategorySummaryDto, ProductDto};
