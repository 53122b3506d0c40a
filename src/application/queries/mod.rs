pub mod catalog;
pub mod categories;
pub mod enquiries;
pub mod products;
