pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewProduct, Product, ProductDraft, ProductUpdate};
pub use repository::{ProductFilter, ProductReadRepository, ProductWriteRepository};
pub use value_objects::{ImageUrl, Price, ProductDescription, ProductId, ProductName};
