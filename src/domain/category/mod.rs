pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Category, CategorySummary, CategoryUpdate, CategoryWithCount, NewCategory};
pub use repository::CategoryRepository;
pub use value_objects::{CategoryDescription, CategoryId, CategoryName};
