pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Enquiry, EnquiryPatch, EnquiryProductSummary, NewEnquiry};
pub use repository::EnquiryRepository;
pub use value_objects::{ContactField, EnquiryId, EnquiryStatus};
