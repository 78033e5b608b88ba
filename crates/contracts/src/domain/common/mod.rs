//! Common types shared by all enquiry aggregates

pub mod aggregate_id;
pub mod validation;

// Re-exports
pub use aggregate_id::{AggregateId, EnquiryId};
pub use validation::ValidationError;
