pub mod aggregate;

pub use aggregate::{EventEnquiry, EventEnquiryDto};
