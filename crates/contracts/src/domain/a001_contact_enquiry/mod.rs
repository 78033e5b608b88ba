pub mod aggregate;

pub use aggregate::{ContactEnquiry, ContactEnquiryDto, ContactSubject};
