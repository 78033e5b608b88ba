//! Enquiry submission pipeline shared by the contact, wedding and corporate
//! forms: schema-driven form state, the HTTP client and the submit flow.

pub mod client;
pub mod form;
pub mod schema;
pub mod submission;
pub mod view_model;

pub use client::{EnquiryClient, EnquiryTransport, GlooTransport, SubmitError};
pub use form::{EnquiryForm, PendingSubmission, SubmitRejection};
pub use schema::EnquirySchema;
pub use submission::{submit_enquiry, FormCell, Notifier, SubmissionOutcome};
pub use view_model::EnquiryViewModel;
