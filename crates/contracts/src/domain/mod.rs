pub mod a001_contact_enquiry;
pub mod a002_event_enquiry;
pub mod common;
