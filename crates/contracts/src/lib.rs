//! Types shared between the resort site (frontend) and the enquiry collector (backend).

pub mod domain;
pub mod shared;
