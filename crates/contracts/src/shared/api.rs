//! Collector endpoints used by the site's enquiry forms

use serde::{Deserialize, Serialize};

pub const CONTACT_ENQUIRY_PATH: &str = "/api/enquiries/contact";
pub const EVENT_ENQUIRY_PATH: &str = "/api/enquiries/event";

/// Body of `GET /api/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
}

impl ApiInfo {
    pub fn resort() -> Self {
        Self {
            message: "Silver Stone Park Resort API".to_string(),
        }
    }
}
