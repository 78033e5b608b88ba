use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{is_valid_email, require, require_date};
use crate::domain::common::{EnquiryId, ValidationError};

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /api/enquiries/event`, shared by the wedding and corporate pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EventEnquiryDto {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub event_type: String,
    /// `YYYY-MM-DD`
    pub event_date: String,
    /// Bucketed range such as "100-200" or "500+"; empty when not chosen
    #[serde(default)]
    pub guest_count: String,
    #[serde(default)]
    pub message: String,
}

impl EventEnquiryDto {
    /// Required: name, phone, event type, calendar date. Email is optional
    /// here but must be well-formed when present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("phone", &self.phone)?;
        if let Some(email) = &self.email {
            if !is_valid_email(email) {
                return Err(ValidationError::Malformed { field: "email" });
            }
        }
        require("event_type", &self.event_type)?;
        require_date("event_date", &self.event_date)?;
        Ok(())
    }
}

// ============================================================================
// Stored record
// ============================================================================

/// Event enquiry as persisted and returned by the collector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnquiry {
    pub id: EnquiryId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub event_type: String,
    pub event_date: String,
    pub guest_count: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl EventEnquiry {
    /// Create a new record for insertion. Empty guest count / message are stored as null.
    pub fn new_for_insert(dto: EventEnquiryDto) -> Self {
        Self {
            id: EnquiryId::new_v4(),
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
            event_type: dto.event_type,
            event_date: dto.event_date,
            guest_count: Some(dto.guest_count).filter(|v| !v.trim().is_empty()),
            message: Some(dto.message).filter(|v| !v.trim().is_empty()),
            created_at: Utc::now(),
        }
    }

    pub fn aggregate_index() -> &'static str {
        "a002"
    }

    pub fn collection_name() -> &'static str {
        "event_enquiry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn priya() -> EventEnquiryDto {
        EventEnquiryDto {
            name: "Priya".into(),
            phone: "9999999999".into(),
            email: None,
            event_type: "Wedding".into(),
            event_date: "2026-03-10".into(),
            guest_count: "100-200".into(),
            message: String::new(),
        }
    }

    #[test]
    fn test_wire_shape_matches_form_submission() {
        let value = serde_json::to_value(priya()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Priya",
                "phone": "9999999999",
                "event_type": "Wedding",
                "event_date": "2026-03-10",
                "guest_count": "100-200",
                "message": ""
            })
        );
    }

    #[test]
    fn test_minimal_body_deserializes() {
        let body = json!({
            "name": "Rahul",
            "phone": "+91 9000000000",
            "event_type": "Conference",
            "event_date": "2026-11-02"
        });
        let dto: EventEnquiryDto = serde_json::from_value(body).unwrap();
        assert_eq!(dto.guest_count, "");
        assert_eq!(dto.message, "");
        assert!(dto.email.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(priya().validate().is_ok());

        let mut dto = priya();
        dto.phone.clear();
        assert_eq!(dto.validate(), Err(ValidationError::Missing { field: "phone" }));

        let mut dto = priya();
        dto.email = Some("priya-at-example".into());
        assert_eq!(dto.validate(), Err(ValidationError::Malformed { field: "email" }));

        let mut dto = priya();
        dto.event_date = "next spring".into();
        assert_eq!(
            dto.validate(),
            Err(ValidationError::Malformed { field: "event_date" })
        );

        let mut dto = priya();
        dto.event_type = "".into();
        assert_eq!(
            dto.validate(),
            Err(ValidationError::Missing { field: "event_type" })
        );
    }

    #[test]
    fn test_new_for_insert_drops_empty_optionals() {
        let record = EventEnquiry::new_for_insert(priya());
        assert_eq!(record.guest_count.as_deref(), Some("100-200"));
        assert_eq!(record.message, None);
        assert_eq!(record.event_type, "Wedding");
    }
}
