use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{require, require_email};
use crate::domain::common::{EnquiryId, ValidationError};

// ============================================================================
// Subject
// ============================================================================

/// Topic chosen in the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContactSubject {
    #[default]
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
    #[serde(rename = "Reservations")]
    Reservations,
    #[serde(rename = "Weddings & Events")]
    WeddingsAndEvents,
    #[serde(rename = "Corporate Bookings")]
    CorporateBookings,
    #[serde(rename = "Feedback")]
    Feedback,
    #[serde(rename = "Other")]
    Other,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 6] = [
        ContactSubject::GeneralInquiry,
        ContactSubject::Reservations,
        ContactSubject::WeddingsAndEvents,
        ContactSubject::CorporateBookings,
        ContactSubject::Feedback,
        ContactSubject::Other,
    ];

    /// Wire value, also used as the option label
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactSubject::GeneralInquiry => "General Inquiry",
            ContactSubject::Reservations => "Reservations",
            ContactSubject::WeddingsAndEvents => "Weddings & Events",
            ContactSubject::CorporateBookings => "Corporate Bookings",
            ContactSubject::Feedback => "Feedback",
            ContactSubject::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /api/enquiries/contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactEnquiryDto {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: ContactSubject,
    pub message: String,
}

impl ContactEnquiryDto {
    /// Required: name, well-formed email, message
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require_email("email", &self.email)?;
        require("message", &self.message)?;
        Ok(())
    }
}

// ============================================================================
// Stored record
// ============================================================================

/// Contact enquiry as persisted and returned by the collector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEnquiry {
    pub id: EnquiryId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: ContactSubject,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactEnquiry {
    /// Create a new record for insertion (fresh id, current timestamp)
    pub fn new_for_insert(dto: ContactEnquiryDto) -> Self {
        Self {
            id: EnquiryId::new_v4(),
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            subject: dto.subject,
            message: dto.message,
            created_at: Utc::now(),
        }
    }

    pub fn aggregate_index() -> &'static str {
        "a001"
    }

    pub fn collection_name() -> &'static str {
        "contact_enquiry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> ContactEnquiryDto {
        ContactEnquiryDto {
            name: "Anika".into(),
            email: "anika@example.com".into(),
            phone: None,
            subject: ContactSubject::Reservations,
            message: "Do you have rooms on 14 Feb?".into(),
        }
    }

    #[test]
    fn test_subject_wire_values() {
        assert_eq!(
            serde_json::to_value(ContactSubject::WeddingsAndEvents).unwrap(),
            json!("Weddings & Events")
        );
        for subject in ContactSubject::ALL {
            assert_eq!(ContactSubject::parse(subject.as_str()), Some(subject));
        }
        assert_eq!(ContactSubject::parse("Spam"), None);
        assert_eq!(ContactSubject::default(), ContactSubject::GeneralInquiry);
    }

    #[test]
    fn test_phone_is_omitted_when_absent() {
        let value = serde_json::to_value(valid()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Anika",
                "email": "anika@example.com",
                "subject": "Reservations",
                "message": "Do you have rooms on 14 Feb?"
            })
        );
    }

    #[test]
    fn test_validate() {
        assert!(valid().validate().is_ok());

        let mut dto = valid();
        dto.name = " ".into();
        assert_eq!(dto.validate(), Err(ValidationError::Missing { field: "name" }));

        let mut dto = valid();
        dto.email = "anika.example.com".into();
        assert_eq!(dto.validate(), Err(ValidationError::Malformed { field: "email" }));

        let mut dto = valid();
        dto.message.clear();
        assert_eq!(dto.validate(), Err(ValidationError::Missing { field: "message" }));
    }

    #[test]
    fn test_unknown_subject_is_rejected_on_deserialize() {
        let body = json!({
            "name": "A",
            "email": "a@b.co",
            "subject": "Spam",
            "message": "hi"
        });
        assert!(serde_json::from_value::<ContactEnquiryDto>(body).is_err());
    }

    #[test]
    fn test_new_for_insert_keeps_fields() {
        let record = ContactEnquiry::new_for_insert(valid());
        assert_eq!(record.name, "Anika");
        assert_eq!(record.subject, ContactSubject::Reservations);
        assert!(record.phone.is_none());
    }
}
