use contracts::domain::a002_event_enquiry::aggregate::EventEnquiryDto;
use contracts::domain::common::validation::{non_empty, require_email};
use contracts::domain::common::ValidationError;
use contracts::shared::api::EVENT_ENQUIRY_PATH;

use crate::shared::enquiry::EnquirySchema;

/// Which page the event form sits on. Both post to the same endpoint and
/// differ in their option lists and in whether email is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPreset {
    Wedding,
    Corporate,
}

impl EventPreset {
    pub fn default_event_type(&self) -> &'static str {
        match self {
            EventPreset::Wedding => "Wedding",
            EventPreset::Corporate => "Corporate Offsite",
        }
    }

    /// (value, label) pairs for the event type select
    pub fn event_types(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            EventPreset::Wedding => &[
                ("Wedding", "Wedding"),
                ("Engagement", "Engagement"),
                ("Reception", "Reception"),
                ("Mehendi/Sangeet", "Mehendi/Sangeet"),
                ("Anniversary", "Anniversary"),
                ("Birthday", "Birthday Celebration"),
                ("Other", "Other Celebration"),
            ],
            EventPreset::Corporate => &[
                ("Corporate Offsite", "Corporate Offsite"),
                ("Conference", "Conference"),
                ("Team Building", "Team Building"),
                ("Training Session", "Training Session"),
                ("Product Launch", "Product Launch"),
                ("Annual Meeting", "Annual Meeting"),
                ("Other", "Other"),
            ],
        }
    }

    /// (value, label) pairs for the guest count select
    pub fn guest_buckets(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            EventPreset::Wedding => &[
                ("50-100", "50 - 100 guests"),
                ("100-200", "100 - 200 guests"),
                ("200-300", "200 - 300 guests"),
                ("300-500", "300 - 500 guests"),
                ("500+", "500+ guests"),
            ],
            EventPreset::Corporate => &[
                ("10-25", "10 - 25 attendees"),
                ("25-50", "25 - 50 attendees"),
                ("50-100", "50 - 100 attendees"),
                ("100-200", "100 - 200 attendees"),
                ("200+", "200+ attendees"),
            ],
        }
    }

    pub fn email_required(&self) -> bool {
        matches!(self, EventPreset::Corporate)
    }

    /// Prefix of the input test ids, e.g. `wedding-name-input`
    pub fn key(&self) -> &'static str {
        match self {
            EventPreset::Wedding => "wedding",
            EventPreset::Corporate => "corporate",
        }
    }
}

/// Values bound to the event form inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub event_type: String,
    pub event_date: String,
    pub guest_count: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy)]
pub struct EventSchema {
    pub preset: EventPreset,
}

impl EventSchema {
    pub fn new(preset: EventPreset) -> Self {
        Self { preset }
    }
}

impl EnquirySchema for EventSchema {
    type Fields = EventFields;
    type Record = EventEnquiryDto;

    fn endpoint(&self) -> &'static str {
        EVENT_ENQUIRY_PATH
    }

    fn initial(&self) -> EventFields {
        EventFields {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            event_type: self.preset.default_event_type().to_string(),
            event_date: String::new(),
            guest_count: String::new(),
            message: String::new(),
        }
    }

    fn to_record(&self, fields: &EventFields) -> Result<EventEnquiryDto, ValidationError> {
        if self.preset.email_required() {
            require_email("email", &fields.email)?;
        }
        let dto = EventEnquiryDto {
            name: fields.name.clone(),
            phone: fields.phone.clone(),
            email: non_empty(&fields.email),
            event_type: fields.event_type.clone(),
            event_date: fields.event_date.clone(),
            guest_count: fields.guest_count.clone(),
            message: fields.message.clone(),
        };
        dto.validate()?;
        Ok(dto)
    }

    fn success_message(&self) -> &'static str {
        "Enquiry submitted successfully! Our team will contact you shortly."
    }

    fn failure_message(&self) -> &'static str {
        "Failed to submit enquiry. Please try again."
    }
}

pub fn to_options(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::normalize_base_url;
    use crate::shared::enquiry::client::testing::FakeTransport;
    use crate::shared::enquiry::submission::testing::RecordingNotifier;
    use crate::shared::enquiry::{submit_enquiry, EnquiryClient, EnquiryForm, SubmissionOutcome};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[tokio::test]
    async fn test_wedding_enquiry_is_sent_as_entered() {
        let mut form = EnquiryForm::new(EventSchema::new(EventPreset::Wedding));
        form.edit(|f| {
            f.name = "Priya".into();
            f.phone = "9999999999".into();
            f.event_date = "2026-03-10".into();
            f.guest_count = "100-200".into();
        });
        let cell = Rc::new(RefCell::new(form));
        let transport = FakeTransport::answering(Ok(200));
        let base_url = normalize_base_url(Some("https://api.example.com/"));
        let client = EnquiryClient::new(base_url, transport.clone());
        let notifier = RecordingNotifier::default();

        let outcome = submit_enquiry(&cell, &client, &notifier).await;
        assert_eq!(outcome, SubmissionOutcome::Sent);

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://api.example.com/api/enquiries/event");
        let body: serde_json::Value = serde_json::from_str(&calls[0].1).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Priya",
                "phone": "9999999999",
                "event_type": "Wedding",
                "event_date": "2026-03-10",
                "guest_count": "100-200",
                "message": ""
            })
        );

        assert_eq!(
            notifier.received.borrow()[0].message,
            "Enquiry submitted successfully! Our team will contact you shortly."
        );
        assert_eq!(
            cell.borrow().fields(),
            &EventFields {
                name: String::new(),
                phone: String::new(),
                email: String::new(),
                event_type: "Wedding".into(),
                event_date: String::new(),
                guest_count: String::new(),
                message: String::new(),
            }
        );
    }

    #[test]
    fn test_corporate_form_requires_email() {
        let schema = EventSchema::new(EventPreset::Corporate);
        let mut fields = schema.initial();
        assert_eq!(fields.event_type, "Corporate Offsite");
        fields.name = "Rahul".into();
        fields.phone = "9876543210".into();
        fields.event_date = "2026-05-02".into();
        assert_eq!(
            schema.to_record(&fields),
            Err(ValidationError::Missing { field: "email" })
        );

        fields.email = "rahul@acme.in".into();
        let dto = schema.to_record(&fields).unwrap();
        assert_eq!(dto.email.as_deref(), Some("rahul@acme.in"));
    }

    #[test]
    fn test_wedding_email_is_optional_but_checked() {
        let schema = EventSchema::new(EventPreset::Wedding);
        let mut fields = schema.initial();
        fields.name = "Priya".into();
        fields.phone = "9999999999".into();
        fields.event_date = "2026-03-10".into();
        assert!(schema.to_record(&fields).is_ok());

        fields.email = "priya@".into();
        assert_eq!(
            schema.to_record(&fields),
            Err(ValidationError::Malformed { field: "email" })
        );
    }

    #[test]
    fn test_presets_default_to_first_event_type() {
        for preset in [EventPreset::Wedding, EventPreset::Corporate] {
            assert_eq!(preset.event_types()[0].0, preset.default_event_type());
            assert_eq!(preset.guest_buckets().len(), 5);
        }
    }
}
