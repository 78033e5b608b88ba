use contracts::domain::a001_contact_enquiry::aggregate::{ContactEnquiryDto, ContactSubject};
use contracts::domain::common::validation::non_empty;
use contracts::domain::common::ValidationError;
use contracts::shared::api::CONTACT_ENQUIRY_PATH;

use crate::shared::enquiry::EnquirySchema;

/// Values bound to the contact form inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactSchema;

impl EnquirySchema for ContactSchema {
    type Fields = ContactFields;
    type Record = ContactEnquiryDto;

    fn endpoint(&self) -> &'static str {
        CONTACT_ENQUIRY_PATH
    }

    fn initial(&self) -> ContactFields {
        ContactFields {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            subject: ContactSubject::default().as_str().to_string(),
            message: String::new(),
        }
    }

    fn to_record(&self, fields: &ContactFields) -> Result<ContactEnquiryDto, ValidationError> {
        let subject = ContactSubject::parse(&fields.subject)
            .ok_or(ValidationError::Malformed { field: "subject" })?;
        let dto = ContactEnquiryDto {
            name: fields.name.clone(),
            email: fields.email.clone(),
            phone: non_empty(&fields.phone),
            subject,
            message: fields.message.clone(),
        };
        dto.validate()?;
        Ok(dto)
    }

    fn success_message(&self) -> &'static str {
        "Message sent successfully! We'll get back to you soon."
    }

    fn failure_message(&self) -> &'static str {
        "Failed to send message. Please try again."
    }
}

/// Subject select options
pub fn subject_options() -> Vec<(String, String)> {
    ContactSubject::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::enquiry::client::testing::FakeTransport;
    use crate::shared::enquiry::submission::testing::RecordingNotifier;
    use crate::shared::enquiry::{submit_enquiry, EnquiryClient, EnquiryForm, SubmissionOutcome, SubmitError};
    use crate::shared::toast::ToastKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn filled_form() -> Rc<RefCell<EnquiryForm<ContactSchema>>> {
        let mut form = EnquiryForm::new(ContactSchema);
        form.edit(|f| {
            f.name = "Asha".into();
            f.email = "asha@example.com".into();
            f.subject = "Reservations".into();
            f.message = "Do you have rooms for 12 March?".into();
        });
        Rc::new(RefCell::new(form))
    }

    #[test]
    fn test_required_fields_gate_submission() {
        let mut form = EnquiryForm::new(ContactSchema);
        assert!(!form.can_submit());
        form.edit(|f| {
            f.name = "Asha".into();
            f.email = "not-an-email".into();
            f.message = "Hello".into();
        });
        assert_eq!(form.validate(), Err(ValidationError::Malformed { field: "email" }));
        form.edit(|f| f.email = "asha@example.com".into());
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn test_successful_contact_submission() {
        let cell = filled_form();
        let transport = FakeTransport::answering(Ok(200));
        let client = EnquiryClient::new(Some("https://api.example.com".into()), transport.clone());
        let notifier = RecordingNotifier::default();

        let outcome = submit_enquiry(&cell, &client, &notifier).await;
        assert_eq!(outcome, SubmissionOutcome::Sent);

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://api.example.com/api/enquiries/contact");
        let body: serde_json::Value = serde_json::from_str(&calls[0].1).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Asha",
                "email": "asha@example.com",
                "subject": "Reservations",
                "message": "Do you have rooms for 12 March?"
            })
        );

        let received = notifier.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].kind, ToastKind::Success);
        assert_eq!(
            received[0].message,
            "Message sent successfully! We'll get back to you soon."
        );
        assert_eq!(cell.borrow().fields(), &ContactSchema.initial());
    }

    #[tokio::test]
    async fn test_unreachable_collector_keeps_fields() {
        let cell = filled_form();
        let before = cell.borrow().fields().clone();
        let transport = FakeTransport::answering(Err(SubmitError::Network("unreachable".into())));
        let client = EnquiryClient::new(Some("https://api.example.com".into()), transport.clone());
        let notifier = RecordingNotifier::default();

        let outcome = submit_enquiry(&cell, &client, &notifier).await;
        assert!(matches!(outcome, SubmissionOutcome::Failed(SubmitError::Network(_))));
        assert_eq!(transport.calls.borrow().len(), 1);

        let received = notifier.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].kind, ToastKind::Error);
        assert_eq!(received[0].message, "Failed to send message. Please try again.");
        assert_eq!(cell.borrow().fields(), &before);
        assert!(!cell.borrow().is_submitting());
    }

    #[test]
    fn test_optional_phone_is_sent_when_filled() {
        let mut fields = ContactSchema.initial();
        fields.name = "Asha".into();
        fields.email = "asha@example.com".into();
        fields.message = "Hi".into();
        fields.phone = "+91 6282427265".into();
        let dto = ContactSchema.to_record(&fields).unwrap();
        assert_eq!(dto.phone.as_deref(), Some("+91 6282427265"));
        assert_eq!(dto.subject, ContactSubject::GeneralInquiry);
    }
}
