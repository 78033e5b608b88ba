use contracts::domain::common::ValidationError;

use super::client::SubmitError;
use super::schema::EnquirySchema;
use crate::shared::toast::Notification;

/// Why a submission was not started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A request from this form is still pending
    InFlight,
    Invalid(ValidationError),
}

/// Record captured at the moment the visitor pressed submit
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission<R> {
    pub endpoint: &'static str,
    pub record: R,
}

/// State of one enquiry form instance.
///
/// The `submitting` flag is the only guard against double submission: it is
/// checked and set inside a single `begin_submit` call and cleared by
/// `finish`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnquiryForm<S: EnquirySchema> {
    schema: S,
    fields: S::Fields,
    submitting: bool,
}

impl<S: EnquirySchema> EnquiryForm<S> {
    pub fn new(schema: S) -> Self {
        let fields = schema.initial();
        Self {
            schema,
            fields,
            submitting: false,
        }
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn fields(&self) -> &S::Fields {
        &self.fields
    }

    pub fn edit(&mut self, f: impl FnOnce(&mut S::Fields)) {
        f(&mut self.fields);
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn validate(&self) -> Result<S::Record, ValidationError> {
        self.schema.to_record(&self.fields)
    }

    /// Drives the disabled state of the submit button
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.validate().is_ok()
    }

    /// Enters the submitting state and hands out the record to send
    pub fn begin_submit(
        &mut self,
    ) -> Result<PendingSubmission<S::Record>, SubmitRejection> {
        if self.submitting {
            return Err(SubmitRejection::InFlight);
        }
        let record = self.validate().map_err(SubmitRejection::Invalid)?;
        self.submitting = true;
        Ok(PendingSubmission {
            endpoint: self.schema.endpoint(),
            record,
        })
    }

    /// Leaves the submitting state. Fields reset only after a successful send.
    pub fn finish(&mut self, result: &Result<(), SubmitError>) -> Notification {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.fields = self.schema.initial();
                Notification::success(self.schema.success_message())
            }
            Err(_) => Notification::error(self.schema.failure_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::toast::ToastKind;
    use contracts::domain::common::validation::require;

    #[derive(Debug, Clone, Copy)]
    struct NoteSchema;

    impl EnquirySchema for NoteSchema {
        type Fields = String;
        type Record = String;

        fn endpoint(&self) -> &'static str {
            "/api/notes"
        }

        fn initial(&self) -> String {
            String::new()
        }

        fn to_record(&self, fields: &String) -> Result<String, ValidationError> {
            require("note", fields)?;
            Ok(fields.clone())
        }

        fn success_message(&self) -> &'static str {
            "saved"
        }

        fn failure_message(&self) -> &'static str {
            "not saved"
        }
    }

    fn filled() -> EnquiryForm<NoteSchema> {
        let mut form = EnquiryForm::new(NoteSchema);
        form.edit(|note| note.push_str("hello"));
        form
    }

    #[test]
    fn test_empty_form_cannot_submit() {
        let mut form = EnquiryForm::new(NoteSchema);
        assert!(!form.can_submit());
        assert_eq!(
            form.begin_submit(),
            Err(SubmitRejection::Invalid(ValidationError::Missing { field: "note" }))
        );
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_second_begin_is_rejected_while_in_flight() {
        let mut form = filled();
        let pending = form.begin_submit().unwrap();
        assert_eq!(pending.endpoint, "/api/notes");
        assert_eq!(pending.record, "hello");
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(SubmitRejection::InFlight));
    }

    #[test]
    fn test_success_resets_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let notification = form.finish(&Ok(()));
        assert_eq!(notification.kind, ToastKind::Success);
        assert_eq!(notification.message, "saved");
        assert_eq!(form.fields(), "");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_failure_keeps_fields_for_resubmission() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let notification = form.finish(&Err(SubmitError::Status(500)));
        assert_eq!(notification.kind, ToastKind::Error);
        assert_eq!(notification.message, "not saved");
        assert_eq!(form.fields(), "hello");
        assert!(form.can_submit());
    }
}
