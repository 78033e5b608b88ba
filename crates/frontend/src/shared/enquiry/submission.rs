use contracts::domain::common::ValidationError;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use super::client::{EnquiryClient, EnquiryTransport, SubmitError};
use super::form::{EnquiryForm, SubmitRejection};
use super::schema::EnquirySchema;
use crate::shared::toast::Notification;

/// Where an enquiry form lives between the start and the end of a request.
///
/// `with_form` answers `None` once the owner is gone (the page was left while
/// the request was pending).
pub trait FormCell<S: EnquirySchema> {
    fn with_form<R>(&self, f: impl FnOnce(&mut EnquiryForm<S>) -> R) -> Option<R>;
}

impl<S: EnquirySchema> FormCell<S> for RwSignal<EnquiryForm<S>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut EnquiryForm<S>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<S: EnquirySchema> FormCell<S> for Rc<RefCell<EnquiryForm<S>>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut EnquiryForm<S>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Receives the message shown after a submission
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    Failed(SubmitError),
    /// Another request from the same form was still pending
    Suppressed,
    Invalid(ValidationError),
    /// The form was disposed before the response arrived
    Abandoned,
}

/// Runs one submission attempt: begin, POST, finish, notify
pub async fn submit_enquiry<S, C, T, N>(
    cell: &C,
    client: &EnquiryClient<T>,
    notifier: &N,
) -> SubmissionOutcome
where
    S: EnquirySchema,
    C: FormCell<S>,
    T: EnquiryTransport,
    N: Notifier,
{
    let pending = match cell.with_form(|form| form.begin_submit()) {
        None => return SubmissionOutcome::Abandoned,
        Some(Err(SubmitRejection::InFlight)) => {
            log::debug!("Submission already in flight, ignoring");
            return SubmissionOutcome::Suppressed;
        }
        Some(Err(SubmitRejection::Invalid(err))) => {
            log::debug!("Enquiry not sent: {}", err);
            return SubmissionOutcome::Invalid(err);
        }
        Some(Ok(pending)) => pending,
    };

    let result = client.submit(pending.endpoint, &pending.record).await;
    match &result {
        Ok(()) => log::info!("Enquiry sent to {}", pending.endpoint),
        Err(e) => log::warn!("Enquiry to {} failed: {}", pending.endpoint, e),
    }

    let Some(notification) = cell.with_form(|form| form.finish(&result)) else {
        return SubmissionOutcome::Abandoned;
    };
    notifier.notify(notification);

    match result {
        Ok(()) => SubmissionOutcome::Sent,
        Err(e) => SubmissionOutcome::Failed(e),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub received: RefCell<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.received.borrow_mut().push(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingNotifier;
    use super::*;
    use crate::shared::enquiry::client::testing::FakeTransport;
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

    fn note_cell(text: &str) -> Rc<RefCell<EnquiryForm<NoteSchema>>> {
        let mut form = EnquiryForm::new(NoteSchema);
        form.edit(|note| note.push_str(text));
        Rc::new(RefCell::new(form))
    }

    fn client(transport: &FakeTransport) -> EnquiryClient<FakeTransport> {
        EnquiryClient::new(Some("http://collector".into()), transport.clone())
    }

    #[tokio::test]
    async fn test_double_submit_sends_one_request() {
        let cell = note_cell("hi");
        let transport = FakeTransport::answering(Ok(200));
        let client = client(&transport);
        let notifier = RecordingNotifier::default();

        let (first, second) = tokio::join!(
            submit_enquiry(&cell, &client, &notifier),
            submit_enquiry(&cell, &client, &notifier),
        );

        assert_eq!(first, SubmissionOutcome::Sent);
        assert_eq!(second, SubmissionOutcome::Suppressed);
        assert_eq!(transport.calls.borrow().len(), 1);
        assert_eq!(notifier.received.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let cell = note_cell("   ");
        let transport = FakeTransport::answering(Ok(200));
        let notifier = RecordingNotifier::default();

        let outcome = submit_enquiry(&cell, &client(&transport), &notifier).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Invalid(ValidationError::Missing { field: "note" })
        );
        assert!(transport.calls.borrow().is_empty());
        assert!(notifier.received.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_form_can_be_resubmitted_after_failure() {
        let cell = note_cell("hi");
        let failing = FakeTransport::answering(Ok(503));
        let notifier = RecordingNotifier::default();

        let outcome = submit_enquiry(&cell, &client(&failing), &notifier).await;
        assert_eq!(outcome, SubmissionOutcome::Failed(SubmitError::Status(503)));
        assert_eq!(cell.borrow().fields(), "hi");

        let working = FakeTransport::answering(Ok(200));
        let outcome = submit_enquiry(&cell, &client(&working), &notifier).await;
        assert_eq!(outcome, SubmissionOutcome::Sent);
        assert_eq!(cell.borrow().fields(), "");

        let messages: Vec<String> = notifier
            .received
            .borrow()
            .iter()
            .map(|n| n.message.clone())
            .collect();
        assert_eq!(messages, vec!["not saved", "saved"]);
    }
}
