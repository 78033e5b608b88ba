use leptos::prelude::*;

use super::client::EnquiryClient;
use super::form::EnquiryForm;
use super::schema::EnquirySchema;
use super::submission::{submit_enquiry, SubmissionOutcome};
use crate::shared::toast::ToastService;

/// ViewModel behind every enquiry form component
pub struct EnquiryViewModel<S: EnquirySchema> {
    pub form: RwSignal<EnquiryForm<S>>,
    pub error: RwSignal<Option<String>>,
    toasts: ToastService,
}

impl<S: EnquirySchema> Clone for EnquiryViewModel<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: EnquirySchema> Copy for EnquiryViewModel<S> {}

impl<S: EnquirySchema> EnquiryViewModel<S> {
    pub fn new(schema: S, toasts: ToastService) -> Self {
        Self {
            form: RwSignal::new(EnquiryForm::new(schema)),
            error: RwSignal::new(None),
            toasts,
        }
    }

    /// Reactive read of one field
    pub fn field(&self, get: fn(&S::Fields) -> String) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| get(f.fields())))
    }

    /// Callback writing one field
    pub fn setter(&self, set: fn(&mut S::Fields, String)) -> Callback<String> {
        let form = self.form;
        let error = self.error;
        Callback::new(move |value: String| {
            error.set(None);
            form.update(|f| f.edit(|fields| set(fields, value)));
        })
    }

    pub fn can_submit(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.can_submit()))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.is_submitting()))
    }

    /// Send the form to the collector
    pub fn submit_command(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let client = EnquiryClient::from_build_env();
            if let SubmissionOutcome::Invalid(e) = submit_enquiry(&vm.form, &client, &vm.toasts).await {
                vm.error.try_set(Some(format!("Please check the form: {}", e)));
            }
        });
    }
}
