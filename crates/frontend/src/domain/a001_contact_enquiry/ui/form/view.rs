use leptos::prelude::*;

use super::model::{subject_options, ContactSchema};
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::enquiry::EnquiryViewModel;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

#[component]
pub fn ContactForm(toasts: ToastService) -> impl IntoView {
    let vm = EnquiryViewModel::new(ContactSchema, toasts);
    let can_submit = vm.can_submit();
    let submitting = vm.is_submitting();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <form class="enquiry-form" data-testid="contact-form" on:submit=on_submit>
            <div class="form__row">
                <Input
                    id="contact-name-input"
                    label="Your Name"
                    required=true
                    value=vm.field(|f| f.name.clone())
                    on_input=vm.setter(|f, v| f.name = v)
                />
                <Input
                    id="contact-email-input"
                    label="Email Address"
                    input_type="email"
                    required=true
                    value=vm.field(|f| f.email.clone())
                    on_input=vm.setter(|f, v| f.email = v)
                />
            </div>
            <div class="form__row">
                <Input
                    id="contact-phone-input"
                    label="Phone Number"
                    input_type="tel"
                    value=vm.field(|f| f.phone.clone())
                    on_input=vm.setter(|f, v| f.phone = v)
                />
                <Select
                    id="contact-subject-select"
                    label="Subject"
                    options=subject_options()
                    value=vm.field(|f| f.subject.clone())
                    on_change=vm.setter(|f, v| f.subject = v)
                />
            </div>
            <Textarea
                id="contact-message-textarea"
                label="Message"
                required=true
                rows=5
                placeholder="How can we help you?"
                value=vm.field(|f| f.message.clone())
                on_input=vm.setter(|f, v| f.message = v)
            />

            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Button
                button_type="submit"
                class="button--block"
                test_id="contact-submit-btn"
                disabled=Signal::derive(move || !can_submit.get())
            >
                {icon("send")}
                {move || if submitting.get() { "Sending..." } else { "Send Message" }}
            </Button>
        </form>
    }
}
