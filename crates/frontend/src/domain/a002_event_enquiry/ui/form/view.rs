use leptos::prelude::*;

use super::model::{to_options, EventPreset, EventSchema};
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::date_utils::{to_input_value, today};
use crate::shared::enquiry::EnquiryViewModel;
use crate::shared::toast::ToastService;

#[derive(Clone, Copy)]
struct Labels {
    name: &'static str,
    email: &'static str,
    guests: &'static str,
    message_placeholder: &'static str,
    submit: &'static str,
}

fn labels(preset: EventPreset) -> Labels {
    match preset {
        EventPreset::Wedding => Labels {
            name: "Your Name",
            email: "Email Address",
            guests: "Expected Guest Count",
            message_placeholder: "Tell us about your vision...",
            submit: "Check Date Availability",
        },
        EventPreset::Corporate => Labels {
            name: "Contact Name",
            email: "Company Email",
            guests: "Number of Attendees",
            message_placeholder: "Tell us about your event requirements...",
            submit: "Request Quote",
        },
    }
}

/// Enquiry form shared by the weddings and corporate pages
#[component]
pub fn EventEnquiryForm(preset: EventPreset, toasts: ToastService) -> impl IntoView {
    let vm = EnquiryViewModel::new(EventSchema::new(preset), toasts);
    let can_submit = vm.can_submit();
    let submitting = vm.is_submitting();
    let text = labels(preset);
    let key = preset.key();
    let min_date = to_input_value(today());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <form class="enquiry-form" data-testid=format!("{}-enquiry-form", key) on:submit=on_submit>
            <div class="form__row">
                <Input
                    id=format!("{}-name-input", key)
                    label=text.name
                    required=true
                    value=vm.field(|f| f.name.clone())
                    on_input=vm.setter(|f, v| f.name = v)
                />
                <Input
                    id=format!("{}-phone-input", key)
                    label="Phone Number"
                    input_type="tel"
                    required=true
                    value=vm.field(|f| f.phone.clone())
                    on_input=vm.setter(|f, v| f.phone = v)
                />
            </div>
            <div class="form__row">
                <Input
                    id=format!("{}-email-input", key)
                    label=text.email
                    input_type="email"
                    required=preset.email_required()
                    value=vm.field(|f| f.email.clone())
                    on_input=vm.setter(|f, v| f.email = v)
                />
                <Select
                    id=format!("{}-event-type-select", key)
                    label="Event Type"
                    required=true
                    options=to_options(preset.event_types())
                    value=vm.field(|f| f.event_type.clone())
                    on_change=vm.setter(|f, v| f.event_type = v)
                />
            </div>
            <div class="form__row">
                <Input
                    id=format!("{}-date-input", key)
                    label="Preferred Date"
                    input_type="date"
                    min=min_date
                    required=true
                    value=vm.field(|f| f.event_date.clone())
                    on_input=vm.setter(|f, v| f.event_date = v)
                />
                <Select
                    id=format!("{}-guests-select", key)
                    label=text.guests
                    placeholder="Select range"
                    options=to_options(preset.guest_buckets())
                    value=vm.field(|f| f.guest_count.clone())
                    on_change=vm.setter(|f, v| f.guest_count = v)
                />
            </div>
            <Textarea
                id=format!("{}-message-textarea", key)
                label="Additional Details"
                placeholder=text.message_placeholder
                value=vm.field(|f| f.message.clone())
                on_input=vm.setter(|f, v| f.message = v)
            />

            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Button
                button_type="submit"
                class="button--block"
                test_id=format!("{}-submit-btn", key)
                disabled=Signal::derive(move || !can_submit.get())
            >
                {move || if submitting.get() { "Submitting..." } else { text.submit }}
            </Button>
        </form>
    }
}
