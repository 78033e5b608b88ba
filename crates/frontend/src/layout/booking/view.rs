use leptos::prelude::*;

use super::model::{BookingRequest, OTA_LINKS};
use crate::shared::date_utils::{from_input_value, to_input_value, today};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

#[component]
pub fn BookingModal(on_close: Callback<()>) -> impl IntoView {
    let booking = RwSignal::new(BookingRequest::new(today()));

    let date_value = move |pick: fn(&BookingRequest) -> Option<chrono::NaiveDate>| {
        booking.with(|b| pick(b).map(to_input_value).unwrap_or_default())
    };

    view! {
        <Modal title="Book Your Stay".to_string() subtitle="Reserve Your Stay" on_close=on_close>
            <div class="booking" data-testid="booking-modal-content">
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label" for="checkin-picker">{icon("calendar")}" Check In"</label>
                        <input
                            id="checkin-picker"
                            data-testid="checkin-picker"
                            class="form__input"
                            type="date"
                            min=move || booking.with(|b| to_input_value(b.check_in_min()))
                            prop:value=move || date_value(BookingRequest::check_in)
                            on:change=move |ev| {
                                let picked = from_input_value(&event_target_value(&ev));
                                booking.update(|b| b.set_check_in(picked));
                            }
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="checkout-picker">{icon("calendar")}" Check Out"</label>
                        <input
                            id="checkout-picker"
                            data-testid="checkout-picker"
                            class="form__input"
                            type="date"
                            min=move || booking.with(|b| to_input_value(b.check_out_min()))
                            prop:value=move || date_value(BookingRequest::check_out)
                            on:change=move |ev| {
                                let picked = from_input_value(&event_target_value(&ev));
                                booking.update(|b| b.set_check_out(picked));
                            }
                        />
                    </div>
                </div>

                <div class="form__group">
                    <span class="form__label">{icon("users")}" Guests"</span>
                    <div class="booking__guests">
                        <button
                            class="button button--icon"
                            aria-label="Fewer guests"
                            data-testid="decrease-guests"
                            on:click=move |_| booking.update(|b| b.remove_guest())
                        >
                            {icon("minus")}
                        </button>
                        <span class="booking__guest-count" data-testid="guest-count">
                            {move || booking.with(|b| b.guests())}
                        </span>
                        <button
                            class="button button--icon"
                            aria-label="More guests"
                            data-testid="increase-guests"
                            on:click=move |_| booking.update(|b| b.add_guest())
                        >
                            {icon("plus")}
                        </button>
                    </div>
                </div>

                <div class="booking__divider"></div>

                <div class="booking__otas">
                    {OTA_LINKS
                        .iter()
                        .map(|ota| view! {
                            <a
                                class="button button--primary button--block booking__ota"
                                href=ota.url
                                target="_blank"
                                rel="noopener noreferrer"
                                data-testid=ota.test_id()
                            >
                                {format!("Book via {}", ota.name)}
                                {icon("external-link")}
                            </a>
                        })
                        .collect_view()}
                </div>
                <p class="booking__note">"You will be redirected to our trusted booking partners"</p>
            </div>
        </Modal>
    }
}
