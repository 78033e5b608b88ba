use leptos::prelude::*;

use crate::domain::a001_contact_enquiry::ui::form::ContactForm;
use crate::shared::components::{PageHero, SectionTitle};
use crate::shared::icons::icon;
use crate::shared::images;
use crate::shared::resort::{ADDRESS_LINES, EMAIL, EMAIL_HREF, HOURS, PHONE_DISPLAY, PHONE_HREF};
use crate::shared::toast::ToastService;

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3722.3984929427424!2d79.04611837503694!3d21.095827980553744!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3bd4c0f7e6e7f3f7%3A0x1234567890abcdef!2sNH-44%2C%20Khapri%2C%20Nagpur%2C%20Maharashtra!5e0!3m2!1sen!2sin!4v1234567890123";

struct InfoCard {
    icon: &'static str,
    title: &'static str,
    lines: &'static [&'static str],
    link: Option<&'static str>,
}

static INFO_CARDS: [InfoCard; 4] = [
    InfoCard { icon: "map-pin", title: "Address", lines: &ADDRESS_LINES, link: None },
    InfoCard { icon: "phone", title: "Phone", lines: &[PHONE_DISPLAY], link: Some(PHONE_HREF) },
    InfoCard { icon: "mail", title: "Email", lines: &[EMAIL], link: Some(EMAIL_HREF) },
    InfoCard { icon: "clock", title: "Hours", lines: &HOURS, link: None },
];

const DIRECTIONS: [(&str, &str, &str); 3] = [
    ("From Airport", "15 km from Dr. Babasaheb Ambedkar International Airport", "~25 mins"),
    ("From Railway Station", "12 km from Nagpur Junction Railway Station", "~20 mins"),
    ("From City Center", "10 km from Sitabuldi, Nagpur's main commercial area", "~15 mins"),
];

#[component]
pub fn ContactPage(toasts: ToastService) -> impl IntoView {
    let info_cards = INFO_CARDS
        .iter()
        .map(|card| {
            let lines = card
                .lines
                .iter()
                .map(|line| match card.link {
                    Some(href) => view! { <p><a href=href>{*line}</a></p> }.into_any(),
                    None => view! { <p>{*line}</p> }.into_any(),
                })
                .collect_view();
            view! {
                <div class="card card--feature">
                    <div class="card__icon">{icon(card.icon)}</div>
                    <h3 class="card__title">{card.title}</h3>
                    {lines}
                </div>
            }
        })
        .collect_view();

    view! {
        <div data-testid="contact-page">
            <PageHero image=images::HERO eyebrow="Get in Touch" title="Contact Us" test_id="contact" />

            <section class="section" data-testid="contact-info">
                <div class="grid grid--4">{info_cards}</div>
            </section>

            <section class="section section--split" data-testid="contact-form-section">
                <div class="split__text">
                    <p class="section-title__eyebrow">"Send a Message"</p>
                    <h2 class="section-title__heading">"We'd Love to Hear From You"</h2>
                    <ContactForm toasts=toasts />
                </div>
                <div class="split__media contact__map">
                    <iframe
                        src=MAP_EMBED_URL
                        width="100%"
                        height="100%"
                        style="border: 0; min-height: 400px"
                        allowfullscreen=""
                        {leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                        referrerpolicy="no-referrer-when-downgrade"
                        title="Silver Stone Park Resort Location"
                        data-testid="contact-map"
                    ></iframe>
                    <div class="contact__map-label">
                        <p>"Silver Stone Park Resort"</p>
                        <p>"NH-44, Khapri, Nagpur"</p>
                    </div>
                </div>
            </section>

            <section class="section section--muted" data-testid="contact-directions">
                <SectionTitle
                    eyebrow="Directions"
                    title="How to Reach Us"
                    subtitle="Conveniently located on NH-44, minutes from Nagpur"
                />
                <div class="grid grid--3">
                    {DIRECTIONS
                        .iter()
                        .map(|(title, desc, time)| view! {
                            <div class="card">
                                <h3 class="card__title">{*title}</h3>
                                <p class="card__text">{*desc}</p>
                                <p class="card__meta">{*time}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
