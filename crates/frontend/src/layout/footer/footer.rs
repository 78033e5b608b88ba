use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::shared::resort::{ADDRESS_LINES, EMAIL, EMAIL_HREF, NAME, PHONE_DISPLAY, PHONE_HREF};

const QUICK_LINKS: [(&str, &str); 5] = [
    ("Rooms & Suites", "/rooms"),
    ("Weddings", "/weddings"),
    ("Corporate Events", "/corporate"),
    ("Gallery", "/gallery"),
    ("Contact", "/contact"),
];

const SOCIAL: [&str; 3] = ["Instagram", "Facebook", "YouTube"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer" data-testid="main-footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <h3 class="footer__title">{NAME}</h3>
                    <p class="footer__subtitle">"Resort"</p>
                    <p class="footer__text">
                        "Nagpur's most iconic luxury resort, offering world-class amenities \
                         for memorable stays, destination weddings, and corporate events."
                    </p>
                </div>

                <div>
                    <h4 class="footer__heading">"Quick Links"</h4>
                    <ul class="footer__list">
                        {QUICK_LINKS
                            .iter()
                            .map(|(name, path)| view! { <li><A href=*path>{*name}</A></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4 class="footer__heading">"Contact Us"</h4>
                    <ul class="footer__list">
                        {ADDRESS_LINES.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                        <li><a href=PHONE_HREF>{icon("phone")}" "{PHONE_DISPLAY}</a></li>
                        <li><a href=EMAIL_HREF>{icon("mail")}" "{EMAIL}</a></li>
                    </ul>
                </div>

                <div>
                    <h4 class="footer__heading">"Follow Us"</h4>
                    <div class="footer__social">
                        {SOCIAL
                            .iter()
                            .map(|name| view! {
                                <span
                                    class="footer__social-badge"
                                    title=*name
                                    data-testid=format!("social-{}", name.to_lowercase())
                                >
                                    {name.chars().next().unwrap_or_default().to_string()}
                                </span>
                            })
                            .collect_view()}
                    </div>
                    <div class="footer__rating">
                        {(0..5).map(|_| icon("star")).collect_view()}
                        <strong>"4.8"</strong>
                        <span>"Rating"</span>
                    </div>
                </div>
            </div>

            <div class="footer__bottom">
                <p>"© 2025 Silver Stone Park Resort. All rights reserved."</p>
            </div>
        </footer>
    }
}
