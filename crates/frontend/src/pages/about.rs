use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::{PageHero, SectionTitle};
use crate::shared::icons::icon;
use crate::shared::images;

const STATS: [(&str, &str, &str); 4] = [
    ("building", "50+", "Luxury Rooms"),
    ("users", "1000+", "Happy Guests"),
    ("award", "4.8★", "Rating"),
    ("clock", "10+", "Years"),
];

const VALUES: [(&str, &str); 3] = [
    (
        "Uncompromising Luxury",
        "Every detail, from the marble flooring to the finest linens, is chosen to deliver an exceptional experience.",
    ),
    (
        "Warm Hospitality",
        "Our staff is trained to anticipate your needs and make you feel truly at home.",
    ),
    (
        "Memorable Moments",
        "Whether celebrating a milestone or seeking relaxation, we create memories that last a lifetime.",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div data-testid="about-page">
            <PageHero
                image=images::AERIAL
                eyebrow="Our Story"
                title="About Silver Stone Park"
                test_id="about"
            />

            <section class="section section--split" data-testid="about-story">
                <div class="split__text">
                    <p class="section-title__eyebrow">"The Legacy"</p>
                    <h2 class="section-title__heading">"A Vision of Luxury"</h2>
                    <p>
                        "Silver Stone Park Resort was born from a vision to create Central India's \
                         most iconic hospitality destination. Our signature blue architecture has \
                         become a landmark on the bustling NH-44, welcoming travelers from across \
                         the nation."
                    </p>
                    <p>
                        "Every element of our resort has been meticulously designed to offer an \
                         unparalleled blend of modern luxury and traditional Indian hospitality. \
                         From our sprawling swimming pools to our elegantly appointed suites, \
                         every corner tells a story of excellence."
                    </p>
                    <p>
                        "We take pride in hosting life's most cherished moments, from intimate \
                         family gatherings to grand destination weddings and prestigious \
                         corporate events. Our dedicated team ensures every guest experiences \
                         the warmth and grandeur that defines Silver Stone Park."
                    </p>
                </div>
                <div class="split__media">
                    <img src=images::HERO alt="Resort Architecture" />
                    <div class="split__badge">
                        <strong>"10+ Years"</strong>
                        <p>"Established"</p>
                    </div>
                </div>
            </section>

            <section class="section section--dark" data-testid="about-stats">
                <div class="grid grid--4">
                    {STATS
                        .iter()
                        .map(|(name, value, label)| view! {
                            <div class="stat">
                                <div class="stat__icon">{icon(name)}</div>
                                <p class="stat__value">{*value}</p>
                                <p class="stat__label">{*label}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section section--split" data-testid="about-architecture">
                <div class="split__media">
                    <img src=images::POOL alt="Swimming Pool" />
                </div>
                <div class="split__text">
                    <p class="section-title__eyebrow">"Design Philosophy"</p>
                    <h2 class="section-title__heading">"Iconic Blue Architecture"</h2>
                    <p>
                        "Our distinctive blue facade is more than just aesthetics. It represents \
                         the depth of our commitment to excellence. The modern glass and concrete \
                         structure harmonizes with lush landscaping to create a resort that's both \
                         visually stunning and environmentally conscious."
                    </p>
                    <p>
                        "The architectural design maximizes natural light while offering panoramic \
                         views of the surrounding greenery. Every suite and public space has been \
                         thoughtfully positioned to provide guests with the perfect balance of \
                         privacy and connection with nature."
                    </p>
                    <A href="/gallery" attr:class="button button--outline" attr:data-testid="view-gallery-btn">
                        "View Gallery"
                    </A>
                </div>
            </section>

            <section class="section section--muted" data-testid="about-values">
                <SectionTitle eyebrow="Our Promise" title="The Silver Stone Experience" />
                <div class="grid grid--3">
                    {VALUES
                        .iter()
                        .map(|(title, desc)| view! {
                            <div class="card">
                                <h3 class="card__title">{*title}</h3>
                                <p class="card__text">{*desc}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta cta--plain" data-testid="about-cta">
                <div class="cta__content">
                    <h2 class="cta__title">"Experience the Difference"</h2>
                    <p>"Discover why Silver Stone Park Resort is Nagpur's premier luxury destination."</p>
                    <A href="/contact" attr:class="button button--primary" attr:data-testid="about-contact-btn">
                        "Get in Touch"
                    </A>
                </div>
            </section>
        </div>
    }
}
