use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::{PageHero, SectionTitle};
use crate::shared::icons::icon;
use crate::shared::images;

struct Amenity {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    features: [&'static str; 4],
}

static AMENITIES: [Amenity; 6] = [
    Amenity {
        icon: "sparkles",
        title: "Swimming Pools",
        desc: "Multiple outdoor pools including a competition-size pool and leisure pool with water features",
        features: ["Olympic-size Pool", "Kids Pool", "Poolside Cabanas", "Pool Bar"],
    },
    Amenity {
        icon: "heart",
        title: "Spa & Wellness",
        desc: "Rejuvenate your senses with our world-class spa treatments and wellness services",
        features: ["Massage Therapy", "Sauna", "Steam Room", "Yoga Sessions"],
    },
    Amenity {
        icon: "award",
        title: "Fitness Center",
        desc: "State-of-the-art equipment and personal training services",
        features: ["Modern Equipment", "Personal Trainers", "24/7 Access", "Group Classes"],
    },
    Amenity {
        icon: "star",
        title: "Fine Dining",
        desc: "Multiple restaurants offering local and international cuisines",
        features: ["Multi-cuisine Restaurant", "Pool Cafe", "Room Service", "Private Dining"],
    },
    Amenity {
        icon: "map-pin",
        title: "Parking & Transport",
        desc: "Complimentary parking and airport transfer services",
        features: ["Free Valet Parking", "Airport Shuttle", "Car Rental", "EV Charging"],
    },
    Amenity {
        icon: "users",
        title: "Event Spaces",
        desc: "Versatile venues for weddings, conferences, and celebrations",
        features: ["Banquet Halls", "Conference Rooms", "Outdoor Venues", "AV Equipment"],
    },
];

static POOL_FEATURES: [&str; 5] = [
    "Olympic-size Competition Pool",
    "Family-friendly Leisure Pool",
    "Kids' Splash Zone",
    "Poolside Cabanas & Sun Loungers",
    "Pool Bar & Refreshments",
];

const QUICK_SERVICES: [&str; 4] = ["Free WiFi", "Free Parking", "24/7 Service", "Concierge"];

fn bullet_list(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="bullet-list">
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn AmenitiesPage() -> impl IntoView {
    view! {
        <div data-testid="amenities-page">
            <PageHero
                image=images::POOL
                eyebrow="Facilities"
                title="Pool & Amenities"
                test_id="amenities"
            />

            <section class="section section--split" data-testid="pool-section">
                <div class="split__text">
                    <p class="section-title__eyebrow">"Signature Feature"</p>
                    <h2 class="section-title__heading">"World-Class Swimming Pools"</h2>
                    <p>
                        "Our resort features multiple swimming pools designed for both recreation \
                         and competitive swimming. The main pool spans Olympic dimensions, while \
                         our leisure pools offer water features and relaxation areas."
                    </p>
                    {bullet_list(&POOL_FEATURES)}
                    <p class="note">"Pool Hours: 6:00 AM - 9:00 PM | Towels provided"</p>
                </div>
                <div class="split__media">
                    <img src=images::POOL alt="Main Pool" />
                </div>
            </section>

            <section class="section section--muted" data-testid="spa-dining-section">
                <SectionTitle eyebrow="Indulge" title="Spa & Dining" />
                <div class="grid grid--2">
                    <div class="experience">
                        <img src=images::SPA alt="Spa" />
                        <div class="experience__body">
                            <h3>"Spa & Wellness"</h3>
                            <p>"Relax and rejuvenate with our signature treatments"</p>
                        </div>
                    </div>
                    <div class="experience">
                        <img src=images::DINING alt="Dining" />
                        <div class="experience__body">
                            <h3>"Fine Dining"</h3>
                            <p>"Culinary excellence with local and international cuisines"</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section" data-testid="all-amenities-section">
                <SectionTitle eyebrow="Everything You Need" title="Resort Amenities" />
                <div class="grid grid--3">
                    {AMENITIES
                        .iter()
                        .enumerate()
                        .map(|(index, amenity)| view! {
                            <div class="card" data-testid=format!("amenity-card-{}", index)>
                                <div class="card__icon">{icon(amenity.icon)}</div>
                                <h3 class="card__title">{amenity.title}</h3>
                                <p class="card__text">{amenity.desc}</p>
                                {bullet_list(&amenity.features)}
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section section--dark" data-testid="quick-services">
                <div class="grid grid--4">
                    {QUICK_SERVICES
                        .iter()
                        .map(|label| view! {
                            <div class="stat">
                                <div class="stat__icon">{icon("check")}</div>
                                <p class="stat__label">{*label}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta cta--plain" data-testid="amenities-cta">
                <div class="cta__content">
                    <h2 class="cta__title">"Experience Our World-Class Facilities"</h2>
                    <p>"Every amenity at Silver Stone Park Resort is designed to enhance your stay."</p>
                    <A href="/contact" attr:class="button button--primary" attr:data-testid="amenities-contact-btn">
                        "Make an Enquiry"
                    </A>
                </div>
            </section>
        </div>
    }
}
