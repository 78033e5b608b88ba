use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::booking::BookingModal;
use crate::shared::components::SectionTitle;
use crate::shared::icons::icon;
use crate::shared::images;

struct Feature {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature { icon: "award", title: "Iconic Architecture", desc: "Signature blue design on NH-44" },
    Feature { icon: "sparkles", title: "Luxury Rooms", desc: "Premium suites with modern amenities" },
    Feature { icon: "users", title: "Grand Events", desc: "Weddings & corporate celebrations" },
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    text: &'static str,
    rating: usize,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Priya Sharma",
        role: "Wedding Guest",
        text: "Our destination wedding at Silver Stone Park was absolutely magical. The staff went above and beyond!",
        rating: 5,
    },
    Testimonial {
        name: "Rajesh Kumar",
        role: "Corporate Client",
        text: "Perfect venue for our annual conference. World-class facilities and impeccable service.",
        rating: 5,
    },
    Testimonial {
        name: "Anita Deshmukh",
        role: "Family Vacation",
        text: "The swimming pools are amazing! Kids loved it. Truly a luxury experience in Nagpur.",
        rating: 5,
    },
];

fn stars(count: usize) -> impl IntoView {
    (0..count).map(|_| icon("star")).collect_view()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let booking_open = RwSignal::new(false);

    view! {
        <div data-testid="home-page">
            <section class="hero" data-testid="hero-section">
                <img class="hero__image" src=images::HERO alt="Silver Stone Park Resort" />
                <div class="hero__overlay"></div>
                <div class="hero__content">
                    <p class="hero__eyebrow">"Welcome to"</p>
                    <h1 class="hero__title">
                        "Nagpur's Most Iconic "<span class="hero__accent">"Luxury Resort"</span>
                    </h1>
                    <p class="hero__tagline">
                        "Luxury Stays · Destination Weddings · Corporate Offsites"
                    </p>
                    <div class="hero__rating">
                        {stars(5)}
                        <strong>"4.8"</strong>
                        <span>"Rating"</span>
                    </div>
                    <div class="hero__actions">
                        <button
                            class="button button--primary"
                            data-testid="hero-book-stay-btn"
                            on:click=move |_| booking_open.set(true)
                        >
                            "Book Your Stay"
                        </button>
                        <A href="/weddings" attr:class="button button--outline" attr:data-testid="hero-plan-event-btn">
                            "Plan Your Event"
                        </A>
                    </div>
                </div>
                <div class="hero__location">
                    {icon("map-pin")}
                    <span>"NH-44, Khapri, Nagpur"</span>
                </div>
            </section>

            <section class="section" data-testid="features-section">
                <SectionTitle eyebrow="Why Choose Us" title="An Experience Like No Other" />
                <div class="grid grid--3">
                    {FEATURES
                        .iter()
                        .map(|f| view! {
                            <div class="card card--feature">
                                <div class="card__icon">{icon(f.icon)}</div>
                                <h3 class="card__title">{f.title}</h3>
                                <p class="card__text">{f.desc}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section section--split" data-testid="about-preview-section">
                <div class="split__media">
                    <img src=images::AERIAL alt="Resort Aerial View" />
                    <div class="split__badge">
                        <strong>"10+"</strong>
                        <p>"Years of Excellence"</p>
                    </div>
                </div>
                <div class="split__text">
                    <p class="section-title__eyebrow">"About The Resort"</p>
                    <h2 class="section-title__heading">"A Landmark of Luxury in Central India"</h2>
                    <p>
                        "Silver Stone Park Resort stands as Nagpur's most iconic destination, \
                         featuring signature blue architecture that has become a landmark on NH-44. \
                         Our resort offers an unparalleled blend of modern luxury and warm hospitality."
                    </p>
                    <p>
                        "With world-class swimming pools, premium suites, and expansive event spaces, \
                         we cater to discerning travelers, couples planning destination weddings, \
                         and corporations seeking exceptional offsite venues."
                    </p>
                    <A href="/about" attr:class="button button--outline" attr:data-testid="about-learn-more-btn">
                        "Discover Our Story"
                    </A>
                </div>
            </section>

            <section class="section" data-testid="rooms-preview-section">
                <SectionTitle eyebrow="Accommodations" title="Luxury Rooms & Suites" />
                <div class="grid grid--2">
                    <RoomPreview
                        image=images::ROOM_SUITE
                        title="Premium Suite"
                        details="Marble flooring · Modern amenities · City view"
                    />
                    <RoomPreview
                        image=images::ROOM_LOUNGE
                        title="Executive Lounge"
                        details="Living area · Business amenities · Premium comfort"
                    />
                </div>
                <div class="section__actions">
                    <A href="/rooms" attr:class="button button--primary" attr:data-testid="view-all-rooms-btn">
                        "View All Rooms"
                    </A>
                </div>
            </section>

            <section class="section" data-testid="experiences-section">
                <SectionTitle eyebrow="Experiences" title="Celebrate Life's Moments" />
                <div class="grid grid--2">
                    <div class="experience">
                        <img src=images::WEDDING alt="Weddings" />
                        <div class="experience__body">
                            <p class="experience__eyebrow">"Destination"</p>
                            <h3>"Weddings & Celebrations"</h3>
                            <p>
                                "Create unforgettable memories with our grand wedding venues, \
                                 expert planning, and world-class hospitality."
                            </p>
                            <A href="/weddings" attr:class="button button--primary" attr:data-testid="explore-weddings-btn">
                                "Plan Your Wedding"
                            </A>
                        </div>
                    </div>
                    <div class="experience">
                        <img src=images::POOL alt="Corporate Events" />
                        <div class="experience__body">
                            <p class="experience__eyebrow">"Business"</p>
                            <h3>"Corporate Offsites"</h3>
                            <p>
                                "Elevate your corporate events with our premium conference facilities, \
                                 team-building activities, and executive amenities."
                            </p>
                            <A href="/corporate" attr:class="button button--primary" attr:data-testid="explore-corporate-btn">
                                "Plan Your Event"
                            </A>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section section--muted" data-testid="testimonials-section">
                <SectionTitle eyebrow="Guest Reviews" title="What Our Guests Say" />
                <div class="grid grid--3">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! {
                            <blockquote class="card testimonial">
                                <div class="testimonial__stars">{stars(t.rating)}</div>
                                <p class="testimonial__text">{format!("\"{}\"", t.text)}</p>
                                <p class="testimonial__name">{t.name}</p>
                                <p class="testimonial__role">{t.role}</p>
                            </blockquote>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta" data-testid="cta-section">
                <img class="cta__image" src=images::HERO alt="" />
                <div class="cta__content">
                    <p class="section-title__eyebrow">"Ready to Experience Luxury?"</p>
                    <h2 class="cta__title">"Book Your Unforgettable Stay Today"</h2>
                    <p>
                        "Whether it's a relaxing getaway, a grand celebration, or a productive offsite, \
                         Silver Stone Park Resort promises an experience beyond expectations."
                    </p>
                    <div class="cta__actions">
                        <button
                            class="button button--primary"
                            data-testid="cta-book-now-btn"
                            on:click=move |_| booking_open.set(true)
                        >
                            "Book Your Stay"
                        </button>
                        <A href="/contact" attr:class="button button--outline" attr:data-testid="cta-contact-btn">
                            "Contact Us"
                        </A>
                    </div>
                </div>
            </section>

            <Show when=move || booking_open.get()>
                <BookingModal on_close=Callback::new(move |_| booking_open.set(false)) />
            </Show>
        </div>
    }
}

#[component]
fn RoomPreview(image: &'static str, title: &'static str, details: &'static str) -> impl IntoView {
    view! {
        <div class="room-preview">
            <img src=image alt=title />
            <div class="room-preview__body">
                <h3>{title}</h3>
                <p>{details}</p>
                <A href="/rooms" attr:class="room-preview__link">"View Details →"</A>
            </div>
        </div>
    }
}
