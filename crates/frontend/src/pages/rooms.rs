use leptos::prelude::*;

use crate::layout::booking::BookingModal;
use crate::shared::components::{PageHero, SectionTitle};
use crate::shared::icons::icon;
use crate::shared::images;

#[derive(Debug, Clone, Copy)]
struct Room {
    name: &'static str,
    description: &'static str,
    image: &'static str,
    size: &'static str,
    guests: u8,
    amenities: &'static [&'static str],
    price: &'static str,
}

const ROOMS: [Room; 4] = [
    Room {
        name: "Deluxe Room",
        description: "Elegant comfort with modern amenities and city views",
        image: images::ROOM_SUITE,
        size: "350 sq ft",
        guests: 2,
        amenities: &["King Bed", "City View", "Rain Shower", "Work Desk"],
        price: "₹6,500",
    },
    Room {
        name: "Premium Suite",
        description: "Spacious luxury with marble flooring and premium furnishings",
        image: images::ROOM_SUITE,
        size: "500 sq ft",
        guests: 3,
        amenities: &["King Bed", "Living Area", "Bathtub", "Mini Bar"],
        price: "₹9,500",
    },
    Room {
        name: "Executive Suite",
        description: "Ultimate luxury with separate living space and executive amenities",
        image: images::ROOM_LOUNGE,
        size: "700 sq ft",
        guests: 4,
        amenities: &["King Bed", "Living Room", "Dining Area", "Jacuzzi"],
        price: "₹14,500",
    },
    Room {
        name: "Presidential Suite",
        description: "The pinnacle of luxury with panoramic views and butler service",
        image: images::ROOM_LOUNGE,
        size: "1200 sq ft",
        guests: 4,
        amenities: &["Master Bedroom", "Private Pool", "Butler Service", "Personal Chef"],
        price: "₹25,000",
    },
];

const ROOM_AMENITIES: [&str; 8] = [
    "High-Speed WiFi",
    "Free Parking",
    "Coffee Maker",
    "Smart TV",
    "Premium Bath",
    "Climate Control",
    "Room Service",
    "Concierge",
];

#[component]
pub fn RoomsPage() -> impl IntoView {
    let booking_open = RwSignal::new(false);
    let open_booking = move |_| booking_open.set(true);

    view! {
        <div data-testid="rooms-page">
            <PageHero
                image=images::ROOM_SUITE
                eyebrow="Accommodations"
                title="Rooms & Suites"
                test_id="rooms"
            />

            <section class="section" data-testid="rooms-intro">
                <SectionTitle
                    eyebrow="Luxury Living"
                    title="Experience Unparalleled Comfort"
                    subtitle="Each room at Silver Stone Park Resort is a sanctuary of luxury, featuring \
                              contemporary design, premium amenities, and thoughtful touches that ensure \
                              your stay is nothing short of exceptional."
                />
            </section>

            <section class="section" data-testid="rooms-grid">
                <div class="grid grid--2">
                    {ROOMS
                        .iter()
                        .enumerate()
                        .map(|(index, room)| view! {
                            <article class="room-card" data-testid=format!("room-card-{}", index)>
                                <div class="room-card__media">
                                    <img src=room.image alt=room.name />
                                    <div class="room-card__price">
                                        <span>{room.price}</span>
                                        <span class="room-card__per">" /night"</span>
                                    </div>
                                </div>
                                <div class="room-card__body">
                                    <p class="room-card__meta">
                                        <span>{room.size}</span>
                                        <span>" • "</span>
                                        {icon("users")}
                                        {format!(" Up to {} guests", room.guests)}
                                    </p>
                                    <h3 class="room-card__name">{room.name}</h3>
                                    <p class="room-card__description">{room.description}</p>
                                    <ul class="room-card__amenities">
                                        {room.amenities.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
                                    </ul>
                                    <button
                                        class="button button--primary button--block"
                                        data-testid=format!("book-room-{}-btn", index)
                                        on:click=open_booking
                                    >
                                        "Book This Room"
                                    </button>
                                </div>
                            </article>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section section--muted" data-testid="rooms-amenities">
                <SectionTitle eyebrow="Included" title="Room Amenities" />
                <div class="grid grid--4">
                    {ROOM_AMENITIES
                        .iter()
                        .map(|name| view! {
                            <div class="amenity-chip">
                                {icon("check")}
                                <p>{*name}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta cta--plain" data-testid="rooms-cta">
                <div class="cta__content">
                    <h2 class="cta__title">"Ready to Experience Luxury?"</h2>
                    <p>"Book your stay now and discover the comfort of Silver Stone Park Resort."</p>
                    <button
                        class="button button--primary"
                        data-testid="rooms-cta-book-btn"
                        on:click=open_booking
                    >
                        "Check Availability"
                    </button>
                </div>
            </section>

            <Show when=move || booking_open.get()>
                <BookingModal on_close=Callback::new(move |_| booking_open.set(false)) />
            </Show>
        </div>
    }
}
