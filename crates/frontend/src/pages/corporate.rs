use leptos::prelude::*;

use super::event::{EventPage, EventPageContent, Package, Service};
use crate::domain::a002_event_enquiry::ui::form::EventPreset;
use crate::shared::images;
use crate::shared::toast::ToastService;

static CORPORATE: EventPageContent = EventPageContent {
    preset: EventPreset::Corporate,
    page_id: "corporate",
    hero_image: images::CORPORATE,
    hero_eyebrow: "Business Events",
    hero_title: "Corporate Offsites & Events",
    hero_subtitle: "Elevate your corporate events with world-class facilities",
    intro_image: images::CONFERENCE,
    intro_image_alt: "Conference Room",
    intro_eyebrow: "Premium Venues",
    intro_title: "Where Business Meets Luxury",
    intro_paragraphs: [
        "Silver Stone Park Resort provides the ideal setting for corporate \
         conferences, team offsites, and executive retreats. Our modern \
         facilities combined with luxury amenities create a productive yet \
         relaxing environment.",
        "From boardroom meetings to large conferences, our versatile spaces \
         can be customized to meet your specific requirements. Let your team \
         recharge while achieving your business objectives.",
    ],
    intro_stats: [("50+", "Corporate Events"), ("200+", "Max Capacity")],
    services_title: "Corporate Facilities",
    services: &[
        Service { icon: "building", title: "Conference Rooms", desc: "Multiple halls with capacity up to 200" },
        Service { icon: "award", title: "AV Equipment", desc: "State-of-the-art presentation systems" },
        Service { icon: "sparkles", title: "High-Speed WiFi", desc: "Enterprise-grade connectivity" },
        Service { icon: "star", title: "Refreshments", desc: "Tea breaks and catering services" },
        Service { icon: "users", title: "Team Building", desc: "Outdoor activities and games" },
        Service { icon: "map-pin", title: "Transportation", desc: "Airport transfers and local transport" },
    ],
    packages_title: "Corporate Packages",
    packages: &[
        Package {
            name: "Day Conference",
            scope: "Full Day",
            features: &["Conference Hall", "AV Equipment", "2 Tea Breaks", "Lunch", "WiFi"],
            featured: false,
        },
        Package {
            name: "Corporate Offsite",
            scope: "2-3 Days",
            features: &["Accommodation", "Meeting Rooms", "All Meals", "Team Activities", "Gala Dinner"],
            featured: true,
        },
        Package {
            name: "Executive Retreat",
            scope: "Custom",
            features: &["Premium Suites", "Private Meetings", "Spa Access", "Custom Menus", "Dedicated Staff"],
            featured: false,
        },
    ],
    form_title: "Plan Your Corporate Event",
    form_subtitle: "Fill out the form below and our events team will contact you",
};

#[component]
pub fn CorporatePage(toasts: ToastService) -> impl IntoView {
    view! { <EventPage content=&CORPORATE toasts=toasts /> }
}
