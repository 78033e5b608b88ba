use leptos::prelude::*;

use super::event::{EventPage, EventPageContent, Package, Service};
use crate::domain::a002_event_enquiry::ui::form::EventPreset;
use crate::shared::images;
use crate::shared::toast::ToastService;

static WEDDINGS: EventPageContent = EventPageContent {
    preset: EventPreset::Wedding,
    page_id: "weddings",
    hero_image: images::WEDDING,
    hero_eyebrow: "Destination Weddings",
    hero_title: "Weddings & Celebrations",
    hero_subtitle: "Create unforgettable memories at Nagpur's premier wedding destination",
    intro_image: images::WEDDING_RECEPTION,
    intro_image_alt: "Wedding Setup",
    intro_eyebrow: "Your Dream Wedding",
    intro_title: "Where Love Stories Become Legends",
    intro_paragraphs: [
        "Silver Stone Park Resort offers the perfect backdrop for your dream wedding. \
         Our iconic blue architecture, sprawling lawns, and luxurious banquet halls \
         provide versatile venues for celebrations of every scale.",
        "From intimate gatherings to grand celebrations with 500+ guests, our \
         dedicated wedding planners ensure every detail is perfect, allowing you \
         to focus on what matters most: celebrating your love.",
    ],
    intro_stats: [("200+", "Weddings Hosted"), ("500+", "Guest Capacity")],
    services_title: "Wedding Services",
    services: &[
        Service { icon: "heart", title: "Wedding Planning", desc: "Dedicated wedding planners for your special day" },
        Service { icon: "star", title: "Photography", desc: "Professional photography and videography services" },
        Service { icon: "sparkles", title: "Entertainment", desc: "DJ, live bands, and traditional music arrangements" },
        Service { icon: "award", title: "Catering", desc: "Multi-cuisine menus customized to your preferences" },
        Service { icon: "users", title: "Guest Management", desc: "Accommodation for up to 500+ guests" },
        Service { icon: "sparkles", title: "Decor & Design", desc: "Stunning floral arrangements and themed decor" },
    ],
    packages_title: "Wedding Packages",
    packages: &[
        Package {
            name: "Intimate Celebration",
            scope: "Up to 100 Guests",
            features: &["Garden Venue", "Basic Decor", "2 Menus", "Photography"],
            featured: false,
        },
        Package {
            name: "Grand Wedding",
            scope: "Up to 300 Guests",
            features: &["Banquet Hall", "Premium Decor", "5 Menus", "Photo + Video", "DJ Night"],
            featured: true,
        },
        Package {
            name: "Royal Affair",
            scope: "Up to 500+ Guests",
            features: &["Full Resort Booking", "Luxury Decor", "Custom Menus", "Full Media Coverage", "3-Day Package"],
            featured: false,
        },
    ],
    form_title: "Plan Your Wedding",
    form_subtitle: "Fill out the form below and our wedding specialists will contact you",
};

#[component]
pub fn WeddingsPage(toasts: ToastService) -> impl IntoView {
    view! { <EventPage content=&WEDDINGS toasts=toasts /> }
}
