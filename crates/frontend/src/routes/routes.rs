use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::layout::Layout;
use crate::pages::{
    AboutPage, AmenitiesPage, ContactPage, CorporatePage, GalleryPage, HomePage, RoomsPage,
    WeddingsPage,
};
use crate::shared::toast::ToastService;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="section not-found" data-testid="not-found-page">
            <h1>"Page not found"</h1>
            <A href="/" attr:class="button button--primary">
                "Back to Home"
            </A>
        </section>
    }
}

/// Every page renders inside the shared header/footer layout. Pages that host
/// an enquiry form get the toast service so they can report the outcome.
#[component]
pub fn AppRoutes(toasts: ToastService) -> impl IntoView {
    view! {
        <Router>
            <Layout>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/rooms") view=RoomsPage />
                    <Route path=path!("/amenities") view=AmenitiesPage />
                    <Route path=path!("/weddings") view=move || view! { <WeddingsPage toasts=toasts /> } />
                    <Route path=path!("/corporate") view=move || view! { <CorporatePage toasts=toasts /> } />
                    <Route path=path!("/gallery") view=GalleryPage />
                    <Route path=path!("/contact") view=move || view! { <ContactPage toasts=toasts /> } />
                </Routes>
            </Layout>
        </Router>
    }
}
