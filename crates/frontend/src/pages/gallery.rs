use leptos::prelude::*;

use crate::domain::gallery::ui::Gallery;
use crate::shared::components::PageHero;
use crate::shared::images;

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <div data-testid="gallery-page">
            <PageHero image=images::HERO eyebrow="Visual Tour" title="Gallery" test_id="gallery" />
            <section class="section">
                <Gallery />
            </section>
        </div>
    }
}
