use leptos::prelude::*;

/// Full-width image banner at the top of every inner page
#[component]
pub fn PageHero(
    #[prop(into)] title: String,
    #[prop(into)] eyebrow: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    image: &'static str,
    /// Used for `data-testid="{test_id}-hero"`
    test_id: &'static str,
) -> impl IntoView {
    view! {
        <section class="page-hero" data-testid=format!("{}-hero", test_id)>
            <img class="page-hero__image" src=image alt=title.clone() />
            <div class="page-hero__overlay"></div>
            <div class="page-hero__content">
                <p class="page-hero__eyebrow">{eyebrow}</p>
                <h1 class="page-hero__title">{title}</h1>
                {move || subtitle.get().map(|s| view! { <p class="page-hero__subtitle">{s}</p> })}
            </div>
        </section>
    }
}

/// Small gold eyebrow line above a section heading
#[component]
pub fn SectionTitle(
    #[prop(into)] eyebrow: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="section-title">
            <p class="section-title__eyebrow">{eyebrow}</p>
            <h2 class="section-title__heading">{title}</h2>
            {move || subtitle.get().map(|s| view! { <p class="section-title__subtitle">{s}</p> })}
        </div>
    }
}
