//! Layout shared by the weddings and corporate pages: hero, intro, services,
//! packages and the enquiry form at the bottom.

use leptos::prelude::*;

use crate::domain::a002_event_enquiry::ui::form::{EventEnquiryForm, EventPreset};
use crate::shared::components::{PageHero, SectionTitle};
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Package {
    pub name: &'static str,
    /// Guest range or duration shown under the name
    pub scope: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
}

pub struct EventPageContent {
    pub preset: EventPreset,
    /// `data-testid` prefix for page sections ("weddings", "corporate")
    pub page_id: &'static str,
    pub hero_image: &'static str,
    pub hero_eyebrow: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub intro_image: &'static str,
    pub intro_image_alt: &'static str,
    pub intro_eyebrow: &'static str,
    pub intro_title: &'static str,
    pub intro_paragraphs: [&'static str; 2],
    pub intro_stats: [(&'static str, &'static str); 2],
    pub services_title: &'static str,
    pub services: &'static [Service],
    pub packages_title: &'static str,
    pub packages: &'static [Package],
    pub form_title: &'static str,
    pub form_subtitle: &'static str,
}

impl EventPageContent {
    fn anchor(&self) -> String {
        format!("{}-enquiry-form", self.page_id)
    }
}

fn scroll_to(id: &str) {
    if let Some(element) = document().get_element_by_id(id) {
        element.scroll_into_view();
    }
}

#[component]
pub fn EventPage(content: &'static EventPageContent, toasts: ToastService) -> impl IntoView {
    let page_id = content.page_id;
    let package_prefix = content.preset.key();
    let anchor = content.anchor();

    view! {
        <div data-testid=format!("{}-page", page_id)>
            <PageHero
                image=content.hero_image
                eyebrow=content.hero_eyebrow
                title=content.hero_title
                subtitle=content.hero_subtitle
                test_id=page_id
            />

            <section class="section section--split" data-testid=format!("{}-intro", page_id)>
                <div class="split__text">
                    <p class="section-title__eyebrow">{content.intro_eyebrow}</p>
                    <h2 class="section-title__heading">{content.intro_title}</h2>
                    {content.intro_paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    <div class="split__stats">
                        {content
                            .intro_stats
                            .iter()
                            .map(|(value, label)| view! {
                                <div class="stat">
                                    <p class="stat__value">{*value}</p>
                                    <p class="stat__label">{*label}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="split__media">
                    <img src=content.intro_image alt=content.intro_image_alt />
                </div>
            </section>

            <section class="section section--muted" data-testid=format!("{}-services", page_id)>
                <SectionTitle eyebrow="What We Offer" title=content.services_title />
                <div class="grid grid--3">
                    {content
                        .services
                        .iter()
                        .map(|s| view! {
                            <div class="card card--feature">
                                <div class="card__icon">{icon(s.icon)}</div>
                                <h3 class="card__title">{s.title}</h3>
                                <p class="card__text">{s.desc}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section" data-testid=format!("{}-packages", page_id)>
                <SectionTitle eyebrow="Choose Your Package" title=content.packages_title />
                <div class="grid grid--3">
                    {content
                        .packages
                        .iter()
                        .enumerate()
                        .map(|(index, pkg)| {
                            let anchor = anchor.clone();
                            view! {
                                <div
                                    class=if pkg.featured { "package package--featured" } else { "package" }
                                    data-testid=format!("{}-package-{}", package_prefix, index)
                                >
                                    {pkg.featured.then(|| view! { <span class="package__badge">"Most Popular"</span> })}
                                    <h3 class="package__name">{pkg.name}</h3>
                                    <p class="package__scope">{pkg.scope}</p>
                                    <ul class="package__features">
                                        {pkg
                                            .features
                                            .iter()
                                            .map(|f| view! { <li>{icon("check")}<span>{*f}</span></li> })
                                            .collect_view()}
                                    </ul>
                                    <button
                                        class="button button--primary button--block"
                                        data-testid=format!("enquire-package-{}-btn", index)
                                        on:click=move |_| scroll_to(&anchor)
                                    >
                                        "Enquire Now"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id=anchor.clone() class="section section--dark" data-testid=format!("{}-enquiry", page_id)>
                <SectionTitle
                    eyebrow="Get Started"
                    title=content.form_title
                    subtitle=content.form_subtitle
                />
                <EventEnquiryForm preset=content.preset toasts=toasts />
            </section>
        </div>
    }
}
