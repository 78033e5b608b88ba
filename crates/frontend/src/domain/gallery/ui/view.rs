use leptos::ev;
use leptos::prelude::*;

use crate::domain::gallery::catalog::GalleryFilter;
use crate::domain::gallery::controller::GalleryController;
use crate::shared::icons::icon;

/// Filter buttons, photo grid and lightbox. The controller state lives here
/// and nowhere else.
#[component]
pub fn Gallery() -> impl IntoView {
    let gallery = RwSignal::new(GalleryController::default());

    let filter_buttons = GalleryFilter::options()
        .into_iter()
        .map(|filter| {
            let is_active = move || gallery.with(|g| g.active() == filter);
            view! {
                <button
                    class=move || if is_active() { "gallery__filter gallery__filter--active" } else { "gallery__filter" }
                    data-testid=format!("filter-{}", filter.code())
                    on:click=move |_| gallery.update(|g| g.set_filter(filter))
                >
                    {filter.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="gallery">
            <div class="gallery__filters">{filter_buttons}</div>
            <div class="gallery__grid">
                <For
                    each=move || gallery.with(|g| g.visible().into_iter().enumerate().collect::<Vec<_>>())
                    key=|(index, item)| (*index, item.source)
                    children=move |(index, item)| {
                        view! {
                            <figure
                                class="gallery__item"
                                data-testid=format!("gallery-item-{}", index)
                                on:click=move |_| gallery.update(|g| {
                                    if let Err(e) = g.open(index) {
                                        log::warn!("Cannot open photo: {}", e);
                                    }
                                })
                            >
                                <img src=item.source alt=item.title loading="lazy" />
                                <figcaption class="gallery__caption">
                                    <p>{item.title}</p>
                                    <span>{item.category.label()}</span>
                                </figcaption>
                            </figure>
                        }
                    }
                />
            </div>
            <Show when=move || gallery.with(|g| g.is_open())>
                <Lightbox gallery=gallery />
            </Show>
        </div>
    }
}

/// Full-screen viewer. Escape closes, arrow keys move through the current view.
#[component]
fn Lightbox(gallery: RwSignal<GalleryController>) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        match event.key().as_str() {
            "Escape" => gallery.update(|g| g.close()),
            "ArrowLeft" => gallery.update(|g| g.previous()),
            "ArrowRight" => gallery.update(|g| g.next()),
            _ => {}
        }
    });
    on_cleanup(move || handle.remove());

    let close = move |_: ev::MouseEvent| gallery.update(|g| g.close());
    let previous = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        gallery.update(|g| g.previous());
    };
    let next = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        gallery.update(|g| g.next());
    };

    view! {
        <div class="lightbox" data-testid="gallery-lightbox" on:click=close>
            <button class="lightbox__close" aria-label="Close" data-testid="close-lightbox" on:click=close>
                {icon("x")}
            </button>
            <button class="lightbox__nav lightbox__nav--prev" aria-label="Previous photo" data-testid="lightbox-prev" on:click=previous>
                {icon("chevron-left")}
            </button>
            <figure class="lightbox__content" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {move || gallery.with(|g| g.current()).map(|item| view! {
                    <img class="lightbox__image" src=item.source alt=item.title />
                    <figcaption class="lightbox__title">{item.title}</figcaption>
                })}
                <p class="lightbox__counter">{move || gallery.with(|g| g.counter())}</p>
            </figure>
            <button class="lightbox__nav lightbox__nav--next" aria-label="Next photo" data-testid="lightbox-next" on:click=next>
                {icon("chevron-right")}
            </button>
        </div>
    }
}
