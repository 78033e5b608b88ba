use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::layout::booking::BookingModal;
use crate::shared::icons::icon;
use crate::shared::resort::{is_active, NAV_LINKS, NAME, PHONE_DISPLAY, PHONE_HREF};

/// Scroll offset after which the header gets its solid background
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

#[component]
pub fn Header() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);
    let booking_open = RwSignal::new(false);
    let pathname = use_location().pathname;

    let handle = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        scrolled.set(is_scrolled(y));
    });
    on_cleanup(move || handle.remove());

    // Navigating closes the mobile menu
    Effect::new(move |_| {
        pathname.track();
        menu_open.set(false);
    });

    let nav_links = move |base: &'static str| {
        NAV_LINKS
            .iter()
            .map(|link| {
                let link = *link;
                let class = move || {
                    if is_active(&link, &pathname.get()) {
                        format!("{} {}--active", base, base)
                    } else {
                        base.to_string()
                    }
                };
                view! {
                    <A href=link.path attr:class=class>
                        {link.name}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <header
            data-testid="main-header"
            class=move || if scrolled.get() { "header header--scrolled" } else { "header" }
        >
            <div class="header__content">
                <A href="/" attr:class="header__logo" attr:data-testid="logo-link">
                    <span class="header__title">{NAME}</span>
                    <span class="header__subtitle">"Resort"</span>
                </A>

                <nav class="header__nav" data-testid="desktop-nav">
                    {nav_links("header__link")}
                </nav>

                <div class="header__actions">
                    <a class="header__phone" href=PHONE_HREF data-testid="phone-link">
                        {icon("phone")}
                        <span>{PHONE_DISPLAY}</span>
                    </a>
                    <button
                        class="button button--primary"
                        data-testid="book-now-btn"
                        on:click=move |_| booking_open.set(true)
                    >
                        "Book Now"
                    </button>
                </div>

                <button
                    class="button button--ghost header__menu-toggle"
                    aria-label="Toggle menu"
                    data-testid="mobile-menu-toggle"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="header__mobile-nav" data-testid="mobile-menu">
                    {nav_links("header__mobile-link")}
                    <button
                        class="button button--primary button--block"
                        data-testid="mobile-book-now-btn"
                        on:click=move |_| {
                            menu_open.set(false);
                            booking_open.set(true);
                        }
                    >
                        "Book Your Stay"
                    </button>
                </nav>
            </Show>
        </header>

        <Show when=move || booking_open.get()>
            <BookingModal on_close=Callback::new(move |_| booking_open.set(false)) />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }
}
