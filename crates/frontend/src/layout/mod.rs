pub mod booking;
pub mod footer;
pub mod header;

use leptos::prelude::*;

use footer::Footer;
use header::Header;

/// Page frame: fixed header, routed content, footer
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <Header />
            <main class="site__main">{children()}</main>
            <Footer />
        </div>
    }
}
