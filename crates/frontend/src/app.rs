use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastService, Toaster};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One toast queue for the whole site, handed down to the forms that use it
    let toasts = ToastService::new();

    view! {
        <AppRoutes toasts=toasts />
        <Toaster toasts=toasts />
    }
}
