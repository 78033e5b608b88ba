use leptos::prelude::*;

use super::service::ToastService;
use crate::shared::icons::icon;

/// Top-right stack of notifications; a click dismisses one early
#[component]
pub fn Toaster(toasts: ToastService) -> impl IntoView {
    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let kind = toast.notification.kind;
                    let icon_name = match kind {
                        super::ToastKind::Success => "check",
                        super::ToastKind::Error => "alert",
                    };
                    view! {
                        <div
                            class=format!("toast {}", kind.css_class())
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {icon(icon_name)}
                            <span class="toast__message">{toast.notification.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
