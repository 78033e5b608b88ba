use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::queue::{Notification, Toast, ToastQueue, TOAST_DURATION_MS};
use crate::shared::enquiry::Notifier;

/// Handle to the on-screen toasts. Created once in `App` and passed down
/// as a prop to whatever needs to notify.
#[derive(Debug, Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    /// Shows the notification and schedules its removal
    pub fn push(&self, notification: Notification) {
        let Some(id) = self.queue.try_update(|q| q.push(notification)) else {
            return;
        };
        let service = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            service.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|q| q.dismiss(id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn notify(&self, notification: Notification) {
        self.push(notification);
    }
}
