pub mod queue;
pub mod service;
pub mod toaster;

pub use queue::{Notification, Toast, ToastKind, ToastQueue, TOAST_DURATION_MS};
pub use service::ToastService;
pub use toaster::Toaster;
