/// How long a toast stays on screen unless clicked away
pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

/// A message for the visitor, not yet placed on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: ToastKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        id
    }

    /// Answers false when the toast was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_keep_arrival_order() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notification::success("one"));
        let second = queue.push(Notification::error("two"));
        assert_ne!(first, second);

        let messages: Vec<&str> = queue
            .toasts()
            .iter()
            .map(|t| t.notification.message.as_str())
            .collect();
        assert_eq!(messages, vec!["one", "two"]);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut queue = ToastQueue::default();
        let id = queue.push(Notification::success("bye"));
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.toasts().is_empty());
    }
}
