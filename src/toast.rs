//! Toast Notifications
//!
//! `ToastQueue` is the plain bounded list; `Toasts` wraps it in a signal and
//! schedules auto-dismissal.

use std::fmt;
use std::time::Duration;

use leptos::prelude::*;
use tracing::warn;

/// At most this many toasts are on screen; older ones are dropped
pub const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, text: text.into() });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Returns false when the toast was already gone
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Reactive handle provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
    timeout: Duration,
}

impl Toasts {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            timeout: Duration::from_millis(u64::from(timeout_ms)),
        }
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    pub fn show(&self, kind: ToastKind, text: impl Into<String>) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, text));
        let queue = self.queue;
        set_timeout(
            move || {
                queue.update(|q| {
                    q.dismiss(id);
                });
            },
            self.timeout,
        );
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(ToastKind::Error, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(ToastKind::Info, text);
    }

    /// Log a failed call and surface it as an error toast
    pub fn failed(&self, action: &str, err: &dyn fmt::Display) {
        warn!(action, error = %err, "request failed");
        self.error(format!("{} failed: {}", action, err));
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_bounded_and_drops_oldest() {
        let mut queue = ToastQueue::default();
        let ids: Vec<u32> = (0..6).map(|i| queue.push(ToastKind::Info, format!("t{}", i))).collect();
        assert_eq!(queue.items().len(), MAX_VISIBLE);
        let visible: Vec<u32> = queue.items().iter().map(|t| t.id).collect();
        assert_eq!(visible, ids[2..].to_vec());
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "Saved");
        let b = queue.push(ToastKind::Error, "Failed");
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);
        assert_eq!(queue.items()[0].text, "Failed");
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Info, "one");
        queue.dismiss(a);
        let b = queue.push(ToastKind::Info, "two");
        assert_ne!(a, b);
    }
}
