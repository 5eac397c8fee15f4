//! Fire-and-forget user notifications (toasts).
//!
//! Search logic emits notifications through the [`Notifier`] trait so it
//! stays testable without a terminal; the production implementation
//! forwards them into the UI event channel, where they land on the
//! [`ToastStack`] and expire after a TTL.

use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crate::ui::events::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Capability for emitting non-blocking notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: ToastKind, message: &str);
}

/// Notifier that forwards toasts into the UI event channel.
///
/// Delivery is best-effort: if the event loop is gone there is nobody
/// left to show the toast to.
pub struct ChannelNotifier {
    events: Sender<AppEvent>,
}

impl ChannelNotifier {
    pub fn new(events: Sender<AppEvent>) -> Self {
        Self { events }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        let _ = self.events.send(AppEvent::Notice(Toast {
            kind,
            message: message.to_string(),
        }));
    }
}

/// On-screen toasts with auto-dismiss.
///
/// Mirrors the overlay settings of the original client: newest on top,
/// gone after the TTL (3s by default). Pruning happens on the UI tick.
pub struct ToastStack {
    entries: Vec<(Toast, Instant)>,
    ttl: Duration,
}

impl ToastStack {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Vec::new(),
            ttl,
        }
    }

    pub fn push(&mut self, toast: Toast) {
        self.entries.push((toast, Instant::now()));
    }

    /// Drop entries older than the TTL.
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|(_, shown_at)| now.duration_since(*shown_at) < ttl);
    }

    /// Toasts to render, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter().rev().map(|(toast, _)| toast)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(kind: ToastKind, message: &str) -> Toast {
        Toast {
            kind,
            message: message.to_string(),
        }
    }

    #[test]
    fn visible_is_newest_first() {
        let mut stack = ToastStack::new(Duration::from_secs(3));
        stack.push(toast(ToastKind::Info, "first"));
        stack.push(toast(ToastKind::Success, "second"));

        let messages: Vec<&str> = stack.visible().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["second", "first"]);
    }

    #[test]
    fn prune_drops_expired_entries() {
        let mut stack = ToastStack::new(Duration::from_secs(3));
        stack.push(toast(ToastKind::Error, "old"));

        stack.prune_at(Instant::now() + Duration::from_millis(3001));
        assert!(stack.is_empty());
    }

    #[test]
    fn prune_keeps_fresh_entries() {
        let mut stack = ToastStack::new(Duration::from_secs(3));
        stack.push(toast(ToastKind::Info, "fresh"));

        stack.prune_at(Instant::now() + Duration::from_millis(2900));
        assert!(!stack.is_empty());
    }

    #[test]
    fn channel_notifier_forwards_into_event_channel() {
        let (tx, rx) = std::sync::mpsc::channel();
        let notifier = ChannelNotifier::new(tx);
        notifier.notify(ToastKind::Success, "Found 3 books!");

        match rx.try_recv() {
            Ok(AppEvent::Notice(toast)) => {
                assert_eq!(toast.kind, ToastKind::Success);
                assert_eq!(toast.message, "Found 3 books!");
            }
            other => panic!("expected Notice event, got {:?}", other.is_ok()),
        }
    }
}
