//! Validates queries, issues catalog requests, and maps their outcomes.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::catalog::{BookDoc, CatalogClient, CatalogError};
use crate::notify::{Notifier, ToastKind};
use crate::search::intent::SearchIntent;
use crate::search::messages;
use crate::ui::events::AppEvent;

/// Owns the request tag counter and the side effects around the reducer:
/// spawning the fetch and emitting notifications.
///
/// Each dispatched request carries a monotonically increasing tag (`seq`);
/// the reducer applies only completions tagged at least as high as the
/// newest started request, so a slow stale response cannot overwrite a
/// newer search. Notifications are emitted for every completion, stale or
/// not — they are observational, not state mutations.
pub struct SearchDispatcher {
    client: Arc<CatalogClient>,
    notifier: Arc<dyn Notifier>,
    events: Sender<AppEvent>,
    runtime: tokio::runtime::Handle,
    seq: u64,
}

impl SearchDispatcher {
    pub fn new(
        client: Arc<CatalogClient>,
        notifier: Arc<dyn Notifier>,
        events: Sender<AppEvent>,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        Self {
            client,
            notifier,
            events,
            runtime,
            seq: 0,
        }
    }

    /// Validate the raw input and, if non-empty, issue one catalog request.
    ///
    /// Whitespace-only input is rejected before any I/O. Otherwise the
    /// request is spawned on the runtime and its outcome comes back to the
    /// event loop as [`AppEvent::SearchFinished`].
    pub fn dispatch(&mut self, raw: &str) -> SearchIntent {
        let query = raw.trim();
        if query.is_empty() {
            tracing::debug!("empty query rejected");
            return SearchIntent::RejectedEmpty;
        }

        self.seq += 1;
        let seq = self.seq;
        let query = query.to_string();
        let client = Arc::clone(&self.client);
        let events = self.events.clone();

        tracing::debug!(seq, query = %query, "search dispatched");
        self.runtime.spawn(async move {
            let outcome = client.search(&query).await;
            // Receiver gone means the UI loop exited; nothing to deliver.
            let _ = events.send(AppEvent::SearchFinished { seq, outcome });
        });

        SearchIntent::Started { seq }
    }

    /// Convert a finished request into an intent and emit the matching
    /// notification.
    pub fn complete(
        &self,
        seq: u64,
        outcome: Result<Vec<BookDoc>, CatalogError>,
    ) -> SearchIntent {
        match outcome {
            Ok(books) if books.is_empty() => {
                self.notifier.notify(ToastKind::Info, messages::NO_BOOKS_FOUND);
                SearchIntent::LoadedEmpty { seq }
            }
            Ok(books) => {
                self.notifier
                    .notify(ToastKind::Success, &messages::found_books(books.len()));
                SearchIntent::Loaded { seq, books }
            }
            Err(err) => {
                let message = err.user_message();
                tracing::warn!(seq, error = %err, "search failed");
                self.notifier.notify(ToastKind::Error, message);
                SearchIntent::Failed {
                    seq,
                    message: message.to_string(),
                }
            }
        }
    }
}
