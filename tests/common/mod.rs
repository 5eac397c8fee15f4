//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use bookfinder::catalog::{BookDoc, CatalogClient, CatalogError};
use bookfinder::config::{CatalogConfig, Config};
use bookfinder::notify::{Notifier, ToastKind};
use bookfinder::search::SearchDispatcher;
use bookfinder::ui::events::AppEvent;
use parking_lot::Mutex;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Notifier that records every toast for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<(ToastKind, String)>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<(ToastKind, String)> {
        self.toasts.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.toasts.lock().push((kind, message.to_string()));
    }
}

/// Catalog config pointed at a test server.
pub fn catalog_config(base_url: &str) -> CatalogConfig {
    CatalogConfig {
        base_url: base_url.to_string(),
        ..CatalogConfig::default()
    }
}

/// Dispatcher wired to a mock catalog, a recording notifier, and a fresh
/// event channel. Returns everything a flow test needs.
pub fn make_dispatcher(
    base_url: &str,
) -> (SearchDispatcher, Arc<RecordingNotifier>, Receiver<AppEvent>) {
    let (tx, rx) = std::sync::mpsc::channel();
    let notifier = Arc::new(RecordingNotifier::default());
    let client = Arc::new(CatalogClient::new(&catalog_config(base_url)));
    let dispatcher = SearchDispatcher::new(
        client,
        notifier.clone(),
        tx,
        tokio::runtime::Handle::current(),
    );
    (dispatcher, notifier, rx)
}

/// Wait for the next `SearchFinished` event without blocking the runtime.
pub async fn next_finished(rx: &Receiver<AppEvent>) -> (u64, Result<Vec<BookDoc>, CatalogError>) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        match rx.try_recv() {
            Ok(AppEvent::SearchFinished { seq, outcome }) => return (seq, outcome),
            Ok(_) => {}
            Err(_) => {
                assert!(Instant::now() < deadline, "no completion within 5s");
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        }
    }
}
