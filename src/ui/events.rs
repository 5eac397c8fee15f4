use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::catalog::{BookDoc, CatalogError};
use crate::notify::Toast;

/// Everything the event loop reacts to.
///
/// Keys and resizes come from the crossterm poll thread; the rest is fed
/// in by background work (the debounce timer, in-flight catalog requests,
/// the notifier). One channel, one consumer: state is only ever mutated
/// from the loop.
#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The debounce window elapsed; `query` is the last submitted value.
    SearchDue { query: String },
    /// An in-flight catalog request finished. Tagged with the request's
    /// sequence number so stale completions can be recognized.
    SearchFinished {
        seq: u64,
        outcome: Result<Vec<BookDoc>, CatalogError>,
    },
    /// A toast notification to show.
    Notice(Toast),
}

/// Fans terminal input and ticks into the app event channel.
///
/// A dedicated thread polls crossterm with a short timeout so ticks keep
/// flowing while no keys arrive. The thread exits when the receiver side
/// is dropped.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender for background work that needs to reach the event loop.
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
