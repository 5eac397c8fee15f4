use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::notify::ChannelNotifier;
use crate::search::SearchDispatcher;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;

/// Run the UI event loop until the user quits.
///
/// Everything is wired here and nowhere else: the debouncer fires back
/// into the event channel as [`AppEvent::SearchDue`], catalog completions
/// arrive as [`AppEvent::SearchFinished`], toasts as [`AppEvent::Notice`].
/// An optional startup query goes through the same debounced path as a
/// typed submission.
pub fn run(
    config: &Config,
    runtime: tokio::runtime::Handle,
    startup_query: Option<String>,
) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);

    let notifier = Arc::new(ChannelNotifier::new(events.sender()));
    let client = Arc::new(CatalogClient::new(&config.catalog));
    let mut dispatcher =
        SearchDispatcher::new(client, notifier, events.sender(), runtime.clone());

    let debounce_tx = events.sender();
    let mut debouncer = Debouncer::new(
        Duration::from_millis(config.ui.debounce_ms),
        runtime,
        Arc::new(move |query| {
            let _ = debounce_tx.send(AppEvent::SearchDue { query });
        }),
    );

    if let Some(query) = startup_query {
        debouncer.schedule(query);
    }

    loop {
        terminal
            .draw(|frame| draw(frame, &app))
            .context("failed to draw frame")?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => match handle_key(&mut app, key) {
                InputAction::Submit(raw) => debouncer.schedule(raw),
                InputAction::None => {}
            },
            Ok(AppEvent::Tick) => app.on_tick(),
            // ratatui re-reads the terminal size on the next draw.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::SearchDue { query }) => {
                let intent = dispatcher.dispatch(&query);
                app.apply_search(intent);
            }
            Ok(AppEvent::SearchFinished { seq, outcome }) => {
                let intent = dispatcher.complete(seq, outcome);
                app.apply_search(intent);
            }
            Ok(AppEvent::Notice(toast)) => app.push_toast(toast),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
