use crate::config::Config;
use crate::notify::{Toast, ToastStack};
use crate::search::{SearchIntent, SearchReducer, SearchState};
use crate::ui::mvi::Reducer;
use std::time::Duration;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Lines one card occupies in the results list, separator included.
pub const CARD_HEIGHT: usize = 5;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Event-loop-owned aggregate of everything on screen.
///
/// The search state machine lives here behind `dispatch_mvi!`; the input
/// box, toast stack, scroll offset, and spinner frame are plain UI
/// resources managed outside MVI.
pub struct App {
    should_quit: bool,
    input: String,
    search: SearchState,
    toasts: ToastStack,
    scroll: usize,
    spinner_frame: usize,
    covers_base: String,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            input: String::new(),
            search: SearchState::default(),
            toasts: ToastStack::new(Duration::from_millis(config.ui.toast_ttl_ms)),
            scroll: 0,
            spinner_frame: 0,
            covers_base: config.catalog.covers_base_url.clone(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // -- search box --------------------------------------------------------

    /// Raw contents of the search box. Trimming happens at dispatch.
    pub fn input_value(&self) -> &str {
        &self.input
    }

    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    // -- search state (MVI) ------------------------------------------------

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Run an intent through the search reducer.
    ///
    /// The scroll offset resets whenever new results land, so a fresh
    /// search always shows from the top.
    pub fn apply_search(&mut self, intent: SearchIntent) {
        let resets_scroll = matches!(
            intent,
            SearchIntent::Started { .. } | SearchIntent::Loaded { .. }
        );
        dispatch_mvi!(self, search, SearchReducer, intent);
        if resets_scroll {
            self.scroll = 0;
        }
    }

    // -- toasts ------------------------------------------------------------

    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }

    // -- scrolling ---------------------------------------------------------

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        (self.search.books.len() * CARD_HEIGHT).saturating_sub(1)
    }

    // -- tick --------------------------------------------------------------

    /// Advance the spinner and expire old toasts. Driven by the UI tick.
    pub fn on_tick(&mut self) {
        if self.search.loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
        self.toasts.prune();
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }

    pub fn covers_base(&self) -> &str {
        &self.covers_base
    }
}
