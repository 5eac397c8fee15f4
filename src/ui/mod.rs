//! Terminal UI: a crossterm/ratatui event loop that owns all state.
//!
//! The search flow hangs on the MVI primitives in [`mvi`]: keys become
//! intents, intents run through a pure reducer, and `render` draws from
//! the resulting state. Everything asynchronous (debounce expiry, catalog
//! completions, toasts) arrives over the one [`events::AppEvent`] channel.

pub mod app;
pub mod cards;
pub mod events;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
