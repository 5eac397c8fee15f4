//! Terminal client for searching the Open Library book catalog.
//!
//! The binary in `main.rs` wires these modules together: a crossterm/ratatui
//! event loop owns all UI state, while a tokio runtime hosts the debounce
//! timer and in-flight catalog requests. Every asynchronous outcome returns
//! to the event loop over one event channel, so state is only ever mutated
//! from the loop.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod logging;
pub mod notify;
pub mod search;
pub mod ui;
