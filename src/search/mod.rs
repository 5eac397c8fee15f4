//! Search feature module.
//!
//! Query validation, the debounced request lifecycle, and the four-flag
//! state the views render from.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Search state (results, loading, error, performed flags)
//! - `intent.rs` - User actions and request completions
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `dispatcher.rs` - Side effects around the reducer (requests, toasts)

mod dispatcher;
mod intent;
pub mod messages;
mod reducer;
mod state;

pub use dispatcher::SearchDispatcher;
pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::SearchState;
