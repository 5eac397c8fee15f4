//! Intents for the search flow.

use crate::catalog::BookDoc;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the search reducer.
///
/// `Started` is produced when a request is dispatched; the three
/// completion intents carry the tag (`seq`) of the request they finish
/// so the reducer can drop stale ones.
#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Input was empty or whitespace-only; no request was issued.
    RejectedEmpty,

    /// A request with tag `seq` has been dispatched.
    Started { seq: u64 },

    /// Request finished with at least one result.
    Loaded { seq: u64, books: Vec<BookDoc> },

    /// Request finished successfully but with zero results.
    LoadedEmpty { seq: u64 },

    /// Request failed; `message` is the fixed user-facing string.
    Failed { seq: u64, message: String },
}

impl Intent for SearchIntent {}
