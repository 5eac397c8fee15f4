//! State for the search flow.

use crate::catalog::BookDoc;
use crate::ui::mvi::UiState;

/// Search state machine.
///
/// Four mutually constrained fields plus the request tag watermark.
/// Invariants upheld by the reducer:
/// - `loading` and a set `error` are never both true;
/// - `books` is cleared whenever a new search starts or fails;
/// - `last_issued` never decreases, and completions tagged below it are
///   ignored (a slow stale response cannot overwrite a newer search).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Result entries in response order. Possibly empty.
    pub books: Vec<BookDoc>,
    /// True while the governing request is in flight.
    pub loading: bool,
    /// User-facing error message, if the last attempt failed.
    pub error: Option<String>,
    /// True once any search has been dispatched (welcome view gate).
    pub search_performed: bool,
    /// Highest request tag dispatched so far.
    pub last_issued: u64,
}

impl UiState for SearchState {}

impl SearchState {
    /// True when the results grid should render.
    pub fn has_results(&self) -> bool {
        !self.books.is_empty()
    }
}
