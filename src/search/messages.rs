//! Fixed user-facing strings for the search flow.
//!
//! These appear both in the state (`SearchState::error`) and in toast
//! notifications, so they live in one place. The two failure messages
//! belong to [`crate::catalog::CatalogError::user_message`].

pub const EMPTY_QUERY: &str = "Please enter a book title.";
pub const NO_BOOKS_FOUND: &str = "No books found. Try a different search term.";

pub fn found_books(count: usize) -> String {
    format!("Found {} books!", count)
}
