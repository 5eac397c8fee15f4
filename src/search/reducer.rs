//! Reducer for the search flow.

use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::messages;
use super::state::SearchState;

/// Reducer for search state transitions.
///
/// Pure function — dispatching requests and emitting notifications happen
/// in `SearchDispatcher`, around the dispatch call.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::RejectedEmpty => SearchState {
                books: Vec::new(),
                loading: false,
                error: Some(messages::EMPTY_QUERY.to_string()),
                search_performed: false,
                // The tag is not bumped: an in-flight completion still
                // governs and will land after this rejection.
                last_issued: state.last_issued,
            },

            SearchIntent::Started { seq } => SearchState {
                books: Vec::new(),
                loading: true,
                error: None,
                search_performed: true,
                last_issued: seq.max(state.last_issued),
            },

            SearchIntent::Loaded { seq, books } => {
                if seq < state.last_issued {
                    return state;
                }
                SearchState {
                    books,
                    loading: false,
                    error: None,
                    ..state
                }
            }

            SearchIntent::LoadedEmpty { seq } => {
                if seq < state.last_issued {
                    return state;
                }
                SearchState {
                    books: Vec::new(),
                    loading: false,
                    error: Some(messages::NO_BOOKS_FOUND.to_string()),
                    ..state
                }
            }

            SearchIntent::Failed { seq, message } => {
                if seq < state.last_issued {
                    return state;
                }
                SearchState {
                    books: Vec::new(),
                    loading: false,
                    error: Some(message),
                    ..state
                }
            }
        }
    }
}
