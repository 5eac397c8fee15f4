//! Error types for catalog requests.

use thiserror::Error;

/// Errors that can occur while querying the catalog.
///
/// All of them are terminal for the search attempt: nothing is retried,
/// the user resubmits.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog answered with a non-success HTTP status.
    #[error("catalog returned HTTP status {status}")]
    Status { status: u16 },

    /// The request never produced a response (DNS, connect, broken body).
    #[error("failed to reach catalog: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON we expect.
    #[error("failed to decode catalog response: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// User-facing message for display.
    ///
    /// HTTP-status failures map to the network message; everything else
    /// gets the generic fallback. Transport failures deliberately get the
    /// generic message, matching the observed behavior this client mirrors.
    pub fn user_message(&self) -> &'static str {
        match self {
            CatalogError::Status { .. } => "Network error. Please check your connection.",
            _ => "Something went wrong. Please try again.",
        }
    }
}
