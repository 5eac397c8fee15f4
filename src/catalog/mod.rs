//! Open Library catalog access.
//!
//! One GET per search against `{base_url}/search.json`; the response's
//! `docs` array maps onto [`BookDoc`]. Cover URLs are derived from the
//! optional cover identifier, never fetched.

mod client;
mod error;
mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use types::{BookDoc, SearchResponse};
