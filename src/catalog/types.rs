//! Wire types for the Open Library search API.

use serde::{Deserialize, Serialize};

/// One entry of the search response `docs` array.
///
/// Only `title` is reliably present; everything else is optional and falls
/// back to a display placeholder at render time. Unknown fields in the
/// response are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDoc {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author_name: Option<Vec<String>>,
    #[serde(default)]
    pub first_publish_year: Option<i32>,
    /// Numeric cover identifier, used to derive a cover image URL.
    #[serde(default)]
    pub cover_i: Option<i64>,
}

/// Top-level search response body.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Result entries in API order. Absent is treated as empty.
    #[serde(default)]
    pub docs: Vec<BookDoc>,
}
