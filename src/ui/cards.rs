//! Pure card building for a single book result.
//!
//! No state, no side effects: every function here is a function of one
//! [`BookDoc`] and the configured covers base URL.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::catalog::BookDoc;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT};

/// Shown when a result has no cover identifier.
pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/150x200?text=No+Cover";

/// Shown when a result has no author list at all.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Cover image URL for a result.
///
/// Present identifier → medium-size cover from the covers endpoint;
/// absent → the fixed placeholder URL.
pub fn cover_url(doc: &BookDoc, covers_base: &str) -> String {
    match doc.cover_i {
        Some(id) => format!("{}/b/id/{}-M.jpg", covers_base.trim_end_matches('/'), id),
        None => PLACEHOLDER_COVER_URL.to_string(),
    }
}

/// Author display text: names joined with ", ", or the fallback when the
/// field is missing. An author list that is present but empty joins to an
/// empty string, it does not get the fallback.
pub fn authors_text(doc: &BookDoc) -> String {
    match &doc.author_name {
        Some(names) => names.join(", "),
        None => UNKNOWN_AUTHOR.to_string(),
    }
}

/// Publish year display text, "N/A" when absent.
pub fn year_text(doc: &BookDoc) -> String {
    match doc.first_publish_year {
        Some(year) => year.to_string(),
        None => "N/A".to_string(),
    }
}

/// The lines of one result card, in display order.
pub fn card_lines(doc: &BookDoc, covers_base: &str) -> Vec<Line<'static>> {
    let title_style = Style::default()
        .fg(HEADER_TEXT)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(MUTED_TEXT);

    vec![
        Line::from(Span::styled(doc.title.clone(), title_style)),
        Line::from(Span::styled(authors_text(doc), Style::default().fg(HEADER_TEXT))),
        Line::from(Span::styled(
            format!("First published: {}", year_text(doc)),
            muted,
        )),
        Line::from(Span::styled(
            format!("Cover: {}", cover_url(doc, covers_base)),
            muted,
        )),
    ]
}
