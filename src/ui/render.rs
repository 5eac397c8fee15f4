use crate::notify::{Toast, ToastKind};
use crate::ui::app::App;
use crate::ui::cards::card_lines;
use crate::ui::layout::{layout_regions, toast_rect};
use crate::ui::theme::{
    ACCENT, CARD_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_INFO,
    STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, search, body, footer) = layout_regions(area);

    frame.render_widget(header_widget(), header);
    frame.render_widget(search_widget(app), search);
    frame.render_widget(body_widget(app, body), body);
    frame.render_widget(footer_widget(footer), footer);

    draw_toasts(frame, app, area);
}

fn header_widget() -> Paragraph<'static> {
    let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("📚 Book Finder", title_style)),
        Line::from(Span::styled(
            "Discover books from the Open Library database. Search by title to find your next read.",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn search_widget(app: &App) -> Paragraph<'static> {
    let line = if app.input_value().is_empty() {
        Line::from(Span::styled(
            "Search for a book...",
            Style::default().fg(MUTED_TEXT),
        ))
    } else {
        Line::from(Span::styled(
            app.input_value().to_string(),
            Style::default().fg(HEADER_TEXT),
        ))
    };
    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title(Span::styled("Search", Style::default().fg(ACCENT))),
    )
}

/// The five body views, gated the way the original client gates them:
/// spinner while loading; otherwise the error banner, then either the
/// no-results view (only when no error is showing), the results grid, or
/// the welcome prompt. The banner stacks above the welcome prompt when an
/// empty submission is rejected before any search ran.
fn body_widget(app: &App, area: Rect) -> Paragraph<'static> {
    let state = app.search();

    if state.loading {
        let line = Line::from(vec![
            Span::styled(app.spinner().to_string(), Style::default().fg(ACCENT)),
            Span::styled(" Searching books...", Style::default().fg(MUTED_TEXT)),
        ]);
        return Paragraph::new(vec![Line::from(""), line]).alignment(Alignment::Center);
    }

    let mut lines: Vec<Line> = Vec::new();

    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            format!(" {} ", error),
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    if state.search_performed && state.books.is_empty() && state.error.is_none() {
        lines.push(Line::from(Span::styled(
            "No books found",
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Try adjusting your search term to find more results.",
            Style::default().fg(MUTED_TEXT),
        )));
        return Paragraph::new(lines).alignment(Alignment::Center);
    }

    if state.has_results() {
        lines.push(Line::from(vec![
            Span::styled(
                "Search Results ",
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({} books)", state.books.len()),
                Style::default().fg(ACCENT),
            ),
        ]));
        lines.push(Line::from(""));

        let heading_rows = lines.len();
        let visible = (area.height as usize).saturating_sub(heading_rows);
        for line in card_rows(app).into_iter().skip(app.scroll()).take(visible) {
            lines.push(line);
        }
        return Paragraph::new(lines);
    }

    if !state.search_performed {
        lines.push(Line::from(Span::styled(
            "Search for books",
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Enter a book title in the search bar above to find books from the Open Library database.",
            Style::default().fg(MUTED_TEXT),
        )));
        return Paragraph::new(lines).alignment(Alignment::Center);
    }

    Paragraph::new(lines).alignment(Alignment::Center)
}

/// All card lines in result order, one blank separator line per card.
fn card_rows(app: &App) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    for doc in &app.search().books {
        rows.extend(card_lines(doc, app.covers_base()));
        rows.push(Line::from(Span::styled(
            "─".repeat(24),
            Style::default().fg(CARD_BORDER),
        )));
    }
    rows
}

fn footer_widget(area: Rect) -> Paragraph<'static> {
    let hints = " Enter: Search │ Esc: Clear │ ↑/↓ PgUp/PgDn: Scroll │ Ctrl+Q: Quit";
    let version = format!("v{} ", VERSION);

    // Calculate padding using char count, not byte count (for Unicode)
    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize; // minus borders
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line)
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn draw_toasts(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let toasts: Vec<&Toast> = app.toasts().visible().collect();
    let count = toasts.len();
    // Newest on top of the stack: the newest toast gets the highest slot.
    for (index, toast) in toasts.into_iter().enumerate() {
        let rect = toast_rect(area, count - 1 - index, toast_width(toast, area), 3);
        if rect.height == 0 || rect.width == 0 {
            continue;
        }
        let color = match toast.kind {
            ToastKind::Info => STATUS_INFO,
            ToastKind::Success => STATUS_OK,
            ToastKind::Error => STATUS_ERROR,
        };
        frame.render_widget(Clear, rect);
        let widget = Paragraph::new(Line::from(Span::styled(
            toast.message.clone(),
            Style::default().fg(HEADER_TEXT),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(widget, rect);
    }
}

fn toast_width(toast: &Toast, area: Rect) -> u16 {
    let content = toast.message.chars().count() as u16;
    content.saturating_add(4).min(area.width)
}
