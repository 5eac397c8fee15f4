use ratatui::layout::Rect;

/// Vertical regions of the screen: header, search bar, body, footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(4);
    let search_height = 3.min(area.height.saturating_sub(header_height));
    let footer_height = 3.min(
        area.height
            .saturating_sub(header_height + search_height),
    );
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let search = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: search_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + search_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + search_height + footer_height),
    };
    (header, search, body, footer)
}

/// Anchor rect for the toast at `index` (0 = newest), stacked upward from
/// the bottom-right corner.
pub fn toast_rect(area: Rect, index: usize, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let stacked = (index as u16).saturating_mul(height);
    Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y
            + area
                .height
                .saturating_sub(height.saturating_add(stacked)),
        width,
        height,
    }
}
