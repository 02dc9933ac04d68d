use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub notifications: Rect,
    /// Zero-height when the bottom bar is hidden
    pub nav: Rect,
    pub footer: Rect,
}

pub fn app_layout(area: Rect, notification_count: usize, show_nav: bool) -> AppLayout {
    let notif_height = if notification_count > 0 {
        (notification_count as u16).min(3) + 2
    } else {
        0
    };
    let nav_height = if show_nav { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(notif_height),
            Constraint::Length(nav_height),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        notifications: chunks[2],
        nav: chunks[3],
        footer: chunks[4],
    }
}

/// Center a popup of given width/height in the area
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Full-height column of at most `max_width`, centered horizontally.
/// Keeps forms readable on wide terminals.
pub fn centered_column(max_width: u16, area: Rect) -> Rect {
    let width = max_width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Split an area into two side-by-side halves, or stack them on narrow terminals
pub fn split_pair(area: Rect) -> (Rect, Rect) {
    let direction = if area.width < 80 {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_region_collapses_when_hidden() {
        let area = Rect::new(0, 0, 80, 40);
        let shown = app_layout(area, 0, true);
        let hidden = app_layout(area, 0, false);
        assert_eq!(shown.nav.height, 3);
        assert_eq!(hidden.nav.height, 0);
        assert_eq!(hidden.main.height, shown.main.height + 3);
    }

    #[test]
    fn test_centered_column_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_column(60, area), area);
        let col = centered_column(20, area);
        assert_eq!(col.x, 10);
        assert_eq!(col.width, 20);
    }
}
