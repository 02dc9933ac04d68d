use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::formatting::theme::Palette;
use crate::interactive::app::bottom_nav;
use crate::session::ScreenId;

/// Bottom tab bar. Only drawn on Discover, Home and Profile.
pub fn draw(frame: &mut Frame, area: Rect, screen: ScreenId, p: &Palette) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(p.border))
        .style(Style::default().bg(p.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tabs = bottom_nav(screen);
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, tabs.len() as u32); tabs.len()])
        .split(inner);

    for ((tab, active), cell) in tabs.into_iter().zip(cells.iter()) {
        let style = if active {
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.muted)
        };
        let line = Line::from(vec![
            Span::styled(format!("{} ", tab.shortcut()), Style::default().fg(p.border)),
            Span::styled(tab.label(), style),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(ratatui::layout::Alignment::Center), *cell);
    }
}
