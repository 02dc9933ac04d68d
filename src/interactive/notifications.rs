use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::NOTIFICATION_TTL_SECS;
use crate::formatting::theme::Palette;
use crate::interactive::app::{NotificationKind, WellTuneApp};

pub fn draw(frame: &mut Frame, area: Rect, app: &WellTuneApp, p: &Palette) {
    if app.notifications.is_empty() || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .notifications
        .iter()
        .filter(|n| !n.dismissed)
        .take(3)
        .map(|n| {
            let (icon, color) = match n.kind {
                NotificationKind::Success => ("✓", p.success),
                NotificationKind::Error => ("✗", p.error),
                NotificationKind::Info => ("ⓘ", p.info),
            };
            let remaining = NOTIFICATION_TTL_SECS.saturating_sub(n.created_at.elapsed().as_secs());
            Line::from(vec![
                Span::styled(
                    format!(" {} ", icon),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(n.message.clone(), Style::default().fg(color)),
                Span::styled(format!("  [{}s]", remaining), Style::default().fg(p.muted)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
