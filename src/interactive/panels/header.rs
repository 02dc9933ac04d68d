use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::{APP_NAME, APP_TAGLINE};
use crate::formatting::theme::Palette;
use crate::interactive::app::WellTuneApp;
use crate::session::Theme;

pub fn draw(frame: &mut Frame, area: Rect, app: &WellTuneApp, p: &Palette) {
    let snapshot = app.snapshot();
    let width = area.width.saturating_sub(2) as usize;

    let mut left = vec![
        Span::styled(
            format!(" ✦ {} ", APP_NAME),
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(snapshot.screen.label(), Style::default().fg(p.text)),
    ];
    if width > 70 {
        left.push(Span::styled(format!("  {}", APP_TAGLINE), Style::default().fg(p.muted)));
    }

    let theme_icon = match snapshot.theme {
        Theme::Dark => "☾",
        Theme::Light => "☀",
    };
    let mut right = Vec::new();
    if snapshot.onboarding_pending {
        right.push(Span::styled("survey pending  ", Style::default().fg(p.muted)));
    }
    if snapshot.authenticated {
        right.push(Span::styled("● signed in  ", Style::default().fg(p.success)));
    }
    right.push(Span::styled(
        format!("{} {} ", theme_icon, snapshot.theme.label()),
        Style::default().fg(p.accent_alt),
    ));

    let left_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let right_len: usize = right.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_len + right_len);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(right);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(p.border))
            .style(Style::default().bg(p.surface)),
    );
    frame.render_widget(header, area);
}
