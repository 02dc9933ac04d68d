use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::formatting::theme::Palette;
use crate::formatting::utils::format_minutes;
use crate::interactive::layout::centered_column;
use crate::models::profile::{initials, PROFILE};

pub fn draw(frame: &mut Frame, area: Rect, p: &Palette) {
    let column = centered_column(60, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(column);

    let identity = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {} ", initials(PROFILE.name)),
            Style::default().fg(p.background).bg(p.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            PROFILE.name,
            Style::default().fg(p.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(PROFILE.email, Style::default().fg(p.muted))),
        Line::from(Span::styled(
            format!("Member since {}", PROFILE.member_since),
            Style::default().fg(p.muted),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(identity, chunks[0]);

    let stat = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<22}", label), Style::default().fg(p.muted)),
            Span::styled(value, Style::default().fg(p.text).add_modifier(Modifier::BOLD)),
        ])
    };
    let stats = Paragraph::new(vec![
        stat("Day streak", format!("{} days", PROFILE.day_streak)),
        stat("Routines completed", PROFILE.routines_completed.to_string()),
        stat("Time practiced", format_minutes(PROFILE.minutes_total as u64)),
        stat("Favorite category", PROFILE.favorite_category.to_string()),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border))
            .title(" Stats "),
    );
    frame.render_widget(stats, chunks[1]);
}
