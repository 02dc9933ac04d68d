use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::formatting::theme::{category_color, Palette};
use crate::formatting::utils::format_count;
use crate::interactive::app::WellTuneApp;
use crate::models::ROUTINE_DETAIL;

pub fn draw(frame: &mut Frame, area: Rect, app: &WellTuneApp, p: &Palette) {
    let Some(routine) = app.selected_routine() else {
        let empty = Paragraph::new(Span::styled(
            "No routine selected. Press Esc to go back.",
            Style::default().fg(p.muted),
        ));
        frame.render_widget(empty, area);
        return;
    };
    let detail = &ROUTINE_DETAIL;
    let state = &app.detail;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(area);

    let heart = if state.liked { "♥ Liked" } else { "♡ Like" };
    let bookmark = if state.saved { "★ Saved" } else { "☆ Save" };
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::raw(format!("{} ", routine.icon)),
            Span::styled(
                routine.title,
                Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                routine.category.label(),
                Style::default().fg(category_color(routine.category)),
            ),
            Span::styled(
                format!("  ·  {} min  ·  {}", routine.duration_minutes, routine.difficulty.label()),
                Style::default().fg(p.muted),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("★ {:.1}", detail.rating), Style::default().fg(p.accent)),
            Span::styled(
                format!("  ·  {} likes  ·  {} joined", format_count(routine.likes), format_count(routine.participants)),
                Style::default().fg(p.muted),
            ),
        ]),
        Line::from(vec![
            Span::styled(heart, Style::default().fg(if state.liked { p.error } else { p.muted })),
            Span::raw("   "),
            Span::styled(bookmark, Style::default().fg(if state.saved { p.accent } else { p.muted })),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(p.border)),
    );
    frame.render_widget(header, chunks[0]);

    let section = Style::default().fg(p.accent).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled("About this routine", section))];
    for paragraph in detail.about {
        lines.push(Line::from(Span::styled(paragraph, Style::default().fg(p.text))));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled("Steps", section)));
    for step in &detail.steps {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}. ", step.step), Style::default().fg(p.accent_alt)),
            Span::styled(step.title, Style::default().fg(p.text).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {} min", step.duration_minutes), Style::default().fg(p.muted)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", step.description),
            Style::default().fg(p.muted),
        )));
    }
    lines.push(Line::raw(""));

    let tags: Vec<Span> = detail
        .tags
        .iter()
        .flat_map(|tag| {
            [
                Span::styled(format!("#{}", tag), Style::default().fg(p.accent_alt).bg(p.surface)),
                Span::raw(" "),
            ]
        })
        .collect();
    lines.push(Line::from(tags));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);

    let start = Paragraph::new(Line::from(Span::styled(
        format!("  ▶ Start Routine · {} min  ", routine.duration_minutes),
        Style::default().fg(p.background).bg(p.accent).add_modifier(Modifier::BOLD),
    )))
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(start, chunks[2]);
}
