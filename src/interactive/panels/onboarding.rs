use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::checkbox;
use crate::formatting::theme::Palette;
use crate::interactive::app::WellTuneApp;
use crate::interactive::layout::centered_column;
use crate::models::onboarding::{survey_progress, HEALTH_GOALS, SURVEY_STEPS};

pub fn draw(frame: &mut Frame, area: Rect, app: &WellTuneApp, p: &Palette) {
    let survey = &app.onboarding;
    let column = centered_column(64, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(column);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "What are your wellness goals?",
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Pick everything that applies. We'll tailor your routines.",
            Style::default().fg(p.muted),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(p.accent).bg(p.surface))
        .ratio(survey_progress())
        .label(format!("Step 2 of {}", SURVEY_STEPS.len()));
    frame.render_widget(progress, chunks[1]);

    let steps: Vec<Span> = SURVEY_STEPS
        .iter()
        .flat_map(|step| {
            let style = if step.completed {
                Style::default().fg(p.success)
            } else {
                Style::default().fg(p.muted)
            };
            let mark = if step.completed { "●" } else { "○" };
            [
                Span::styled(format!("{} {}", mark, step.title), style),
                Span::raw("   "),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(steps)).alignment(Alignment::Center),
        chunks[2],
    );

    let items: Vec<ListItem> = HEALTH_GOALS
        .iter()
        .enumerate()
        .map(|(i, goal)| {
            let selected = survey.is_selected(i);
            let label_style = if selected {
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(p.text)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", checkbox(selected)), label_style),
                Span::raw(format!("{} ", goal.emoji)),
                Span::styled(goal.label, label_style),
                Span::styled(format!("  {}", goal.description), Style::default().fg(p.muted)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.border))
                .title(" Health goals "),
        )
        .highlight_style(Style::default().bg(p.selection))
        .highlight_symbol("› ");
    let mut state = ListState::default().with_selected(Some(survey.cursor));
    frame.render_stateful_widget(list, chunks[3], &mut state);

    let (text, style) = match survey.selection_label() {
        Some(label) => (
            format!("  Continue · {}  ", label),
            Style::default().fg(p.background).bg(p.accent).add_modifier(Modifier::BOLD),
        ),
        None => (
            "  Select at least one goal  ".to_string(),
            Style::default().fg(p.muted).bg(p.surface),
        ),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center),
        chunks[4],
    );
}
