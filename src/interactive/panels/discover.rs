use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::formatting::theme::{category_color, Palette};
use crate::formatting::utils::{format_count, truncate};
use crate::interactive::app::WellTuneApp;
use crate::models::Routine;
use crate::views::DiscoverFeed;

pub fn draw(frame: &mut Frame, area: Rect, app: &WellTuneApp, p: &Palette) {
    let feed = &app.feed;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(4),
        ])
        .split(area);

    let heading = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            " Discover",
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Routines shared by the community",
            Style::default().fg(p.muted),
        ),
    ])]);
    frame.render_widget(heading, chunks[0]);

    let chips: Vec<Span> = DiscoverFeed::chip_labels()
        .into_iter()
        .enumerate()
        .flat_map(|(i, label)| {
            let style = if i == feed.filter_index {
                Style::default().fg(p.background).bg(p.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(p.muted).bg(p.surface)
            };
            [Span::styled(format!(" {} ", label), style), Span::raw(" ")]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(chips)), chunks[1]);

    let routines = feed.visible();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.border))
        .title(format!(" {} routines ", routines.len()));

    if routines.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No routines in this category yet",
            Style::default().fg(p.muted),
        ))
        .block(block);
        frame.render_widget(empty, chunks[2]);
        return;
    }

    let width = chunks[2].width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = routines
        .iter()
        .map(|routine| routine_card(routine, width, p))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(p.selection))
        .highlight_symbol("▌ ");
    let mut state = ListState::default().with_selected(Some(feed.cursor));
    frame.render_stateful_widget(list, chunks[2], &mut state);
}

fn routine_card<'a>(routine: &'a Routine, width: usize, p: &Palette) -> ListItem<'a> {
    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", routine.icon)),
            Span::styled(routine.title, Style::default().fg(p.text).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                routine.category.label(),
                Style::default().fg(category_color(routine.category)),
            ),
        ]),
        Line::from(Span::styled(
            format!("   {}", truncate(routine.description, width.saturating_sub(3))),
            Style::default().fg(p.muted),
        )),
        Line::from(vec![
            Span::styled(
                format!("   ◷ {} min", routine.duration_minutes),
                Style::default().fg(p.accent_alt),
            ),
            Span::styled(
                format!("  ·  {}", routine.difficulty.label()),
                Style::default().fg(p.muted),
            ),
            Span::styled(
                format!("  ·  ♥ {}", format_count(routine.likes)),
                Style::default().fg(p.error),
            ),
            Span::styled(
                format!("  ·  {} joined", format_count(routine.participants)),
                Style::default().fg(p.muted),
            ),
        ]),
        Line::raw(""),
    ];
    ListItem::new(lines)
}
