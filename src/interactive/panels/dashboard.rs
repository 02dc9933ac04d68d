use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Gauge, Paragraph, Sparkline},
    Frame,
};

use crate::formatting::theme::Palette;
use crate::formatting::utils::format_minutes;
use crate::interactive::app::WellTuneApp;
use crate::interactive::layout::split_pair;
use crate::models::dashboard::{
    activity_growth_percent, total_activity_minutes, weekly_completion_percent, weekly_totals,
    ACHIEVEMENTS, ACTIVITY_TREND, CATEGORY_SHARES, STAT_CARDS, WEEKLY_CONSISTENCY,
};

fn panel<'a>(title: String, p: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.border))
        .title(Span::styled(
            title,
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ))
}

pub fn draw(frame: &mut Frame, area: Rect, app: &WellTuneApp, p: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(7),
        ])
        .split(area);

    let heading = Paragraph::new(Line::from(vec![
        Span::styled(" Your Progress", Style::default().fg(p.accent).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", app.range.label()), Style::default().fg(p.muted)),
    ]));
    frame.render_widget(heading, rows[0]);

    draw_stat_cards(frame, rows[1], p);

    let (left, right) = split_pair(rows[2]);
    draw_consistency(frame, left, p);
    draw_trend(frame, right, p);

    let (left, right) = split_pair(rows[3]);
    draw_category_shares(frame, left, p);
    draw_achievements(frame, right, p);
}

fn draw_stat_cards(frame: &mut Frame, area: Rect, p: &Palette) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, STAT_CARDS.len() as u32); STAT_CARDS.len()])
        .split(area);

    for (card, cell) in STAT_CARDS.iter().zip(cells.iter()) {
        let body = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(card.value, Style::default().fg(p.text).add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", card.change), Style::default().fg(p.success)),
            ]),
            Line::from(Span::styled(card.label, Style::default().fg(p.muted))),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.border)),
        );
        frame.render_widget(body, *cell);
    }
}

fn draw_consistency(frame: &mut Frame, area: Rect, p: &Palette) {
    let (done, planned) = weekly_totals();
    let data: Vec<(&str, u64)> = WEEKLY_CONSISTENCY
        .iter()
        .map(|day| (day.day, day.completed))
        .collect();

    let chart = BarChart::default()
        .block(panel(
            format!(" Weekly consistency · {}/{} ({}%) ", done, planned, weekly_completion_percent()),
            p,
        ))
        .data(data.as_slice())
        .max(WEEKLY_CONSISTENCY.iter().map(|d| d.total).max().unwrap_or(1))
        .bar_width(3)
        .bar_gap(1)
        .bar_style(Style::default().fg(p.accent))
        .value_style(Style::default().fg(p.background).bg(p.accent))
        .label_style(Style::default().fg(p.muted));
    frame.render_widget(chart, area);
}

fn draw_trend(frame: &mut Frame, area: Rect, p: &Palette) {
    let block = panel(
        format!(
            " Activity trend · {} · +{}% ",
            format_minutes(total_activity_minutes()),
            activity_growth_percent()
        ),
        p,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(inner);

    let minutes: Vec<u64> = ACTIVITY_TREND.iter().map(|week| week.minutes).collect();
    let sparkline = Sparkline::default()
        .data(&minutes)
        .style(Style::default().fg(p.accent_alt));
    frame.render_widget(sparkline, parts[0]);

    let legend: Vec<Span> = ACTIVITY_TREND
        .iter()
        .map(|week| {
            Span::styled(
                format!("{}: {}m  ", week.week, week.minutes),
                Style::default().fg(p.muted),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(legend)), parts[1]);
}

fn draw_category_shares(frame: &mut Frame, area: Rect, p: &Palette) {
    let block = panel(" Time by category ".to_string(), p);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); CATEGORY_SHARES.len()])
        .split(inner);

    for (share, row) in CATEGORY_SHARES.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(p.accent).bg(p.surface))
            .percent(share.percent.min(100))
            .label(format!("{} {}%", share.name, share.percent));
        frame.render_widget(gauge, *row);
    }
}

fn draw_achievements(frame: &mut Frame, area: Rect, p: &Palette) {
    let lines: Vec<Line> = ACHIEVEMENTS
        .iter()
        .map(|a| {
            Line::from(vec![
                Span::raw(format!("{} ", a.icon)),
                Span::styled(a.title, Style::default().fg(p.text).add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", a.description), Style::default().fg(p.muted)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(panel(" Recent achievements ".to_string(), p)),
        area,
    );
}
