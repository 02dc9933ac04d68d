use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::formatting::theme::Palette;
use crate::interactive::layout::centered_popup;
use crate::session::ScreenId;

/// Key table for the current screen
pub fn shortcuts(screen: ScreenId) -> Vec<(&'static str, &'static str)> {
    let mut rows = match screen {
        ScreenId::SignIn => vec![
            ("Tab / ↓", "Next field"),
            ("Shift-Tab / ↑", "Previous field"),
            ("Space", "Toggle remember me"),
            ("Ctrl+P", "Show / hide password"),
            ("Enter", "Sign in"),
            ("Esc", "Quit"),
        ],
        ScreenId::Onboarding => vec![
            ("j / k", "Move between goals"),
            ("Space", "Select goal"),
            ("Enter", "Continue"),
        ],
        ScreenId::Discover => vec![
            ("j / k", "Move between routines"),
            ("h / l", "Change category"),
            ("Enter", "Open routine"),
            ("u", "Upload routine or playlist"),
        ],
        ScreenId::RoutineDetail => vec![
            ("Esc / b", "Back to Discover"),
            ("l", "Like"),
            ("s", "Save"),
            ("Enter", "Start routine"),
        ],
        ScreenId::Dashboard => vec![("r", "Change date range")],
        ScreenId::Profile => vec![],
    };
    if screen.shows_bottom_nav() {
        rows.push(("1 / 2 / 3", "Discover / Home / Profile"));
    }
    if screen != ScreenId::SignIn {
        rows.push(("t", "Toggle theme"));
        rows.push(("x", "Dismiss notification"));
        rows.push(("q", "Quit"));
    }
    rows.push(("Ctrl+T", "Toggle theme anywhere"));
    rows.push(if screen == ScreenId::SignIn {
        ("F1", "This help")
    } else {
        ("? / F1", "This help")
    });
    rows
}

pub fn draw(frame: &mut Frame, area: Rect, screen: ScreenId, p: &Palette) {
    let rows = shortcuts(screen);
    let height = rows.len() as u16 + 4;
    let popup_area = centered_popup(54, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Keyboard Shortcuts · {} ", screen.label()))
        .border_style(Style::default().fg(p.accent))
        .style(Style::default().bg(p.surface));

    let key_style = Style::default().fg(p.accent_alt).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(p.text);

    let mut lines: Vec<Line> = rows
        .into_iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {:<16}", key), key_style),
                Span::styled(desc, desc_style),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        " Press ? or Esc to close",
        Style::default().fg(p.muted),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
