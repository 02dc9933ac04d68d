pub mod dashboard;
pub mod detail;
pub mod discover;
pub mod header;
pub mod nav;
pub mod onboarding;
pub mod profile;
pub mod sign_in;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::formatting::theme::Palette;
use crate::views::InputState;

/// Bordered block whose border lights up when focused
pub fn field_block<'a>(title: &'a str, focused: bool, p: &Palette) -> Block<'a> {
    let border = if focused { p.accent } else { p.border };
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(border))
}

/// One-line rendering of a text input. Shows a block cursor when focused,
/// the placeholder when empty, and bullets when `masked`.
pub fn input_line<'a>(
    input: &'a InputState,
    focused: bool,
    masked: bool,
    placeholder: &'a str,
    p: &Palette,
) -> Line<'a> {
    let text_style = Style::default().fg(p.text);
    let cursor_style = Style::default().fg(p.background).bg(p.accent);

    if input.value().is_empty() && !focused {
        return Line::from(Span::styled(placeholder, Style::default().fg(p.muted)));
    }
    if !focused {
        let shown = if masked {
            "•".repeat(input.value().chars().count())
        } else {
            input.value().to_string()
        };
        return Line::from(Span::styled(shown, text_style));
    }

    let (before, at, after) = input.split_at_cursor();
    let show = |s: &str| -> String {
        if masked {
            "•".repeat(s.chars().count())
        } else {
            s.to_string()
        }
    };
    let at_text = match at {
        Some(_) if masked => "•".to_string(),
        Some(ch) => ch.to_string(),
        None => " ".to_string(),
    };
    Line::from(vec![
        Span::styled(show(before), text_style),
        Span::styled(at_text, cursor_style.add_modifier(Modifier::BOLD)),
        Span::styled(show(after), text_style),
    ])
}

/// Checkbox glyph used by forms and the survey
pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[✓]"
    } else {
        "[ ]"
    }
}
