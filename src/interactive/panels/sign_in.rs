use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{checkbox, field_block, input_line};
use crate::constants::{APP_NAME, APP_TAGLINE};
use crate::formatting::theme::Palette;
use crate::interactive::app::WellTuneApp;
use crate::interactive::layout::centered_column;
use crate::views::SignInField;

pub fn draw(frame: &mut Frame, area: Rect, app: &WellTuneApp, p: &Palette) {
    let form = &app.sign_in;
    let column = centered_column(52, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(column);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Welcome to {}", APP_NAME),
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(APP_TAGLINE, Style::default().fg(p.muted))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let email_focused = form.focus == SignInField::Email;
    let email = Paragraph::new(input_line(&form.email, email_focused, false, "you@example.com", p))
        .block(field_block("Email", email_focused, p));
    frame.render_widget(email, chunks[1]);

    let password_focused = form.focus == SignInField::Password;
    let password_title = if form.show_password {
        "Password (visible)"
    } else {
        "Password"
    };
    let password_line = if password_focused || form.password.value().is_empty() {
        input_line(&form.password, password_focused, !form.show_password, "••••••••", p)
    } else {
        Line::from(Span::styled(form.password_display(), Style::default().fg(p.text)))
    };
    let password =
        Paragraph::new(password_line).block(field_block(password_title, password_focused, p));
    frame.render_widget(password, chunks[2]);

    let remember_style = if form.focus == SignInField::RememberMe {
        Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(p.text)
    };
    let remember = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", checkbox(form.remember_me)), remember_style),
        Span::styled("Remember me", remember_style),
        Span::styled("    Forgot password?", Style::default().fg(p.accent_alt)),
    ]));
    frame.render_widget(remember, chunks[3]);

    let button_style = if form.can_submit() {
        Style::default().fg(p.background).bg(p.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(p.muted).bg(p.surface)
    };
    let button = Paragraph::new(Line::from(Span::styled("  Sign In  ", button_style)))
        .alignment(Alignment::Center);
    frame.render_widget(button, chunks[4]);
}
