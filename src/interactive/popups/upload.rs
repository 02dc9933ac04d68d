use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::formatting::theme::Palette;
use crate::interactive::layout::centered_popup;
use crate::interactive::panels::{field_block, input_line};
use crate::models::Category;
use crate::views::{UploadField, UploadForm, UploadKind};

pub fn draw(frame: &mut Frame, area: Rect, form: &UploadForm, p: &Palette) {
    let popup_area = centered_popup(64, 25, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", form.kind.heading()))
        .border_style(Style::default().fg(p.accent))
        .style(Style::default().bg(p.surface));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    draw_kind_toggle(frame, chunks[0], form, p);

    let focused = form.focus == UploadField::Title;
    frame.render_widget(
        Paragraph::new(input_line(&form.title, focused, false, form.kind.title_placeholder(), p))
            .block(field_block("Title *", focused, p)),
        chunks[1],
    );

    let focused = form.focus == UploadField::Description;
    let description = if focused || !form.description.value().is_empty() {
        Paragraph::new(input_line(&form.description, focused, false, "", p))
    } else {
        Paragraph::new(Span::styled(
            "Describe what this is about (Ctrl+E opens your editor)",
            Style::default().fg(p.muted),
        ))
    };
    frame.render_widget(
        description
            .wrap(Wrap { trim: false })
            .block(field_block("Description *", focused, p)),
        chunks[2],
    );

    let focused = form.focus == UploadField::Category;
    let category = match form.selected_category() {
        Some(c) => Span::styled(format!("◂ {} ▸", c.label()), Style::default().fg(p.text)),
        None => Span::styled(
            format!("◂ Select category ({} choices) ▸", Category::UPLOAD_CHOICES.len()),
            Style::default().fg(p.muted),
        ),
    };
    frame.render_widget(
        Paragraph::new(Line::from(category)).block(field_block("Category *", focused, p)),
        chunks[3],
    );

    let focused = form.focus == UploadField::Duration;
    frame.render_widget(
        Paragraph::new(input_line(&form.duration, focused, false, "e.g. 15 min", p))
            .block(field_block("Duration", focused, p)),
        chunks[4],
    );

    let focused = form.focus == UploadField::Tags;
    frame.render_widget(
        Paragraph::new(input_line(&form.new_tag, focused, false, "Add a tag and press Enter", p))
            .block(field_block("Tags", focused, p)),
        chunks[5],
    );

    let tags: Vec<Span> = form
        .tags
        .iter()
        .flat_map(|tag| {
            [
                Span::styled(format!("#{}", tag), Style::default().fg(p.accent_alt)),
                Span::raw(" "),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(tags)), chunks[6]);

    let status = if form.can_submit() {
        Span::styled(
            "Ready · Ctrl+S to share",
            Style::default().fg(p.success).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("Required: {}", form.missing_fields().join(", ")),
            Style::default().fg(p.muted),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(status)), chunks[7]);
}

fn draw_kind_toggle(frame: &mut Frame, area: Rect, form: &UploadForm, p: &Palette) {
    let focused = form.focus == UploadField::Kind;
    let option = |kind: UploadKind, label: &'static str| {
        let style = if form.kind == kind {
            Style::default().fg(p.background).bg(p.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.muted)
        };
        Span::styled(format!(" {} ", label), style)
    };
    let marker = if focused { "› " } else { "  " };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(marker, Style::default().fg(p.accent)),
            option(UploadKind::Routine, "Routine"),
            Span::raw(" "),
            option(UploadKind::Playlist, "Playlist"),
        ])),
        area,
    );
}
