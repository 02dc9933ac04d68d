use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::app::WellTuneApp;
use super::layout::app_layout;
use super::{notifications, panels, popups};
use crate::formatting::theme::{palette, Palette};
use crate::session::ScreenId;

pub fn draw(frame: &mut Frame, app: &WellTuneApp) {
    let snapshot = app.snapshot();
    let p = palette(snapshot.theme);
    let area = frame.size();

    frame.render_widget(
        Block::default().style(Style::default().bg(p.background).fg(p.text)),
        area,
    );

    let layout = app_layout(
        area,
        app.visible_notifications(),
        snapshot.screen.shows_bottom_nav(),
    );

    panels::header::draw(frame, layout.header, app, &p);

    match snapshot.screen {
        ScreenId::SignIn => panels::sign_in::draw(frame, layout.main, app, &p),
        ScreenId::Onboarding => panels::onboarding::draw(frame, layout.main, app, &p),
        ScreenId::Discover => panels::discover::draw(frame, layout.main, app, &p),
        ScreenId::RoutineDetail => panels::detail::draw(frame, layout.main, app, &p),
        ScreenId::Dashboard => panels::dashboard::draw(frame, layout.main, app, &p),
        ScreenId::Profile => panels::profile::draw(frame, layout.main, &p),
    }

    notifications::draw(frame, layout.notifications, app, &p);

    if snapshot.screen.shows_bottom_nav() {
        panels::nav::draw(frame, layout.nav, snapshot.screen, &p);
    }

    draw_footer(frame, layout.footer, app, &p);

    popups::draw_popup(frame, area, app, &p);
}

/// Key hints for whatever currently has the keyboard
pub fn footer_hints(app: &WellTuneApp) -> &'static str {
    if app.popup.is_some() {
        return "Esc close";
    }
    match app.screen() {
        ScreenId::SignIn => "Tab next field · Enter sign in · Ctrl+P show password · Ctrl+T theme · Esc quit",
        ScreenId::Onboarding => "j/k move · Space select · Enter continue · t theme · ? help · q quit",
        ScreenId::Discover if app.feed.upload.is_some() => {
            "Tab next field · ←/→ choose · Enter add tag · Ctrl+E editor · Ctrl+S share · Esc cancel"
        }
        ScreenId::Discover => "j/k move · h/l filter · Enter open · u upload · 1-3 tabs · ? help · q quit",
        ScreenId::RoutineDetail => "Esc back · l like · s save · Enter start · t theme · ? help",
        ScreenId::Dashboard => "r range · 1-3 tabs · t theme · ? help · q quit",
        ScreenId::Profile => "1-3 tabs · t theme · ? help · q quit",
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &WellTuneApp, p: &Palette) {
    let footer = Paragraph::new(Line::from(Span::styled(
        format!(" {}", footer_hints(app)),
        Style::default().fg(p.muted).add_modifier(Modifier::DIM),
    )));
    frame.render_widget(footer, area);
}
