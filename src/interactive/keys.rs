use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interactive::app::Popup;
use crate::session::{ScreenId, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    NextFilter,
    PrevFilter,
    GoTo(Tab),
    Back,

    // Forms
    NextField,
    PrevField,
    Submit,
    Cancel,
    TypeChar(char),
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    CursorHome,
    CursorEnd,
    ToggleShowPassword,
    ToggleSelect,

    // Discover / upload
    OpenUpload,
    AddTag,
    SubmitUpload,
    ExternalEditor,

    // Routine detail
    Like,
    Save,
    StartRoutine,

    // Dashboard
    CycleRange,

    // General
    ToggleTheme,
    Help,
    ClosePopup,
    DismissNotification,
    Quit,

    None,
}

fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Translate a key press for the screen currently shown.
/// `upload_open` is true while the upload modal covers Discover.
pub fn map_key(key: KeyEvent, screen: ScreenId, popup: Option<Popup>, upload_open: bool) -> Action {
    if is_ctrl(&key, 'c') {
        return Action::Quit;
    }
    if is_ctrl(&key, 't') {
        return Action::ToggleTheme;
    }
    if let Some(popup) = popup {
        return map_popup_key(key, popup);
    }
    if key.code == KeyCode::F(1) {
        return Action::Help;
    }
    match screen {
        ScreenId::SignIn => map_sign_in_key(key),
        ScreenId::Onboarding => map_onboarding_key(key),
        ScreenId::Discover if upload_open => map_upload_key(key),
        ScreenId::Discover => map_discover_key(key),
        ScreenId::RoutineDetail => map_detail_key(key),
        ScreenId::Dashboard => map_dashboard_key(key),
        ScreenId::Profile => map_tabbed_key(key),
    }
}

/// Keys shared by every screen without a text field
fn map_common_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Char('x') => Action::DismissNotification,
        _ => Action::None,
    }
}

/// Common keys plus the 1/2/3 tab shortcuts
fn map_tabbed_key(key: KeyEvent) -> Action {
    if let KeyCode::Char(c) = key.code {
        if let Some(tab) = Tab::from_shortcut(c) {
            return Action::GoTo(tab);
        }
    }
    map_common_key(key)
}

fn map_sign_in_key(key: KeyEvent) -> Action {
    if is_ctrl(&key, 'p') {
        return Action::ToggleShowPassword;
    }
    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::MoveCursorLeft,
        KeyCode::Right => Action::MoveCursorRight,
        KeyCode::Home => Action::CursorHome,
        KeyCode::End => Action::CursorEnd,
        KeyCode::Char(c) => Action::TypeChar(c),
        _ => Action::None,
    }
}

fn map_onboarding_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char(' ') => Action::ToggleSelect,
        KeyCode::Enter => Action::Submit,
        _ => map_common_key(key),
    }
}

fn map_discover_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Action::NextFilter,
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Action::PrevFilter,
        KeyCode::Char('u') | KeyCode::Char('+') => Action::OpenUpload,
        KeyCode::Enter => Action::Submit,
        _ => map_tabbed_key(key),
    }
}

fn map_upload_key(key: KeyEvent) -> Action {
    if is_ctrl(&key, 's') {
        return Action::SubmitUpload;
    }
    if is_ctrl(&key, 'e') {
        return Action::ExternalEditor;
    }
    match key.code {
        KeyCode::Esc => Action::Cancel,
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Enter => Action::AddTag,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::MoveCursorLeft,
        KeyCode::Right => Action::MoveCursorRight,
        KeyCode::Home => Action::CursorHome,
        KeyCode::End => Action::CursorEnd,
        KeyCode::Char(c) => Action::TypeChar(c),
        _ => Action::None,
    }
}

// No tab shortcuts here: the bottom bar is hidden on the detail screen
fn map_detail_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Action::Back,
        KeyCode::Char('l') => Action::Like,
        KeyCode::Char('s') => Action::Save,
        KeyCode::Enter => Action::StartRoutine,
        _ => map_common_key(key),
    }
}

fn map_dashboard_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('r') => Action::CycleRange,
        _ => map_tabbed_key(key),
    }
}

fn map_popup_key(key: KeyEvent, popup: Popup) -> Action {
    match popup {
        Popup::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::F(1) => Action::ClosePopup,
            _ => Action::None,
        },
    }
}
