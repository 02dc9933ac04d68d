use crate::interactive::app::Popup;
use crate::interactive::keys::{map_key, Action};
use crate::session::{ScreenId, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

#[test]
fn test_ctrl_t_toggles_theme_everywhere() {
    for screen in [
        ScreenId::SignIn,
        ScreenId::Onboarding,
        ScreenId::Discover,
        ScreenId::RoutineDetail,
        ScreenId::Dashboard,
        ScreenId::Profile,
    ] {
        assert_eq!(map_key(ctrl('t'), screen, None, false), Action::ToggleTheme);
    }
    assert_eq!(map_key(ctrl('t'), ScreenId::Discover, None, true), Action::ToggleTheme);
}

#[test]
fn test_letters_are_typed_on_sign_in() {
    assert_eq!(map_key(key(KeyCode::Char('t')), ScreenId::SignIn, None, false), Action::TypeChar('t'));
    assert_eq!(map_key(key(KeyCode::Char('q')), ScreenId::SignIn, None, false), Action::TypeChar('q'));
    assert_eq!(map_key(key(KeyCode::Char('t')), ScreenId::Profile, None, false), Action::ToggleTheme);
}

#[test]
fn test_tab_shortcuts() {
    assert_eq!(
        map_key(key(KeyCode::Char('1')), ScreenId::Profile, None, false),
        Action::GoTo(Tab::Discover)
    );
    assert_eq!(
        map_key(key(KeyCode::Char('2')), ScreenId::Discover, None, false),
        Action::GoTo(Tab::Dashboard)
    );
    assert_eq!(
        map_key(key(KeyCode::Char('3')), ScreenId::Dashboard, None, false),
        Action::GoTo(Tab::Profile)
    );
}

#[test]
fn test_no_tab_shortcuts_without_bottom_nav() {
    for screen in [ScreenId::RoutineDetail, ScreenId::Onboarding] {
        assert_eq!(map_key(key(KeyCode::Char('2')), screen, None, false), Action::None);
    }
    assert_eq!(
        map_key(key(KeyCode::Char('2')), ScreenId::Discover, None, true),
        Action::TypeChar('2')
    );
}

#[test]
fn test_upload_modal_keys() {
    assert_eq!(map_key(ctrl('s'), ScreenId::Discover, None, true), Action::SubmitUpload);
    assert_eq!(map_key(ctrl('e'), ScreenId::Discover, None, true), Action::ExternalEditor);
    assert_eq!(map_key(key(KeyCode::Esc), ScreenId::Discover, None, true), Action::Cancel);
    assert_eq!(map_key(key(KeyCode::Enter), ScreenId::Discover, None, true), Action::AddTag);
}

#[test]
fn test_help_popup_captures_keys() {
    let popup = Some(Popup::Help);
    assert_eq!(map_key(key(KeyCode::Esc), ScreenId::Discover, popup, false), Action::ClosePopup);
    assert_eq!(map_key(key(KeyCode::Char('j')), ScreenId::Discover, popup, false), Action::None);
    assert_eq!(map_key(ctrl('c'), ScreenId::Discover, popup, false), Action::Quit);
    assert_eq!(map_key(key(KeyCode::Char('?')), ScreenId::Dashboard, None, false), Action::Help);
}

#[test]
fn test_detail_back_keys() {
    for code in [KeyCode::Esc, KeyCode::Backspace, KeyCode::Char('b')] {
        assert_eq!(map_key(key(code), ScreenId::RoutineDetail, None, false), Action::Back);
    }
}
