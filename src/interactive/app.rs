use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::NOTIFICATION_TTL_SECS;
use crate::formatting::describe_snapshot;
use crate::logging::{log_error, log_info};
use crate::models::routine::{routine_by_id, Routine};
use crate::session::{ScreenId, SessionSnapshot, SideEffect, Tab, TransitionResult, ViewCommand, ViewController};
use crate::views::{
    DashboardRange, DiscoverFeed, OnboardingSurvey, RoutineDetailState, SignInForm, UploadField,
};

use super::keys::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub dismissed: bool,
}

/// Everything the terminal UI needs: the view controller plus the local
/// state of each screen
#[derive(Debug)]
pub struct WellTuneApp {
    pub controller: ViewController,
    pub sign_in: SignInForm,
    pub onboarding: OnboardingSurvey,
    pub feed: DiscoverFeed,
    pub detail: RoutineDetailState,
    pub range: DashboardRange,
    /// Card picked on Discover, shown on the detail screen
    pub selected_routine: Option<u32>,
    pub popup: Option<Popup>,
    pub notifications: Vec<Notification>,
    pub should_quit: bool,
    /// Open $EDITOR for the upload description before the next frame
    pub launch_editor: bool,
}

impl WellTuneApp {
    pub fn new(config: &Config) -> Self {
        let mut controller = ViewController::new(config.theme, config.sign_in_policy());
        controller.subscribe(|snapshot| log_info(&format!("Session: {}", describe_snapshot(snapshot))));
        Self::with_controller(controller)
    }

    pub fn with_controller(controller: ViewController) -> Self {
        Self {
            controller,
            sign_in: SignInForm::new(),
            onboarding: OnboardingSurvey::new(),
            feed: DiscoverFeed::new(),
            detail: RoutineDetailState::default(),
            range: DashboardRange::default(),
            selected_routine: None,
            popup: None,
            notifications: Vec::new(),
            should_quit: false,
            launch_editor: false,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.controller.snapshot()
    }

    pub fn screen(&self) -> ScreenId {
        self.snapshot().screen
    }

    pub fn selected_routine(&self) -> Option<&'static Routine> {
        self.selected_routine.and_then(routine_by_id)
    }

    /// Run a controller command and apply its side effects to the views
    pub fn dispatch(&mut self, command: ViewCommand) -> TransitionResult {
        let result = self.controller.process(command);
        for effect in &result.side_effects {
            match *effect {
                SideEffect::Mount(screen) => self.mount(screen),
                SideEffect::ApplyTheme(theme) => {
                    log_info(&format!("Theme switched to {}", theme.label()));
                }
            }
        }
        result
    }

    /// Fresh local state for a screen that just became visible
    fn mount(&mut self, screen: ScreenId) {
        match screen {
            ScreenId::SignIn => self.sign_in = SignInForm::new(),
            ScreenId::Onboarding => self.onboarding = OnboardingSurvey::new(),
            ScreenId::Discover => self.feed = DiscoverFeed::new(),
            ScreenId::RoutineDetail => self.detail = RoutineDetailState::default(),
            ScreenId::Dashboard => self.range = DashboardRange::default(),
            ScreenId::Profile => {}
        }
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.push(Notification {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            dismissed: false,
        });
    }

    /// Drop notifications that have been dismissed or outlived their TTL
    pub fn prune_notifications(&mut self) {
        let ttl = Duration::from_secs(NOTIFICATION_TTL_SECS);
        self.notifications
            .retain(|n| !n.dismissed && n.created_at.elapsed() < ttl);
    }

    pub fn visible_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.dismissed).count()
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::Help => self.popup = Some(Popup::Help),
            Action::ClosePopup => self.popup = None,
            Action::ToggleTheme => {
                self.dispatch(ViewCommand::ToggleTheme);
            }
            Action::DismissNotification => {
                if let Some(n) = self.notifications.iter_mut().find(|n| !n.dismissed) {
                    n.dismissed = true;
                }
            }
            Action::GoTo(tab) => {
                self.dispatch(ViewCommand::NavigateTo(tab));
            }
            _ => match self.screen() {
                ScreenId::SignIn => self.handle_sign_in(action),
                ScreenId::Onboarding => self.handle_onboarding(action),
                ScreenId::Discover => self.handle_discover(action),
                ScreenId::RoutineDetail => self.handle_detail(action),
                ScreenId::Dashboard => self.handle_dashboard(action),
                ScreenId::Profile => {}
            },
        }
    }

    fn handle_sign_in(&mut self, action: Action) {
        let form = &mut self.sign_in;
        match action {
            Action::NextField => form.focus_next(),
            Action::PrevField => form.focus_prev(),
            Action::TypeChar(ch) => form.type_char(ch),
            Action::Backspace => form.backspace(),
            Action::Delete => edit_focused(form.focused_input(), |i| i.delete_char()),
            Action::MoveCursorLeft => edit_focused(form.focused_input(), |i| i.move_cursor_left()),
            Action::MoveCursorRight => edit_focused(form.focused_input(), |i| i.move_cursor_right()),
            Action::CursorHome => edit_focused(form.focused_input(), |i| i.move_cursor_home()),
            Action::CursorEnd => edit_focused(form.focused_input(), |i| i.move_cursor_end()),
            Action::ToggleShowPassword => form.toggle_show_password(),
            Action::Submit => {
                if form.can_submit() {
                    let email = form.email.value().trim().to_string();
                    log_info(&format!("Signing in as {}", email));
                    self.dispatch(ViewCommand::SignIn);
                    self.notify(NotificationKind::Success, format!("Welcome back, {}", email));
                } else {
                    self.notify(NotificationKind::Error, "Enter your email and password to sign in");
                }
            }
            _ => {}
        }
    }

    fn handle_onboarding(&mut self, action: Action) {
        match action {
            Action::MoveDown => self.onboarding.move_down(),
            Action::MoveUp => self.onboarding.move_up(),
            Action::ToggleSelect => self.onboarding.toggle_current(),
            Action::Submit => {
                if self.onboarding.can_continue() {
                    log_info(&format!("Onboarding goals: {:?}", self.onboarding.selected));
                    self.dispatch(ViewCommand::CompleteOnboarding);
                }
            }
            _ => {}
        }
    }

    fn handle_discover(&mut self, action: Action) {
        if self.feed.upload.is_some() {
            self.handle_upload(action);
            return;
        }
        match action {
            Action::MoveDown => self.feed.move_down(),
            Action::MoveUp => self.feed.move_up(),
            Action::NextFilter => self.feed.next_filter(),
            Action::PrevFilter => self.feed.prev_filter(),
            Action::OpenUpload => self.feed.open_upload(),
            Action::Submit => {
                if let Some(routine) = self.feed.current() {
                    self.selected_routine = Some(routine.id);
                    self.dispatch(ViewCommand::SelectRoutine);
                }
            }
            _ => {}
        }
    }

    fn handle_upload(&mut self, action: Action) {
        let Some(form) = self.feed.upload.as_mut() else {
            return;
        };
        match action {
            Action::Cancel => self.feed.close_upload(),
            Action::NextField => form.focus_next(),
            Action::PrevField => form.focus_prev(),
            Action::TypeChar(ch) => form.type_char(ch),
            Action::Backspace => form.backspace(),
            Action::Delete => edit_focused(form.focused_input(), |i| i.delete_char()),
            Action::MoveCursorLeft => match form.focus {
                UploadField::Kind => form.toggle_kind(),
                UploadField::Category => form.prev_category(),
                _ => edit_focused(form.focused_input(), |i| i.move_cursor_left()),
            },
            Action::MoveCursorRight => match form.focus {
                UploadField::Kind => form.toggle_kind(),
                UploadField::Category => form.next_category(),
                _ => edit_focused(form.focused_input(), |i| i.move_cursor_right()),
            },
            Action::CursorHome => edit_focused(form.focused_input(), |i| i.move_cursor_home()),
            Action::CursorEnd => edit_focused(form.focused_input(), |i| i.move_cursor_end()),
            Action::AddTag if form.focus == UploadField::Tags => {
                form.add_tag();
            }
            Action::AddTag => form.focus_next(),
            Action::ExternalEditor => self.launch_editor = true,
            Action::SubmitUpload => match form.submit() {
                Some(draft) => {
                    match serde_json::to_string(&draft) {
                        Ok(json) => log_info(&format!("Upload submitted: {}", json)),
                        Err(e) => log_error(&format!("Failed to serialize upload: {}", e)),
                    }
                    let message = format!("\"{}\" shared with the community", draft.title);
                    self.feed.close_upload();
                    self.notify(NotificationKind::Success, message);
                }
                None => {
                    let missing = form.missing_fields().join(", ");
                    self.notify(NotificationKind::Error, format!("Missing: {}", missing));
                }
            },
            _ => {}
        }
    }

    /// Result of editing the upload description in $EDITOR
    pub fn apply_editor_result(&mut self, edited: Option<String>) {
        if let (Some(text), Some(form)) = (edited, self.feed.upload.as_mut()) {
            form.set_description(text);
        }
    }

    fn handle_detail(&mut self, action: Action) {
        match action {
            Action::Back => {
                self.dispatch(ViewCommand::ExitRoutineDetail);
            }
            Action::Like => self.detail.toggle_like(),
            Action::Save => {
                self.detail.toggle_save();
                if self.detail.saved {
                    self.notify(NotificationKind::Info, "Saved to your library");
                }
            }
            Action::StartRoutine => {
                let title = self.selected_routine().map_or("Routine", |r| r.title);
                self.notify(NotificationKind::Info, format!("{} started", title));
            }
            _ => {}
        }
    }

    fn handle_dashboard(&mut self, action: Action) {
        if action == Action::CycleRange {
            self.range = self.range.next();
        }
    }
}

fn edit_focused<F>(input: Option<&mut crate::views::InputState>, f: F)
where
    F: FnOnce(&mut crate::views::InputState),
{
    if let Some(input) = input {
        f(input);
    }
}

impl Default for WellTuneApp {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Tabs in the order the bottom bar draws them, with the active one flagged
pub fn bottom_nav(screen: ScreenId) -> Vec<(Tab, bool)> {
    Tab::ALL
        .into_iter()
        .map(|tab| (tab, tab.screen().id() == screen))
        .collect()
}
