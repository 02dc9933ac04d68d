use std::fmt;
use std::str::FromStr;

use super::state::{Screen, ScreenId, Session, SessionSnapshot, SignInPolicy, Stage, Tab, Theme};
use crate::error::WellTuneError;
use crate::logging::log_debug;

/// Commands that can move the session between screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    SignIn,
    CompleteOnboarding,
    SelectRoutine,
    ExitRoutineDetail,
    NavigateTo(Tab),
    ToggleTheme,
}

impl fmt::Display for ViewCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignIn => f.write_str("sign-in"),
            Self::CompleteOnboarding => f.write_str("complete-onboarding"),
            Self::SelectRoutine => f.write_str("select-routine"),
            Self::ExitRoutineDetail => f.write_str("exit-routine-detail"),
            Self::NavigateTo(tab) => write!(f, "navigate:{}", tab.screen().id().label().to_lowercase()),
            Self::ToggleTheme => f.write_str("toggle-theme"),
        }
    }
}

impl FromStr for ViewCommand {
    type Err = WellTuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(target) = s.strip_prefix("navigate:") {
            return Ok(Self::NavigateTo(target.parse()?));
        }
        match s {
            "sign-in" => Ok(Self::SignIn),
            "complete-onboarding" => Ok(Self::CompleteOnboarding),
            "select-routine" => Ok(Self::SelectRoutine),
            "exit-routine-detail" | "back" => Ok(Self::ExitRoutineDetail),
            "toggle-theme" => Ok(Self::ToggleTheme),
            other => Err(WellTuneError::InvalidInput(format!("unknown operation '{}'", other))),
        }
    }
}

/// Work the rendering layer has to do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    /// A different screen became visible; its local state starts fresh
    Mount(ScreenId),
    /// The presentation mode of the rendering root changed
    ApplyTheme(Theme),
}

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub snapshot: SessionSnapshot,
    pub changed: bool,
    pub side_effects: Vec<SideEffect>,
}

pub type SnapshotObserver = Box<dyn FnMut(&SessionSnapshot)>;

/// Single authority over what is visible.
///
/// All mutation goes through [`ViewController::process`]. Commands whose
/// precondition does not hold leave the session untouched and report
/// `changed == false`.
pub struct ViewController {
    session: Session,
    policy: SignInPolicy,
    observers: Vec<SnapshotObserver>,
}

impl ViewController {
    pub fn new(theme: Theme, policy: SignInPolicy) -> Self {
        let onboarding_pending = policy == SignInPolicy::RequireOnboarding;
        Self {
            session: Session::new(theme, onboarding_pending),
            policy,
            observers: Vec::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn policy(&self) -> SignInPolicy {
        self.policy
    }

    /// Register a callback that receives every changed snapshot
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&SessionSnapshot) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn process(&mut self, command: ViewCommand) -> TransitionResult {
        let before = self.session;
        let (after, side_effects) = apply_transition(before, command, self.policy);
        let changed = after != before;
        self.session = after;

        let snapshot = after.snapshot();
        if changed {
            log_debug(&format!(
                "{}: {} -> {} (theme {})",
                command,
                before.screen(),
                snapshot.screen,
                snapshot.theme.label()
            ));
            for observer in self.observers.iter_mut() {
                observer(&snapshot);
            }
        } else {
            log_debug(&format!("{}: ignored on {}", command, snapshot.screen));
        }

        TransitionResult {
            snapshot,
            changed,
            side_effects,
        }
    }

    pub fn sign_in(&mut self) -> TransitionResult {
        self.process(ViewCommand::SignIn)
    }

    pub fn complete_onboarding(&mut self) -> TransitionResult {
        self.process(ViewCommand::CompleteOnboarding)
    }

    pub fn select_routine(&mut self) -> TransitionResult {
        self.process(ViewCommand::SelectRoutine)
    }

    pub fn exit_routine_detail(&mut self) -> TransitionResult {
        self.process(ViewCommand::ExitRoutineDetail)
    }

    pub fn navigate_to(&mut self, tab: Tab) -> TransitionResult {
        self.process(ViewCommand::NavigateTo(tab))
    }

    pub fn toggle_theme(&mut self) -> TransitionResult {
        self.process(ViewCommand::ToggleTheme)
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(Theme::Dark, SignInPolicy::SkipOnboarding)
    }
}

impl fmt::Debug for ViewController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewController")
            .field("session", &self.session)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Apply a state transition based on the command
fn apply_transition(
    mut session: Session,
    command: ViewCommand,
    policy: SignInPolicy,
) -> (Session, Vec<SideEffect>) {
    let previous_screen = session.screen();
    let mut side_effects = Vec::new();

    match command {
        ViewCommand::SignIn => {
            session.stage = match (session.stage, policy) {
                (Stage::SignedOut { onboarding_pending: true }, SignInPolicy::RequireOnboarding) => {
                    Stage::Onboarding
                }
                // The survey still overrides everything else
                (Stage::Onboarding, SignInPolicy::RequireOnboarding) => Stage::Onboarding,
                _ => Stage::Active(Screen::Discover),
            };
        }

        ViewCommand::CompleteOnboarding => {
            match session.stage {
                Stage::Onboarding => session.stage = Stage::Active(Screen::Discover),
                Stage::SignedOut { onboarding_pending: true } => {
                    session.stage = Stage::SignedOut { onboarding_pending: false };
                }
                _ => {}
            }
        }

        ViewCommand::SelectRoutine => {
            if let Stage::Active(_) = session.stage {
                session.stage = Stage::Active(Screen::RoutineDetail);
            }
        }

        ViewCommand::ExitRoutineDetail => {
            if session.stage == Stage::Active(Screen::RoutineDetail) {
                session.stage = Stage::Active(Screen::Discover);
            }
        }

        ViewCommand::NavigateTo(tab) => {
            if let Stage::Active(_) = session.stage {
                session.stage = Stage::Active(tab.screen());
            }
        }

        ViewCommand::ToggleTheme => {
            session.theme = session.theme.toggled();
            side_effects.push(SideEffect::ApplyTheme(session.theme));
        }
    }

    let screen = session.screen();
    if screen != previous_screen {
        side_effects.push(SideEffect::Mount(screen));
    }

    (session, side_effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn signed_in() -> ViewController {
        let mut controller = ViewController::default();
        controller.sign_in();
        controller
    }

    #[test]
    fn test_sign_in_lands_on_discover() {
        let mut controller = ViewController::default();
        let result = controller.sign_in();

        assert!(result.changed);
        assert_eq!(result.snapshot.screen, ScreenId::Discover);
        assert!(result.snapshot.authenticated);
        assert_eq!(result.side_effects, vec![SideEffect::Mount(ScreenId::Discover)]);
    }

    #[test]
    fn test_second_sign_in_is_unchanged() {
        let mut controller = signed_in();
        let result = controller.sign_in();

        assert!(!result.changed);
        assert!(result.side_effects.is_empty());
        assert_eq!(result.snapshot.screen, ScreenId::Discover);
    }

    #[test]
    fn test_sign_in_from_dashboard_returns_to_discover() {
        let mut controller = signed_in();
        controller.navigate_to(Tab::Dashboard);

        let result = controller.sign_in();
        assert!(result.changed);
        assert_eq!(result.snapshot.screen, ScreenId::Discover);
    }

    #[test]
    fn test_commands_ignored_while_signed_out() {
        let mut controller = ViewController::default();

        for command in [
            ViewCommand::SelectRoutine,
            ViewCommand::ExitRoutineDetail,
            ViewCommand::NavigateTo(Tab::Profile),
            ViewCommand::CompleteOnboarding,
        ] {
            let result = controller.process(command);
            assert!(!result.changed, "{} should be ignored", command);
            assert_eq!(result.snapshot.screen, ScreenId::SignIn);
        }
    }

    #[test]
    fn test_select_routine_from_any_tab_exits_to_discover() {
        for tab in Tab::ALL {
            let mut controller = signed_in();
            controller.navigate_to(tab);

            let selected = controller.select_routine();
            assert_eq!(selected.snapshot.screen, ScreenId::RoutineDetail);

            let exited = controller.exit_routine_detail();
            assert_eq!(exited.snapshot.screen, ScreenId::Discover);
        }
    }

    #[test]
    fn test_exit_routine_detail_outside_detail_is_ignored() {
        let mut controller = signed_in();
        controller.navigate_to(Tab::Profile);

        let result = controller.exit_routine_detail();
        assert!(!result.changed);
        assert_eq!(result.snapshot.screen, ScreenId::Profile);
    }

    #[test]
    fn test_navigate_from_detail_is_allowed() {
        let mut controller = signed_in();
        controller.select_routine();

        let result = controller.navigate_to(Tab::Dashboard);
        assert_eq!(result.snapshot.screen, ScreenId::Dashboard);
        assert_eq!(result.side_effects, vec![SideEffect::Mount(ScreenId::Dashboard)]);
    }

    #[test]
    fn test_toggle_theme_emits_apply_theme_only() {
        let mut controller = signed_in();
        let result = controller.toggle_theme();

        assert!(result.changed);
        assert_eq!(result.snapshot.theme, Theme::Light);
        assert_eq!(result.side_effects, vec![SideEffect::ApplyTheme(Theme::Light)]);
    }

    #[test]
    fn test_required_onboarding_flow() {
        let mut controller = ViewController::new(Theme::Dark, SignInPolicy::RequireOnboarding);
        assert!(controller.snapshot().onboarding_pending);

        let result = controller.sign_in();
        assert_eq!(result.snapshot.screen, ScreenId::Onboarding);
        assert!(result.snapshot.authenticated);

        // Onboarding overrides every other request
        assert!(!controller.navigate_to(Tab::Profile).changed);
        assert!(!controller.select_routine().changed);
        assert!(!controller.sign_in().changed);

        let result = controller.complete_onboarding();
        assert_eq!(result.snapshot.screen, ScreenId::Discover);
        assert!(!result.snapshot.onboarding_pending);

        let again = controller.complete_onboarding();
        assert!(!again.changed);
        assert_eq!(again.snapshot.screen, ScreenId::Discover);
    }

    #[test]
    fn test_skip_policy_ignores_pending_flag() {
        let mut controller = ViewController {
            session: Session::new(Theme::Dark, true),
            policy: SignInPolicy::SkipOnboarding,
            observers: Vec::new(),
        };

        let result = controller.sign_in();
        assert_eq!(result.snapshot.screen, ScreenId::Discover);
        assert!(!result.snapshot.onboarding_pending);
    }

    #[test]
    fn test_observers_see_changes_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut controller = ViewController::default();
        controller.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.screen));

        controller.select_routine();
        controller.sign_in();
        controller.sign_in();
        controller.select_routine();
        controller.exit_routine_detail();

        assert_eq!(
            *seen.borrow(),
            vec![ScreenId::Discover, ScreenId::RoutineDetail, ScreenId::Discover]
        );
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!("sign-in".parse::<ViewCommand>().unwrap(), ViewCommand::SignIn);
        assert_eq!("back".parse::<ViewCommand>().unwrap(), ViewCommand::ExitRoutineDetail);
        assert_eq!(
            "navigate:home".parse::<ViewCommand>().unwrap(),
            ViewCommand::NavigateTo(Tab::Dashboard)
        );
        assert!("navigate:routine-detail".parse::<ViewCommand>().is_err());
        assert!("jump".parse::<ViewCommand>().is_err());
    }

    #[test]
    fn test_command_display_parses_back() {
        for command in [
            ViewCommand::SignIn,
            ViewCommand::CompleteOnboarding,
            ViewCommand::SelectRoutine,
            ViewCommand::ExitRoutineDetail,
            ViewCommand::NavigateTo(Tab::Dashboard),
            ViewCommand::NavigateTo(Tab::Profile),
            ViewCommand::ToggleTheme,
        ] {
            assert_eq!(command.to_string().parse::<ViewCommand>().unwrap(), command);
        }
    }
}
