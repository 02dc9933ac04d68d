use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WellTuneError;

/// Every screen the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenId {
    SignIn,
    Onboarding,
    Dashboard,
    Discover,
    Profile,
    RoutineDetail,
}

impl ScreenId {
    pub fn label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::Onboarding => "Onboarding",
            Self::Dashboard => "Dashboard",
            Self::Discover => "Discover",
            Self::Profile => "Profile",
            Self::RoutineDetail => "Routine Detail",
        }
    }

    /// Whether the bottom tab bar is rendered on this screen
    pub fn shows_bottom_nav(self) -> bool {
        matches!(self, Self::Dashboard | Self::Discover | Self::Profile)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Screens reachable once signed in and past onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Discover,
    Profile,
    RoutineDetail,
}

impl Screen {
    pub fn id(self) -> ScreenId {
        match self {
            Self::Dashboard => ScreenId::Dashboard,
            Self::Discover => ScreenId::Discover,
            Self::Profile => ScreenId::Profile,
            Self::RoutineDetail => ScreenId::RoutineDetail,
        }
    }
}

/// Targets of the bottom navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Discover,
    Profile,
}

impl Tab {
    /// Bar order, left to right
    pub const ALL: [Tab; 3] = [Tab::Discover, Tab::Dashboard, Tab::Profile];

    pub fn screen(self) -> Screen {
        match self {
            Self::Dashboard => Screen::Dashboard,
            Self::Discover => Screen::Discover,
            Self::Profile => Screen::Profile,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Home",
            Self::Discover => "Discover",
            Self::Profile => "Profile",
        }
    }

    pub fn shortcut(self) -> char {
        match self {
            Self::Discover => '1',
            Self::Dashboard => '2',
            Self::Profile => '3',
        }
    }

    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.shortcut() == key)
    }
}

impl FromStr for Tab {
    type Err = WellTuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" | "home" => Ok(Self::Dashboard),
            "discover" => Ok(Self::Discover),
            "profile" => Ok(Self::Profile),
            other => Err(WellTuneError::InvalidInput(format!(
                "unknown navigation target '{}' (expected dashboard, discover or profile)",
                other
            ))),
        }
    }
}

/// Presentation mode of the rendering root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = WellTuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(WellTuneError::InvalidInput(format!(
                "unknown theme '{}' (expected light or dark)",
                other
            ))),
        }
    }
}

/// Where the user is in the sign-in / onboarding / app flow.
///
/// Authentication and onboarding are folded into the variant so that a
/// screen can never be shown to a signed-out user and onboarding can never
/// be shown without a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Not signed in; only the sign-in screen is visible
    SignedOut { onboarding_pending: bool },
    /// Signed in with the survey still to complete
    Onboarding,
    /// Signed in and browsing
    Active(Screen),
}

/// What to do with a pending survey when the user signs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInPolicy {
    /// Go straight to Discover, dropping any pending survey
    #[default]
    SkipOnboarding,
    /// Show the survey first when one is pending
    RequireOnboarding,
}

impl SignInPolicy {
    pub fn from_flag(onboarding_after_sign_in: bool) -> Self {
        if onboarding_after_sign_in {
            Self::RequireOnboarding
        } else {
            Self::SkipOnboarding
        }
    }
}

/// Process-wide UI state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub stage: Stage,
    pub theme: Theme,
}

impl Session {
    pub fn new(theme: Theme, onboarding_pending: bool) -> Self {
        Self {
            stage: Stage::SignedOut { onboarding_pending },
            theme,
        }
    }

    pub fn screen(&self) -> ScreenId {
        match self.stage {
            Stage::SignedOut { .. } => ScreenId::SignIn,
            Stage::Onboarding => ScreenId::Onboarding,
            Stage::Active(screen) => screen.id(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self.stage, Stage::SignedOut { .. })
    }

    pub fn onboarding_pending(&self) -> bool {
        match self.stage {
            Stage::SignedOut { onboarding_pending } => onboarding_pending,
            Stage::Onboarding => true,
            Stage::Active(_) => false,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            screen: self.screen(),
            authenticated: self.is_authenticated(),
            onboarding_pending: self.onboarding_pending(),
            theme: self.theme,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Theme::Dark, false)
    }
}

/// Read-only view of the session handed to the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub screen: ScreenId,
    pub authenticated: bool,
    pub onboarding_pending: bool,
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_signed_out_and_dark() {
        let snapshot = Session::default().snapshot();
        assert_eq!(snapshot.screen, ScreenId::SignIn);
        assert!(!snapshot.authenticated);
        assert!(!snapshot.onboarding_pending);
        assert_eq!(snapshot.theme, Theme::Dark);
    }

    #[test]
    fn test_onboarding_stage_derives_flags() {
        let session = Session {
            stage: Stage::Onboarding,
            theme: Theme::Light,
        };
        assert_eq!(session.screen(), ScreenId::Onboarding);
        assert!(session.is_authenticated());
        assert!(session.onboarding_pending());
    }

    #[test]
    fn test_tab_parsing() {
        assert_eq!("Dashboard".parse::<Tab>().unwrap(), Tab::Dashboard);
        assert_eq!("home".parse::<Tab>().unwrap(), Tab::Dashboard);
        assert_eq!(" profile ".parse::<Tab>().unwrap(), Tab::Profile);
        assert!("routine-detail".parse::<Tab>().is_err());
        assert!("signin".parse::<Tab>().is_err());
    }

    #[test]
    fn test_tab_shortcuts_follow_bar_order() {
        assert_eq!(Tab::from_shortcut('1'), Some(Tab::Discover));
        assert_eq!(Tab::from_shortcut('2'), Some(Tab::Dashboard));
        assert_eq!(Tab::from_shortcut('3'), Some(Tab::Profile));
        assert_eq!(Tab::from_shortcut('4'), None);
    }

    #[test]
    fn test_bottom_nav_hidden_on_detail() {
        assert!(!ScreenId::RoutineDetail.shows_bottom_nav());
        assert!(!ScreenId::SignIn.shows_bottom_nav());
        assert!(!ScreenId::Onboarding.shows_bottom_nav());
        assert!(ScreenId::Discover.shows_bottom_nav());
    }
}
