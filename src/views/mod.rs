//! Local state of each screen. Lives only while its screen is mounted.

pub mod dashboard;
pub mod detail;
pub mod feed;
pub mod input;
pub mod onboarding;
pub mod sign_in;
pub mod upload;

pub use dashboard::DashboardRange;
pub use detail::RoutineDetailState;
pub use feed::DiscoverFeed;
pub use input::InputState;
pub use onboarding::OnboardingSurvey;
pub use sign_in::{SignInField, SignInForm};
pub use upload::{UploadDraft, UploadField, UploadForm, UploadKind};
