pub mod dashboard;
pub mod onboarding;
pub mod profile;
pub mod routine;

// Re-export commonly used types
pub use dashboard::{Achievement, CategoryShare, DayConsistency, StatCard, WeeklyActivity};
pub use onboarding::{HealthGoal, SurveyStep, HEALTH_GOALS, SURVEY_STEPS};
pub use profile::{Profile, PROFILE};
pub use routine::{Category, Difficulty, Routine, RoutineDetail, RoutineStep, ROUTINES, ROUTINE_DETAIL};
