use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurveyStep {
    pub id: u8,
    pub title: &'static str,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthGoal {
    pub emoji: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const SURVEY_STEPS: [SurveyStep; 4] = [
    SurveyStep { id: 1, title: "Basic Info", completed: true },
    SurveyStep { id: 2, title: "Health Goals", completed: true },
    SurveyStep { id: 3, title: "Sleep Habits", completed: false },
    SurveyStep { id: 4, title: "Activity Level", completed: false },
];

pub const HEALTH_GOALS: [HealthGoal; 6] = [
    HealthGoal { emoji: "😴", label: "Better Sleep", description: "Improve sleep quality" },
    HealthGoal { emoji: "🧘", label: "Reduce Stress", description: "Find inner calm" },
    HealthGoal { emoji: "💪", label: "More Energy", description: "Feel energized daily" },
    HealthGoal { emoji: "🎯", label: "Improve Focus", description: "Enhance concentration" },
    HealthGoal { emoji: "❤️", label: "Heart Health", description: "Strengthen cardiovascular" },
    HealthGoal { emoji: "🏃", label: "Stay Active", description: "Build healthy habits" },
];

/// Fraction of survey steps already completed
pub fn survey_progress() -> f64 {
    let done = SURVEY_STEPS.iter().filter(|step| step.completed).count();
    done as f64 / SURVEY_STEPS.len() as f64
}
