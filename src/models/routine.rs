use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::WellTuneError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Meditation,
    Fitness,
    Sleep,
    Wellness,
    Productivity,
    #[serde(rename = "Mental Health")]
    MentalHealth,
}

impl Category {
    /// Chips shown above the feed, after "All"
    pub const FEED_FILTERS: [Category; 5] = [
        Category::Meditation,
        Category::Fitness,
        Category::Sleep,
        Category::Wellness,
        Category::Productivity,
    ];

    /// Choices offered by the upload form
    pub const UPLOAD_CHOICES: [Category; 6] = [
        Category::Meditation,
        Category::Sleep,
        Category::Fitness,
        Category::Wellness,
        Category::Productivity,
        Category::MentalHealth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Meditation => "Meditation",
            Self::Fitness => "Fitness",
            Self::Sleep => "Sleep",
            Self::Wellness => "Wellness",
            Self::Productivity => "Productivity",
            Self::MentalHealth => "Mental Health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = WellTuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        Category::UPLOAD_CHOICES
            .into_iter()
            .find(|category| category.label().to_lowercase() == wanted)
            .ok_or_else(|| WellTuneError::InvalidInput(format!("unknown category '{}'", s.trim())))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Routine {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
    pub icon: &'static str,
    pub likes: u32,
    pub participants: u32,
}

pub const ROUTINES: [Routine; 6] = [
    Routine {
        id: 1,
        title: "Morning Mindfulness",
        description: "Start your day with calm and clarity through guided meditation",
        category: Category::Meditation,
        duration_minutes: 10,
        difficulty: Difficulty::Beginner,
        icon: "🧘",
        likes: 1240,
        participants: 8420,
    },
    Routine {
        id: 2,
        title: "Power Morning Workout",
        description: "High-energy routine to boost metabolism and strengthen core",
        category: Category::Fitness,
        duration_minutes: 25,
        difficulty: Difficulty::Intermediate,
        icon: "💪",
        likes: 2150,
        participants: 12300,
    },
    Routine {
        id: 3,
        title: "Deep Sleep Protocol",
        description: "Science-backed wind-down routine for restorative sleep",
        category: Category::Sleep,
        duration_minutes: 15,
        difficulty: Difficulty::Beginner,
        icon: "😴",
        likes: 3420,
        participants: 15600,
    },
    Routine {
        id: 4,
        title: "Breathwork for Stress",
        description: "Reduce anxiety with proven breathing techniques",
        category: Category::Wellness,
        duration_minutes: 8,
        difficulty: Difficulty::Beginner,
        icon: "🌬️",
        likes: 980,
        participants: 5200,
    },
    Routine {
        id: 5,
        title: "Focus Flow State",
        description: "Enter deep work with binaural beats and productivity rituals",
        category: Category::Productivity,
        duration_minutes: 45,
        difficulty: Difficulty::Advanced,
        icon: "🎯",
        likes: 1560,
        participants: 7800,
    },
    Routine {
        id: 6,
        title: "Gratitude Practice",
        description: "Cultivate positivity with daily reflection exercises",
        category: Category::MentalHealth,
        duration_minutes: 5,
        difficulty: Difficulty::Beginner,
        icon: "✨",
        likes: 2890,
        participants: 11200,
    },
];

pub fn routine_by_id(id: u32) -> Option<&'static Routine> {
    ROUTINES.iter().find(|routine| routine.id == id)
}

/// Routines matching a feed filter; `None` means "All"
pub fn routines_in(category: Option<Category>) -> Vec<&'static Routine> {
    ROUTINES
        .iter()
        .filter(|routine| category.map_or(true, |c| routine.category == c))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoutineStep {
    pub step: u8,
    pub title: &'static str,
    pub duration_minutes: u32,
    pub description: &'static str,
}

/// Long-form content of the routine detail screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoutineDetail {
    pub rating: f32,
    pub about: [&'static str; 2],
    pub steps: [RoutineStep; 4],
    pub tags: [&'static str; 6],
}

pub const ROUTINE_DETAIL: RoutineDetail = RoutineDetail {
    rating: 4.8,
    about: [
        "Transform your sleep quality with this evidence-based protocol designed by sleep scientists. \
         This routine combines progressive muscle relaxation, guided breathing, and calming visualization \
         to prepare your body and mind for deep, restorative sleep.",
        "Best practiced 30 minutes before bed. Dim the lights, find a comfortable position, and let the \
         AI guide you through each step. Over 15,000 users report falling asleep faster and waking up \
         more refreshed.",
    ],
    steps: [
        RoutineStep {
            step: 1,
            title: "Body Scan",
            duration_minutes: 3,
            description: "Release physical tension from head to toe",
        },
        RoutineStep {
            step: 2,
            title: "4-7-8 Breathing",
            duration_minutes: 5,
            description: "Activate parasympathetic nervous system",
        },
        RoutineStep {
            step: 3,
            title: "Guided Visualization",
            duration_minutes: 5,
            description: "Mental relaxation journey to peaceful place",
        },
        RoutineStep {
            step: 4,
            title: "Sleep Affirmations",
            duration_minutes: 2,
            description: "Build positive sleep mindset",
        },
    ],
    tags: [
        "Sleep",
        "Meditation",
        "Breathing",
        "Beginner-Friendly",
        "Evening Routine",
        "Science-Based",
    ],
};
