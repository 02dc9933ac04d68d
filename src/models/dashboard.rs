use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayConsistency {
    pub day: &'static str,
    pub completed: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeeklyActivity {
    pub week: &'static str,
    pub minutes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub name: &'static str,
    pub percent: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STAT_CARDS: [StatCard; 4] = [
    StatCard { label: "Goal Progress", value: "86%", change: "+12%" },
    StatCard { label: "Day Streak", value: "12", change: "Active" },
    StatCard { label: "Minutes/Week", value: "135", change: "+8 min" },
    StatCard { label: "Achievements", value: "8", change: "New!" },
];

pub const WEEKLY_CONSISTENCY: [DayConsistency; 7] = [
    DayConsistency { day: "Mon", completed: 4, total: 5 },
    DayConsistency { day: "Tue", completed: 5, total: 5 },
    DayConsistency { day: "Wed", completed: 3, total: 5 },
    DayConsistency { day: "Thu", completed: 5, total: 5 },
    DayConsistency { day: "Fri", completed: 4, total: 5 },
    DayConsistency { day: "Sat", completed: 5, total: 5 },
    DayConsistency { day: "Sun", completed: 4, total: 5 },
];

pub const ACTIVITY_TREND: [WeeklyActivity; 4] = [
    WeeklyActivity { week: "Week 1", minutes: 85 },
    WeeklyActivity { week: "Week 2", minutes: 120 },
    WeeklyActivity { week: "Week 3", minutes: 150 },
    WeeklyActivity { week: "Week 4", minutes: 180 },
];

pub const CATEGORY_SHARES: [CategoryShare; 4] = [
    CategoryShare { name: "Sleep", percent: 28 },
    CategoryShare { name: "Meditation", percent: 35 },
    CategoryShare { name: "Fitness", percent: 22 },
    CategoryShare { name: "Wellness", percent: 15 },
];

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement { icon: "🔥", title: "7-Day Streak", description: "Completed routines for a week" },
    Achievement { icon: "🧘", title: "Meditation Master", description: "50 meditation sessions" },
    Achievement { icon: "⭐", title: "Early Bird", description: "10 morning routines" },
];

/// (completed, planned) over the week
pub fn weekly_totals() -> (u64, u64) {
    WEEKLY_CONSISTENCY
        .iter()
        .fold((0, 0), |(done, planned), day| (done + day.completed, planned + day.total))
}

/// Share of planned routines completed this week, rounded
pub fn weekly_completion_percent() -> u64 {
    let (done, planned) = weekly_totals();
    if planned == 0 {
        return 0;
    }
    (done * 100 + planned / 2) / planned
}

pub fn total_activity_minutes() -> u64 {
    ACTIVITY_TREND.iter().map(|week| week.minutes).sum()
}

/// Growth from the first to the last week of the trend, in percent
pub fn activity_growth_percent() -> i64 {
    match (ACTIVITY_TREND.first(), ACTIVITY_TREND.last()) {
        (Some(first), Some(last)) if first.minutes > 0 => {
            ((last.minutes as i64 - first.minutes as i64) * 100) / first.minutes as i64
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_totals() {
        assert_eq!(weekly_totals(), (30, 35));
        assert_eq!(weekly_completion_percent(), 86);
    }

    #[test]
    fn test_activity_totals() {
        assert_eq!(total_activity_minutes(), 535);
        assert_eq!(activity_growth_percent(), 111);
    }

    #[test]
    fn test_category_shares_cover_everything() {
        let total: u16 = CATEGORY_SHARES.iter().map(|c| c.percent).sum();
        assert_eq!(total, 100);
    }
}
