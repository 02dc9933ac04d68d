#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardRange {
    #[default]
    Last7Days,
    Last30Days,
    Last90Days,
}

impl DashboardRange {
    pub fn next(self) -> Self {
        match self {
            Self::Last7Days => Self::Last30Days,
            Self::Last30Days => Self::Last90Days,
            Self::Last90Days => Self::Last7Days,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Last90Days => "Last 90 days",
        }
    }
}
