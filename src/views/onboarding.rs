use crate::models::onboarding::HEALTH_GOALS;

/// Goal picker shown while onboarding is pending
#[derive(Debug, Clone, Default)]
pub struct OnboardingSurvey {
    pub cursor: usize,
    /// Indices into `HEALTH_GOALS`, in the order they were picked
    pub selected: Vec<usize>,
}

impl OnboardingSurvey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % HEALTH_GOALS.len();
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.checked_sub(1).unwrap_or(HEALTH_GOALS.len() - 1);
    }

    pub fn toggle(&mut self, index: usize) {
        if index >= HEALTH_GOALS.len() {
            return;
        }
        if let Some(pos) = self.selected.iter().position(|&i| i == index) {
            self.selected.remove(pos);
        } else {
            self.selected.push(index);
        }
    }

    pub fn toggle_current(&mut self) {
        self.toggle(self.cursor);
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn can_continue(&self) -> bool {
        !self.selected.is_empty()
    }

    /// "N goal(s) selected", or nothing before the first pick
    pub fn selection_label(&self) -> Option<String> {
        match self.selected.len() {
            0 => None,
            1 => Some("1 goal selected".to_string()),
            n => Some(format!("{} goals selected", n)),
        }
    }
}
