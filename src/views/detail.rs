/// Like/save toggles of the routine detail screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoutineDetailState {
    pub liked: bool,
    pub saved: bool,
}

impl RoutineDetailState {
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    pub fn toggle_save(&mut self) {
        self.saved = !self.saved;
    }
}
