use super::upload::UploadForm;
use crate::models::routine::{routines_in, Category, Routine};

/// Discover feed: category chips, a cursor over the cards and the upload modal
#[derive(Debug, Clone, Default)]
pub struct DiscoverFeed {
    /// Index into the chip row; 0 is "All"
    pub filter_index: usize,
    pub cursor: usize,
    pub upload: Option<UploadForm>,
}

impl DiscoverFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chip_labels() -> Vec<&'static str> {
        std::iter::once("All")
            .chain(Category::FEED_FILTERS.iter().map(|c| c.label()))
            .collect()
    }

    pub fn filter(&self) -> Option<Category> {
        self.filter_index
            .checked_sub(1)
            .and_then(|i| Category::FEED_FILTERS.get(i).copied())
    }

    pub fn visible(&self) -> Vec<&'static Routine> {
        routines_in(self.filter())
    }

    pub fn next_filter(&mut self) {
        self.filter_index = (self.filter_index + 1) % (Category::FEED_FILTERS.len() + 1);
        self.clamp_cursor();
    }

    pub fn prev_filter(&mut self) {
        self.filter_index = self
            .filter_index
            .checked_sub(1)
            .unwrap_or(Category::FEED_FILTERS.len());
        self.clamp_cursor();
    }

    pub fn move_down(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn move_up(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn current(&self) -> Option<&'static Routine> {
        self.visible().get(self.cursor).copied()
    }

    pub fn open_upload(&mut self) {
        if self.upload.is_none() {
            self.upload = Some(UploadForm::new());
        }
    }

    pub fn close_upload(&mut self) {
        self.upload = None;
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_shows_every_routine() {
        let feed = DiscoverFeed::new();
        assert_eq!(feed.filter(), None);
        assert_eq!(feed.visible().len(), 6);
        assert_eq!(DiscoverFeed::chip_labels()[0], "All");
    }

    #[test]
    fn test_filter_shrinks_and_clamps_cursor() {
        let mut feed = DiscoverFeed::new();
        for _ in 0..5 {
            feed.move_down();
        }
        assert_eq!(feed.cursor, 5);

        feed.next_filter();
        assert_eq!(feed.filter(), Some(Category::Meditation));
        assert_eq!(feed.cursor, 0);
        assert_eq!(feed.current().map(|r| r.title), Some("Morning Mindfulness"));
    }

    #[test]
    fn test_filter_cycles_back_to_all() {
        let mut feed = DiscoverFeed::new();
        feed.prev_filter();
        assert_eq!(feed.filter(), Some(Category::Productivity));
        feed.next_filter();
        assert_eq!(feed.filter(), None);
    }

    #[test]
    fn test_upload_modal_open_close() {
        let mut feed = DiscoverFeed::new();
        feed.open_upload();
        assert!(feed.upload.is_some());
        feed.close_upload();
        assert!(feed.upload.is_none());
    }
}
