use serde::Serialize;

use super::input::InputState;
use crate::models::routine::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    #[default]
    Routine,
    Playlist,
}

impl UploadKind {
    pub fn toggled(self) -> Self {
        match self {
            Self::Routine => Self::Playlist,
            Self::Playlist => Self::Routine,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Routine => "Upload Routine",
            Self::Playlist => "Create Playlist",
        }
    }

    pub fn title_placeholder(self) -> &'static str {
        match self {
            Self::Routine => "Morning Meditation Flow",
            Self::Playlist => "Evening Wind-Down Collection",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadField {
    #[default]
    Kind,
    Title,
    Description,
    Category,
    Duration,
    Tags,
}

impl UploadField {
    const ORDER: [UploadField; 6] = [
        UploadField::Kind,
        UploadField::Title,
        UploadField::Description,
        UploadField::Category,
        UploadField::Duration,
        UploadField::Tags,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// What a submitted upload would contain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadDraft {
    pub kind: UploadKind,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub duration: Option<String>,
    pub tags: Vec<String>,
}

/// Modal form for sharing a routine or playlist
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub kind: UploadKind,
    pub title: InputState,
    pub description: InputState,
    /// Index into `Category::UPLOAD_CHOICES`
    pub category: Option<usize>,
    pub duration: InputState,
    pub new_tag: InputState,
    pub tags: Vec<String>,
    pub focus: UploadField,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn focused_input(&mut self) -> Option<&mut InputState> {
        match self.focus {
            UploadField::Title => Some(&mut self.title),
            UploadField::Description => Some(&mut self.description),
            UploadField::Duration => Some(&mut self.duration),
            UploadField::Tags => Some(&mut self.new_tag),
            UploadField::Kind | UploadField::Category => None,
        }
    }

    pub fn type_char(&mut self, ch: char) {
        if let Some(input) = self.focused_input() {
            input.insert_char(ch);
        }
    }

    /// Backspace on an empty tag input drops the last tag
    pub fn backspace(&mut self) {
        if self.focus == UploadField::Tags && self.new_tag.value().is_empty() {
            self.tags.pop();
            return;
        }
        if let Some(input) = self.focused_input() {
            input.backspace();
        }
    }

    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.category.and_then(|i| Category::UPLOAD_CHOICES.get(i).copied())
    }

    /// Step through "Select category" and the choices, wrapping
    pub fn next_category(&mut self) {
        self.category = match self.category {
            None => Some(0),
            Some(i) if i + 1 < Category::UPLOAD_CHOICES.len() => Some(i + 1),
            Some(_) => None,
        };
    }

    pub fn prev_category(&mut self) {
        self.category = match self.category {
            None => Some(Category::UPLOAD_CHOICES.len() - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Add the pending tag; blank and duplicate tags are dropped.
    /// Returns whether a tag was added.
    pub fn add_tag(&mut self) -> bool {
        let tag = self.new_tag.value().trim().to_string();
        if tag.is_empty() || self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        self.new_tag.clear();
        true
    }

    pub fn set_description(&mut self, text: String) {
        self.description = InputState::from_content(text);
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_blank() {
            missing.push("title");
        }
        if self.description.is_blank() {
            missing.push("description");
        }
        if self.selected_category().is_none() {
            missing.push("category");
        }
        missing
    }

    pub fn can_submit(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn submit(&self) -> Option<UploadDraft> {
        let category = self.selected_category()?;
        if !self.can_submit() {
            return None;
        }
        let duration = self.duration.value().trim();
        Some(UploadDraft {
            kind: self.kind,
            title: self.title.value().trim().to_string(),
            description: self.description.value().trim().to_string(),
            category,
            duration: (!duration.is_empty()).then(|| duration.to_string()),
            tags: self.tags.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut UploadForm, field: UploadField, text: &str) {
        form.focus = field;
        for ch in text.chars() {
            form.type_char(ch);
        }
    }

    #[test]
    fn test_tags_are_trimmed_and_deduplicated() {
        let mut form = UploadForm::new();
        type_into(&mut form, UploadField::Tags, "  sleep ");
        assert!(form.add_tag());
        assert!(form.new_tag.value().is_empty());

        type_into(&mut form, UploadField::Tags, "sleep");
        assert!(!form.add_tag());
        assert_eq!(form.new_tag.value(), "sleep");

        form.new_tag.clear();
        type_into(&mut form, UploadField::Tags, "   ");
        assert!(!form.add_tag());

        assert_eq!(form.tags, vec!["sleep".to_string()]);
    }

    #[test]
    fn test_backspace_on_empty_tag_input_removes_last_tag() {
        let mut form = UploadForm::new();
        form.tags = vec!["calm".to_string(), "night".to_string()];
        form.focus = UploadField::Tags;

        form.backspace();
        assert_eq!(form.tags, vec!["calm".to_string()]);

        form.backspace();
        assert!(form.tags.is_empty());
        form.backspace();
        assert!(form.tags.is_empty());
    }

    #[test]
    fn test_submit_requires_title_description_and_category() {
        let mut form = UploadForm::new();
        assert_eq!(form.missing_fields(), vec!["title", "description", "category"]);
        assert!(form.submit().is_none());

        type_into(&mut form, UploadField::Title, "Evening Reset");
        type_into(&mut form, UploadField::Description, "Wind down after work");
        assert!(!form.can_submit());

        form.next_category();
        form.next_category();
        assert_eq!(form.selected_category(), Some(Category::Sleep));

        let draft = form.submit().expect("complete form");
        assert_eq!(draft.title, "Evening Reset");
        assert_eq!(draft.category, Category::Sleep);
        assert_eq!(draft.duration, None);
        assert_eq!(draft.kind, UploadKind::Routine);
    }

    #[test]
    fn test_category_cycle_passes_through_unset() {
        let mut form = UploadForm::new();
        form.prev_category();
        assert_eq!(form.selected_category(), Some(Category::MentalHealth));
        form.next_category();
        assert_eq!(form.selected_category(), None);
    }

    #[test]
    fn test_focus_cycle_and_kind_toggle() {
        let mut form = UploadForm::new();
        form.focus_prev();
        assert_eq!(form.focus, UploadField::Tags);
        form.focus_next();
        assert_eq!(form.focus, UploadField::Kind);

        form.type_char('x');
        assert!(form.title.value().is_empty());

        form.toggle_kind();
        assert_eq!(form.kind.heading(), "Create Playlist");
    }
}
