//! Draft state for composing a new memory.

use crate::model::{Category, Memory};
use crate::picker::ImageSelection;
use chrono::Utc;
use uuid::Uuid;

/// Validation errors raised before a draft reaches the store.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DraftError {
    /// Content is empty or whitespace only.
    #[error("memory content is empty")]
    EmptyContent,
    /// No category was selected.
    #[error("no category selected")]
    MissingCategory,
}

/// In-progress memory entry, validated on `finish`.
#[derive(Debug, Clone, Default)]
pub struct MemoryDraft {
    /// Entry text typed so far.
    pub content: String,
    /// Selected category, if any.
    pub category: Option<Category>,
    /// Attached photo locator, if any.
    pub image_uri: Option<String>,
}

impl MemoryDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry text.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Select a category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Attach a photo locator directly.
    pub fn image_uri(mut self, image_uri: impl Into<String>) -> Self {
        self.image_uri = Some(image_uri.into());
        self
    }

    /// Apply a picker outcome. A cancelled pick keeps the current photo.
    pub fn attach_image(&mut self, selection: ImageSelection) {
        if let ImageSelection::Picked(uri) = selection {
            self.image_uri = Some(uri);
        }
    }

    /// Whether the draft would pass validation. Mirrors the save-button
    /// enablement in the add flow.
    pub fn is_complete(&self) -> bool {
        !self.content.trim().is_empty() && self.category.is_some()
    }

    /// Validate the draft and produce a memory with a fresh id and the
    /// current timestamp.
    pub fn finish(self) -> Result<Memory, DraftError> {
        if self.content.trim().is_empty() {
            return Err(DraftError::EmptyContent);
        }
        let category = self.category.ok_or(DraftError::MissingCategory)?;
        Ok(Memory {
            id: Uuid::new_v4(),
            content: self.content,
            category: category.as_str().to_string(),
            date: Utc::now(),
            image_uri: self.image_uri,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DraftError, MemoryDraft};
    use crate::model::Category;
    use crate::picker::ImageSelection;
    use pretty_assertions::assert_eq;
    use uuid::Version;

    #[test]
    fn finish_rejects_blank_content() {
        let draft = MemoryDraft::new().content("   ").category(Category::Sweet);
        assert_eq!(draft.finish(), Err(DraftError::EmptyContent));
    }

    #[test]
    fn finish_rejects_missing_category() {
        let draft = MemoryDraft::new().content("First steps");
        assert_eq!(draft.finish(), Err(DraftError::MissingCategory));
    }

    #[test]
    fn finish_populates_id_and_date() {
        let before = chrono::Utc::now();
        let memory = MemoryDraft::new()
            .content("First steps")
            .category(Category::Milestone)
            .finish()
            .expect("memory");
        assert_eq!(memory.id.get_version(), Some(Version::Random));
        assert_eq!(memory.category, "milestone");
        assert_eq!(memory.image_uri, None);
        assert!(memory.date >= before);
    }

    #[test]
    fn cancelled_pick_keeps_current_photo() {
        let mut draft = MemoryDraft::new().image_uri("file:///photos/a.jpg");
        draft.attach_image(ImageSelection::Cancelled);
        assert_eq!(draft.image_uri, Some("file:///photos/a.jpg".to_string()));

        draft.attach_image(ImageSelection::Picked("file:///photos/b.jpg".to_string()));
        assert_eq!(draft.image_uri, Some("file:///photos/b.jpg".to_string()));
    }

    #[test]
    fn is_complete_tracks_required_fields() {
        let draft = MemoryDraft::new();
        assert!(!draft.is_complete());
        let draft = draft.content("Shared her snack");
        assert!(!draft.is_complete());
        let draft = draft.category(Category::Kind);
        assert!(draft.is_complete());
    }
}
