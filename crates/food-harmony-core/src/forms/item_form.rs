//! Food Item Form Session
//!
//! Draft state for the add/edit form of one food-item collection, including
//! the pending-tag sub-editor.

use crate::domain::{FoodDraft, FoodItem};

use super::FormMode;

/// What a successful submit asks the store to do
#[derive(Debug, Clone, PartialEq)]
pub enum ItemFormOutput {
    Created(FoodDraft),
    Updated(u32, FoodDraft),
}

/// Session state for one category's add/edit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFormSession {
    mode: FormMode,
    pub name: String,
    pub notes: String,
    pub preparation_style: String,
    tags: Vec<String>,
    /// Ephemeral tag input, not yet part of the draft
    pub pending_tag: String,
}

impl ItemFormSession {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Idle
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Tags accumulated for the current draft, in insertion order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Open a blank create form, dropping any edit in progress
    pub fn open_create(&mut self) {
        *self = Self {
            mode: FormMode::Creating,
            ..Self::default()
        };
    }

    /// Open an edit form pre-populated from `item`, dropping any create in
    /// progress
    pub fn open_edit(&mut self, item: &FoodItem) {
        *self = Self {
            mode: FormMode::Editing(item.id),
            name: item.name.clone(),
            notes: item.notes.clone().unwrap_or_default(),
            preparation_style: item.preparation_style.clone().unwrap_or_default(),
            tags: item.tags.clone(),
            pending_tag: String::new(),
        };
    }

    /// Discard all fields, including pending tags, and return to idle
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Append the trimmed pending tag to the draft if it is non-empty and
    /// not already present (exact, case-sensitive match). The input is
    /// cleared only when the tag was actually added.
    pub fn commit_pending_tag(&mut self) {
        let tag = self.pending_tag.trim();
        if tag.is_empty() {
            return;
        }
        if !self.tags.iter().any(|existing| existing == tag) {
            self.tags.push(tag.to_string());
            self.pending_tag.clear();
        }
    }

    /// Remove a draft tag by exact value match
    pub fn remove_tag(&mut self, value: &str) {
        self.tags.retain(|tag| tag != value);
    }

    /// Commit the draft, tags included, atomically.
    ///
    /// Returns `None` and leaves the form untouched when the trimmed name is
    /// empty; otherwise resets every field and returns to idle.
    pub fn submit(&mut self) -> Option<ItemFormOutput> {
        if self.name.trim().is_empty() {
            return None;
        }
        let draft = FoodDraft {
            name: self.name.clone(),
            tags: self.tags.clone(),
            notes: Some(self.notes.clone()),
            preparation_style: Some(self.preparation_style.clone()),
        };
        let output = match self.mode {
            FormMode::Idle => return None,
            FormMode::Creating => ItemFormOutput::Created(draft),
            FormMode::Editing(id) => ItemFormOutput::Updated(id, draft),
        };
        *self = Self::default();
        Some(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Draft;

    fn sample_item() -> FoodItem {
        FoodItem {
            id: 4,
            name: "Salmon".to_string(),
            tags: vec!["protein".to_string()],
            notes: Some("Prefer grilled".to_string()),
            preparation_style: None,
        }
    }

    #[test]
    fn test_modes_are_mutually_exclusive() {
        let mut form = ItemFormSession::default();
        form.open_edit(&sample_item());
        assert_eq!(form.mode(), FormMode::Editing(4));

        form.open_create();
        assert_eq!(form.mode(), FormMode::Creating);
        assert_eq!(form.name, "");

        form.open_edit(&sample_item());
        assert_eq!(form.mode(), FormMode::Editing(4));
        assert_eq!(form.name, "Salmon");
    }

    #[test]
    fn test_tag_add_is_idempotent() {
        let mut form = ItemFormSession::default();
        form.open_create();

        form.pending_tag = "spicy".to_string();
        form.commit_pending_tag();
        form.pending_tag = "spicy".to_string();
        form.commit_pending_tag();

        assert_eq!(form.tags(), ["spicy"]);
        // Dedup is case-sensitive: a different casing is a different tag
        form.pending_tag = "Spicy".to_string();
        form.commit_pending_tag();
        assert_eq!(form.tags(), ["spicy", "Spicy"]);
    }

    #[test]
    fn test_blank_pending_tag_is_ignored() {
        let mut form = ItemFormSession::default();
        form.open_create();
        form.pending_tag = "   ".to_string();
        form.commit_pending_tag();
        assert!(form.tags().is_empty());
    }

    #[test]
    fn test_cancel_discards_pending_tags() {
        let mut form = ItemFormSession::default();
        form.open_create();
        form.name = "Ramen".to_string();
        form.pending_tag = "noodles".to_string();
        form.commit_pending_tag();

        form.cancel();
        assert_eq!(form.mode(), FormMode::Idle);
        assert!(form.tags().is_empty());
        assert_eq!(form.name, "");
    }

    #[test]
    fn test_submit_refuses_empty_name() {
        let mut form = ItemFormSession::default();
        form.open_create();
        form.name = "   ".to_string();
        assert!(form.submit().is_none());
        // Form stays open for correction
        assert_eq!(form.mode(), FormMode::Creating);
    }

    #[test]
    fn test_submit_commits_tags_atomically_and_resets() {
        let mut form = ItemFormSession::default();
        form.open_create();
        form.name = " Ramen ".to_string();
        form.notes = "extra nori".to_string();
        form.pending_tag = "noodles".to_string();
        form.commit_pending_tag();

        let output = form.submit().expect("valid draft");
        let ItemFormOutput::Created(draft) = output else {
            panic!("expected a create");
        };
        assert_eq!(draft.trimmed_name(), "Ramen");
        assert_eq!(draft.tags, vec!["noodles"]);

        assert_eq!(form.mode(), FormMode::Idle);
        assert_eq!(form.name, "");
        assert!(form.tags().is_empty());
    }

    #[test]
    fn test_edit_submit_targets_the_same_id() {
        let mut form = ItemFormSession::default();
        form.open_edit(&sample_item());
        form.preparation_style = "grilled".to_string();

        match form.submit() {
            Some(ItemFormOutput::Updated(id, draft)) => {
                assert_eq!(id, 4);
                assert_eq!(draft.preparation_style, Some("grilled".to_string()));
            }
            other => panic!("expected an update, got {:?}", other),
        }
    }
}
