//! Food Item Entity
//!
//! A named preference entry (food, drink or dessert) with free-form tags.

use serde::{Deserialize, Serialize};

use super::entity::{normalize_text, Draft, Entity};

/// Which food-item collection an operation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Foods,
    Drinks,
    Desserts,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Foods => "foods",
            Category::Drinks => "drinks",
            Category::Desserts => "desserts",
        }
    }
}

/// A favorite food, drink or dessert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Unique identifier within its collection
    pub id: u32,
    /// Display name, never empty once stored
    pub name: String,
    /// Free-form labels, insertion order preserved, duplicates allowed
    pub tags: Vec<String>,
    /// Optional free text
    pub notes: Option<String>,
    /// Optional free text, e.g. "grilled"
    pub preparation_style: Option<String>,
}

impl Entity for FoodItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Create/update payload for a food item, excluding the id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub name: String,
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub preparation_style: Option<String>,
}

impl FoodDraft {
    /// Name-only draft, mostly for tests
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Draft for FoodDraft {
    type Entry = FoodItem;

    fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    fn build(self, id: u32) -> FoodItem {
        FoodItem {
            id,
            name: self.name.trim().to_string(),
            tags: self.tags,
            notes: normalize_text(self.notes),
            preparation_style: normalize_text(self.preparation_style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_build_trims_fields() {
        let draft = FoodDraft {
            name: "  Salmon  ".to_string(),
            tags: vec!["protein".to_string()],
            notes: Some("   ".to_string()),
            preparation_style: Some(" grilled ".to_string()),
        };
        let item = draft.build(7);
        assert_eq!(item.id(), 7);
        assert_eq!(item.name, "Salmon");
        assert_eq!(item.tags, vec!["protein"]);
        assert_eq!(item.notes, None);
        assert_eq!(item.preparation_style, Some("grilled".to_string()));
    }

    #[test]
    fn test_whitespace_name_is_invalid() {
        assert!(!FoodDraft::named("   ").is_valid());
        assert!(FoodDraft::named("Quinoa").is_valid());
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::Foods.as_str(), "foods");
        assert_eq!(Category::Desserts.as_str(), "desserts");
    }
}
