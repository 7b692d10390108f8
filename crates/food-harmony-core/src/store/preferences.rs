//! Preference Store
//!
//! Owns the four profile collections. State is explicit: UI handlers take a
//! `&mut PreferenceStore`, there is no global singleton, and every mutation
//! replaces the observable snapshot the renderer reads back.

use crate::domain::{Category, FoodDraft, FoodItem, Restriction, RestrictionDraft, RestrictionType, Severity};

use super::collection::Collection;

/// All stored preferences for the running session.
///
/// Nothing here outlives the page session; there is no storage tier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceStore {
    foods: Collection<FoodItem>,
    drinks: Collection<FoodItem>,
    desserts: Collection<FoodItem>,
    restrictions: Collection<Restriction>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo profile the app starts with
    pub fn sample() -> Self {
        let mut store = Self::new();

        store.items_mut(Category::Foods).add(FoodDraft {
            name: "Salmon".to_string(),
            tags: vec!["protein".to_string(), "omega-3".to_string()],
            notes: Some("Prefer grilled".to_string()),
            preparation_style: Some("grilled".to_string()),
        });
        store.items_mut(Category::Foods).add(FoodDraft {
            name: "Quinoa".to_string(),
            tags: vec![
                "grain".to_string(),
                "protein".to_string(),
                "gluten-free".to_string(),
            ],
            notes: Some("Great for salads".to_string()),
            preparation_style: None,
        });

        store.items_mut(Category::Drinks).add(FoodDraft {
            name: "Green Tea".to_string(),
            tags: vec!["antioxidants".to_string(), "caffeine".to_string()],
            notes: Some("Jasmine preferred".to_string()),
            preparation_style: None,
        });
        store.items_mut(Category::Drinks).add(FoodDraft {
            name: "Kombucha".to_string(),
            tags: vec!["probiotic".to_string(), "fermented".to_string()],
            notes: Some("Ginger flavor".to_string()),
            preparation_style: None,
        });

        store.items_mut(Category::Desserts).add(FoodDraft {
            name: "Dark Chocolate".to_string(),
            tags: vec!["antioxidants".to_string(), "mood".to_string()],
            notes: Some("70% cacao minimum".to_string()),
            preparation_style: None,
        });
        store.items_mut(Category::Desserts).add(FoodDraft {
            name: "Fresh Berries".to_string(),
            tags: vec!["antioxidants".to_string(), "vitamins".to_string()],
            notes: Some("Seasonal varieties".to_string()),
            preparation_style: None,
        });

        store.restrictions_mut().add(RestrictionDraft::new(
            "Shellfish",
            RestrictionType::Allergy,
            Severity::Severe,
        ));
        store.restrictions_mut().add(RestrictionDraft::new(
            "Gluten",
            RestrictionType::Dietary,
            Severity::Moderate,
        ));
        store.restrictions_mut().add(RestrictionDraft::new(
            "Very Spicy Food",
            RestrictionType::Preference,
            Severity::Mild,
        ));

        store
    }

    pub fn items(&self, category: Category) -> &Collection<FoodItem> {
        match category {
            Category::Foods => &self.foods,
            Category::Drinks => &self.drinks,
            Category::Desserts => &self.desserts,
        }
    }

    pub fn items_mut(&mut self, category: Category) -> &mut Collection<FoodItem> {
        match category {
            Category::Foods => &mut self.foods,
            Category::Drinks => &mut self.drinks,
            Category::Desserts => &mut self.desserts,
        }
    }

    pub fn restrictions(&self) -> &Collection<Restriction> {
        &self.restrictions
    }

    pub fn restrictions_mut(&mut self) -> &mut Collection<Restriction> {
        &mut self.restrictions
    }

    /// Dashboard summary: stored foods + drinks + desserts
    pub fn total_items(&self) -> usize {
        self.foods.len() + self.drinks.len() + self.desserts.len()
    }

    /// Names of every stored food, drink and dessert, in collection order
    pub fn preference_names(&self) -> Vec<String> {
        [Category::Foods, Category::Drinks, Category::Desserts]
            .iter()
            .flat_map(|category| self.items(*category).list())
            .map(|item| item.name.clone())
            .collect()
    }

    /// Names of every stored restriction, in collection order
    pub fn restriction_names(&self) -> Vec<String> {
        self.restrictions
            .list()
            .iter()
            .map(|restriction| restriction.name.clone())
            .collect()
    }
}
