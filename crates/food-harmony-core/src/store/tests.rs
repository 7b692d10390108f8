//! Store Layer Tests
//!
//! CRUD contract coverage for the in-memory collections.

use crate::domain::{Category, Entity, FoodDraft, RestrictionDraft, RestrictionType, Severity};
use crate::store::{Collection, PreferenceStore};

#[test]
fn test_add_appends_with_fresh_id() {
    let mut store = PreferenceStore::sample();
    let foods = store.items_mut(Category::Foods);
    assert_eq!(foods.len(), 2);

    let added = foods
        .add(FoodDraft {
            name: "Quinoa".to_string(),
            tags: vec!["grain".to_string()],
            notes: None,
            preparation_style: None,
        })
        .expect("valid draft");
    assert_eq!(added.id(), 3);

    let foods = store.items(Category::Foods);
    assert_eq!(foods.len(), 3);
    assert_eq!(foods.list()[2].name, "Quinoa");
    assert_eq!(foods.list()[2].tags, vec!["grain"]);
}

#[test]
fn test_add_to_single_item_collection() {
    let mut foods = Collection::new();
    foods.add(FoodDraft {
        name: "Salmon".to_string(),
        tags: vec!["protein".to_string(), "omega-3".to_string()],
        notes: None,
        preparation_style: None,
    });

    foods.add(FoodDraft {
        name: "Quinoa".to_string(),
        tags: vec!["grain".to_string()],
        notes: None,
        preparation_style: None,
    });

    assert_eq!(foods.len(), 2);
    assert_eq!(foods.list()[1].name, "Quinoa");
    assert_eq!(foods.list()[1].tags, vec!["grain"]);
}

#[test]
fn test_add_trims_and_normalizes() {
    let mut foods = Collection::new();
    let added = foods
        .add(FoodDraft {
            name: "  Miso Soup ".to_string(),
            tags: vec![],
            notes: Some("  ".to_string()),
            preparation_style: None,
        })
        .unwrap();
    assert_eq!(added.name, "Miso Soup");
    assert_eq!(added.notes, None);
}

#[test]
fn test_add_empty_name_is_a_no_op() {
    let mut store = PreferenceStore::sample();
    let foods = store.items_mut(Category::Foods);

    assert!(foods.add(FoodDraft::named("")).is_none());
    assert!(foods.add(FoodDraft::named("   ")).is_none());
    assert_eq!(foods.len(), 2);
}

#[test]
fn test_update_keeps_position_and_id() {
    let mut store = PreferenceStore::sample();
    let foods = store.items_mut(Category::Foods);

    let updated = foods
        .update(
            1,
            FoodDraft {
                name: "Salmon".to_string(),
                tags: vec!["protein".to_string()],
                notes: None,
                preparation_style: Some("grilled".to_string()),
            },
        )
        .expect("id 1 exists");
    assert_eq!(updated.id, 1);

    let foods = store.items(Category::Foods);
    assert_eq!(foods.len(), 2);
    let first = &foods.list()[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.name, "Salmon");
    assert_eq!(first.tags, vec!["protein"]);
    assert_eq!(first.preparation_style, Some("grilled".to_string()));
    // The neighbor is untouched, value and position
    assert_eq!(foods.list()[1].name, "Quinoa");
    assert_eq!(foods.list()[1].id, 2);
}

#[test]
fn test_update_missing_id_is_a_silent_no_op() {
    let mut store = PreferenceStore::sample();
    let before = store.items(Category::Foods).list().to_vec();

    assert!(store
        .items_mut(Category::Foods)
        .update(99, FoodDraft::named("Ghost"))
        .is_none());
    assert_eq!(store.items(Category::Foods).list(), &before[..]);
}

#[test]
fn test_delete_preserves_order_of_the_rest() {
    let mut foods: Collection<crate::domain::FoodItem> = Collection::new();
    for name in ["A", "B", "C", "D"] {
        foods.add(FoodDraft::named(name));
    }

    assert!(foods.delete(2));
    let names: Vec<_> = foods.list().iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C", "D"]);

    assert!(!foods.delete(2));
    assert_eq!(foods.len(), 3);
}

#[test]
fn test_delete_restriction_scenario() {
    let mut restrictions = Collection::new();
    restrictions.add(RestrictionDraft::new(
        "Shellfish",
        RestrictionType::Allergy,
        Severity::Severe,
    ));

    assert!(restrictions.delete(1));
    assert!(restrictions.is_empty());
}

#[test]
fn test_ids_stay_unique_across_deletes() {
    let mut foods: Collection<crate::domain::FoodItem> = Collection::new();
    let first = foods.add(FoodDraft::named("A")).unwrap().id();
    foods.delete(first);

    let second = foods.add(FoodDraft::named("B")).unwrap().id();
    assert_ne!(first, second);
}

#[test]
fn test_restriction_crud() {
    let mut store = PreferenceStore::new();
    let added = store
        .restrictions_mut()
        .add(RestrictionDraft::new(
            "Peanuts",
            RestrictionType::Allergy,
            Severity::Severe,
        ))
        .unwrap();
    let id = added.id();

    let updated = store
        .restrictions_mut()
        .update(
            id,
            RestrictionDraft::new("Tree Nuts", RestrictionType::Allergy, Severity::Moderate),
        )
        .unwrap();
    assert_eq!(updated.name, "Tree Nuts");
    assert_eq!(updated.severity, Some(Severity::Moderate));

    assert!(store.restrictions_mut().delete(id));
    assert!(store.restrictions().is_empty());
}

#[test]
fn test_sample_profile_counts() {
    let store = PreferenceStore::sample();
    assert_eq!(store.total_items(), 6);
    assert_eq!(store.restrictions().len(), 3);
    assert_eq!(
        store.preference_names(),
        vec![
            "Salmon",
            "Quinoa",
            "Green Tea",
            "Kombucha",
            "Dark Chocolate",
            "Fresh Berries"
        ]
    );
    assert_eq!(
        store.restriction_names(),
        vec!["Shellfish", "Gluten", "Very Spicy Food"]
    );
}
