//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! goes through the core store, which replaces the observable snapshot the
//! components re-render from.

use leptos::prelude::*;
use reactive_stores::Store;

use food_harmony_core::discovery::DiscoverySession;
use food_harmony_core::domain::Category;
use food_harmony_core::forms::{ItemFormOutput, RestrictionFormOutput};
use food_harmony_core::store::PreferenceStore;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The user's stored preferences and restrictions
    pub profile: PreferenceStore,
    /// Transient state of the Discover tab
    pub discovery: DiscoverySession,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            profile: PreferenceStore::sample(),
            discovery: DiscoverySession::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a submitted food-item form to one of the three item collections
pub fn store_apply_item_form(store: &AppStore, category: Category, output: ItemFormOutput) {
    let binding = store.profile();
    let mut profile = binding.write();
    match output {
        ItemFormOutput::Created(draft) => {
            profile.items_mut(category).add(draft);
        }
        ItemFormOutput::Updated(id, draft) => {
            profile.items_mut(category).update(id, draft);
        }
    }
}

/// Remove a food item from a collection by ID
pub fn store_delete_item(store: &AppStore, category: Category, id: u32) {
    store.profile().write().items_mut(category).delete(id);
}

/// Apply a submitted restriction form to the restriction collection
pub fn store_apply_restriction_form(store: &AppStore, output: RestrictionFormOutput) {
    let binding = store.profile();
    let mut profile = binding.write();
    match output {
        RestrictionFormOutput::Created(draft) => {
            profile.restrictions_mut().add(draft);
        }
        RestrictionFormOutput::Updated(id, draft) => {
            profile.restrictions_mut().update(id, draft);
        }
    }
}

/// Remove a restriction from the store by ID
pub fn store_delete_restriction(store: &AppStore, id: u32) {
    store.profile().write().restrictions_mut().delete(id);
}
