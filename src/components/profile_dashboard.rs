//! Profile Dashboard Component
//!
//! Summary count cards, the "Harmony Plate" overview and the four
//! collection managers.

use leptos::prelude::*;

use food_harmony_core::domain::{Category, Severity};

use crate::components::{CategoryManager, RestrictionsManager};
use crate::store::{use_app_store, AppStateStoreFields};

fn plate_badge_class(severity: Option<Severity>) -> &'static str {
    match severity {
        Some(Severity::Severe) => "badge restriction-badge severe",
        Some(Severity::Moderate) => "badge restriction-badge moderate",
        _ => "badge restriction-badge mild",
    }
}

#[component]
pub fn ProfileDashboard() -> impl IntoView {
    let store = use_app_store();

    let food_count = move || store.profile().read().items(Category::Foods).len();
    let drink_count = move || store.profile().read().items(Category::Drinks).len();
    let dessert_count = move || store.profile().read().items(Category::Desserts).len();
    let restriction_count = move || store.profile().read().restrictions().len();

    view! {
        <div class="profile-dashboard">
            <div class="summary-grid">
                <div class="summary-card">
                    <div class="summary-header">
                        <span class="summary-title">"Foods"</span>
                        <span class="summary-icon">"🍴"</span>
                    </div>
                    <div class="summary-count">{food_count}</div>
                    <p class="summary-hint">"favorite foods"</p>
                </div>
                <div class="summary-card">
                    <div class="summary-header">
                        <span class="summary-title">"Drinks"</span>
                        <span class="summary-icon">"☕"</span>
                    </div>
                    <div class="summary-count">{drink_count}</div>
                    <p class="summary-hint">"preferred drinks"</p>
                </div>
                <div class="summary-card">
                    <div class="summary-header">
                        <span class="summary-title">"Desserts"</span>
                        <span class="summary-icon">"🍪"</span>
                    </div>
                    <div class="summary-count">{dessert_count}</div>
                    <p class="summary-hint">"sweet treats"</p>
                </div>
                <div class="summary-card">
                    <div class="summary-header">
                        <span class="summary-title">"Restrictions"</span>
                        <span class="summary-icon">"⚠️"</span>
                    </div>
                    <div class="summary-count">{restriction_count}</div>
                    <p class="summary-hint">"dietary needs"</p>
                </div>
            </div>

            <div class="card harmony-plate">
                <div class="card-header">
                    <h3 class="card-title">"Your Harmony Plate"</h3>
                    <p class="card-description">
                        "A quick overview of your favorite items and dietary preferences"
                    </p>
                </div>
                <div class="card-body">
                    <h4 class="plate-label">"Top Foods"</h4>
                    <div class="badge-row">
                        {move || {
                            store
                                .profile()
                                .read()
                                .items(Category::Foods)
                                .list()
                                .iter()
                                .take(6)
                                .map(|item| view! {
                                    <span class="badge food-badge">{item.name.clone()}</span>
                                })
                                .collect_view()
                        }}
                    </div>

                    <h4 class="plate-label">"Dietary Restrictions"</h4>
                    <div class="badge-row">
                        {move || {
                            store
                                .profile()
                                .read()
                                .restrictions()
                                .list()
                                .iter()
                                .map(|restriction| view! {
                                    <span class=plate_badge_class(restriction.severity)>
                                        {restriction.name.clone()}
                                    </span>
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>

            <div class="category-grid">
                <div class="category-column">
                    <CategoryManager
                        category=Category::Foods
                        title="Foods"
                        icon="🍴"
                        placeholder="Add a favorite food..."
                    />
                    <CategoryManager
                        category=Category::Drinks
                        title="Drinks"
                        icon="☕"
                        placeholder="Add a favorite drink..."
                    />
                </div>
                <div class="category-column">
                    <CategoryManager
                        category=Category::Desserts
                        title="Desserts"
                        icon="🍪"
                        placeholder="Add a favorite dessert..."
                    />
                    <RestrictionsManager />
                </div>
            </div>

            <p class="item-count">
                {move || {
                    let profile = store.profile().read();
                    format!(
                        "{} items, {} restrictions",
                        profile.total_items(),
                        profile.restrictions().len()
                    )
                }}
            </p>
        </div>
    }
}
