//! Restaurant Map Component
//!
//! Decorative pseudo-map: grid background, pulsing user marker in the
//! center, preset marker positions cycled by result index, and a
//! click-to-select detail card. Not a real map projection.

use leptos::prelude::*;

use food_harmony_core::domain::Restaurant;

use crate::components::restaurant_list::{directions_url, price_level_display};
use crate::store::{use_app_store, AppStateStoreFields};

/// Preset marker positions cycled by result index, in percent of the canvas
const MARKER_POSITIONS: &[(u8, u8)] = &[(40, 30), (60, 40), (35, 60), (65, 25), (45, 70)];

#[component]
pub fn RestaurantMap() -> impl IntoView {
    let store = use_app_store();
    let (selected, set_selected) = signal::<Option<Restaurant>>(None);

    view! {
        <div class="restaurant-map">
            <div class="map-canvas">
                <Show when=move || store.discovery().read().user_location().is_some()>
                    <div class="user-marker" style="left: 50%; top: 50%;">
                        <span class="user-dot"></span>
                        <span class="user-pulse"></span>
                    </div>
                </Show>

                {move || {
                    store
                        .discovery()
                        .read()
                        .results()
                        .to_vec()
                        .into_iter()
                        .enumerate()
                        .map(|(index, restaurant)| {
                            let (left, top) = MARKER_POSITIONS[index % MARKER_POSITIONS.len()];
                            let id = restaurant.id;
                            let name = restaurant.name.clone();
                            let marker = restaurant.clone();
                            let is_selected = move || {
                                selected.with(|s| s.as_ref().map(|r| r.id)) == Some(id)
                            };
                            view! {
                                <button
                                    class=move || {
                                        if is_selected() { "map-marker selected" } else { "map-marker" }
                                    }
                                    style=format!("left: {}%; top: {}%;", left, top)
                                    on:click=move |_| set_selected.set(Some(marker.clone()))
                                >
                                    <span class="marker-pin">"📍"</span>
                                    <span class="marker-label">{name}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}

                <div class="map-legend">
                    <h4>"Legend"</h4>
                    <div class="legend-row">
                        <span class="legend-dot user"></span>
                        <span>"Your Location"</span>
                    </div>
                    <div class="legend-row">
                        <span class="legend-dot restaurant"></span>
                        <span>"Restaurants"</span>
                    </div>
                </div>
            </div>

            {move || selected.get().map(|restaurant| {
                let price = price_level_display(restaurant.price_level);
                let directions = directions_url(&restaurant.address);
                view! {
                    <div class="card selected-card">
                        <div class="card-header">
                            <h4 class="restaurant-name">{restaurant.name}</h4>
                            <button class="close-btn" on:click=move |_| set_selected.set(None)>
                                "×"
                            </button>
                        </div>
                        <div class="card-body">
                            <div class="restaurant-meta">
                                <span class="rating">"★ " {restaurant.rating}</span>
                                <span class="price">{price}</span>
                                <span class="distance">{restaurant.distance}</span>
                            </div>
                            <p class="restaurant-address">{restaurant.address.clone()}</p>
                            <div class="badge-row">
                                {restaurant.cuisine.into_iter().map(|cuisine| view! {
                                    <span class="badge cuisine-badge">{cuisine}</span>
                                }).collect_view()}
                            </div>
                            <div class="restaurant-actions">
                                <a class="action-btn primary" href=directions target="_blank">
                                    "🧭 Directions"
                                </a>
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
