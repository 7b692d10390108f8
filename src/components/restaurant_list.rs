//! Restaurant List Component
//!
//! List view of discovery results with contact and directions actions.

use leptos::prelude::*;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use food_harmony_core::domain::Restaurant;

use crate::store::{use_app_store, AppStateStoreFields};

/// "$$··" style price display, levels 1-4
pub(super) fn price_level_display(level: u8) -> String {
    let dollars = level.min(4) as usize;
    format!("{}{}", "$".repeat(dollars), "·".repeat(4 - dollars))
}

pub(super) fn directions_url(address: &str) -> String {
    format!(
        "https://maps.google.com?q={}",
        utf8_percent_encode(address, NON_ALPHANUMERIC)
    )
}

pub(super) fn website_url(website: &str) -> String {
    if website.starts_with("http") {
        website.to_string()
    } else {
        format!("https://{}", website)
    }
}

fn restaurant_entry(restaurant: Restaurant) -> impl IntoView {
    let price = price_level_display(restaurant.price_level);
    let directions = directions_url(&restaurant.address);
    let phone_link = restaurant.phone.clone().map(|phone| {
        let href = format!("tel:{}", phone);
        view! {
            <a class="action-btn" href=href>"📞 Call"</a>
        }
    });
    let website_link = restaurant.website.clone().map(|site| {
        let href = website_url(&site);
        view! {
            <a class="action-btn" href=href target="_blank">"🌐 Website"</a>
        }
    });

    view! {
        <div class="restaurant-entry">
            <div class="restaurant-heading">
                <h4 class="restaurant-name">{restaurant.name}</h4>
                <div class="restaurant-meta">
                    <span class="rating">"★ " {restaurant.rating}</span>
                    <span class="price">{price}</span>
                    <span class="distance">"📍 " {restaurant.distance}</span>
                </div>
            </div>

            <p class="restaurant-address">{restaurant.address}</p>

            <div class="badge-row">
                {restaurant.cuisine.into_iter().map(|cuisine| view! {
                    <span class="badge cuisine-badge">{cuisine}</span>
                }).collect_view()}
            </div>

            {(!restaurant.matching_items.is_empty()).then(|| view! {
                <div class="match-section">
                    <p class="match-label">"🍴 Matches your preferences:"</p>
                    <div class="badge-row">
                        {restaurant.matching_items.into_iter().map(|item| view! {
                            <span class="badge match-badge">{item}</span>
                        }).collect_view()}
                    </div>
                </div>
            })}

            {(!restaurant.accommodates_restrictions.is_empty()).then(|| view! {
                <div class="match-section">
                    <p class="accommodates-label">"✓ Accommodates:"</p>
                    <div class="badge-row">
                        {restaurant.accommodates_restrictions.into_iter().map(|entry| view! {
                            <span class="badge accommodates-badge">{entry}</span>
                        }).collect_view()}
                    </div>
                </div>
            })}

            <div class="restaurant-actions">
                <a class="action-btn primary" href=directions target="_blank">"📍 Directions"</a>
                {phone_link}
                {website_link}
            </div>
        </div>
    }
}

/// List view over the current result snapshot
#[component]
pub fn RestaurantList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="restaurant-list">
            {move || {
                store
                    .discovery()
                    .read()
                    .results()
                    .to_vec()
                    .into_iter()
                    .map(restaurant_entry)
                    .collect_view()
            }}
        </div>
    }
}
