//! Location Finder Component
//!
//! Search controls for the Discover tab: location input with a
//! use-current-location button, radius select, simulated search and the
//! list/map result views. Auto-locates once on mount.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use food_harmony_core::discovery::{DiscoveryPhase, RADIUS_OPTIONS_MILES, SEARCH_DELAY_MS};

use crate::components::{RestaurantList, RestaurantMap};
use crate::context::AppContext;
use crate::geolocation;
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultsView {
    List,
    Map,
}

#[component]
pub fn LocationFinder() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (results_view, set_results_view) = signal(ResultsView::List);

    let locate = move || {
        store.discovery().write().begin_locate();
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok(coords) => store.discovery().write().locate_succeeded(coords),
                Err(cause) => {
                    web_sys::console::warn_1(
                        &format!("[DISCOVER] geolocation failed: {}", cause.advisory()).into(),
                    );
                    store.discovery().write().locate_failed(cause);
                }
            }
        });
    };

    // Auto-load with current location on mount
    Effect::new(move |_| locate());

    let run_search = move |_| {
        let query = {
            let profile = store.profile().read();
            let discovery = store.discovery().read();
            discovery.search_query(&profile)
        };
        let Some(ticket) = store.discovery().write().begin_search() else {
            return;
        };
        let search = ctx.search();
        spawn_local(async move {
            // Simulated network delay; the mock itself is instantaneous
            TimeoutFuture::new(SEARCH_DELAY_MS).await;
            match search.search_nearby(&query).await {
                Ok(results) => {
                    store.discovery().write().complete_search(ticket, results);
                }
                Err(error) => {
                    store.discovery().write().fail_search(ticket, error);
                }
            }
        });
    };

    view! {
        <div class="location-finder">
            <div class="card search-card">
                <div class="card-header">
                    <h3 class="card-title">
                        <span class="card-icon">"🔍"</span>
                        "Find Restaurants"
                    </h3>
                </div>
                <div class="card-body">
                    <div class="search-grid">
                        <div class="search-location">
                            <label class="form-label" for="location">"Location"</label>
                            <div class="location-row">
                                <input
                                    id="location"
                                    type="text"
                                    placeholder="Enter city, address, or zip code"
                                    prop:value=move || store.discovery().read().location.clone()
                                    on:input=move |ev| {
                                        store.discovery().write().location = event_target_value(&ev);
                                    }
                                />
                                <button
                                    type="button"
                                    class="locate-btn"
                                    disabled=move || store.discovery().read().is_loading()
                                    on:click=move |_| locate()
                                >
                                    "📍"
                                </button>
                            </div>
                            {move || store.discovery().read().advisory().map(|cause| view! {
                                <p class="advisory">
                                    "⚠️ " {cause.advisory()} " Using New York, NY as default."
                                </p>
                            })}
                        </div>

                        <div class="search-radius">
                            <label class="form-label" for="radius">"Search Radius"</label>
                            <select
                                id="radius"
                                prop:value=move || store.discovery().read().radius_miles().to_string()
                                on:change=move |ev| {
                                    if let Ok(miles) = event_target_value(&ev).parse() {
                                        store.discovery().write().set_radius_miles(miles);
                                    }
                                }
                            >
                                {RADIUS_OPTIONS_MILES.iter().map(|miles| view! {
                                    <option value=miles.to_string()>
                                        {if *miles == 1 {
                                            "1 mile".to_string()
                                        } else {
                                            format!("{} miles", miles)
                                        }}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="search-footer">
                        <p class="search-hint">
                            "We'll find restaurants that match your food preferences and accommodate your dietary restrictions."
                        </p>
                        <button
                            class="search-btn"
                            disabled=move || !store.discovery().read().can_search()
                            on:click=run_search
                        >
                            {move || {
                                if store.discovery().read().phase() == DiscoveryPhase::Searching {
                                    "Searching..."
                                } else {
                                    "Search"
                                }
                            }}
                        </button>
                    </div>

                    {move || store.discovery().read().search_error().map(|error| view! {
                        <p class="advisory">"⚠️ " {error.to_string()}</p>
                    })}
                </div>
            </div>

            <Show when=move || !store.discovery().read().results().is_empty()>
                <div class="card results-card">
                    <div class="card-header">
                        <h3 class="card-title">
                            {move || format!(
                                "Found {} Restaurants",
                                store.discovery().read().results().len()
                            )}
                        </h3>
                    </div>
                    <div class="card-body">
                        <div class="tab-bar">
                            <button
                                class=move || {
                                    if results_view.get() == ResultsView::List {
                                        "tab-btn active"
                                    } else {
                                        "tab-btn"
                                    }
                                }
                                on:click=move |_| set_results_view.set(ResultsView::List)
                            >
                                "List View"
                            </button>
                            <button
                                class=move || {
                                    if results_view.get() == ResultsView::Map {
                                        "tab-btn active"
                                    } else {
                                        "tab-btn"
                                    }
                                }
                                on:click=move |_| set_results_view.set(ResultsView::Map)
                            >
                                "Map View"
                            </button>
                        </div>

                        <Show when=move || results_view.get() == ResultsView::List>
                            <RestaurantList />
                        </Show>
                        <Show when=move || results_view.get() == ResultsView::Map>
                            <RestaurantMap />
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
