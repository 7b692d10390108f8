//! Food Harmony Frontend App
//!
//! Header, tab switch and context wiring.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use food_harmony_core::discovery::MockRestaurantSearch;

use crate::components::{LocationFinder, ProfileDashboard};
use crate::context::AppContext;
use crate::store::{AppState, AppStore};

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Profile,
    Discover,
}

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    provide_context(store);
    // The mock is the only search backend the demo ships with
    provide_context(AppContext::new(Rc::new(MockRestaurantSearch)));

    let (active_tab, set_active_tab) = signal(Tab::Profile);

    view! {
        <div class="app-shell">
            <header class="app-header">
                <div class="app-brand">
                    <span class="app-logo">"🍽"</span>
                    <div>
                        <h1>"Food Harmony"</h1>
                        <p class="app-tagline">"Your personalized food companion"</p>
                    </div>
                </div>
            </header>

            <main class="main-content">
                <div class="tab-bar">
                    <button
                        class=move || {
                            if active_tab.get() == Tab::Profile { "tab-btn active" } else { "tab-btn" }
                        }
                        on:click=move |_| set_active_tab.set(Tab::Profile)
                    >
                        "🍴 My Profile"
                    </button>
                    <button
                        class=move || {
                            if active_tab.get() == Tab::Discover { "tab-btn active" } else { "tab-btn" }
                        }
                        on:click=move |_| set_active_tab.set(Tab::Discover)
                    >
                        "📍 Discover Places"
                    </button>
                </div>

                <Show when=move || active_tab.get() == Tab::Profile>
                    <ProfileDashboard />
                </Show>
                <Show when=move || active_tab.get() == Tab::Discover>
                    <LocationFinder />
                </Show>
            </main>
        </div>
    }
}
