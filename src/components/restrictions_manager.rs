//! Restrictions Manager Component
//!
//! Card for dietary restrictions: add/edit form with type and severity
//! selects, severity-colored entries with a type icon.

use leptos::prelude::*;

use food_harmony_core::domain::{RestrictionType, Severity};
use food_harmony_core::forms::RestrictionFormSession;

use crate::components::DeleteConfirmButton;
use crate::store::{
    store_apply_restriction_form, store_delete_restriction, use_app_store, AppStateStoreFields,
};

/// Type options shown by the select
const TYPE_OPTIONS: &[(&str, &str)] = &[
    ("allergy", "Allergy"),
    ("dietary", "Dietary Choice"),
    ("preference", "Preference"),
];

/// Severity options shown by the select
const SEVERITY_OPTIONS: &[(&str, &str)] = &[
    ("mild", "Mild"),
    ("moderate", "Moderate"),
    ("severe", "Severe"),
];

fn entry_class(severity: Option<Severity>) -> &'static str {
    match severity {
        Some(Severity::Severe) => "restriction-entry severe",
        Some(Severity::Moderate) => "restriction-entry moderate",
        Some(Severity::Mild) => "restriction-entry mild",
        None => "restriction-entry",
    }
}

fn type_icon(kind: RestrictionType) -> &'static str {
    match kind {
        RestrictionType::Allergy => "🚫",
        RestrictionType::Dietary => "🥗",
        RestrictionType::Preference => "💭",
    }
}

fn type_label(kind: RestrictionType) -> &'static str {
    match kind {
        RestrictionType::Allergy => "Allergy",
        RestrictionType::Dietary => "Dietary",
        RestrictionType::Preference => "Preference",
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Mild => "Mild",
        Severity::Moderate => "Moderate",
        Severity::Severe => "Severe",
    }
}

#[component]
pub fn RestrictionsManager() -> impl IntoView {
    let store = use_app_store();
    let form = RwSignal::new(RestrictionFormSession::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(output) = form.try_update(|f| f.submit()).flatten() {
            store_apply_restriction_form(&store, output);
        }
    };

    view! {
        <div class="card restrictions-card">
            <div class="card-header">
                <h3 class="card-title">
                    <span class="card-icon">"⚠️"</span>
                    "Dietary Restrictions"
                </h3>
                <button class="add-btn" on:click=move |_| form.update(|f| f.open_create())>
                    "+ Add"
                </button>
            </div>

            <div class="card-body">
                <Show when=move || form.read().is_open()>
                    <form class="restriction-form" on:submit=on_submit>
                        <div class="form-field">
                            <label class="form-label" for="restriction-name">"Restriction *"</label>
                            <input
                                id="restriction-name"
                                type="text"
                                placeholder="e.g., Peanuts, Dairy, Gluten..."
                                prop:value=move || form.read().name.clone()
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>

                        <div class="form-field-row">
                            <div class="form-field">
                                <label class="form-label" for="restriction-type">"Type"</label>
                                <select
                                    id="restriction-type"
                                    prop:value=move || form.read().kind.as_str().to_string()
                                    on:change=move |ev| form.update(|f| {
                                        f.kind = RestrictionType::from_str(&event_target_value(&ev));
                                    })
                                >
                                    {TYPE_OPTIONS.iter().map(|(value, label)| view! {
                                        <option value=*value>{*label}</option>
                                    }).collect_view()}
                                </select>
                            </div>

                            <div class="form-field">
                                <label class="form-label" for="restriction-severity">"Severity"</label>
                                <select
                                    id="restriction-severity"
                                    prop:value=move || form.read().severity.as_str().to_string()
                                    on:change=move |ev| form.update(|f| {
                                        f.severity = Severity::from_str(&event_target_value(&ev));
                                    })
                                >
                                    {SEVERITY_OPTIONS.iter().map(|(value, label)| view! {
                                        <option value=*value>{*label}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                        </div>

                        <div class="form-actions">
                            <button type="submit">
                                {move || if form.read().is_editing() {
                                    "Update Restriction"
                                } else {
                                    "Add Restriction"
                                }}
                            </button>
                            <button
                                type="button"
                                class="cancel-btn"
                                on:click=move |_| form.update(|f| f.cancel())
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </Show>

                {move || {
                    let restrictions = store.profile().read().restrictions().list().to_vec();
                    if restrictions.is_empty() {
                        view! {
                            <p class="empty-hint">
                                "No dietary restrictions added yet. Click \"Add\" to get started!"
                            </p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="item-list">
                                {restrictions.into_iter().map(|restriction| {
                                    let id = restriction.id;
                                    let edit_restriction = restriction.clone();
                                    view! {
                                        <div class=entry_class(restriction.severity)>
                                            <div class="item-row">
                                                <div class="item-main">
                                                    <span class="restriction-icon">
                                                        {type_icon(restriction.kind)}
                                                    </span>
                                                    <h4 class="item-name">{restriction.name}</h4>
                                                    <div class="badge-row">
                                                        <span class="badge">
                                                            {type_label(restriction.kind)}
                                                        </span>
                                                        {restriction.severity.map(|severity| view! {
                                                            <span class="badge">
                                                                {severity_label(severity)}
                                                            </span>
                                                        })}
                                                    </div>
                                                </div>
                                                <div class="item-actions">
                                                    <button
                                                        class="edit-btn"
                                                        on:click=move |_| form.update(|f| {
                                                            f.open_edit(&edit_restriction)
                                                        })
                                                    >
                                                        "✎"
                                                    </button>
                                                    <DeleteConfirmButton
                                                        button_class="delete-btn"
                                                        on_confirm=move |_| store_delete_restriction(&store, id)
                                                    />
                                                </div>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
