//! Category Manager Component
//!
//! One card per food-item collection: add/edit form plumbing and the item
//! list with edit/delete actions. Opening the add form drops any edit in
//! progress and vice versa, so only one form shows at a time.

use leptos::prelude::*;

use food_harmony_core::domain::Category;
use food_harmony_core::forms::ItemFormSession;

use crate::components::{DeleteConfirmButton, FoodItemForm};
use crate::store::{store_apply_item_form, store_delete_item, use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryManager(
    category: Category,
    title: &'static str,
    icon: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let store = use_app_store();
    let form = RwSignal::new(ItemFormSession::default());

    let on_submit = move |_| {
        if let Some(output) = form.try_update(|f| f.submit()).flatten() {
            store_apply_item_form(&store, category, output);
        }
    };

    view! {
        <div class="card category-card">
            <div class="card-header">
                <h3 class="card-title">
                    <span class="card-icon">{icon}</span>
                    {title}
                </h3>
                <button class="add-btn" on:click=move |_| form.update(|f| f.open_create())>
                    "+ Add"
                </button>
            </div>

            <div class="card-body">
                <Show when=move || form.read().is_open()>
                    <FoodItemForm form=form placeholder=placeholder on_submit=on_submit />
                </Show>

                {move || {
                    let items = store.profile().read().items(category).list().to_vec();
                    if items.is_empty() {
                        view! {
                            <p class="empty-hint">
                                {format!(
                                    "No {} added yet. Click \"Add\" to get started!",
                                    title.to_lowercase()
                                )}
                            </p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="item-list">
                                {items.into_iter().map(|item| {
                                    let id = item.id;
                                    let edit_item = item.clone();
                                    view! {
                                        <div class="item-entry">
                                            <div class="item-row">
                                                <div class="item-main">
                                                    <h4 class="item-name">{item.name}</h4>
                                                    {item.notes.map(|notes| view! {
                                                        <p class="item-notes">{notes}</p>
                                                    })}
                                                    {item.preparation_style.map(|style| view! {
                                                        <p class="item-preparation">
                                                            "Preferred preparation: " {style}
                                                        </p>
                                                    })}
                                                </div>
                                                <div class="item-actions">
                                                    <button
                                                        class="edit-btn"
                                                        on:click=move |_| form.update(|f| f.open_edit(&edit_item))
                                                    >
                                                        "✎"
                                                    </button>
                                                    <DeleteConfirmButton
                                                        button_class="delete-btn"
                                                        on_confirm=move |_| store_delete_item(&store, category, id)
                                                    />
                                                </div>
                                            </div>
                                            {(!item.tags.is_empty()).then(|| view! {
                                                <div class="tag-row">
                                                    {item.tags.into_iter().map(|tag| view! {
                                                        <span class="badge tag-badge">{tag}</span>
                                                    }).collect_view()}
                                                </div>
                                            })}
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
