//! Food Item Form Component
//!
//! Add/edit form for one food-item collection: name, notes, preparation
//! style and the tag sub-editor. Enter in the tag input commits the pending
//! tag instead of submitting the form.

use leptos::prelude::*;

use food_harmony_core::forms::ItemFormSession;

/// Form body driven by a core [`ItemFormSession`]
#[component]
pub fn FoodItemForm(
    form: RwSignal<ItemFormSession>,
    placeholder: &'static str,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="item-form" on:submit=submit>
            <div class="form-field">
                <label class="form-label" for="item-name">"Name *"</label>
                <input
                    id="item-name"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || form.read().name.clone()
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </div>

            <div class="form-field">
                <label class="form-label" for="item-notes">"Notes"</label>
                <textarea
                    id="item-notes"
                    rows=2
                    placeholder="Any special notes or preferences..."
                    prop:value=move || form.read().notes.clone()
                    on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-field">
                <label class="form-label" for="item-preparation">"Preparation Style"</label>
                <input
                    id="item-preparation"
                    type="text"
                    placeholder="e.g., grilled, steamed, raw..."
                    prop:value=move || form.read().preparation_style.clone()
                    on:input=move |ev| form.update(|f| f.preparation_style = event_target_value(&ev))
                />
            </div>

            <div class="form-field">
                <label class="form-label">"Tags"</label>
                <div class="tag-input-row">
                    <input
                        type="text"
                        placeholder="Add a tag..."
                        prop:value=move || form.read().pending_tag.clone()
                        on:input=move |ev| form.update(|f| f.pending_tag = event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                form.update(|f| f.commit_pending_tag());
                            }
                        }
                    />
                    <button
                        type="button"
                        class="tag-add-btn"
                        on:click=move |_| form.update(|f| f.commit_pending_tag())
                    >
                        "+"
                    </button>
                </div>
                {move || {
                    let tags = form.read().tags().to_vec();
                    (!tags.is_empty()).then(|| view! {
                        <div class="tag-row">
                            {tags.into_iter().map(|tag| {
                                let value = tag.clone();
                                view! {
                                    <span class="badge tag-badge">
                                        {tag}
                                        <button
                                            type="button"
                                            class="tag-remove-btn"
                                            on:click=move |_| form.update(|f| f.remove_tag(&value))
                                        >
                                            "×"
                                        </button>
                                    </span>
                                }
                            }).collect_view()}
                        </div>
                    })
                }}
            </div>

            <div class="form-actions">
                <button type="submit">
                    {move || if form.read().is_editing() { "Update Item" } else { "Add Item" }}
                </button>
                <button type="button" class="cancel-btn" on:click=move |_| form.update(|f| f.cancel())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
