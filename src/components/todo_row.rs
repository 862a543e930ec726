//! To-Do Row Component
//!
//! Individual row in the list view with completion, edit, and delete controls.

use leptos::prelude::*;

use crate::models::Todo;
use crate::store::{
    store_cancel_edit, store_delete_todo, store_save_edit, store_start_edit, store_toggle_todo,
    store_update_edit_buffer, use_app_store, AppStateStoreFields,
};

/// A single to-do row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let text = todo.text.clone();

    let is_editing = move || store.list().get().editing_id() == Some(id);
    let buffer = move || store.list().get().edit_buffer().unwrap_or("").to_string();

    view! {
        <div class=move || if completed { "todo-row completed" } else { "todo-row" }>
            // Checkbox
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| store_toggle_todo(&store, id)
            />

            {move || if is_editing() {
                view! {
                    <span class="todo-edit">
                        <input
                            type="text"
                            class="edit-input"
                            prop:value=buffer
                            on:input=move |ev| {
                                store_update_edit_buffer(&store, &event_target_value(&ev));
                            }
                        />
                        <button class="save-btn" on:click=move |_| store_save_edit(&store, id)>
                            "✓"
                        </button>
                        <button class="cancel-btn" on:click=move |_| store_cancel_edit(&store)>
                            "✗"
                        </button>
                    </span>
                }.into_any()
            } else {
                let text = text.clone();
                let edit_seed = text.clone();
                view! {
                    <span class="todo-view">
                        <span class="todo-text">{text}</span>
                        <button
                            class="edit-btn"
                            on:click=move |_| store_start_edit(&store, id, &edit_seed)
                        >
                            "Edit"
                        </button>
                    </span>
                }.into_any()
            }}

            // Delete button
            <button class="delete-btn" on:click=move |_| store_delete_todo(&store, id)>"×"</button>
        </div>
    }
}
