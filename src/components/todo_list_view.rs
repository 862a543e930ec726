//! To-Do List View Component
//!
//! Renders the list in insertion order.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// List view over all items
#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    let todos = move || store.list().get().items().to_vec();

    view! {
        <div class="todo-list">
            <For
                each=todos
                // Key on every rendered field so text and completion changes re-render
                key=|todo| (todo.id, todo.text.clone(), todo.completed)
                children=move |todo| {
                    view! { <TodoRow todo=todo /> }
                }
            />
        </div>
    }
}
