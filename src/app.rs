//! To-Do App
//!
//! Root component. Owns the store, loading persisted items once at startup.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoInput, TodoListView};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Read the persistence slot once, then own the state for the session
    let store = Store::new(AppState::load());
    provide_context(store);

    web_sys::console::log_1(
        &format!("[APP] Loaded {} items", store.list().get().items().len()).into(),
    );

    let counts = move || {
        let list = store.list().get();
        let done = list.items().iter().filter(|todo| todo.completed).count();
        format!("{} items, {} done", list.items().len(), done)
    };

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Todo App"</h1>

                <TodoInput />

                <TodoListView />

                <p class="item-count">{counts}</p>
            </main>
        </div>
    }
}
