//! Global Application State Store
//!
//! Uses Leptos reactive_stores for the app-wide list state. The helper
//! functions below are the only mutation path: each applies one pure
//! `TodoList` operation and rewrites the persistence slot when the list
//! reports a change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list::TodoList;
use crate::storage;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The to-do list plus its transient edit session
    pub list: TodoList,
}

impl AppState {
    /// Read the persistence slot once and adopt whatever it held
    pub fn load() -> Self {
        Self {
            list: TodoList::from_items(storage::load()),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a new item from the input field; true when the text was accepted
pub fn store_add_todo(store: &AppStore, raw_text: &str) -> bool {
    let now_ms = js_sys::Date::now() as u64;
    let list_field = store.list();
    let mut list = list_field.write();
    let added = list.add(raw_text, now_ms);
    if added {
        storage::save(list.items());
    }
    added
}

/// Remove an item from the list by ID
pub fn store_delete_todo(store: &AppStore, id: u64) {
    let list_field = store.list();
    let mut list = list_field.write();
    if list.delete(id) {
        storage::save(list.items());
    }
}

/// Flip an item's completed flag by ID
pub fn store_toggle_todo(store: &AppStore, id: u64) {
    let list_field = store.list();
    let mut list = list_field.write();
    if list.toggle_completed(id) {
        storage::save(list.items());
    }
}

/// Begin editing an item, seeding the scratch buffer with its current text
pub fn store_start_edit(store: &AppStore, id: u64, current_text: &str) {
    store.list().write().start_edit(id, current_text);
}

/// Replace the scratch buffer content (not persisted until save)
pub fn store_update_edit_buffer(store: &AppStore, text: &str) {
    store.list().write().update_edit_buffer(text);
}

/// Commit the scratch buffer into the item and close the session
pub fn store_save_edit(store: &AppStore, id: u64) {
    let list_field = store.list();
    let mut list = list_field.write();
    if list.save_edit(id) {
        storage::save(list.items());
    }
}

/// Drop the scratch buffer without touching the list
pub fn store_cancel_edit(store: &AppStore) {
    store.list().write().cancel_edit();
}
