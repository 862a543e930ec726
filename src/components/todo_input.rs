//! To-Do Input Form Component
//!
//! Form for adding new to-do items.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_add_todo, use_app_store};

/// Form for adding new items
#[component]
pub fn TodoInput() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        // Cleared only when the text is accepted; rejected input stays put
        if store_add_todo(&store, &text) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="Enter a new todo"
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
