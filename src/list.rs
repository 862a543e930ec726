//! List State
//!
//! Owned to-do list state with pure mutation methods. Every mutating method
//! returns whether the list changed so the caller knows when to persist.

use crate::models::Todo;

/// Transient state for the one item currently being text-edited
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub id: u64,
    pub buffer: String,
}

/// Ordered to-do collection plus the optional edit session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    items: Vec<Todo>,
    editing: Option<EditSession>,
}

impl TodoList {
    pub fn from_items(items: Vec<Todo>) -> Self {
        Self {
            items,
            editing: None,
        }
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn editing_id(&self) -> Option<u64> {
        self.editing.as_ref().map(|session| session.id)
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        self.editing.as_ref().map(|session| session.buffer.as_str())
    }

    /// Append a new incomplete item. Whitespace-only input is rejected;
    /// accepted text is stored untrimmed. `now_ms` seeds the new id.
    pub fn add(&mut self, raw_text: &str, now_ms: u64) -> bool {
        if raw_text.trim().is_empty() {
            return false;
        }
        let id = self.fresh_id(now_ms);
        self.items.push(Todo {
            id,
            text: raw_text.to_string(),
            completed: false,
        });
        true
    }

    /// Remove the item with the given id, if any
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|todo| todo.id != id);
        self.items.len() != before
    }

    /// Flip the completed flag of the matching item, if any
    pub fn toggle_completed(&mut self, id: u64) -> bool {
        self.items
            .iter_mut()
            .find(|todo| todo.id == id)
            .map(|todo| todo.completed = !todo.completed)
            .is_some()
    }

    /// Begin editing the given item, seeding the scratch buffer.
    /// Any prior session is abandoned without warning.
    pub fn start_edit(&mut self, id: u64, current_text: &str) {
        self.editing = Some(EditSession {
            id,
            buffer: current_text.to_string(),
        });
    }

    /// Replace the scratch buffer content; nothing is persisted until save
    pub fn update_edit_buffer(&mut self, text: &str) {
        if let Some(session) = self.editing.as_mut() {
            session.buffer = text.to_string();
        }
    }

    /// Commit the scratch buffer verbatim (no trim, empty allowed) into the
    /// matching item and close the session. Returns true whenever a session
    /// was open.
    pub fn save_edit(&mut self, id: u64) -> bool {
        let Some(session) = self.editing.take() else {
            return false;
        };
        if let Some(todo) = self.items.iter_mut().find(|todo| todo.id == id) {
            todo.text = session.buffer;
        }
        true
    }

    /// Discard the scratch buffer and close the session; the list is untouched
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // Timestamp-seeded but collision-proof: never at or below an existing id,
    // so same-millisecond adds still get distinct, increasing ids.
    fn fresh_id(&self, now_ms: u64) -> u64 {
        let next = self
            .items
            .iter()
            .map(|todo| todo.id + 1)
            .max()
            .unwrap_or(0);
        now_ms.max(next)
    }
}
