//! Persistence Adapter
//!
//! One `localStorage` slot holding the serialized list. Reads happen once at
//! startup, writes after every mutation. Both fail soft: the in-memory list
//! stays authoritative for the session.

use crate::models::Todo;

/// Slot key, shared with the stored data of earlier versions of the app
pub const STORAGE_KEY: &str = "todos";

/// Load the saved list, or an empty one if the slot is absent or unreadable
pub fn load() -> Vec<Todo> {
    let Some(raw) = read_slot() else {
        return Vec::new();
    };
    match parse_todos(&raw) {
        Some(todos) => todos,
        None => {
            web_sys::console::warn_1(
                &format!("[STORAGE] Ignoring malformed value at key '{}'", STORAGE_KEY).into(),
            );
            Vec::new()
        }
    }
}

/// Re-serialize and write the whole list; a failed write is logged and ignored
pub fn save(todos: &[Todo]) {
    let json = match serde_json::to_string(todos) {
        Ok(json) => json,
        Err(err) => {
            web_sys::console::warn_1(&format!("[STORAGE] Serialization failed: {}", err).into());
            return;
        }
    };
    write_slot(&json);
}

/// Parse a stored value as a to-do array; None for anything malformed
fn parse_todos(raw: &str) -> Option<Vec<Todo>> {
    serde_json::from_str(raw).ok()
}

fn read_slot() -> Option<String> {
    slot()?.get_item(STORAGE_KEY).ok().flatten()
}

fn write_slot(value: &str) {
    let Some(storage) = slot() else {
        return;
    };
    if let Err(err) = storage.set_item(STORAGE_KEY, value) {
        web_sys::console::warn_1(&format!("[STORAGE] Write failed: {:?}", err).into());
    }
}

fn slot() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_array() {
        let raw = r#"[{"id":1722000000000,"text":"Buy milk","completed":false}]"#;

        let todos = parse_todos(raw).expect("valid array should parse");

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 1_722_000_000_000);
        assert_eq!(todos[0].text, "Buy milk");
        assert!(!todos[0].completed);
    }

    #[test]
    fn test_parse_empty_array() {
        assert_eq!(parse_todos("[]"), Some(Vec::new()));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert_eq!(parse_todos("not json"), None);
        assert_eq!(parse_todos(r#"[{"id":1,"text":"x""#), None);
    }

    #[test]
    fn test_parse_rejects_non_array_value() {
        assert_eq!(parse_todos(r#"{"id":1,"text":"x","completed":false}"#), None);
        assert_eq!(parse_todos("\"todos\""), None);
    }

    #[test]
    fn test_parse_rejects_items_missing_fields() {
        assert_eq!(parse_todos(r#"[{"id":1,"text":"x"}]"#), None);
    }

    #[test]
    fn test_round_trip_is_structurally_equal() {
        let todos = vec![
            Todo {
                id: 1,
                text: "first".to_string(),
                completed: false,
            },
            Todo {
                id: 2,
                text: "  second  ".to_string(),
                completed: true,
            },
            Todo {
                id: 3,
                text: String::new(),
                completed: false,
            },
        ];

        let json = serde_json::to_string(&todos).expect("serialize");
        let reloaded = parse_todos(&json).expect("reload");

        assert_eq!(reloaded, todos);
    }
}
