//! Data Models
//!
//! Data structures matching the persisted `localStorage` entries.

use serde::{Deserialize, Serialize};

/// One to-do entry (matches the stored JSON shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}
