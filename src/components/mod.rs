//! UI Components
//!
//! Reusable Leptos components.

mod todo_input;
mod todo_list_view;
mod todo_row;

pub use todo_input::TodoInput;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
