//! # Application State
//!
//! Core business state for listkeep. Domain data only. Presentation state
//! (focus, selection, text cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── items: Vec<String>          // the list, in display/storage order
//! ├── draft: String               // input field content, not persisted
//! ├── editing: Option<usize>      // index replaced on next commit
//! ├── store_key: String           // slot the list is persisted under
//! └── status_message: String      // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

pub struct App {
    pub items: Vec<String>,
    pub draft: String,
    pub editing: Option<usize>,
    pub store_key: String,
    pub status_message: String,
}

impl App {
    pub fn new(store_key: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            draft: String::new(),
            editing: None,
            store_key: store_key.into(),
            status_message: String::from("Type an item and press Enter"),
        }
    }

    /// Label for the commit action: "Update" while editing, "Add" otherwise.
    pub fn commit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Update"
        } else {
            "Add"
        }
    }
}
