//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing slot, item count and status
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: Draft field whose title is the Add/Update label
//! - `ItemList`: Scrollable rows with Edit/Delete affordances
//!
//! Components receive external data as "props" (struct fields or constructor
//! arguments), never by reaching into `App` directly.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── item_list.rs     (Rows + Edit/Delete affordances)
//! └── input_box/       (Draft field + cursor)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod input_box;
pub use input_box::{InputBox, InputEvent};
pub mod item_list;
pub use item_list::{ItemEvent, ItemList, ItemListState};
