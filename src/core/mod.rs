//! # Core Application Logic
//!
//! The list, the draft, the edit cursor and the rules for changing them.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │ Effect::Persist
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │ ── snapshot of items ──▶ │ Persister  │ ──▶ KeyValueStore
//!     │  Adapter   │                          │   (task)   │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all list state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`persist`]: List encoding and the ordered background writer
//! - [`config`]: Layered settings (defaults, file, env, CLI)

pub mod action;
pub mod config;
pub mod persist;
pub mod state;
