//! # Actions
//!
//! Everything that can happen to the list becomes an `Action`.
//! User presses Enter? That's `Action::Commit`.
//! Stored list arrives at startup? That's `Action::Hydrate(items)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter must carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every change to `items` returns `Effect::Persist`, so the stored slot
//! always mirrors the list as of the latest mutation.

use log::debug;

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Seed the list with what was read from storage at startup.
    Hydrate(Vec<String>),
    /// Input field content changed.
    SetDraft(String),
    /// Add the draft as a new item, or write it over the item being edited.
    Commit,
    /// Copy item `i` into the draft and mark it as the edit target.
    BeginEdit(usize),
    /// Drop the edit cursor and the draft.
    CancelEdit,
    /// Remove item `i`.
    Delete(usize),
    Quit,
}

/// Side effect requested by `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Serialize the full list and overwrite the store slot.
    Persist,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Hydrate(items) => {
            app.status_message = match items.len() {
                0 => String::from("No saved items"),
                1 => String::from("Loaded 1 item"),
                n => format!("Loaded {n} items"),
            };
            app.items = items;
            app.editing = None;
            Effect::Persist
        }
        Action::SetDraft(text) => {
            app.draft = text;
            Effect::None
        }
        Action::Commit => commit(app),
        Action::BeginEdit(index) => {
            let Some(item) = app.items.get(index) else {
                return Effect::None;
            };
            app.draft = item.clone();
            app.editing = Some(index);
            app.status_message = format!("Editing item {}", index + 1);
            Effect::None
        }
        Action::CancelEdit => {
            if app.editing.take().is_some() {
                app.draft.clear();
                app.status_message = String::from("Edit cancelled");
            }
            Effect::None
        }
        Action::Delete(index) => delete(app, index),
        Action::Quit => Effect::Quit,
    }
}

fn commit(app: &mut App) -> Effect {
    if app.draft.trim().is_empty() {
        return Effect::None;
    }
    let text = std::mem::take(&mut app.draft);

    match app.editing.take() {
        Some(index) if index < app.items.len() => {
            app.items[index] = text;
            app.status_message = format!("Updated item {}", index + 1);
        }
        // Stale cursor (list shrank underneath it): fall back to append.
        _ => {
            app.items.push(text);
            app.status_message = format!("Added item {}", app.items.len());
        }
    }
    Effect::Persist
}

fn delete(app: &mut App, index: usize) -> Effect {
    if index >= app.items.len() {
        return Effect::None;
    }
    app.items.remove(index);

    match app.editing {
        Some(editing) if editing == index => {
            app.editing = None;
            app.draft.clear();
        }
        Some(editing) if editing > index => app.editing = Some(editing - 1),
        _ => {}
    }

    app.status_message = format!("Deleted item {}", index + 1);
    Effect::Persist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{app_with, test_app};

    fn commit_text(app: &mut App, text: &str) -> Effect {
        update(app, Action::SetDraft(text.to_string()));
        update(app, Action::Commit)
    }

    #[test]
    fn test_commit_appends_and_clears_draft() {
        let mut app = app_with(&["milk"]);
        let effect = commit_text(&mut app, "bread");

        assert_eq!(effect, Effect::Persist);
        assert_eq!(app.items, vec!["milk", "bread"]);
        assert!(app.draft.is_empty());
        assert_eq!(app.editing, None);
    }

    #[test]
    fn test_commit_keeps_text_verbatim() {
        let mut app = test_app();
        commit_text(&mut app, "  padded  ");
        assert_eq!(app.items, vec!["  padded  "]);
    }

    #[test]
    fn test_commit_whitespace_is_noop() {
        for draft in ["", " ", "\t", "  \n "] {
            let mut app = app_with(&["milk"]);
            let effect = commit_text(&mut app, draft);

            assert_eq!(effect, Effect::None);
            assert_eq!(app.items, vec!["milk"]);
            assert_eq!(app.draft, draft, "draft must be left untouched");
        }
    }

    #[test]
    fn test_whitespace_commit_keeps_edit_cursor() {
        let mut app = app_with(&["milk"]);
        update(&mut app, Action::BeginEdit(0));
        commit_text(&mut app, "   ");
        assert_eq!(app.editing, Some(0));
        assert_eq!(app.items, vec!["milk"]);
    }

    #[test]
    fn test_begin_edit_copies_item_without_mutating() {
        let mut app = app_with(&["milk", "bread"]);
        let effect = update(&mut app, Action::BeginEdit(1));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.draft, "bread");
        assert_eq!(app.editing, Some(1));
        assert_eq!(app.items, vec!["milk", "bread"]);
        assert_eq!(app.commit_label(), "Update");
    }

    #[test]
    fn test_begin_edit_out_of_range_is_noop() {
        let mut app = app_with(&["milk"]);
        app.draft = "typing".to_string();
        let effect = update(&mut app, Action::BeginEdit(5));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.draft, "typing");
        assert_eq!(app.editing, None);
    }

    #[test]
    fn test_edit_then_commit_replaces_in_place() {
        let mut app = app_with(&["milk", "bread", "jam"]);
        update(&mut app, Action::BeginEdit(1));
        let effect = commit_text(&mut app, "rye");

        assert_eq!(effect, Effect::Persist);
        assert_eq!(app.items, vec!["milk", "rye", "jam"]);
        assert_eq!(app.editing, None);
        assert!(app.draft.is_empty());
    }

    #[test]
    fn test_cancel_edit_clears_cursor_and_draft() {
        let mut app = app_with(&["milk"]);
        update(&mut app, Action::BeginEdit(0));
        let effect = update(&mut app, Action::CancelEdit);

        assert_eq!(effect, Effect::None);
        assert_eq!(app.editing, None);
        assert!(app.draft.is_empty());
        assert_eq!(app.items, vec!["milk"]);
    }

    #[test]
    fn test_cancel_without_edit_keeps_draft() {
        let mut app = test_app();
        app.draft = "half typed".to_string();
        update(&mut app, Action::CancelEdit);
        assert_eq!(app.draft, "half typed");
    }

    #[test]
    fn test_delete_shifts_later_items() {
        let mut app = app_with(&["a", "b", "c", "d"]);
        let effect = update(&mut app, Action::Delete(1));

        assert_eq!(effect, Effect::Persist);
        assert_eq!(app.items, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_delete_duplicate_removes_only_that_position() {
        let mut app = app_with(&["x", "x", "x"]);
        update(&mut app, Action::Delete(2));
        assert_eq!(app.items, vec!["x", "x"]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut app = app_with(&["a"]);
        assert_eq!(update(&mut app, Action::Delete(1)), Effect::None);
        assert_eq!(app.items, vec!["a"]);
    }

    #[test]
    fn test_delete_edited_item_clears_cursor() {
        let mut app = app_with(&["a", "b"]);
        update(&mut app, Action::BeginEdit(0));
        update(&mut app, Action::Delete(0));

        assert_eq!(app.editing, None);
        assert!(app.draft.is_empty());
        assert_eq!(app.items, vec!["b"]);
    }

    #[test]
    fn test_delete_before_edited_item_tracks_it() {
        let mut app = app_with(&["a", "b", "c"]);
        update(&mut app, Action::BeginEdit(2));
        update(&mut app, Action::Delete(0));
        assert_eq!(app.editing, Some(1));

        commit_text(&mut app, "C");
        assert_eq!(app.items, vec!["b", "C"]);
    }

    #[test]
    fn test_delete_after_edited_item_keeps_cursor() {
        let mut app = app_with(&["a", "b", "c"]);
        update(&mut app, Action::BeginEdit(0));
        update(&mut app, Action::Delete(2));
        assert_eq!(app.editing, Some(0));
        assert_eq!(app.draft, "a");
    }

    #[test]
    fn test_hydrate_replaces_items_and_persists() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::Hydrate(vec!["milk".to_string(), "bread".to_string()]),
        );

        assert_eq!(effect, Effect::Persist);
        assert_eq!(app.items, vec!["milk", "bread"]);
        assert_eq!(app.status_message, "Loaded 2 items");
    }

    #[test]
    fn test_hydrate_empty_still_persists() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Hydrate(Vec::new())), Effect::Persist);
        assert_eq!(app.status_message, "No saved items");
    }

    #[test]
    fn test_set_draft_does_not_persist() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SetDraft("x".to_string())), Effect::None);
        assert_eq!(app.draft, "x");
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_scenario_milk_bread_eggs() {
        let mut app = test_app();
        commit_text(&mut app, "milk");
        commit_text(&mut app, "bread");
        assert_eq!(app.items, vec!["milk", "bread"]);

        update(&mut app, Action::BeginEdit(0));
        commit_text(&mut app, "eggs");
        assert_eq!(app.items, vec!["eggs", "bread"]);

        update(&mut app, Action::Delete(0));
        assert_eq!(app.items, vec!["bread"]);
    }
}
