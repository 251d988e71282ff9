//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. It
//! never touches storage directly: `Effect::Persist` results are handed to
//! the `Persister`, which writes in order on a background task.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms waiting for input and
//! only redraws after it has processed at least one event.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::persist::Persister;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, ItemEvent, ItemListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing edits the draft; Enter commits.
    Input,
    /// Arrow keys select rows; e/d act on the selection.
    List,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub item_list: ItemListState,
    pub focus: Focus,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            item_list: ItemListState::new(),
            focus: Focus::Input, // User expects to type immediately
        }
    }

    /// Push core state into component props.
    pub fn sync_props(&mut self, app: &App) {
        self.input_box.set_text(&app.draft);
        self.input_box.label = app.commit_label();
        self.input_box.editing = app.editing;
        self.input_box.focused = self.focus == Focus::Input;
        self.item_list.sync_len(app.items.len());
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Route one terminal event through the focused component into `update()`.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let effect = match event {
        TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::Resize => Effect::None,
        TuiEvent::SwitchFocus => {
            toggle_focus(tui);
            Effect::None
        }
        TuiEvent::MouseClick(column, row) => match tui.item_list.handle_click(*column, *row) {
            Some(item_event) => apply_item_event(app, tui, item_event),
            None => Effect::None,
        },
        _ => match tui.focus {
            Focus::Input => handle_input_focus(app, tui, event),
            Focus::List => handle_list_focus(app, tui, event),
        },
    };
    tui.sync_props(app);
    effect
}

fn toggle_focus(tui: &mut TuiState) {
    tui.focus = match tui.focus {
        Focus::Input => {
            tui.item_list.ensure_selection();
            Focus::List
        }
        Focus::List => Focus::Input,
    };
}

fn handle_input_focus(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    if matches!(event, TuiEvent::Escape) {
        return update(app, Action::CancelEdit);
    }
    match tui.input_box.handle_event(event) {
        Some(InputEvent::Submit) => update(app, Action::Commit),
        Some(InputEvent::ContentChanged) => {
            update(app, Action::SetDraft(tui.input_box.buffer.clone()))
        }
        None => Effect::None,
    }
}

fn handle_list_focus(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Escape => {
            tui.focus = Focus::Input;
            Effect::None
        }
        TuiEvent::InputChar('q') => update(app, Action::Quit),
        _ => match tui.item_list.handle_event(event) {
            Some(item_event) => apply_item_event(app, tui, item_event),
            None => Effect::None,
        },
    }
}

fn apply_item_event(app: &mut App, tui: &mut TuiState, item_event: ItemEvent) -> Effect {
    match item_event {
        ItemEvent::Edit(index) => {
            let effect = update(app, Action::BeginEdit(index));
            if app.editing == Some(index) {
                tui.focus = Focus::Input;
            }
            effect
        }
        ItemEvent::Delete(index) => update(app, Action::Delete(index)),
    }
}

/// Run the interactive screen until the user quits.
///
/// `initial_items` is the list read from storage at startup; hydrating with it
/// counts as a mutation, so it is written back once before the first frame.
pub fn run(mut app: App, initial_items: Vec<String>, persister: &Persister) -> std::io::Result<()> {
    if update(&mut app, Action::Hydrate(initial_items)) == Effect::Persist {
        persister.submit(&app.items);
    }

    let mut tui = TuiState::new();
    tui.sync_props(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(&mut app, &mut tui, &event) {
                Effect::Persist => persister.submit(&app.items),
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                Effect::None => {}
            }
        }
    }

    debug!("Leaving TUI with {} items", app.items.len());
    ratatui::restore();
    Ok(())
}
