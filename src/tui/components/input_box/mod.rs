//! # InputBox Component
//!
//! The draft field. Its title doubles as the commit button label: "Add"
//! normally, "Update" while an item is being edited.
//!
//! ## State Management
//!
//! The buffer mirrors `App::draft`. Every edit emits `ContentChanged` so the
//! parent can push the new text into core state; when core state changes the
//! draft (commit clears it, begin-edit fills it) the parent calls `set_text`.
//! Cursor position and horizontal scroll are encapsulated in `CursorState`.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;

/// Top + bottom borders
pub const INPUT_HEIGHT: u16 = 3;
const BORDER_OFFSET: u16 = 1;
const PLACEHOLDER: &str = "Enter item";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Commit requested (Enter). Core decides whether the draft is usable.
    Submit,
    /// Buffer text changed.
    ContentChanged,
}

/// Single-line text input.
///
/// # Props
///
/// - `label`: "Add" or "Update"
/// - `editing`: index of the item being edited, shown in the title
/// - `focused`: whether keystrokes go here; unfocused boxes render dimmed
pub struct InputBox {
    /// Text buffer (Internal State, mirrors App::draft)
    pub buffer: String,
    pub label: &'static str,
    pub editing: Option<usize>,
    pub focused: bool,
    cursor: CursorState,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            label: "Add",
            editing: None,
            focused: true,
            cursor: CursorState::new(),
        }
    }

    /// Replace the buffer with `text` if it differs, cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        if self.buffer == text {
            return;
        }
        self.buffer = text.to_string();
        self.cursor.move_to_end(&self.buffer);
        self.cursor.scroll = 0;
    }

    fn title(&self) -> String {
        match self.editing {
            Some(index) => format!(" {} (item {}) ", self.label, index + 1),
            None => format!(" {} ", self.label),
        }
    }

    fn insert_str(&mut self, text: &str) {
        // Items are single-line; flatten pasted line breaks.
        let flat: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        self.buffer.insert_str(self.cursor.pos, &flat);
        self.cursor.pos += flat.len();
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let visible = area.width.saturating_sub(2 * BORDER_OFFSET);
        self.cursor.update_scroll(&self.buffer, visible);

        let (border_style, text_style) = if self.focused {
            (Style::default().fg(Color::Cyan), Style::default())
        } else {
            let dim = Style::default().add_modifier(Modifier::DIM);
            (dim, dim)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title());

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
                .style(text_style)
                .scroll((0, self.cursor.scroll))
        };

        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let column = self.cursor.column(&self.buffer) - self.cursor.scroll;
            frame.set_cursor_position((
                area.x + BORDER_OFFSET + column,
                area.y + BORDER_OFFSET,
            ));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut encoded = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut encoded));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.insert_str(text);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                let end = self.cursor.pos;
                self.cursor.move_left(&self.buffer).then(|| {
                    self.buffer.drain(self.cursor.pos..end);
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = cursor::next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                self.cursor.move_left(&self.buffer);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor.move_right(&self.buffer);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.move_to_end(&self.buffer);
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
