//! # Item List Component
//!
//! Scrollable list of items. Each row shows the item text and two
//! affordances, `[Edit]` and `[Delete]`, that can be clicked or triggered
//! from the keyboard on the selected row.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ItemListState` lives in `TuiState`
//! - `ItemList` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

const EDIT_LABEL: &str = "[Edit]";
const DELETE_LABEL: &str = "[Delete]";
/// " [Edit] [Delete]"
const AFFORDANCE_WIDTH: u16 = 16;

/// Events emitted by the item list. Indices refer to the list as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEvent {
    Edit(usize),
    Delete(usize),
}

/// Persistent state for the item list.
pub struct ItemListState {
    pub list_state: ListState,
    /// Number of items (Prop, synced from App each loop iteration)
    pub item_count: usize,
    /// Area of the last render, used for mouse hit testing
    last_area: Rect,
}

impl ItemListState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            item_count: 0,
            last_area: Rect::default(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Update the item count and keep the selection inside the list.
    pub fn sync_len(&mut self, item_count: usize) {
        self.item_count = item_count;
        match self.list_state.selected() {
            _ if item_count == 0 => self.list_state.select(None),
            Some(i) if i >= item_count => self.list_state.select(Some(item_count - 1)),
            _ => {}
        }
    }

    /// Select the first row if nothing is selected yet.
    pub fn ensure_selection(&mut self) {
        if self.list_state.selected().is_none() && self.item_count > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if self.item_count > 0 {
            self.list_state.select(Some(self.item_count - 1));
        }
    }

    fn select_prev(&mut self) {
        if self.item_count == 0 {
            return;
        }
        let prev = self
            .list_state
            .selected()
            .map(|i| i.saturating_sub(1))
            .unwrap_or(self.item_count - 1);
        self.list_state.select(Some(prev));
    }

    fn select_next(&mut self) {
        if self.item_count == 0 {
            return;
        }
        let next = self
            .list_state
            .selected()
            .map(|i| (i + 1).min(self.item_count - 1))
            .unwrap_or(0);
        self.list_state.select(Some(next));
    }

    /// Resolve a mouse click at screen position `(column, row)`.
    ///
    /// Clicking a row selects it; clicking an affordance also emits its event.
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<ItemEvent> {
        let inner = inner_area(self.last_area);
        if !contains(inner, column, row) {
            return None;
        }

        let index = self.list_state.offset() + (row - inner.y) as usize;
        if index >= self.item_count {
            return None;
        }
        self.list_state.select(Some(index));

        let (edit, delete) = affordance_columns(inner);
        if (edit.0..edit.1).contains(&column) {
            Some(ItemEvent::Edit(index))
        } else if (delete.0..delete.1).contains(&column) {
            Some(ItemEvent::Delete(index))
        } else {
            None
        }
    }
}

impl Default for ItemListState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for ItemListState {
    type Event = ItemEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.select_prev();
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                self.select_next();
                None
            }
            TuiEvent::CursorHome | TuiEvent::InputChar('g') => {
                if self.item_count > 0 {
                    self.list_state.select(Some(0));
                }
                None
            }
            TuiEvent::CursorEnd | TuiEvent::InputChar('G') => {
                self.select_last();
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar('e') => self.selected().map(ItemEvent::Edit),
            TuiEvent::Delete | TuiEvent::InputChar('d') => self.selected().map(ItemEvent::Delete),
            _ => None,
        }
    }
}

/// Transient render wrapper for the item list.
pub struct ItemList<'a> {
    state: &'a mut ItemListState,
    items: &'a [String],
    editing: Option<usize>,
    focused: bool,
}

impl<'a> ItemList<'a> {
    pub fn new(
        state: &'a mut ItemListState,
        items: &'a [String],
        editing: Option<usize>,
        focused: bool,
    ) -> Self {
        Self {
            state,
            items,
            editing,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.last_area = area;

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Items ({}) ", self.items.len()));

        if self.items.is_empty() {
            let empty = Paragraph::new("No items yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner = inner_area(area);
        let text_width = inner.width.saturating_sub(AFFORDANCE_WIDTH) as usize;

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let text_style = if self.editing == Some(i) {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC)
                } else {
                    Style::default()
                };
                let text = pad_to_width(&truncate_to_width(item, text_width), text_width);
                let line = Line::from(vec![
                    Span::styled(text, text_style),
                    Span::raw(" "),
                    Span::styled(EDIT_LABEL, Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(DELETE_LABEL, Style::default().fg(Color::Red)),
                ]);
                ListItem::new(line)
            })
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let list = List::new(rows).block(block).highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

/// Screen column ranges `[start, end)` of the Edit and Delete labels.
fn affordance_columns(inner: Rect) -> ((u16, u16), (u16, u16)) {
    let start = inner.x + inner.width.saturating_sub(AFFORDANCE_WIDTH) + 1;
    let edit = (start, start + EDIT_LABEL.len() as u16);
    let delete_start = edit.1 + 1;
    let delete = (delete_start, delete_start + DELETE_LABEL.len() as u16);
    (edit, delete)
}

/// Truncate `s` to at most `max_width` display columns, ending in "…" when cut.
/// Control characters (stored newlines, tabs) render as spaces.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let clean: String = s
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if clean.width() <= max_width {
        return clean;
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in clean.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}
