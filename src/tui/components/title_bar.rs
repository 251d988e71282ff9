//! # TitleBar Component
//!
//! Top status bar: app name, the storage slot the list lives in, the item
//! count and the latest status message.
//!
//! Stateless: every field is a prop, rebuilt from `App` each frame.
//!
//! 1. **Status message**: `"listkeep [items] | 3 items | Added item 3"`
//! 2. **Default**: `"listkeep [items] | 3 items"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Storage slot name
    pub store_key: String,
    pub item_count: usize,
    /// Status message (e.g., "Loaded 3 items", "Editing item 2")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(store_key: String, item_count: usize, status_message: String) -> Self {
        Self {
            store_key,
            item_count,
            status_message,
        }
    }

    fn count_label(&self) -> String {
        match self.item_count {
            1 => String::from("1 item"),
            n => format!("{n} items"),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("listkeep", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" [{}] | {}", self.store_key, self.count_label())),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
