use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Props arrive as struct fields; internal presentation state (text cursor,
/// list selection, hit-test caches) may be updated during `render`, which is
/// why it takes `&mut self`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
