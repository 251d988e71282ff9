use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::input_box::INPUT_HEIGHT;
use crate::tui::components::{ItemList, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(INPUT_HEIGHT), Min(0), Length(1)]);
    let [title_area, input_area, list_area, help_area] = layout.areas(frame.area());

    TitleBar::new(
        app.store_key.clone(),
        app.items.len(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    tui.input_box.render(frame, input_area);

    ItemList::new(
        &mut tui.item_list,
        &app.items,
        app.editing,
        tui.focus == Focus::List,
    )
    .render(frame, list_area);

    let help = Line::from(help_text(tui.focus, app.editing.is_some()))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

fn help_text(focus: Focus, editing: bool) -> &'static str {
    match (focus, editing) {
        (Focus::Input, false) => " Enter Add  Tab List  Ctrl+C Quit ",
        (Focus::Input, true) => " Enter Update  Esc Cancel edit  Tab List  Ctrl+C Quit ",
        (Focus::List, _) => " ↑↓ Select  e Edit  d Delete  Tab/Esc Input  q Quit ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::app_with;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_add_mode() {
        let app = app_with(&["milk", "bread"]);
        let mut tui = TuiState::new();
        tui.sync_props(&app);

        let text = screen(&app, &mut tui);
        assert!(text.contains("listkeep"));
        assert!(text.contains(" Add "));
        assert!(text.contains("milk"));
        assert!(text.contains("bread"));
        assert!(text.contains("Enter Add"));
    }

    #[test]
    fn test_draw_ui_update_mode() {
        let mut app = app_with(&["milk", "bread"]);
        app.editing = Some(0);
        app.draft = "milk".to_string();
        let mut tui = TuiState::new();
        tui.sync_props(&app);

        let text = screen(&app, &mut tui);
        assert!(text.contains("Update (item 1)"));
        assert!(text.contains("Esc Cancel edit"));
    }

    #[test]
    fn test_help_text_for_list_focus() {
        assert!(help_text(Focus::List, false).contains("d Delete"));
    }
}
