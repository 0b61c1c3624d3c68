//! Activity log pane.
//!
//! Shows navigation, menu toggles, scans and registration outcomes with
//! their local timestamps, newest at the bottom.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem},
};
use trackchain_types::Effect;

use crate::{
    app::App,
    ui::{components::Component, theme::theme_helpers as th, utils::truncate_with_ellipsis},
};

#[derive(Debug, Default)]
pub struct LogsComponent;

impl Component for LogsComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up => app.logs.move_selection(false),
            KeyCode::Down => app.logs.move_selection(true),
            KeyCode::Esc => return vec![Effect::ToggleLogs],
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let title = format!("Activity ({})", app.logs.entries.len());
        let block = th::block(theme, Some(title.as_str()), app.logs.focus.get());
        let inner = block.inner(rect);

        let message_width = usize::from(inner.width).saturating_sub(11);
        let items: Vec<ListItem> = app
            .logs
            .entries
            .iter()
            .map(|line| {
                ListItem::new(Line::from(vec![
                    Span::styled(line.at.format("%H:%M:%S ").to_string(), theme.text_muted_style()),
                    Span::styled(truncate_with_ellipsis(&line.message, message_width), theme.text_primary_style()),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(th::table_selected_style(theme))
            .highlight_symbol("› ");
        frame.render_stateful_widget(list, rect, &mut app.logs.list_state);
        app.logs.last_area = rect;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" ↑/↓", " Scroll "), (" Esc", " Hide ")])
    }
}
