use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Span,
};
use trackchain_types::{
    Effect,
    catalog::{CATEGORIES, filter_rows},
};

use crate::{
    app::App,
    ui::{
        components::{
            Component,
            common::{TABLE_HINTS, TableScreen, render_table_screen},
        },
        theme::theme_helpers as th,
    },
};

#[derive(Debug, Default)]
pub struct CategoriesComponent;

impl Component for CategoriesComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let row_count = filter_rows(CATEGORIES, &app.categories.filter).len();
        app.categories.handle_key(key, row_count, false);
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let cells = filter_rows(CATEGORIES, &app.categories.filter)
            .iter()
            .map(|category| vec![category.name.to_string(), category.id.to_string()])
            .collect();
        render_table_screen(
            frame,
            rect,
            &*app.ctx.theme,
            app.content_focus.get(),
            &mut app.categories,
            TableScreen {
                title: "Product Categories",
                headers: &["Name", "Id"],
                widths: &[Constraint::Percentage(60), Constraint::Percentage(40)],
                rows: cells,
                detail: None,
            },
        );
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, TABLE_HINTS)
    }
}
