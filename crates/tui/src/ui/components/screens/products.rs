use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Span,
};
use trackchain_types::{
    Effect,
    catalog::{PRODUCTS, filter_rows},
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

const HEADERS: &[&str] = &["Name", "Note", "Category", "Temperature", "Updated"];
const WIDTHS: &[Constraint] = &[
    Constraint::Percentage(20),
    Constraint::Percentage(30),
    Constraint::Percentage(15),
    Constraint::Percentage(15),
    Constraint::Percentage(20),
];

#[derive(Debug, Default)]
pub struct ProductsComponent;

impl Component for ProductsComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let row_count = filter_rows(PRODUCTS, &app.products.filter).len();
        app.products.handle_key(key, row_count, false);
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let cells = filter_rows(PRODUCTS, &app.products.filter)
            .iter()
            .map(|product| {
                vec![
                    product.name.to_string(),
                    product.note.to_string(),
                    product.category.to_string(),
                    product.temperature_range.to_string(),
                    product.updated.unwrap_or("—").to_string(),
                ]
            })
            .collect();
        render_table_screen(
            frame,
            rect,
            &*app.ctx.theme,
            app.content_focus.get(),
            &mut app.products,
            TableScreen {
                title: "Products",
                headers: HEADERS,
                widths: WIDTHS,
                rows: cells,
                detail: None,
            },
        );
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, TABLE_HINTS)
    }
}
