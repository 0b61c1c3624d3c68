use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::{Line, Span},
};
use trackchain_types::{
    Effect,
    catalog::{BATCHES, filter_rows},
};

use crate::{
    app::App,
    ui::{
        components::{
            Component,
            common::{TABLE_HINTS, TableKeyOutcome, TableScreen, render_table_screen},
        },
        theme::theme_helpers as th,
        utils::short_id,
    },
};

const HEADERS: &[&str] = &["Batch", "Product", "Facility", "Quantity"];
const WIDTHS: &[Constraint] = &[
    Constraint::Percentage(40),
    Constraint::Percentage(20),
    Constraint::Percentage(20),
    Constraint::Percentage(20),
];

/// Production batches with a per-row detail panel.
#[derive(Debug, Default)]
pub struct BatchesComponent;

impl Component for BatchesComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let rows = filter_rows(BATCHES, &app.batches.filter);
        match app.batches.handle_key(key, rows.len(), true) {
            TableKeyOutcome::DetailToggled { index, open: true } => rows
                .get(index)
                .map(|batch| vec![Effect::Log(format!("Viewing {}", short_id(batch.id)))])
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let rows = filter_rows(BATCHES, &app.batches.filter);
        let detail = app.batches.expanded.and_then(|index| rows.get(index)).map(|batch| {
            vec![
                Line::from(vec![
                    Span::styled("Production: ", theme.text_muted_style()),
                    Span::raw(batch.production_window),
                ]),
                Line::from(vec![Span::styled("Expiry:     ", theme.text_muted_style()), Span::raw(batch.expiry)]),
            ]
        });
        let cells = rows
            .iter()
            .map(|batch| {
                vec![
                    short_id(batch.id),
                    batch.product.to_string(),
                    batch.facility.to_string(),
                    batch.quantity.to_string(),
                ]
            })
            .collect();
        render_table_screen(
            frame,
            rect,
            theme,
            app.content_focus.get(),
            &mut app.batches,
            TableScreen {
                title: "Batches",
                headers: HEADERS,
                widths: WIDTHS,
                rows: cells,
                detail,
            },
        );
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut spans = th::build_hint_spans(&*app.ctx.theme, TABLE_HINTS);
        spans.extend(th::build_hint_spans(&*app.ctx.theme, &[(" Enter", " Details ")]));
        spans
    }
}
