use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::{Line, Span},
};
use trackchain_types::{
    Effect,
    catalog::{PACKAGES, filter_rows},
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

const HEADERS: &[&str] = &["Package", "Product", "Batch", "Qty", "Status"];
const WIDTHS: &[Constraint] = &[
    Constraint::Percentage(20),
    Constraint::Percentage(20),
    Constraint::Percentage(25),
    Constraint::Percentage(10),
    Constraint::Percentage(25),
];

/// Packages with their sensors and label payload in the detail panel.
#[derive(Debug, Default)]
pub struct PackagesComponent;

impl Component for PackagesComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let rows = filter_rows(PACKAGES, &app.packages.filter);
        match app.packages.handle_key(key, rows.len(), true) {
            TableKeyOutcome::DetailToggled { index, open: true } => rows
                .get(index)
                .map(|package| vec![Effect::Log(format!("Viewing package {}", short_id(package.id)))])
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let rows = filter_rows(PACKAGES, &app.packages.filter);
        let detail = app.packages.expanded.and_then(|index| rows.get(index)).map(|package| {
            vec![
                Line::from(vec![
                    Span::styled("Sensors: ", theme.text_muted_style()),
                    Span::raw(package.sensors.join(", ")),
                ]),
                Line::from(vec![Span::styled("QR:      ", theme.text_muted_style()), Span::raw(package.qr)]),
            ]
        });
        let cells = rows
            .iter()
            .map(|package| {
                vec![
                    short_id(package.id),
                    package.product.to_string(),
                    short_id(package.batch),
                    package.quantity.to_string(),
                    package.status.to_string(),
                ]
            })
            .collect();
        render_table_screen(
            frame,
            rect,
            theme,
            app.content_focus.get(),
            &mut app.packages,
            TableScreen {
                title: "Packages",
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
