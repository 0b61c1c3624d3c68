use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem},
};
use trackchain_types::{
    Effect,
    catalog::{ALLOCATABLE_PACKAGES, SHIPMENTS, ShipmentStatus, filter_rows},
};

use crate::{
    app::App,
    ui::{
        components::{
            Component,
            common::{TABLE_HINTS, TableScreen, render_table_screen},
        },
        theme::theme_helpers as th,
        utils::short_id,
    },
};

const HEADERS: &[&str] = &["Shipment", "Destination", "Items", "Status", "Legs"];
const WIDTHS: &[Constraint] = &[
    Constraint::Percentage(25),
    Constraint::Percentage(25),
    Constraint::Percentage(10),
    Constraint::Percentage(25),
    Constraint::Percentage(15),
];

/// Shipments table plus the packages still available for allocation.
#[derive(Debug, Default)]
pub struct ShipmentsComponent;

impl Component for ShipmentsComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let row_count = filter_rows(SHIPMENTS, &app.shipments.filter).len();
        app.shipments.handle_key(key, row_count, false);
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let [table_area, packages_area] = Layout::horizontal([Constraint::Percentage(68), Constraint::Percentage(32)]).areas(rect);
        let cells = filter_rows(SHIPMENTS, &app.shipments.filter)
            .iter()
            .map(|shipment| {
                vec![
                    short_id(shipment.id),
                    short_id(shipment.destination),
                    shipment.items.to_string(),
                    shipment.status.to_string(),
                    shipment.legs.to_string(),
                ]
            })
            .collect();
        render_table_screen(
            frame,
            table_area,
            &*app.ctx.theme,
            app.content_focus.get(),
            &mut app.shipments,
            TableScreen {
                title: "Shipments",
                headers: HEADERS,
                widths: WIDTHS,
                rows: cells,
                detail: None,
            },
        );

        let theme = &*app.ctx.theme;
        let in_transit = SHIPMENTS.iter().filter(|shipment| shipment.status == ShipmentStatus::InTransit).count();
        let mut items = vec![ListItem::new(Line::from(Span::styled(
            format!("{in_transit} in transit"),
            theme.status_info(),
        )))];
        items.extend(ALLOCATABLE_PACKAGES.iter().map(|package| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<12}", short_id(package.id)), theme.text_primary_style()),
                Span::styled(format!("qty {}", package.quantity), theme.text_muted_style()),
            ]))
        }));
        frame.render_widget(List::new(items).block(th::block(theme, Some("Available Packages"), false)), packages_area);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, TABLE_HINTS)
    }
}
