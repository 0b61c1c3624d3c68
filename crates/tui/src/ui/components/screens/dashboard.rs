//! Overview screen: headline metrics, recently touched products and alerts.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};
use trackchain_types::catalog::{ALERTS, AlertSeverity, METRICS, RECENT_PRODUCTS};

use crate::{
    app::App,
    ui::{
        components::Component,
        theme::{Theme, theme_helpers as th},
    },
};

#[derive(Debug, Default)]
pub struct DashboardComponent;

fn severity_color(theme: &dyn Theme, severity: AlertSeverity) -> ratatui::style::Color {
    let roles = theme.roles();
    match severity {
        AlertSeverity::Warning => roles.warning,
        AlertSeverity::Danger => roles.error,
        AlertSeverity::Success => roles.success,
    }
}

impl Component for DashboardComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.content_focus.get();
        let [cards_area, lists_area] = Layout::vertical([Constraint::Length(4), Constraint::Min(3)]).areas(rect);

        let card_areas = Layout::horizontal(vec![Constraint::Ratio(1, METRICS.len() as u32); METRICS.len()]).split(cards_area);
        for (metric, area) in METRICS.iter().zip(card_areas.iter()) {
            let lines = vec![
                Line::from(Span::styled(metric.value.to_string(), theme.accent_emphasis_style())),
                Line::from(Span::styled(metric.delta, theme.status_success())),
            ];
            frame.render_widget(Paragraph::new(lines).block(th::block(theme, Some(metric.label), false)), *area);
        }

        let [recent_area, alerts_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(lists_area);

        let recent: Vec<ListItem> = RECENT_PRODUCTS
            .iter()
            .map(|product| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<16}", product.id), theme.text_primary_style()),
                    Span::styled(product.action, theme.accent_primary_style()),
                ]))
            })
            .collect();
        frame.render_widget(List::new(recent).block(th::block(theme, Some("Recent Products"), focused)), recent_area);

        let alerts: Vec<ListItem> = ALERTS
            .iter()
            .map(|alert| {
                let badge = format!(" {} ", alert.severity.label());
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(badge, th::badge_style(theme, severity_color(theme, alert.severity))),
                        Span::raw(" "),
                        Span::styled(alert.title, theme.text_primary_style()),
                    ]),
                    Line::from(Span::styled(format!("  {}", alert.timestamp), theme.text_muted_style())),
                ])
            })
            .collect();
        frame.render_widget(List::new(alerts).block(th::block(theme, Some("Recent Alerts"), focused)), alerts_area);
    }
}
