use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::App,
    ui::{components::Component, theme::theme_helpers as th},
};

const BRAND: &str = "TrackChain";
const TAGLINE: &str = "Supply Chain DApp";
const ORGANIZATION: &str = "Pfizer Manufacturing";
const ORGANIZATION_ROLE: &str = "Manufacturer";

/// Top bar with the brand, the signed-in organization and a clock.
#[derive(Debug, Default)]
pub struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, None, false);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let [brand_area, org_area] = Layout::horizontal([Constraint::Min(20), Constraint::Length(50)]).areas(inner);
        let brand = Line::from(vec![
            Span::styled(BRAND, theme.accent_emphasis_style()),
            Span::styled(format!(" / {TAGLINE}"), theme.text_secondary_style()),
            Span::styled(format!("   {}", app.router.current()), theme.text_muted_style()),
        ]);
        frame.render_widget(Paragraph::new(brand), brand_area);

        let clock = Local::now().format("%H:%M").to_string();
        let organization = Line::from(vec![
            Span::styled(ORGANIZATION, theme.text_primary_style().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" / {ORGANIZATION_ROLE}  "), theme.text_muted_style()),
            Span::styled(clock, theme.accent_primary_style()),
        ])
        .right_aligned();
        frame.render_widget(Paragraph::new(organization), org_area);
    }
}
