use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, Paragraph, Wrap},
};
use trackchain_types::{Effect, scan::VerificationStatus};

use super::state::ScanPhase;
use crate::{
    app::App,
    ui::{components::Component, theme::theme_helpers as th},
};

const STEPS: [(&str, &str); 3] = [
    ("1. Launch the scanner", "Open the camera from this screen."),
    ("2. Scan the package label", "Hold the code inside the frame until it is read."),
    ("3. Review the result", "The verification is added to the list on the right."),
];

/// Package label scanner with a simulated camera.
#[derive(Debug, Default)]
pub struct QrComponent;

impl Component for QrComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('s') if app.qr.launch() => vec![Effect::Log("Scanner launched".to_string())],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.content_focus.get();
        let [left, right] = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(rect);
        let [steps_area, scanner_area, last_area] =
            Layout::vertical([Constraint::Length(8), Constraint::Length(3), Constraint::Min(4)]).areas(left);

        let mut step_lines = Vec::with_capacity(STEPS.len() * 2);
        for (title, body) in STEPS {
            step_lines.push(Line::from(Span::styled(title, theme.text_primary_style())));
            step_lines.push(Line::from(Span::styled(format!("   {body}"), theme.text_muted_style())));
        }
        frame.render_widget(
            Paragraph::new(step_lines)
                .wrap(Wrap { trim: false })
                .block(th::block(theme, Some("QR Scanner"), focused)),
            steps_area,
        );

        match app.qr.phase {
            ScanPhase::Scanning { progress } => {
                let gauge = Gauge::default()
                    .block(th::block(theme, Some("Scanning"), false))
                    .gauge_style(theme.accent_primary_style())
                    .percent(progress.min(100));
                frame.render_widget(gauge, scanner_area);
            }
            ScanPhase::Idle => th::render_button(frame, scanner_area, "Launch scanner", theme, true, focused),
        }

        let last_lines = match &app.qr.last_scan {
            Some(payload) => vec![
                Line::from(vec![
                    Span::styled(payload.code.clone(), theme.accent_emphasis_style()),
                    Span::raw("  "),
                    Span::styled(VerificationStatus::Verified.to_string(), theme.status_success()),
                ]),
                Line::from(format!("{} · {}", payload.product, payload.batch)),
                Line::from(Span::styled(payload.location.clone(), theme.text_secondary_style())),
                Line::from(Span::styled(payload.timestamp.clone(), theme.text_muted_style())),
            ],
            None => vec![Line::from(Span::styled("No scans yet", theme.text_muted_style()))],
        };
        frame.render_widget(Paragraph::new(last_lines).block(th::block(theme, Some("Last Scan"), false)), last_area);

        let items: Vec<ListItem> = app
            .qr
            .verifications
            .iter()
            .map(|entry| {
                let status_style = match entry.status {
                    VerificationStatus::Verified => theme.status_success(),
                    VerificationStatus::Rejected => theme.status_error(),
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("{:<10}", entry.id), theme.text_primary_style()),
                        Span::styled(entry.status.to_string(), status_style),
                    ]),
                    Line::from(Span::styled(
                        format!("  {} · {}", entry.product, entry.timestamp),
                        theme.text_muted_style(),
                    )),
                ])
            })
            .collect();
        frame.render_widget(List::new(items).block(th::block(theme, Some("Recent Verifications"), false)), right);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" Enter/s", " Launch scanner ")])
    }
}
