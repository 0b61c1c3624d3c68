use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use trackchain_types::{Effect, registration::RegistrationField};

use super::state::SubmitStatus;
use crate::{
    app::App,
    ui::{components::Component, theme::theme_helpers as th},
};

const LABEL_WIDTH: usize = 26;

/// Organization registration form.
#[derive(Debug, Default)]
pub struct RegisterComponent;

impl RegisterComponent {
    fn field_value(app: &App, field: RegistrationField) -> String {
        let form = &app.register.form;
        match field {
            RegistrationField::OrganizationType => format!("‹ {} ›", form.organization_type),
            RegistrationField::AnotherWallet => if form.another_wallet { "[x]" } else { "[ ]" }.to_string(),
            RegistrationField::Country => format!("‹ {} ›", form.country_name()),
            other => form.text(other).unwrap_or_default().to_string(),
        }
    }
}

impl Component for RegisterComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let state = &mut app.register;
        match key.code {
            KeyCode::Up => state.move_cursor(false),
            KeyCode::Down => state.move_cursor(true),
            KeyCode::Left if !state.is_editing_text() => state.cycle_choice(false),
            KeyCode::Right if !state.is_editing_text() => state.cycle_choice(true),
            KeyCode::Char(' ') if state.current_field() == RegistrationField::AnotherWallet => state.cycle_choice(true),
            KeyCode::Backspace => state.delete_char(),
            KeyCode::Char(ch) if state.is_editing_text() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.insert_char(ch)
            }
            KeyCode::Enter => {
                let message = match state.submit() {
                    SubmitStatus::Accepted(summary) => format!("Registration submitted: {summary}"),
                    SubmitStatus::Rejected(error) => format!("Registration rejected: {error}"),
                };
                return vec![Effect::Log(message)];
            }
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.content_focus.get();
        let block = th::block(theme, Some("Organization Registration"), focused);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let field_count = u16::try_from(RegistrationField::ALL.len()).unwrap_or(u16::MAX);
        let [fields_area, status_area, button_area] =
            Layout::vertical([Constraint::Length(field_count), Constraint::Length(2), Constraint::Length(3)]).areas(inner);

        let current = app.register.current_field();
        let lines: Vec<Line> = RegistrationField::ALL
            .iter()
            .map(|field| {
                let is_current = *field == current;
                let marker = if is_current && focused { "› " } else { "  " };
                let value = Self::field_value(app, *field);
                let cursor = if is_current && focused && field.is_text() { "▏" } else { "" };
                Line::from(vec![
                    Span::styled(marker, theme.accent_emphasis_style()),
                    Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), theme.text_secondary_style()),
                    Span::styled(format!("{value}{cursor}"), th::input_style(theme, true, is_current)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), fields_area);

        let status = match &app.register.status {
            Some(SubmitStatus::Accepted(summary)) => Line::from(Span::styled(summary.clone(), theme.status_success())),
            Some(SubmitStatus::Rejected(error)) => Line::from(Span::styled(error.to_string(), theme.status_error())),
            None => Line::from(Span::styled("Legal name, email and contact person are required", theme.text_muted_style())),
        };
        frame.render_widget(Paragraph::new(status), status_area);

        let [button, _] = Layout::horizontal([Constraint::Length(20), Constraint::Min(0)]).areas(button_area);
        th::render_button(frame, button, "Submit", theme, true, focused);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" ↑/↓", " Field "), (" ←/→", " Choose "), (" Space", " Toggle "), (" Enter", " Submit ")],
        )
    }
}
