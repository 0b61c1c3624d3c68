use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    prelude::*,
    style::Style,
    widgets::Paragraph,
};
use trackchain_types::{Effect, Msg, ScreenId};

use super::components::{
    BatchesComponent, CategoriesComponent, Component, DashboardComponent, HeaderComponent, LogsComponent, NavRailComponent,
    PackagesComponent, ProductsComponent, QrComponent, RegisterComponent, ShipmentsComponent,
    nav_rail::RailOrientation,
};
use super::theme::theme_helpers as th;
use crate::app::App;

const RAIL_WIDTH: u16 = 26;
const COLLAPSED_RAIL_WIDTH: u16 = 7;

/// Areas produced by [`MainView::get_preferred_layout`], in this order.
const HEADER: usize = 0;
const RAIL: usize = 1;
const CONTENT: usize = 2;
const LOGS: usize = 3;
const HINTS: usize = 4;

/// Screen host: header, navigation rail, the current screen, the activity
/// log and the hints bar.
pub struct MainView {
    /// Component for the current route
    pub(crate) content_view: Box<dyn Component>,
    pub current_screen: ScreenId,
    header_view: HeaderComponent,
    nav_rail_view: NavRailComponent,
    logs_view: LogsComponent,
}

fn component_for(screen: ScreenId) -> Box<dyn Component> {
    match screen {
        ScreenId::Dashboard => Box::new(DashboardComponent),
        ScreenId::Manage => Box::new(BatchesComponent),
        ScreenId::Packages => Box::new(PackagesComponent),
        ScreenId::Products => Box::new(ProductsComponent),
        ScreenId::Categories => Box::new(CategoriesComponent),
        ScreenId::Shipments => Box::new(ShipmentsComponent),
        ScreenId::Qr => Box::new(QrComponent),
        ScreenId::Register => Box::new(RegisterComponent),
    }
}

impl MainView {
    pub fn new(screen: ScreenId) -> Self {
        Self {
            content_view: component_for(screen),
            current_screen: screen,
            header_view: HeaderComponent,
            nav_rail_view: NavRailComponent,
            logs_view: LogsComponent,
        }
    }

    /// Swaps the content component to match `screen`.
    ///
    /// Not meant to be called directly; navigation goes through
    /// [`Effect::Navigate`].
    pub fn set_current_screen(&mut self, screen: ScreenId) {
        if screen == self.current_screen {
            return;
        }
        self.content_view = component_for(screen);
        self.current_screen = screen;
    }

    /// Puts focus back on the rail row of the active entry, or the first
    /// focusable widget when that row is hidden.
    pub fn restore_focus(&mut self, app: &mut App) {
        let active = app.active_key();
        match app.nav_rail.flag_for(active).filter(|_| app.nav_rail.visible.contains(&active)) {
            Some(flag) => {
                app.focus.focus(flag);
            }
            None => {
                app.focus.first();
            }
        }
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);
        effects.extend(self.content_view.handle_message(app, msg));
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('l') => return vec![Effect::ToggleLogs],
                KeyCode::Char('t') => return vec![Effect::CycleTheme],
                KeyCode::Char('b') => return vec![Effect::ToggleRail],
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.focus.prev();
                return Vec::new();
            }
            KeyCode::Char('q') if !app.is_editing_text() => return vec![Effect::Quit],
            _ => {}
        }

        if app.nav_rail.container_focus.get() {
            return self.nav_rail_view.handle_key_events(app, key);
        }
        if app.logs.is_visible && app.logs.focus.get() {
            return self.logs_view.handle_key_events(app, key);
        }
        if app.content_focus.get() {
            return self.content_view.handle_key_events(app, key);
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = self.nav_rail_view.handle_mouse_events(app, mouse);
        effects.extend(self.content_view.handle_mouse_events(app, mouse));
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let layout = self.get_preferred_layout(app, area);
        self.header_view.render(frame, layout[HEADER], app);
        self.nav_rail_view.render(frame, layout[RAIL], app);
        self.content_view.render(frame, layout[CONTENT], app);
        if app.logs.is_visible {
            self.logs_view.render(frame, layout[LOGS], app);
        }

        let hints_widget = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints_widget, layout[HINTS]);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];

        if app.nav_rail.container_focus.get() {
            hint_spans.extend(self.nav_rail_view.get_hint_spans(app));
        } else if app.logs.is_visible && app.logs.focus.get() {
            hint_spans.extend(self.logs_view.get_hint_spans(app));
        } else if app.content_focus.get() {
            hint_spans.extend(self.content_view.get_hint_spans(app));
        }

        hint_spans.extend(th::build_hint_spans(
            &*app.ctx.theme,
            &[(" Tab", " Focus "), (" Ctrl+L", " Logs "), (" Ctrl+T", " Theme "), (" q", " Quit ")],
        ));
        hint_spans
    }

    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        let [header, body, hints] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1), Constraint::Length(1)]).areas(area);

        let presentation = app.nav_rail.presentation;
        let [rail, main] = match presentation.orientation {
            RailOrientation::Horizontal => Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(body),
            RailOrientation::Vertical => {
                let width = if presentation.collapsed { COLLAPSED_RAIL_WIDTH } else { RAIL_WIDTH };
                Layout::horizontal([Constraint::Length(width), Constraint::Min(1)]).areas(body)
            }
        };

        let constraints = if app.logs.is_visible {
            [Constraint::Percentage(70), Constraint::Percentage(30)]
        } else {
            [Constraint::Percentage(100), Constraint::Length(0)]
        };
        let [content, logs] = Layout::vertical(constraints).areas(main);

        vec![header, rail, content, logs, hints]
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{Terminal, backend::TestBackend};
    use trackchain_types::NavKey;
    use trackchain_util::{RailMode, ResolvedConfig, UserPreferences};

    use super::*;

    fn rendered_text(app: &mut App, view: &mut MainView, width: u16, height: u16) -> String {
        app.update(&Msg::Resize(width, height));
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        terminal.draw(|frame| view.render(frame, frame.area(), app)).expect("draw");
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(usize::from(width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::new(ResolvedConfig::default(), Arc::new(UserPreferences::ephemeral()))
    }

    #[test]
    fn wide_terminal_renders_the_labelled_rail_and_dashboard() {
        let mut app = app();
        let mut view = MainView::new(app.router.screen());
        let text = rendered_text(&mut app, &mut view, 120, 40);
        assert!(text.contains("Manage Products"), "rail labels are drawn:\n{text}");
        assert!(text.contains("Dashboard"));
        assert!(text.contains("Total Products"), "dashboard cards are drawn");
        assert!(text.contains("TrackChain"));
    }

    fn expanded_rail_app() -> App {
        let config = ResolvedConfig {
            rail: RailMode::Expanded,
            ..ResolvedConfig::default()
        };
        App::new(config, Arc::new(UserPreferences::ephemeral()))
    }

    fn focus_rail_row(app: &App, key: NavKey) {
        app.nav_rail.flag_for(key).expect("rail flag").set(true);
    }

    #[test]
    fn narrow_horizontal_rail_scrolls_to_the_focused_entry() {
        let mut app = expanded_rail_app();
        let mut view = MainView::new(app.router.screen());
        let text = rendered_text(&mut app, &mut view, 58, 30);
        assert!(text.contains("Dashboard"));
        assert!(text.contains('»'), "clipped entries are marked:\n{text}");
        assert!(!text.contains("Logout"));

        focus_rail_row(&app, NavKey::Logout);
        let text = rendered_text(&mut app, &mut view, 58, 30);
        assert!(text.contains("Logout"), "focused entry scrolls into view:\n{text}");
        assert!(text.contains('«'));
        assert!(app.nav_rail.scroll_offset > 0);
    }

    #[test]
    fn short_vertical_rail_scrolls_to_the_focused_row() {
        let mut app = expanded_rail_app();
        let mut view = MainView::new(app.router.screen());
        let text = rendered_text(&mut app, &mut view, 120, 16);
        assert!(text.contains('▼'), "rows below the fold are marked:\n{text}");
        assert!(!text.contains('▲'));

        focus_rail_row(&app, NavKey::Logout);
        let text = rendered_text(&mut app, &mut view, 120, 16);
        assert!(text.contains("Logout"), "focused row scrolls into view:\n{text}");
        assert!(text.contains('▲'));
        assert!(!text.contains('▼'));
    }

    #[test]
    fn navigate_effect_switches_the_content_component() {
        let mut app = app();
        let mut view = MainView::new(app.router.screen());
        assert!(app.navigate(trackchain_types::NavKey::Shipments, "/(tabs)/shipments"));
        view.set_current_screen(app.router.screen());
        assert_eq!(view.current_screen, ScreenId::Shipments);
        let text = rendered_text(&mut app, &mut view, 120, 40);
        assert!(text.contains("Available Packages"));
    }

    #[test]
    fn ctrl_shortcuts_become_effects() {
        let mut app = app();
        let mut view = MainView::new(ScreenId::Dashboard);
        let ctrl = |ch| KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL);
        assert_eq!(view.handle_key_events(&mut app, ctrl('b')), vec![Effect::ToggleRail]);
        assert_eq!(view.handle_key_events(&mut app, ctrl('l')), vec![Effect::ToggleLogs]);
        assert_eq!(
            view.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            vec![Effect::Quit]
        );
    }
}
