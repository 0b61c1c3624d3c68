//! Application state for the TrackChain TUI.
//!
//! [`App`] owns every piece of UI state so that focus building and effect
//! processing can reach it. Components hold no state of their own beyond
//! layout caches.

use std::sync::Arc;

use chrono::Local;
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::{debug, info, warn};
use trackchain_types::{Effect, Msg, NavKey, NavTable, RouteClassifier, Router, ScreenId};
use trackchain_util::{RailMode, ResolvedConfig, UserPreferences};

use crate::ui::{
    components::{
        common::TableViewState,
        logs::LogsState,
        nav_rail::{NavRailState, RailOrientation, RailPresentation},
        screens::{QrState, RegisterState},
    },
    theme::{self, Theme, catalog},
};

/// Terminals narrower than this get the horizontal strip.
pub const HORIZONTAL_RAIL_BELOW: u16 = 60;
/// Terminals narrower than this collapse the rail unless configured.
pub const COLLAPSED_RAIL_BELOW: u16 = 100;

/// Cross-cutting context shared by every component.
#[derive(Debug)]
pub struct SharedCtx {
    /// Active UI theme
    pub theme: Box<dyn Theme>,
    /// Catalog id of the active theme
    pub active_theme_id: &'static str,
    /// Whether truecolor palettes may be selected
    pub truecolor: bool,
    pub preferences: Arc<UserPreferences>,
}

impl SharedCtx {
    pub fn new(preferences: Arc<UserPreferences>) -> Self {
        let loaded = theme::load(preferences.preferred_theme().as_deref());
        Self {
            theme: loaded.theme,
            active_theme_id: loaded.definition.id,
            truecolor: theme::supports_truecolor(),
            preferences,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    pub table: NavTable,
    pub router: Router,
    pub classifier: RouteClassifier,
    pub nav_rail: NavRailState,
    /// Explicit rail mode; `None` follows the terminal width.
    pub rail_collapsed: Option<bool>,
    pub logs: LogsState,
    pub batches: TableViewState,
    pub packages: TableViewState,
    pub products: TableViewState,
    pub categories: TableViewState,
    pub shipments: TableViewState,
    pub qr: QrState,
    pub register: RegisterState,
    /// Focus flag shared by whichever screen fills the content area.
    pub content_focus: FocusFlag,
    root_focus: FocusFlag,
    pub focus: Focus,
    pub viewport: Rect,
}

impl App {
    pub fn new(config: ResolvedConfig, preferences: Arc<UserPreferences>) -> Self {
        let rail_collapsed = match config.rail {
            RailMode::Expanded => Some(false),
            RailMode::Collapsed => Some(true),
            RailMode::Auto => preferences.rail_collapsed(),
        };
        let nav_rail = NavRailState::new(&config.table, &config.open_parents);
        let mut app = Self {
            ctx: SharedCtx::new(preferences),
            router: Router::new(config.initial_path),
            classifier: RouteClassifier::new(config.route_matching),
            table: config.table,
            nav_rail,
            rail_collapsed,
            logs: LogsState::default(),
            batches: TableViewState::default(),
            packages: TableViewState::default(),
            products: TableViewState::default(),
            categories: TableViewState::default(),
            shipments: TableViewState::default(),
            qr: QrState::default(),
            register: RegisterState::default(),
            content_focus: FocusFlag::named("root.content"),
            root_focus: FocusFlag::named("root"),
            focus: Focus::default(),
            viewport: Rect::default(),
        };
        app.sync_rail();
        app.focus = FocusBuilder::build_for(&app);
        info!(path = app.router.current(), theme = app.ctx.active_theme_id, "application state ready");
        app
    }

    /// Menu entry highlighted for the current route.
    pub fn active_key(&self) -> NavKey {
        self.classifier.classify(self.router.screen(), Some(self.router.current()))
    }

    /// Rail orientation and collapse state for the current viewport.
    pub fn rail_presentation(&self) -> RailPresentation {
        let width = self.viewport.width;
        let known = width > 0;
        let orientation = if known && width < HORIZONTAL_RAIL_BELOW {
            RailOrientation::Horizontal
        } else {
            RailOrientation::Vertical
        };
        let collapsed = self.rail_collapsed.unwrap_or(known && width < COLLAPSED_RAIL_BELOW);
        RailPresentation { orientation, collapsed }
    }

    /// Recomputes the rail rows after a route, size or expansion change.
    pub fn sync_rail(&mut self) {
        let active = self.active_key();
        let presentation = self.rail_presentation();
        self.nav_rail.sync(&self.table, active, presentation);
    }

    /// Applies a navigation request. Returns `true` when the route changed.
    pub fn navigate(&mut self, key: NavKey, path: &str) -> bool {
        if !self.router.replace(path) {
            return false;
        }
        let label = self.table.find(key).map(|item| item.entry.label.clone()).unwrap_or_else(|| key.to_string());
        debug!(key = %key, path, "route replaced");
        self.logs.append(format!("Navigated to {label} ({path})"));
        self.sync_rail();
        true
    }

    /// Flips the rail between collapsed and expanded and remembers the choice.
    pub fn toggle_rail(&mut self) {
        let collapsed = !self.rail_presentation().collapsed;
        self.rail_collapsed = Some(collapsed);
        if let Err(error) = self.ctx.preferences.set_rail_collapsed(collapsed) {
            warn!(error = %error, "failed to persist rail preference");
        }
        self.logs.append(if collapsed { "Menu collapsed" } else { "Menu expanded" });
        self.sync_rail();
    }

    /// Switches to the next theme and remembers the choice.
    pub fn cycle_theme(&mut self) {
        if !self.ctx.truecolor {
            self.logs.append("Theme switching needs a truecolor terminal");
            return;
        }
        let next = catalog::next_after(self.ctx.active_theme_id, false);
        self.ctx.theme = next.build();
        self.ctx.active_theme_id = next.id;
        if let Err(error) = self.ctx.preferences.set_preferred_theme(Some(next.id.to_string())) {
            warn!(error = %error, "failed to persist theme preference");
        }
        self.logs.append(format!("Theme: {}", next.label));
    }

    pub fn toggle_logs(&mut self) {
        let visible = self.logs.toggle_visible();
        debug!(visible, "toggled activity log");
    }

    /// True while keystrokes are text input for the focused screen.
    pub fn is_editing_text(&self) -> bool {
        if !self.content_focus.get() {
            return false;
        }
        match self.router.screen() {
            ScreenId::Dashboard | ScreenId::Qr => false,
            ScreenId::Manage => self.batches.is_filtering,
            ScreenId::Packages => self.packages.is_filtering,
            ScreenId::Products => self.products.is_filtering,
            ScreenId::Categories => self.categories.is_filtering,
            ScreenId::Shipments => self.shipments.is_filtering,
            ScreenId::Register => self.register.is_editing_text(),
        }
    }

    /// Handles application-level messages.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => match self.qr.tick(Local::now()) {
                Some(payload) => {
                    info!(code = %payload.code, "scan verified");
                    vec![Effect::Log(format!("Verified {} · {}", payload.code, payload.product))]
                }
                None => Vec::new(),
            },
            Msg::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, *width, *height);
                self.sync_rail();
                Vec::new()
            }
        }
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.widget(&self.nav_rail);
        builder.leaf_widget(&self.content_focus);
        if self.logs.is_visible {
            builder.widget(&self.logs);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.root_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackchain_types::route::MatchMode;

    fn app(config: ResolvedConfig) -> App {
        App::new(config, Arc::new(UserPreferences::ephemeral()))
    }

    #[test]
    fn active_key_follows_the_route() {
        let mut app = app(ResolvedConfig::default());
        assert_eq!(app.active_key(), NavKey::Dashboard);
        assert!(app.navigate(NavKey::Packages, "/(tabs)/packages"));
        assert_eq!(app.active_key(), NavKey::Packages);
        assert!(!app.navigate(NavKey::Packages, "/(tabs)/packages"), "same path is not a change");
    }

    #[test]
    fn substring_matching_is_configurable() {
        let config = ResolvedConfig {
            route_matching: MatchMode::Substring,
            initial_path: "/(tabs)/manage-packages".to_string(),
            ..ResolvedConfig::default()
        };
        let app = app(config);
        assert_eq!(app.router.screen(), ScreenId::Dashboard);
        assert_eq!(app.active_key(), NavKey::Manage);
    }

    #[test]
    fn presentation_depends_on_width_unless_configured() {
        let mut app = app(ResolvedConfig::default());
        app.update(&Msg::Resize(120, 40));
        assert_eq!(app.rail_presentation(), RailPresentation::default());
        app.update(&Msg::Resize(80, 40));
        assert!(app.rail_presentation().collapsed);
        app.update(&Msg::Resize(50, 40));
        assert_eq!(app.rail_presentation().orientation, RailOrientation::Horizontal);

        let pinned = app_with_rail(RailMode::Expanded);
        assert!(!pinned.rail_presentation().collapsed);
    }

    fn app_with_rail(rail: RailMode) -> App {
        let mut app = app(ResolvedConfig {
            rail,
            ..ResolvedConfig::default()
        });
        app.update(&Msg::Resize(80, 40));
        app
    }

    #[test]
    fn toggling_the_rail_overrides_the_width_rule() {
        let mut app = app_with_rail(RailMode::Auto);
        assert!(app.rail_presentation().collapsed);
        app.toggle_rail();
        assert_eq!(app.rail_collapsed, Some(false));
        assert!(app.nav_rail.visible.contains(&NavKey::Batches), "expanded rail shows open children");
    }

    #[test]
    fn finished_scans_are_reported_as_effects() {
        let mut app = app(ResolvedConfig::default());
        assert!(app.qr.launch());
        let effects: Vec<Effect> = (0..20).flat_map(|_| app.update(&Msg::Tick)).collect();
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], Effect::Log(message) if message.starts_with("Verified TC-")));
    }
}
