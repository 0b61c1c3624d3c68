use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use trackchain_types::{
    Effect,
    nav::{NavDepth, NavKey, SelectOutcome},
};
use unicode_width::UnicodeWidthStr;

use super::{
    icons::{chevron, glyph_for},
    state::RailOrientation,
};
use crate::{
    app::App,
    ui::{
        components::Component,
        theme::{Theme, theme_helpers as th},
        utils::truncate_with_ellipsis,
    },
};

/// Hierarchical navigation rail.
///
/// Draws the visible rows of the navigation table either as a vertical
/// column or as a horizontal strip. Selection never routes directly: leaf
/// entries produce [`Effect::Navigate`] and expandable entries toggle in
/// place.
#[derive(Debug, Default)]
pub struct NavRailComponent;

impl NavRailComponent {
    fn select(app: &mut App, key: NavKey) -> Vec<Effect> {
        let Some(outcome) = app.nav_rail.select(&app.table, key) else {
            return Vec::new();
        };
        let effect = match outcome {
            SelectOutcome::Toggled { parent, open } => {
                let label = app.table.find(parent).map(|item| item.entry.label.clone()).unwrap_or_default();
                Effect::Log(format!("{label} {}", if open { "expanded" } else { "collapsed" }))
            }
            SelectOutcome::Navigate { key, path } => Effect::Navigate { key, path },
        };
        app.sync_rail();
        vec![effect]
    }

    /// Opens or closes the focused parent. Closing from a child moves focus
    /// to its parent first.
    fn set_expansion(app: &mut App, open: bool) -> Vec<Effect> {
        let Some(key) = app.nav_rail.focused_key() else {
            return Vec::new();
        };
        let target = match app.table.parent_of(key) {
            Some(parent) if !open => {
                if let Some(flag) = app.nav_rail.flag_for(parent) {
                    app.focus.focus(flag);
                }
                parent
            }
            Some(_) => return Vec::new(),
            None => key,
        };
        let is_expandable = app.table.find(target).is_some_and(|item| item.entry.expandable);
        if !is_expandable || app.nav_rail.nav.is_open(target) == open {
            return Vec::new();
        }
        Self::select(app, target)
    }

    fn render_vertical(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let active = app.active_key();
        let collapsed = app.nav_rail.presentation.collapsed;
        let focused = app.nav_rail.container_focus.get();
        let theme = &*app.ctx.theme;

        let title = if collapsed { None } else { Some("Menu") };
        let block = th::block(theme, title, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = app.nav_rail.nav.visible_rows(&app.table, active, collapsed);
        let range = app.nav_rail.scroll_to_fit(&vec![1; rows.len()], inner.height);
        let mut item_areas = Vec::with_capacity(range.len());
        for (offset, row) in (0u16..).zip(&rows[range.clone()]) {
            let row_area = Rect::new(inner.x, inner.y + offset, inner.width, 1);
            let is_focused = app.nav_rail.is_item_focused(row.entry.key);
            let style = th::nav_row_style(theme, row.is_active, is_focused);
            let glyph = glyph_for(&row.entry.icon);

            let line = if row.show_label {
                let indent = if row.depth == NavDepth::Child { "   " } else { " " };
                let suffix = row.expansion.map(chevron).unwrap_or("");
                let fixed = indent.width() + glyph.width() + 1 + suffix.width() + 1;
                let label = truncate_with_ellipsis(&row.entry.label, usize::from(inner.width).saturating_sub(fixed));
                let padding = usize::from(inner.width).saturating_sub(fixed + label.width());
                Line::from(vec![
                    Span::raw(indent),
                    Span::raw(glyph),
                    Span::raw(" "),
                    Span::raw(label),
                    Span::raw(" ".repeat(padding)),
                    Span::styled(suffix, theme.text_muted_style()),
                    Span::raw(" "),
                ])
            } else {
                Line::from(Span::raw(glyph)).centered()
            };
            frame.render_widget(Paragraph::new(line).style(style), row_area);
            item_areas.push(row_area);
        }

        let marker_x = area.right().saturating_sub(2);
        if range.start > 0 {
            draw_marker(frame, "▲", marker_x, area.y, theme);
        }
        if range.end < rows.len() {
            draw_marker(frame, "▼", marker_x, area.bottom().saturating_sub(1), theme);
        }

        app.nav_rail.last_area = area;
        app.nav_rail.per_item_areas = item_areas;
    }

    fn render_horizontal(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let active = app.active_key();
        let collapsed = app.nav_rail.presentation.collapsed;
        let focused = app.nav_rail.container_focus.get();
        let theme = &*app.ctx.theme;

        let block = th::block(theme, None, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = app.nav_rail.nav.visible_rows(&app.table, active, collapsed);
        let texts: Vec<String> = rows
            .iter()
            .map(|row| {
                let glyph = glyph_for(&row.entry.icon);
                match (row.show_label, row.expansion) {
                    (true, Some(open)) => format!(" {glyph} {} {} ", row.entry.label, chevron(open)),
                    (true, None) => format!(" {glyph} {} ", row.entry.label),
                    (false, _) => format!(" {glyph} "),
                }
            })
            .collect();
        let widths: Vec<u16> = texts.iter().map(|text| u16::try_from(text.width()).unwrap_or(u16::MAX)).collect();
        let range = app.nav_rail.scroll_to_fit(&widths, inner.width);

        let mut spans = Vec::with_capacity(range.len());
        let mut item_areas = Vec::with_capacity(range.len());
        let mut x = inner.x;
        for index in range.clone() {
            let row = &rows[index];
            let style = th::nav_row_style(theme, row.is_active, app.nav_rail.is_item_focused(row.entry.key));
            item_areas.push(Rect::new(x, inner.y, widths[index], 1));
            spans.push(Span::styled(texts[index].as_str(), style));
            x = x.saturating_add(widths[index]);
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);

        if range.start > 0 {
            draw_marker(frame, "«", area.x, inner.y, theme);
        }
        if range.end < rows.len() {
            draw_marker(frame, "»", area.right().saturating_sub(1), inner.y, theme);
        }

        app.nav_rail.last_area = area;
        app.nav_rail.per_item_areas = item_areas;
    }
}

/// Draws a one-cell overflow marker on the rail border.
fn draw_marker(frame: &mut Frame, marker: &'static str, x: u16, y: u16, theme: &dyn Theme) {
    let cell = Rect::new(x, y, 1, 1).intersection(frame.area());
    if !cell.is_empty() {
        frame.render_widget(Span::styled(marker, theme.text_muted_style()), cell);
    }
}

impl Component for NavRailComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        // Give a freshly focused container a focused row.
        if app.nav_rail.container_focus.get() && app.nav_rail.focused_key().is_none() {
            let target = app.active_key();
            match app.nav_rail.flag_for(target).filter(|_| app.nav_rail.visible.contains(&target)) {
                Some(flag) => {
                    app.focus.focus(flag);
                }
                None => {
                    app.focus.focus(&app.nav_rail);
                }
            }
        }

        let horizontal = app.nav_rail.presentation.orientation == RailOrientation::Horizontal;
        match key.code {
            KeyCode::Down | KeyCode::Up if !horizontal => {
                if let Some(flag) = app.nav_rail.cycle_focus(key.code == KeyCode::Down) {
                    app.focus.by_widget_id(flag.widget_id());
                }
                Vec::new()
            }
            KeyCode::Right | KeyCode::Left if horizontal => {
                if let Some(flag) = app.nav_rail.cycle_focus(key.code == KeyCode::Right) {
                    app.focus.by_widget_id(flag.widget_id());
                }
                Vec::new()
            }
            KeyCode::Right => Self::set_expansion(app, true),
            KeyCode::Left => Self::set_expansion(app, false),
            KeyCode::Enter | KeyCode::Char(' ') => match app.nav_rail.focused_key() {
                Some(key) => Self::select(app, key),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(key) = app.nav_rail.key_at(mouse.column, mouse.row) else {
            return Vec::new();
        };
        if let Some(flag) = app.nav_rail.flag_for(key) {
            app.focus.focus(flag);
        }
        Self::select(app, key)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        match app.nav_rail.presentation.orientation {
            RailOrientation::Vertical => self.render_vertical(frame, area, app),
            RailOrientation::Horizontal => self.render_horizontal(frame, area, app),
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let hints: &[(&'static str, &'static str)] = match app.nav_rail.presentation.orientation {
            RailOrientation::Vertical => &[
                (" ↑/↓", " Move "),
                (" Enter", " Select "),
                (" ←/→", " Collapse/expand "),
                (" Ctrl+B", " Rail "),
            ],
            RailOrientation::Horizontal => &[(" ←/→", " Move "), (" Enter", " Select ")],
        };
        th::build_hint_spans(&*app.ctx.theme, hints)
    }
}
