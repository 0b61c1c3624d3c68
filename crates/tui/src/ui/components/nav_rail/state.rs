use std::ops::Range;

use indexmap::IndexMap;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use trackchain_types::nav::{NavKey, NavState, NavTable, SelectOutcome};

/// How the rail is laid out for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RailOrientation {
    #[default]
    Vertical,
    /// Single-line strip above the content on narrow terminals.
    Horizontal,
}

/// Per-frame presentation chosen by the screen host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RailPresentation {
    pub orientation: RailOrientation,
    pub collapsed: bool,
}

/// State for the navigation rail.
///
/// Wraps the menu's expansion state and owns rat-focus flags for the
/// container and for every entry of the table. Only flags of currently
/// visible rows take part in the focus tree.
#[derive(Debug, Clone)]
pub struct NavRailState {
    pub nav: NavState,
    /// Focus flag for the container in the global focus tree.
    pub container_focus: FocusFlag,
    item_focus_flags: IndexMap<NavKey, FocusFlag>,
    /// Keys of the rows drawn by the last sync, in display order.
    pub visible: Vec<NavKey>,
    pub presentation: RailPresentation,
    /// Index into `visible` of the first drawn row.
    pub scroll_offset: usize,
    active: NavKey,
    /// Last rendered area of the rail; used for mouse hit testing.
    pub last_area: Rect,
    /// Last computed per-row areas, parallel to `visible`.
    pub per_item_areas: Vec<Rect>,
}

impl NavRailState {
    pub fn new(table: &NavTable, initially_open: &[NavKey]) -> Self {
        let item_focus_flags = table
            .entries()
            .map(|item| {
                let key = item.entry.key;
                (key, FocusFlag::named(&format!("nav.rail.{key}")))
            })
            .collect();
        Self {
            nav: NavState::new(table, initially_open.iter().copied()),
            container_focus: FocusFlag::named("nav.rail"),
            item_focus_flags,
            visible: Vec::new(),
            presentation: RailPresentation::default(),
            scroll_offset: 0,
            active: NavKey::Dashboard,
            last_area: Rect::default(),
            per_item_areas: Vec::new(),
        }
    }

    /// Recomputes the visible rows for the given active key and presentation.
    pub fn sync(&mut self, table: &NavTable, active: NavKey, presentation: RailPresentation) {
        self.presentation = presentation;
        self.active = active;
        self.visible = self
            .nav
            .visible_rows(table, active, presentation.collapsed)
            .iter()
            .map(|row| row.entry.key)
            .collect();
    }

    pub fn flag_for(&self, key: NavKey) -> Option<&FocusFlag> {
        self.item_focus_flags.get(&key)
    }

    pub fn is_item_focused(&self, key: NavKey) -> bool {
        self.flag_for(key).is_some_and(|flag| flag.get())
    }

    /// Key of the visible row holding keyboard focus.
    pub fn focused_key(&self) -> Option<NavKey> {
        self.visible.iter().copied().find(|key| self.is_item_focused(*key))
    }

    /// Flag of the visible row after (or before) the focused one, wrapping.
    pub fn cycle_focus(&self, forward: bool) -> Option<FocusFlag> {
        let len = self.visible.len();
        if len == 0 {
            return None;
        }
        let next_index = match self.visible.iter().position(|key| self.is_item_focused(*key)) {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None => 0,
        };
        self.flag_for(self.visible[next_index]).cloned()
    }

    /// Visible key drawn at `(x, y)` in the last frame.
    pub fn key_at(&self, x: u16, y: u16) -> Option<NavKey> {
        crate::ui::utils::find_target_index_by_mouse_position(&self.last_area, &self.per_item_areas, x, y)
            .and_then(|index| self.visible.get(self.scroll_offset + index).copied())
    }

    /// Scrolls so the focused row, or else the active row, fits in
    /// `available` cells. `extents` holds the size of each visible row along
    /// the rail's axis. Returns the range of `visible` that gets drawn.
    pub fn scroll_to_fit(&mut self, extents: &[u16], available: u16) -> Range<usize> {
        let anchor_key = self.focused_key().unwrap_or(self.active);
        let anchor = self.visible.iter().position(|key| *key == anchor_key);
        self.scroll_offset = scroll_window(extents, available, self.scroll_offset, anchor);

        let mut used = 0u32;
        let shown = extents[self.scroll_offset.min(extents.len())..]
            .iter()
            .take_while(|extent| {
                used += u32::from(**extent);
                used <= u32::from(available)
            })
            .count();
        self.scroll_offset..self.scroll_offset + shown
    }

    /// Applies a selection on `key`. Unknown keys select nothing.
    pub fn select(&mut self, table: &NavTable, key: NavKey) -> Option<SelectOutcome> {
        let entry = table.find(key)?.entry;
        Some(self.nav.select(entry))
    }
}

/// First row to draw so that `anchor` stays in view. Moves as little as
/// possible from `offset` and never leaves free space after the last row.
fn scroll_window(extents: &[u16], available: u16, offset: usize, anchor: Option<usize>) -> usize {
    let Some(last) = extents.len().checked_sub(1) else {
        return 0;
    };
    let span = |range: &[u16]| range.iter().map(|extent| u32::from(*extent)).sum::<u32>();
    let available = u32::from(available);
    let mut offset = offset.min(last);
    if let Some(anchor) = anchor.filter(|anchor| *anchor <= last) {
        offset = offset.min(anchor);
        while offset < anchor && span(&extents[offset..=anchor]) > available {
            offset += 1;
        }
    }
    while offset > 0 && span(&extents[offset - 1..]) <= available {
        offset -= 1;
    }
    offset
}

impl HasFocus for NavRailState {
    /// Builds a focus subtree of the visible rows under the container flag.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for key in &self.visible {
            if let Some(flag) = self.item_focus_flags.get(key) {
                builder.leaf_widget(flag);
            }
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rail() -> (NavTable, NavRailState) {
        let table = NavTable::builtin();
        let state = NavRailState::new(&table, &[NavKey::Manage]);
        (table, state)
    }

    #[test]
    fn sync_tracks_visible_rows() {
        let (table, mut state) = rail();
        state.sync(&table, NavKey::Dashboard, RailPresentation::default());
        assert_eq!(state.visible, NavKey::ALL.to_vec());

        let collapsed = RailPresentation {
            collapsed: true,
            ..RailPresentation::default()
        };
        state.sync(&table, NavKey::Dashboard, collapsed);
        assert!(!state.visible.contains(&NavKey::Batches));
    }

    #[test]
    fn cycle_focus_wraps_over_visible_rows() {
        let (table, mut state) = rail();
        state.nav.toggle(NavKey::Manage);
        state.sync(&table, NavKey::Dashboard, RailPresentation::default());
        let last = *state.visible.last().unwrap();
        state.flag_for(last).unwrap().set(true);

        let next = state.cycle_focus(true).unwrap();
        assert_eq!(next.widget_id(), state.flag_for(NavKey::Dashboard).unwrap().widget_id());
        let previous = state.cycle_focus(false).unwrap();
        let before_last = state.visible[state.visible.len() - 2];
        assert_eq!(previous.widget_id(), state.flag_for(before_last).unwrap().widget_id());
    }

    #[test]
    fn hit_testing_maps_rows_back_to_keys() {
        let (table, mut state) = rail();
        state.nav.toggle(NavKey::Manage);
        state.sync(&table, NavKey::Dashboard, RailPresentation::default());
        state.last_area = Rect::new(0, 0, 20, 12);
        state.per_item_areas = (0..state.visible.len() as u16).map(|row| Rect::new(1, 1 + row, 18, 1)).collect();
        assert_eq!(state.key_at(5, 1), Some(NavKey::Dashboard));
        assert_eq!(state.key_at(5, 3), Some(NavKey::Qr));
        assert_eq!(state.key_at(30, 3), None);
    }

    #[test]
    fn scrolling_keeps_the_focused_or_active_row_in_view() {
        let (table, mut state) = rail();
        state.sync(&table, NavKey::Dashboard, RailPresentation::default());
        let rows = vec![1; state.visible.len()];
        assert_eq!(rows.len(), 12);
        assert_eq!(state.scroll_to_fit(&rows, 10), 0..10);

        state.flag_for(NavKey::Logout).unwrap().set(true);
        assert_eq!(state.scroll_to_fit(&rows, 10), 2..12);
        state.flag_for(NavKey::Logout).unwrap().set(false);

        // Without focus the window follows the active row.
        assert_eq!(state.scroll_to_fit(&rows, 10), 0..10);
        state.sync(&table, NavKey::Register, RailPresentation::default());
        assert_eq!(state.scroll_to_fit(&rows, 10), 1..11);

        // Growing the space pulls earlier rows back in.
        assert_eq!(state.scroll_to_fit(&rows, 20), 0..12);
    }

    #[test]
    fn wide_rows_scroll_one_at_a_time() {
        let (table, mut state) = rail();
        state.sync(&table, NavKey::Dashboard, RailPresentation::default());
        let mut widths = vec![10; state.visible.len()];
        widths[0] = 14;
        state.flag_for(NavKey::Packages).unwrap().set(true);
        let range = state.scroll_to_fit(&widths, 35);
        assert!(range.contains(&3), "packages stays in view: {range:?}");
        assert_eq!(range, 1..4);
    }

    #[test]
    fn hit_testing_accounts_for_the_scroll_offset() {
        let (table, mut state) = rail();
        state.sync(&table, NavKey::Dashboard, RailPresentation::default());
        state.flag_for(NavKey::Logout).unwrap().set(true);
        let rows = vec![1; state.visible.len()];
        let range = state.scroll_to_fit(&rows, 10);
        state.last_area = Rect::new(0, 0, 20, 12);
        state.per_item_areas = (0..range.len() as u16).map(|row| Rect::new(1, 1 + row, 18, 1)).collect();
        assert_eq!(state.key_at(5, 1), Some(state.visible[2]));
        assert_eq!(state.key_at(5, 10), Some(NavKey::Logout));
    }

    #[test]
    fn selecting_through_the_rail_defers_to_the_nav_model() {
        let (table, mut state) = rail();
        assert_eq!(
            state.select(&table, NavKey::Manage),
            Some(SelectOutcome::Toggled {
                parent: NavKey::Manage,
                open: false
            })
        );
        assert!(matches!(
            state.select(&table, NavKey::Shipments),
            Some(SelectOutcome::Navigate { key: NavKey::Shipments, .. })
        ));
    }
}
