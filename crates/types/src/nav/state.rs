use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use super::{NavEntry, NavKey, NavTable};
use crate::route::DEFAULT_ROUTE;

/// Parents expanded when a rail is first mounted.
pub const DEFAULT_OPEN_PARENTS: &[NavKey] = &[NavKey::Manage];

/// Expansion state of the expandable roots of one table.
///
/// Only keys that the table declares as expandable roots are tracked, so a
/// stray key can never flip state for an entry that has no children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpenParents {
    entries: IndexMap<NavKey, bool>,
}

impl OpenParents {
    /// Tracks every expandable root of `table`, all collapsed.
    pub fn for_table(table: &NavTable) -> Self {
        Self {
            entries: table.expandable_roots().map(|key| (key, false)).collect(),
        }
    }

    pub fn is_open(&self, key: NavKey) -> bool {
        self.entries.get(&key).copied().unwrap_or(false)
    }

    pub fn is_tracked(&self, key: NavKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Sets the state of a tracked parent. Returns `false` when `key` is not tracked.
    pub fn set(&mut self, key: NavKey, open: bool) -> bool {
        match self.entries.get_mut(&key) {
            Some(slot) => {
                *slot = open;
                true
            }
            None => false,
        }
    }

    /// Flips a tracked parent and returns its new state.
    pub fn toggle(&mut self, key: NavKey) -> Option<bool> {
        let slot = self.entries.get_mut(&key)?;
        *slot = !*slot;
        Some(*slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NavKey, bool)> + '_ {
        self.entries.iter().map(|(key, open)| (*key, *open))
    }
}

/// Whether a row is a root entry or sits under one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDepth {
    Root,
    Child,
}

/// One visible row of the navigation menu, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavRow<'a> {
    pub entry: &'a NavEntry,
    pub parent: Option<NavKey>,
    pub depth: NavDepth,
    pub is_active: bool,
    /// Labels are hidden in collapsed mode; icons are always drawn.
    pub show_label: bool,
    /// Expansion indicator for expandable roots, `None` for everything else.
    pub expansion: Option<bool>,
}

/// Result of selecting a menu entry.
///
/// The menu never navigates by itself; a `Navigate` outcome is a request
/// for the routing layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SelectOutcome {
    Toggled { parent: NavKey, open: bool },
    Navigate { key: NavKey, path: String },
}

/// Computes the visible rows of `table` in display order.
///
/// Roots are always shown. A child of `P` is shown when `P` is open, when
/// `P` is the active entry, or when the active entry is one of `P`'s
/// children. In collapsed mode only the last two conditions apply.
pub fn visible_rows<'a>(table: &'a NavTable, open_parents: &OpenParents, active: NavKey, collapsed: bool) -> Vec<NavRow<'a>> {
    let active_parent = table.parent_of(active);
    table
        .entries()
        .filter(|item| match item.parent {
            None => true,
            Some(parent) => {
                let on_active_path = active_parent == Some(parent) || active == parent;
                (open_parents.is_open(parent) || on_active_path) && (!collapsed || on_active_path)
            }
        })
        .map(|item| NavRow {
            entry: item.entry,
            parent: item.parent,
            depth: if item.parent.is_some() { NavDepth::Child } else { NavDepth::Root },
            is_active: item.entry.key == active,
            show_label: !collapsed,
            expansion: item.entry.expandable.then(|| open_parents.is_open(item.entry.key)),
        })
        .collect()
}

/// Per-rail navigation state. Created when a rail mounts, dropped with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    open_parents: OpenParents,
}

impl NavState {
    /// Creates state for `table` with the given parents expanded.
    ///
    /// Keys that are not expandable roots of `table` are skipped.
    pub fn new(table: &NavTable, initially_open: impl IntoIterator<Item = NavKey>) -> Self {
        let mut open_parents = OpenParents::for_table(table);
        for key in initially_open {
            if !open_parents.set(key, true) {
                warn!(key = %key, "ignoring initially open parent that is not an expandable root");
            }
        }
        Self { open_parents }
    }

    /// Creates state with [`DEFAULT_OPEN_PARENTS`] expanded.
    pub fn with_defaults(table: &NavTable) -> Self {
        Self::new(table, DEFAULT_OPEN_PARENTS.iter().copied())
    }

    pub fn open_parents(&self) -> &OpenParents {
        &self.open_parents
    }

    pub fn is_open(&self, key: NavKey) -> bool {
        self.open_parents.is_open(key)
    }

    /// Flips the expansion of `parent`. Unknown parents are ignored.
    pub fn toggle(&mut self, parent: NavKey) -> Option<bool> {
        let toggled = self.open_parents.toggle(parent);
        match toggled {
            Some(open) => debug!(parent = %parent, open, "toggled navigation parent"),
            None => warn!(parent = %parent, "ignoring toggle for a key that is not an expandable root"),
        }
        toggled
    }

    pub fn visible_rows<'a>(&self, table: &'a NavTable, active: NavKey, collapsed: bool) -> Vec<NavRow<'a>> {
        visible_rows(table, &self.open_parents, active, collapsed)
    }

    /// Interprets a selection: expandable entries toggle, everything else
    /// becomes a navigation request, falling back to [`DEFAULT_ROUTE`] when
    /// the entry has no path.
    pub fn select(&mut self, entry: &NavEntry) -> SelectOutcome {
        if entry.expandable {
            let open = self.toggle(entry.key).unwrap_or(false);
            return SelectOutcome::Toggled { parent: entry.key, open };
        }
        let path = entry.path.clone().unwrap_or_else(|| DEFAULT_ROUTE.to_string());
        debug!(key = %entry.key, path = %path, "navigation requested");
        SelectOutcome::Navigate { key: entry.key, path }
    }
}
