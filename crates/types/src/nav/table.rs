//! Static navigation table.
//!
//! Entries are declared as a flat list where children point at their parent
//! by key, the same shape a config file uses. [`NavTable::from_defs`] turns
//! that list into an explicit two-level tree and rejects anything that would
//! break the hierarchy: unknown or non-expandable parents, nesting deeper
//! than one level, and children declared away from their parent group.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::NavKey;

/// Flat declaration of a navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntryDef {
    pub key: NavKey,
    pub label: String,
    /// Symbolic icon token; opaque to the navigation model.
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NavKey>,
    #[serde(default)]
    pub expandable: bool,
}

impl NavEntryDef {
    /// Declares a root entry.
    pub fn root(key: NavKey, label: impl Into<String>, icon: impl Into<String>, path: Option<&str>) -> Self {
        Self {
            key,
            label: label.into(),
            icon: icon.into(),
            path: path.map(str::to_string),
            parent: None,
            expandable: false,
        }
    }

    /// Marks the entry as an expandable parent.
    pub fn expandable(mut self) -> Self {
        self.expandable = true;
        self
    }

    /// Places the entry under `parent`.
    pub fn child_of(mut self, parent: NavKey) -> Self {
        self.parent = Some(parent);
        self
    }

    fn into_entry(self) -> NavEntry {
        NavEntry {
            key: self.key,
            label: self.label,
            icon: self.icon,
            path: self.path,
            expandable: self.expandable,
        }
    }
}

/// A validated navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub key: NavKey,
    pub label: String,
    pub icon: String,
    pub path: Option<String>,
    pub expandable: bool,
}

/// A root entry together with the children it owns, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRoot {
    pub entry: NavEntry,
    pub children: Vec<NavEntry>,
}

/// Borrowed view of an entry and the root it hangs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItemRef<'a> {
    pub entry: &'a NavEntry,
    pub parent: Option<NavKey>,
}

/// Configuration defects detected while building a [`NavTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavTableError {
    #[error("navigation table has no entries")]
    Empty,
    #[error("navigation key '{0}' is declared more than once")]
    DuplicateKey(NavKey),
    #[error("entry '{0}' lists itself as its parent")]
    SelfParent(NavKey),
    #[error("entry '{child}' references unknown parent '{parent}'")]
    UnknownParent { child: NavKey, parent: NavKey },
    #[error("entry '{child}' is nested under '{parent}', which is itself a child entry")]
    NestedTooDeep { child: NavKey, parent: NavKey },
    #[error("entry '{child}' references parent '{parent}', which is not expandable")]
    ParentNotExpandable { child: NavKey, parent: NavKey },
    #[error("child entry '{0}' cannot be expandable")]
    ExpandableChild(NavKey),
    #[error("entry '{child}' must be declared right after '{parent}' or its other children")]
    ChildOutOfOrder { child: NavKey, parent: NavKey },
}

/// Ordered two-level navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTable {
    roots: Vec<NavRoot>,
}

impl NavTable {
    /// Builds a table from flat declarations, validating the hierarchy.
    pub fn from_defs(defs: impl IntoIterator<Item = NavEntryDef>) -> Result<Self, NavTableError> {
        let defs: Vec<NavEntryDef> = defs.into_iter().collect();
        if defs.is_empty() {
            return Err(NavTableError::Empty);
        }

        // key -> (parent, expandable)
        let mut declared: HashMap<NavKey, (Option<NavKey>, bool)> = HashMap::with_capacity(defs.len());
        for def in &defs {
            if declared.insert(def.key, (def.parent, def.expandable)).is_some() {
                return Err(NavTableError::DuplicateKey(def.key));
            }
        }

        let mut roots: Vec<NavRoot> = Vec::new();
        for def in defs {
            let Some(parent) = def.parent else {
                roots.push(NavRoot {
                    entry: def.into_entry(),
                    children: Vec::new(),
                });
                continue;
            };

            let child = def.key;
            if parent == child {
                return Err(NavTableError::SelfParent(child));
            }
            let (grandparent, parent_expandable) = declared
                .get(&parent)
                .copied()
                .ok_or(NavTableError::UnknownParent { child, parent })?;
            if grandparent.is_some() {
                return Err(NavTableError::NestedTooDeep { child, parent });
            }
            if !parent_expandable {
                return Err(NavTableError::ParentNotExpandable { child, parent });
            }
            if def.expandable {
                return Err(NavTableError::ExpandableChild(child));
            }
            let owner = roots
                .last_mut()
                .filter(|root| root.entry.key == parent)
                .ok_or(NavTableError::ChildOutOfOrder { child, parent })?;
            owner.children.push(def.into_entry());
        }

        Ok(Self { roots })
    }

    /// The table shipped with the dashboard.
    pub fn builtin() -> Self {
        Self::from_defs(builtin_defs()).expect("built-in navigation table is valid")
    }

    pub fn roots(&self) -> &[NavRoot] {
        &self.roots
    }

    /// Iterates every entry in display order (each root followed by its children).
    pub fn entries(&self) -> impl Iterator<Item = NavItemRef<'_>> {
        self.roots.iter().flat_map(|root| {
            std::iter::once(NavItemRef {
                entry: &root.entry,
                parent: None,
            })
            .chain(root.children.iter().map(move |child| NavItemRef {
                entry: child,
                parent: Some(root.entry.key),
            }))
        })
    }

    pub fn find(&self, key: NavKey) -> Option<NavItemRef<'_>> {
        self.entries().find(|item| item.entry.key == key)
    }

    /// Parent of `key`, or `None` for roots and keys not in the table.
    pub fn parent_of(&self, key: NavKey) -> Option<NavKey> {
        self.find(key).and_then(|item| item.parent)
    }

    /// Keys of the roots that own children and toggle instead of navigating.
    pub fn expandable_roots(&self) -> impl Iterator<Item = NavKey> + '_ {
        self.roots.iter().filter(|root| root.entry.expandable).map(|root| root.entry.key)
    }

    pub fn len(&self) -> usize {
        self.roots.iter().map(|root| 1 + root.children.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Flattens the table back into declarations, e.g. for writing a config file.
    pub fn to_defs(&self) -> Vec<NavEntryDef> {
        self.entries()
            .map(|item| NavEntryDef {
                key: item.entry.key,
                label: item.entry.label.clone(),
                icon: item.entry.icon.clone(),
                path: item.entry.path.clone(),
                parent: item.parent,
                expandable: item.entry.expandable,
            })
            .collect()
    }
}

impl Default for NavTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Declarations for the built-in table.
pub fn builtin_defs() -> Vec<NavEntryDef> {
    use NavKey::*;
    vec![
        NavEntryDef::root(Dashboard, "Dashboard", "apps-outline", Some("/(tabs)")),
        NavEntryDef::root(Manage, "Manage Products", "create-outline", Some("/(tabs)/manage")).expandable(),
        NavEntryDef::root(Batches, "Batches", "briefcase-outline", Some("/(tabs)/manage")).child_of(Manage),
        NavEntryDef::root(Packages, "Packages", "cube-outline", Some("/(tabs)/packages")).child_of(Manage),
        NavEntryDef::root(Products, "Products", "cube-outline", Some("/(tabs)/products")).child_of(Manage),
        NavEntryDef::root(Categories, "Product Categories", "pricetags-outline", Some("/(tabs)/categories")).child_of(Manage),
        // The scanner has a route of its own rather than the tab root.
        NavEntryDef::root(Qr, "QR Scanner", "qr-code-outline", Some("/(tabs)/qr")),
        NavEntryDef::root(Shipments, "Shipments", "car-outline", Some("/(tabs)/shipments")),
        NavEntryDef::root(Analytics, "Analytics", "analytics-outline", None),
        NavEntryDef::root(Settings, "Settings", "settings-outline", None),
        NavEntryDef::root(Register, "Register", "person-add-outline", Some("/(tabs)/register")),
        NavEntryDef::root(Logout, "Logout", "log-out-outline", None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use NavKey::*;

    fn root(key: NavKey) -> NavEntryDef {
        NavEntryDef::root(key, key.as_str(), "icon", None)
    }

    #[test]
    fn builtin_table_preserves_declaration_order() {
        let table = NavTable::builtin();
        let keys: Vec<NavKey> = table.entries().map(|item| item.entry.key).collect();
        assert_eq!(keys, NavKey::ALL.to_vec());
        assert_eq!(table.len(), 12);
    }

    #[test]
    fn builtin_table_nests_catalog_entries_under_manage() {
        let table = NavTable::builtin();
        for key in [Batches, Packages, Products, Categories] {
            assert_eq!(table.parent_of(key), Some(Manage), "{key} should sit under manage");
        }
        assert_eq!(table.parent_of(Manage), None);
        assert_eq!(table.expandable_roots().collect::<Vec<_>>(), vec![Manage]);
    }

    #[test]
    fn scanner_entry_routes_to_its_own_screen() {
        let table = NavTable::builtin();
        let qr = table.find(Qr).expect("qr entry");
        assert_eq!(qr.entry.path.as_deref(), Some("/(tabs)/qr"));
        assert!(qr.parent.is_none());
    }

    #[test]
    fn round_trips_through_flat_definitions() {
        let table = NavTable::builtin();
        assert_eq!(NavTable::from_defs(table.to_defs()), Ok(table));
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(NavTable::from_defs(Vec::new()), Err(NavTableError::Empty));
    }

    #[test]
    fn rejects_duplicate_keys() {
        let result = NavTable::from_defs(vec![root(Dashboard), root(Dashboard)]);
        assert_eq!(result, Err(NavTableError::DuplicateKey(Dashboard)));
    }

    #[test]
    fn rejects_self_parent() {
        let result = NavTable::from_defs(vec![root(Manage).expandable().child_of(Manage)]);
        assert_eq!(result, Err(NavTableError::SelfParent(Manage)));
    }

    #[test]
    fn rejects_unknown_parent() {
        let result = NavTable::from_defs(vec![root(Dashboard), root(Batches).child_of(Manage)]);
        assert_eq!(
            result,
            Err(NavTableError::UnknownParent {
                child: Batches,
                parent: Manage
            })
        );
    }

    #[test]
    fn rejects_non_expandable_parent() {
        let result = NavTable::from_defs(vec![root(Manage), root(Batches).child_of(Manage)]);
        assert_eq!(
            result,
            Err(NavTableError::ParentNotExpandable {
                child: Batches,
                parent: Manage
            })
        );
    }

    #[test]
    fn rejects_grandchildren() {
        let result = NavTable::from_defs(vec![
            root(Manage).expandable(),
            root(Batches).child_of(Manage),
            root(Packages).child_of(Batches),
        ]);
        assert_eq!(
            result,
            Err(NavTableError::NestedTooDeep {
                child: Packages,
                parent: Batches
            })
        );
    }

    #[test]
    fn rejects_expandable_children() {
        let result = NavTable::from_defs(vec![root(Manage).expandable(), root(Batches).expandable().child_of(Manage)]);
        assert_eq!(result, Err(NavTableError::ExpandableChild(Batches)));
    }

    #[test]
    fn rejects_children_declared_away_from_their_parent() {
        let result = NavTable::from_defs(vec![
            root(Manage).expandable(),
            root(Batches).child_of(Manage),
            root(Qr),
            root(Packages).child_of(Manage),
        ]);
        assert_eq!(
            result,
            Err(NavTableError::ChildOutOfOrder {
                child: Packages,
                parent: Manage
            })
        );
    }

    #[test]
    fn rejects_children_declared_before_their_parent() {
        let result = NavTable::from_defs(vec![root(Batches).child_of(Manage), root(Manage).expandable()]);
        assert_eq!(
            result,
            Err(NavTableError::ChildOutOfOrder {
                child: Batches,
                parent: Manage
            })
        );
    }

    #[test]
    fn definitions_deserialize_from_yaml() {
        let yaml = r#"
- key: dashboard
  label: Home
  icon: apps-outline
  path: /(tabs)
- key: manage
  label: Manage
  icon: create-outline
  expandable: true
- key: batches
  label: Batches
  icon: briefcase-outline
  parent: manage
"#;
        let defs: Vec<NavEntryDef> = serde_yaml::from_str(yaml).unwrap();
        let table = NavTable::from_defs(defs).unwrap();
        assert_eq!(table.roots().len(), 2);
        assert_eq!(table.roots()[1].children[0].key, Batches);
        assert_eq!(table.find(Manage).and_then(|item| item.entry.path.clone()), None);
    }
}
