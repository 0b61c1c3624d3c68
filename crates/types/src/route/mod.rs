//! Routes, screens, and active-section resolution.

mod classifier;
mod router;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use classifier::{MatchMode, RouteClassifier, RouteToken, priority_for};
pub use router::Router;

/// Route shown when nothing more specific applies.
pub const DEFAULT_ROUTE: &str = "/(tabs)";

/// Screens the dashboard can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenId {
    #[default]
    Dashboard,
    Manage,
    Packages,
    Products,
    Categories,
    Shipments,
    Register,
    Qr,
}

impl ScreenId {
    pub const ALL: [ScreenId; 8] = [
        ScreenId::Dashboard,
        ScreenId::Manage,
        ScreenId::Packages,
        ScreenId::Products,
        ScreenId::Categories,
        ScreenId::Shipments,
        ScreenId::Register,
        ScreenId::Qr,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ScreenId::Dashboard => "dashboard",
            ScreenId::Manage => "manage",
            ScreenId::Packages => "packages",
            ScreenId::Products => "products",
            ScreenId::Categories => "categories",
            ScreenId::Shipments => "shipments",
            ScreenId::Register => "register",
            ScreenId::Qr => "qr",
        }
    }

    /// Canonical route for the screen.
    pub fn path(&self) -> String {
        match self {
            ScreenId::Dashboard => DEFAULT_ROUTE.to_string(),
            other => format!("{DEFAULT_ROUTE}/{}", other.as_str()),
        }
    }

    /// Resolves the screen for a route by its last non-empty segment.
    ///
    /// The tab group root, the empty path, and unknown routes all land on
    /// the dashboard.
    pub fn from_path(path: &str) -> ScreenId {
        path_segments(path)
            .last()
            .and_then(|segment| ScreenId::ALL.into_iter().find(|screen| screen.as_str() == segment))
            .unwrap_or_default()
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen '{0}'")]
pub struct ParseScreenIdError(pub String);

impl FromStr for ScreenId {
    type Err = ParseScreenIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ScreenId::ALL
            .into_iter()
            .find(|screen| screen.as_str() == normalized)
            .ok_or_else(|| ParseScreenIdError(s.to_string()))
    }
}

/// Splits a route into its non-empty segments, ignoring any query or fragment.
pub(crate) fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    let without_suffix = path.split(['?', '#']).next().unwrap_or_default();
    without_suffix.split('/').filter(|segment| !segment.is_empty())
}
