use serde::{Deserialize, Serialize};

use super::{ScreenId, path_segments};
use crate::nav::NavKey;

/// How a route token is compared against the current path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Token must equal a whole path segment.
    #[default]
    Segment,
    /// Token may appear anywhere in the path. A route named
    /// `manage-packages` matches both `manage` and `packages`.
    Substring,
}

/// A path token and the section it activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteToken {
    pub token: &'static str,
    pub key: NavKey,
}

const fn token(token: &'static str, key: NavKey) -> RouteToken {
    RouteToken { token, key }
}

const MANAGE: RouteToken = token("manage", NavKey::Manage);
const PACKAGES: RouteToken = token("packages", NavKey::Packages);
const PRODUCTS: RouteToken = token("products", NavKey::Products);
const CATEGORIES: RouteToken = token("categories", NavKey::Categories);
const SHIPMENTS: RouteToken = token("shipments", NavKey::Shipments);
const REGISTER: RouteToken = token("register", NavKey::Register);
const QR: RouteToken = token("qr", NavKey::Qr);

/// Priority-ordered tokens for each screen. The first token found in the
/// path wins.
pub fn priority_for(screen: ScreenId) -> &'static [RouteToken] {
    match screen {
        ScreenId::Dashboard => &[MANAGE, PACKAGES, CATEGORIES, SHIPMENTS, REGISTER],
        ScreenId::Manage => &[MANAGE, PACKAGES, CATEGORIES, SHIPMENTS, PRODUCTS, REGISTER],
        ScreenId::Packages => &[PACKAGES, MANAGE, PRODUCTS, REGISTER],
        // Products and qr lead with their own token so each entry highlights on its own route.
        ScreenId::Products => &[PRODUCTS, PACKAGES, CATEGORIES, MANAGE, SHIPMENTS, REGISTER],
        ScreenId::Categories => &[CATEGORIES, PACKAGES, MANAGE, PRODUCTS, REGISTER],
        ScreenId::Shipments => &[SHIPMENTS, CATEGORIES, PACKAGES, MANAGE, PRODUCTS, REGISTER],
        ScreenId::Register => &[MANAGE, REGISTER, PRODUCTS],
        ScreenId::Qr => &[QR, MANAGE, PACKAGES, CATEGORIES, SHIPMENTS, REGISTER],
    }
}

/// Maps the current path to the navigation entry that should be highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteClassifier {
    mode: MatchMode,
}

impl RouteClassifier {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns the key of the first token in `screen`'s priority list that
    /// matches `path`, or [`NavKey::Dashboard`] when none does.
    pub fn classify(&self, screen: ScreenId, path: Option<&str>) -> NavKey {
        let Some(path) = path else {
            return NavKey::Dashboard;
        };
        priority_for(screen)
            .iter()
            .find(|candidate| self.matches(path, candidate.token))
            .map(|candidate| candidate.key)
            .unwrap_or(NavKey::Dashboard)
    }

    fn matches(&self, path: &str, token: &str) -> bool {
        match self.mode {
            MatchMode::Segment => path_segments(path).any(|segment| segment == token),
            MatchMode::Substring => path.contains(token),
        }
    }
}
