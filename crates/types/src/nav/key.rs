use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a navigation entry.
///
/// The set is closed: every entry the dashboard can show is listed here, so
/// open-parent state and active-route resolution never deal with free-form
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKey {
    Dashboard,
    Manage,
    Batches,
    Packages,
    Products,
    Categories,
    Qr,
    Shipments,
    Analytics,
    Settings,
    Register,
    Logout,
}

impl NavKey {
    /// Every key in declaration order.
    pub const ALL: [NavKey; 12] = [
        NavKey::Dashboard,
        NavKey::Manage,
        NavKey::Batches,
        NavKey::Packages,
        NavKey::Products,
        NavKey::Categories,
        NavKey::Qr,
        NavKey::Shipments,
        NavKey::Analytics,
        NavKey::Settings,
        NavKey::Register,
        NavKey::Logout,
    ];

    /// Canonical lowercase identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NavKey::Dashboard => "dashboard",
            NavKey::Manage => "manage",
            NavKey::Batches => "batches",
            NavKey::Packages => "packages",
            NavKey::Products => "products",
            NavKey::Categories => "categories",
            NavKey::Qr => "qr",
            NavKey::Shipments => "shipments",
            NavKey::Analytics => "analytics",
            NavKey::Settings => "settings",
            NavKey::Register => "register",
            NavKey::Logout => "logout",
        }
    }
}

impl fmt::Display for NavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown navigation key '{0}'")]
pub struct ParseNavKeyError(pub String);

impl FromStr for NavKey {
    type Err = ParseNavKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        NavKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ParseNavKeyError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_key_from_its_display_form() {
        for key in NavKey::ALL {
            assert_eq!(key.to_string().parse::<NavKey>(), Ok(key));
        }
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(" Manage ".parse::<NavKey>(), Ok(NavKey::Manage));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = "alerts".parse::<NavKey>().unwrap_err();
        assert_eq!(err.to_string(), "unknown navigation key 'alerts'");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&NavKey::Shipments).unwrap();
        assert_eq!(json, "\"shipments\"");
        let key: NavKey = serde_json::from_str("\"qr\"").unwrap();
        assert_eq!(key, NavKey::Qr);
    }
}
