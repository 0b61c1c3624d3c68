use tracing::debug;

use super::{DEFAULT_ROUTE, ScreenId};

/// Holds the current route.
///
/// Navigation replaces the current path; there is no back stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: String,
}

impl Router {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        let current = if initial.trim().is_empty() {
            DEFAULT_ROUTE.to_string()
        } else {
            initial
        };
        Self { current }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn screen(&self) -> ScreenId {
        ScreenId::from_path(&self.current)
    }

    /// Replaces the current path. Returns `true` when the path changed.
    pub fn replace(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if path == self.current {
            return false;
        }
        debug!(from = %self.current, to = %path, "route replaced");
        self.current = path;
        true
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(DEFAULT_ROUTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_default_route() {
        let router = Router::default();
        assert_eq!(router.current(), "/(tabs)");
        assert_eq!(router.screen(), ScreenId::Dashboard);
        assert_eq!(Router::new("  ").current(), "/(tabs)");
    }

    #[test]
    fn replace_swaps_the_current_path() {
        let mut router = Router::default();
        assert!(router.replace("/(tabs)/packages"));
        assert_eq!(router.screen(), ScreenId::Packages);
        assert!(router.replace("/(tabs)/qr"));
        assert_eq!(router.current(), "/(tabs)/qr");
    }

    #[test]
    fn replacing_with_the_same_path_reports_no_change() {
        let mut router = Router::new("/(tabs)/manage");
        assert!(!router.replace("/(tabs)/manage"));
        assert_eq!(router.screen(), ScreenId::Manage);
    }
}
