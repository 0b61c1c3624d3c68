use crate::nav::NavKey;

/// Messages delivered to the application from the runtime loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (e.g., scan animation)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
}

/// Side effects requested by components.
///
/// Components never mutate routing or global UI state directly; they return
/// effects and the runtime applies them in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the current route
    Navigate { key: NavKey, path: String },
    /// Collapse or expand the navigation rail
    ToggleRail,
    /// Switch to the next theme in the catalog
    CycleTheme,
    /// Show or hide the activity log pane
    ToggleLogs,
    /// Append a line to the activity log
    Log(String),
    /// Leave the application
    Quit,
}
