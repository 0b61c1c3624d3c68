//! Shared types for the TrackChain dashboard.
//!
//! The navigation model ([`nav`]) and active-section resolution ([`route`])
//! are pure and synchronous so the terminal UI and the headless CLI reach the
//! same answers. The remaining modules hold the sample data and form models
//! rendered by the screens.

pub mod catalog;
pub mod effect;
pub mod nav;
pub mod registration;
pub mod route;
pub mod scan;

pub use effect::{Effect, Msg};
pub use nav::{NavEntry, NavEntryDef, NavKey, NavRow, NavState, NavTable, NavTableError, SelectOutcome};
pub use route::{DEFAULT_ROUTE, MatchMode, RouteClassifier, Router, ScreenId};
