//! Hierarchical navigation menu model.
//!
//! - [`NavKey`]: closed set of entry identifiers.
//! - [`NavTable`]: validated two-level tree of entries (roots own children).
//! - [`NavState`]: per-rail expansion state, visibility filtering, and
//!   selection handling.

mod key;
mod state;
mod table;

pub use key::{NavKey, ParseNavKeyError};
pub use state::{DEFAULT_OPEN_PARENTS, NavDepth, NavRow, NavState, OpenParents, SelectOutcome, visible_rows};
pub use table::{NavEntry, NavEntryDef, NavItemRef, NavRoot, NavTable, NavTableError, builtin_defs};
