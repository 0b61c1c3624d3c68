//! # TrackChain terminal dashboard
//!
//! A ratatui front end for the TrackChain supply-chain dashboard: a
//! hierarchical navigation rail whose highlighted entry follows the current
//! route, sample-data screens for batches, packages, products, categories
//! and shipments, a simulated QR scanner and an organization registration
//! form.
//!
//! ## Architecture
//!
//! All state lives on `App`. Components handle input for that state and
//! render it, returning `Effect`s that the runtime applies on the single
//! event-loop task.

mod app;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use trackchain_util::{ResolvedConfig, UserPreferences};

pub use app::{COLLAPSED_RAIL_BELOW, HORIZONTAL_RAIL_BELOW};

/// Runs the TUI until the user quits.
///
/// # Errors
///
/// Fails when the terminal cannot be put into raw mode or the alternate
/// screen, or when drawing fails.
pub async fn run(config: ResolvedConfig, preferences: Arc<UserPreferences>) -> Result<()> {
    let app = app::App::new(config, preferences);
    ui::runtime::run_app(app).await
}
