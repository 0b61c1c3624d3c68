//! UI rendering module for the TUI application.
//!
//! This module provides the screen host, components, theming, the event
//! loop and small layout utilities.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
