//! Component system for the TrackChain TUI.
//!
//! Components are self-contained UI elements. Their state lives on [`App`]
//! so that focus building and effect processing can see it; the component
//! itself only handles events for that state and renders it.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect, text::Span};
use trackchain_types::{Effect, Msg};

use crate::app::App;

/// A UI component with its own event handling and rendering.
///
/// Handlers never mutate routing or global UI state directly. They return
/// [`Effect`]s which the runtime applies after the handler completes.
pub(crate) trait Component {
    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events. Components hit-test against their last rendered areas.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Rendering may record layout (areas for hit testing) on the state but
    /// must not change what the component shows.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hints bar while the component has focus.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Splits `area` into the sub-areas the component renders into.
    fn get_preferred_layout(&self, _app: &App, _area: Rect) -> Vec<Rect> {
        Vec::new()
    }
}
