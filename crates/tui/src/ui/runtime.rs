//! Runtime: event loop and input routing for the TUI.
//!
//! - Owns the terminal lifecycle (alternate screen, raw mode, mouse capture).
//! - Runs a single `tokio::select!` loop over terminal input, a ticker and
//!   Ctrl+C.
//! - Routes input to [`MainView`] and applies the returned [`Effect`]s.
//!
//! Ticking is fast only while the scanner animates and slow otherwise, so
//! the clock in the header stays current without burning CPU.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{info, warn};
use trackchain_types::{Effect, Msg};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

type Tui = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Forwards `crossterm` events over a channel from a dedicated task.
///
/// `poll()` and `read()` stay on the same task; mouse moves are throttled
/// to one per 16 ms.
fn spawn_input_task() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::task::spawn_blocking(move || {
        let sixteen_ms = Duration::from_millis(16);
        let mut last_mouse_move = Instant::now();
        loop {
            match event::poll(sixteen_ms) {
                Ok(true) => {}
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                    continue;
                }
                Err(error) => {
                    warn!("Failed to poll terminal events: {}", error);
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    let is_mouse_move = event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved);
                    if is_mouse_move {
                        if last_mouse_move.elapsed() < sixteen_ms {
                            continue;
                        }
                        last_mouse_move = Instant::now();
                    }
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!("Failed to read terminal event: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Rebuilds focus for the current structure, then draws a frame.
fn render(terminal: &mut Tui, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = FocusBuilder::rebuild_for(app, Some(old_focus));
    if app.focus.focused().is_none() {
        main_view.restore_focus(app);
    }
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// What the loop should do after a batch of effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Applies effects in order. Effects never produce further effects.
fn process_effects(app: &mut App, main_view: &mut MainView, effects: Vec<Effect>) -> Flow {
    for effect in effects {
        match effect {
            Effect::Navigate { key, path } => {
                if app.navigate(key, &path) {
                    main_view.set_current_screen(app.router.screen());
                }
            }
            Effect::ToggleRail => app.toggle_rail(),
            Effect::CycleTheme => app.cycle_theme(),
            Effect::ToggleLogs => app.toggle_logs(),
            Effect::Log(message) => app.logs.append(message),
            Effect::Quit => return Flow::Exit,
        }
    }
    Flow::Continue
}

/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal.
pub async fn run_app(mut app: App) -> Result<()> {
    let mut input_receiver = spawn_input_task();
    let mut main_view = MainView::new(app.router.screen());
    let mut terminal = setup_terminal()?;

    if let Ok((width, height)) = crossterm::terminal::size() {
        app.update(&Msg::Resize(width, height));
    }

    let fast_interval = Duration::from_millis(100);
    let idle_interval = Duration::from_millis(1000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let result = async {
        render(&mut terminal, &mut app, &mut main_view)?;
        loop {
            let target_interval = if app.qr.is_scanning() { fast_interval } else { idle_interval };
            if target_interval != current_interval {
                current_interval = target_interval;
                ticker = time::interval(current_interval);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            }

            let effects = tokio::select! {
                maybe_event = input_receiver.recv() => {
                    let Some(event) = maybe_event else { break };
                    if let Event::Key(key_event) = &event
                        && key_event.code == KeyCode::Char('c')
                        && key_event.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }
                    handle_input_event(&mut app, &mut main_view, event)
                }
                _ = ticker.tick() => main_view.handle_message(&mut app, Msg::Tick),
                _ = signal::ctrl_c() => break,
            };

            if process_effects(&mut app, &mut main_view, effects) == Flow::Exit {
                break;
            }
            render(&mut terminal, &mut app, &mut main_view)?;
        }
        Ok::<(), anyhow::Error>(())
    }
    .await;

    cleanup_terminal(&mut terminal)?;
    info!("terminal restored");
    result
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use trackchain_types::{NavKey, ScreenId};
    use trackchain_util::{ResolvedConfig, UserPreferences};

    use super::*;

    fn app() -> App {
        App::new(ResolvedConfig::default(), Arc::new(UserPreferences::ephemeral()))
    }

    #[test]
    fn navigate_effects_replace_the_route_and_the_screen() {
        let mut app = app();
        let mut view = MainView::new(app.router.screen());
        let flow = process_effects(
            &mut app,
            &mut view,
            vec![Effect::Navigate {
                key: NavKey::Batches,
                path: "/(tabs)/manage".to_string(),
            }],
        );
        assert_eq!(flow, Flow::Continue);
        assert_eq!(app.router.current(), "/(tabs)/manage");
        assert_eq!(view.current_screen, ScreenId::Manage);
        assert_eq!(app.active_key(), NavKey::Manage);
    }

    #[test]
    fn quit_stops_processing_remaining_effects() {
        let mut app = app();
        let mut view = MainView::new(app.router.screen());
        let before = app.logs.entries.len();
        let flow = process_effects(&mut app, &mut view, vec![Effect::Quit, Effect::Log("ignored".into())]);
        assert_eq!(flow, Flow::Exit);
        assert_eq!(app.logs.entries.len(), before);
    }

    #[test]
    fn log_effects_land_in_the_activity_log() {
        let mut app = app();
        let mut view = MainView::new(app.router.screen());
        process_effects(&mut app, &mut view, vec![Effect::ToggleLogs, Effect::Log("Scanner launched".into())]);
        assert!(app.logs.is_visible);
        assert_eq!(app.logs.entries.back().map(|line| line.message.as_str()), Some("Scanner launched"));
    }
}
