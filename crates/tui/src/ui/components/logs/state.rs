use std::collections::VecDeque;

use chrono::{DateTime, Local};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::{layout::Rect, widgets::ListState};

/// Oldest activity entries are dropped past this many.
pub const MAX_LOG_ENTRIES: usize = 500;

/// One line of the in-app activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub at: DateTime<Local>,
    pub message: String,
}

/// State for the activity log pane.
#[derive(Debug)]
pub struct LogsState {
    pub entries: VecDeque<LogLine>,
    pub is_visible: bool,
    pub list_state: ListState,
    /// Focus flag for rat-focus integration
    pub focus: FocusFlag,
    pub last_area: Rect,
}

impl Default for LogsState {
    fn default() -> Self {
        let mut state = LogsState {
            entries: VecDeque::new(),
            is_visible: false,
            list_state: ListState::default(),
            focus: FocusFlag::named("root.logs"),
            last_area: Rect::default(),
        };
        state.append("Welcome to TrackChain");
        state
    }
}

impl LogsState {
    /// Appends a message stamped with the local time and keeps the cursor on
    /// the newest entry.
    pub fn append(&mut self, message: impl Into<String>) {
        self.entries.push_back(LogLine {
            at: Local::now(),
            message: message.into(),
        });
        while self.entries.len() > MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.list_state.select(Some(self.entries.len() - 1));
    }

    pub fn toggle_visible(&mut self) -> bool {
        self.is_visible = !self.is_visible;
        if !self.is_visible {
            self.focus.set(false);
        }
        self.is_visible
    }

    pub fn move_selection(&mut self, forward: bool) {
        if self.entries.is_empty() {
            return;
        }
        let last = self.entries.len() - 1;
        let next = match self.list_state.selected() {
            Some(index) if forward => (index + 1).min(last),
            Some(index) => index.saturating_sub(1),
            None => last,
        };
        self.list_state.select(Some(next));
    }
}

impl HasFocus for LogsState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_caps_entries_and_follows_the_tail() {
        let mut logs = LogsState::default();
        for index in 0..MAX_LOG_ENTRIES + 10 {
            logs.append(format!("entry {index}"));
        }
        assert_eq!(logs.entries.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs.entries.back().map(|line| line.message.as_str()), Some("entry 509"));
        assert_eq!(logs.list_state.selected(), Some(MAX_LOG_ENTRIES - 1));
    }

    #[test]
    fn hiding_the_pane_drops_its_focus() {
        let mut logs = LogsState::default();
        assert!(logs.toggle_visible());
        logs.focus.set(true);
        assert!(!logs.toggle_visible());
        assert!(!logs.focus.get());
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut logs = LogsState::default();
        logs.append("second");
        logs.move_selection(true);
        assert_eq!(logs.list_state.selected(), Some(1));
        logs.move_selection(false);
        logs.move_selection(false);
        assert_eq!(logs.list_state.selected(), Some(0));
    }
}
