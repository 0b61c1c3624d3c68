//! Shared state and rendering for the filterable sample-data tables.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::ui::theme::{Theme, theme_helpers as th};

/// What a table key press changed, so the screen can log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKeyOutcome {
    Ignored,
    Handled,
    /// The detail row for this filtered index was opened or closed.
    DetailToggled { index: usize, open: bool },
}

/// Cursor, filter and detail expansion for one table screen.
///
/// Indices are positions in the filtered rows; editing the filter resets
/// the cursor and closes any open detail row.
#[derive(Debug, Default, Clone)]
pub struct TableViewState {
    pub filter: String,
    pub is_filtering: bool,
    pub expanded: Option<usize>,
    pub table_state: TableState,
}

impl TableViewState {
    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Clamps the cursor to `row_count` rows, selecting the first row when
    /// nothing is selected yet.
    pub fn clamp(&mut self, row_count: usize) {
        let selected = match (row_count, self.table_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (count, Some(index)) => Some(index.min(count - 1)),
        };
        self.table_state.select(selected);
        if self.expanded.is_some_and(|index| index >= row_count) {
            self.expanded = None;
        }
    }

    fn reset_after_filter_change(&mut self) {
        self.expanded = None;
        self.table_state.select(Some(0));
    }

    /// Applies a key press against a table currently showing `row_count`
    /// filtered rows. `expandable` enables Enter to toggle detail rows.
    pub fn handle_key(&mut self, key: KeyEvent, row_count: usize, expandable: bool) -> TableKeyOutcome {
        if self.is_filtering {
            match key.code {
                KeyCode::Esc => {
                    self.is_filtering = false;
                    self.filter.clear();
                    self.reset_after_filter_change();
                }
                KeyCode::Enter => self.is_filtering = false,
                KeyCode::Backspace => {
                    self.filter.pop();
                    self.reset_after_filter_change();
                }
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.filter.push(ch);
                    self.reset_after_filter_change();
                }
                _ => return TableKeyOutcome::Ignored,
            }
            return TableKeyOutcome::Handled;
        }

        match key.code {
            KeyCode::Char('/') => {
                self.is_filtering = true;
                TableKeyOutcome::Handled
            }
            KeyCode::Esc if !self.filter.is_empty() => {
                self.filter.clear();
                self.reset_after_filter_change();
                TableKeyOutcome::Handled
            }
            KeyCode::Down | KeyCode::Char('j') if row_count > 0 => {
                let next = self.selected().map_or(0, |index| (index + 1).min(row_count - 1));
                self.table_state.select(Some(next));
                TableKeyOutcome::Handled
            }
            KeyCode::Up | KeyCode::Char('k') if row_count > 0 => {
                let next = self.selected().map_or(0, |index| index.saturating_sub(1));
                self.table_state.select(Some(next));
                TableKeyOutcome::Handled
            }
            KeyCode::Enter if expandable => match self.selected().filter(|index| *index < row_count) {
                Some(index) => {
                    let open = self.expanded != Some(index);
                    self.expanded = open.then_some(index);
                    TableKeyOutcome::DetailToggled { index, open }
                }
                None => TableKeyOutcome::Ignored,
            },
            _ => TableKeyOutcome::Ignored,
        }
    }
}

/// Everything a table screen draws besides its state.
pub struct TableScreen<'a> {
    pub title: &'a str,
    pub headers: &'a [&'static str],
    pub widths: &'a [Constraint],
    pub rows: Vec<Vec<String>>,
    /// Lines of the open detail panel, if any.
    pub detail: Option<Vec<Line<'a>>>,
}

/// Renders a bordered table with an optional filter line and detail panel.
pub fn render_table_screen(
    frame: &mut Frame,
    area: Rect,
    theme: &dyn Theme,
    focused: bool,
    state: &mut TableViewState,
    screen: TableScreen<'_>,
) {
    state.clamp(screen.rows.len());
    let title = format!("{} ({})", screen.title, screen.rows.len());
    let block = th::block(theme, Some(title.as_str()), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let show_filter = state.is_filtering || !state.filter.is_empty();
    let detail_height = screen
        .detail
        .as_ref()
        .map_or(0, |lines| u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2));
    let [filter_area, table_area, detail_area] = Layout::vertical([
        Constraint::Length(u16::from(show_filter)),
        Constraint::Min(1),
        Constraint::Length(detail_height),
    ])
    .areas(inner);

    if show_filter {
        let cursor = if state.is_filtering { "▏" } else { "" };
        let line = Line::from(vec![
            Span::styled("Search: ", theme.text_muted_style()),
            Span::styled(format!("{}{cursor}", state.filter), theme.text_primary_style()),
        ]);
        frame.render_widget(Paragraph::new(line), filter_area);
    }

    let header = Row::new(screen.headers.iter().map(|title| Cell::from(*title))).style(th::table_header_row_style(theme));
    let rows = screen
        .rows
        .into_iter()
        .enumerate()
        .map(|(index, cells)| Row::new(cells).style(th::table_row_style(theme, index)));
    let table = Table::new(rows, screen.widths.to_vec())
        .header(header)
        .row_highlight_style(th::table_selected_style(theme))
        .highlight_symbol("› ");
    frame.render_stateful_widget(table, table_area, &mut state.table_state);

    if let Some(lines) = screen.detail {
        let detail = Paragraph::new(lines).block(th::block(theme, Some("Details"), false));
        frame.render_widget(detail, detail_area);
    }
}

/// Hints shared by every table screen.
pub const TABLE_HINTS: &[(&str, &str)] = &[(" ↑/↓", " Move "), (" /", " Search "), (" Esc", " Clear ")];
