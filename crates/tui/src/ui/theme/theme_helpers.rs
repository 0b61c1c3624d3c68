use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Background style for the entire header row to avoid gaps between columns.
pub fn table_header_row_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default()
        .bg(theme.roles().surface_muted)
        .fg(theme.roles().text_secondary)
        .add_modifier(Modifier::BOLD)
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let dr = (r as f32 * f).round().clamp(0.0, 255.0) as u8;
            let dg = (g as f32 * f).round().clamp(0.0, 255.0) as u8;
            let db = (b as f32 * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(dr, dg, db)
        }
        other => other,
    }
}

/// Row style for a given row index, alternating between slightly darker
/// surfaces without dimming the text.
pub fn table_row_style<T: Theme + ?Sized>(theme: &T, row_index: usize) -> Style {
    let ThemeRoles {
        surface,
        surface_muted,
        text,
        ..
    } = *theme.roles();
    let bg = if row_index % 2 == 0 {
        darken_rgb(surface, 0.80)
    } else {
        darken_rgb(surface_muted, 0.70)
    };
    Style::default().bg(bg).fg(text)
}

/// Style for a selected row.
pub fn table_selected_style<T: Theme + ?Sized>(theme: &T) -> Style {
    theme.selection_style().add_modifier(Modifier::BOLD)
}

/// Style for a navigation row. The active entry is highlighted; keyboard
/// focus adds an accent foreground.
pub fn nav_row_style<T: Theme + ?Sized>(theme: &T, is_active: bool, is_focused: bool) -> Style {
    let mut style = if is_active {
        theme.selection_style().add_modifier(Modifier::BOLD)
    } else {
        theme.text_primary_style()
    };
    if is_focused {
        style = style.fg(theme.roles().focus).add_modifier(Modifier::UNDERLINED);
    }
    style
}

/// Style for input fields; caller sets the block border based on focus.
pub fn input_style<T: Theme + ?Sized>(theme: &T, valid: bool, focused: bool) -> Style {
    let ThemeRoles { surface, text, error, .. } = *theme.roles();
    let mut style = Style::default().bg(surface).fg(text);
    if !valid {
        style = style.fg(error);
    }
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// Secondary button style (outline-like, rely on border color in Block).
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, enabled: bool, selected: bool) -> Style {
    if !enabled {
        return theme.text_muted_style();
    }
    let ThemeRoles {
        accent_secondary,
        selection_bg,
        ..
    } = *theme.roles();
    let style = Style::default().fg(accent_secondary);
    if selected { style.bg(selection_bg) } else { style }
}

/// Badge/tag style (filled accent, readable text).
pub fn badge_style<T: Theme + ?Sized>(theme: &T, color: Color) -> Style {
    Style::default()
        .bg(color)
        .fg(theme.roles().background)
        .add_modifier(Modifier::BOLD)
}

/// Renders a standard button.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, theme: &T, is_enabled: bool, is_focused: bool) {
    let border_style = if is_enabled {
        theme.border_style(is_focused)
    } else {
        theme.text_muted_style()
    };
    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .padding(Padding::horizontal(1)),
            )
            .style(button_secondary_style(theme, is_enabled, is_focused)),
        area,
    );
}

/// Builds `key description` hint pairs for the hints bar.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;

    #[test]
    fn darken_scales_rgb_and_ignores_indexed_colors() {
        assert_eq!(darken_rgb(Color::Rgb(100, 50, 10), 0.5), Color::Rgb(50, 25, 5));
        assert_eq!(darken_rgb(Color::Indexed(12), 0.5), Color::Indexed(12));
    }

    #[test]
    fn hint_spans_alternate_key_and_description() {
        let theme = DraculaTheme::new();
        let spans = build_hint_spans(&theme, &[("Enter", " Select "), ("q", " Quit ")]);
        let text: Vec<&str> = spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, vec!["Enter", " Select ", "q", " Quit "]);
    }

    #[test]
    fn active_nav_rows_use_the_selection_colors() {
        let theme = DraculaTheme::new();
        let style = nav_row_style(&theme, true, false);
        assert_eq!(style.bg, Some(theme.roles().selection_bg));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
