//! Layout and text helpers shared across components.

use ratatui::layout::{Position, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the index of the item rect containing `(x, y)`, provided the point
/// also lies within `container`.
pub fn find_target_index_by_mouse_position(container: &Rect, items: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    if !container.contains(position) {
        return None;
    }
    items.iter().position(|rect| rect.contains(position))
}

/// Truncates `text` to `max_width` display columns, appending an ellipsis
/// when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Shortens the UUID-heavy identifiers used by the sample data, keeping the
/// leading word and the first UUID block (e.g. `Batch 9b971814…`).
pub fn short_id(id: &str) -> String {
    match id.split_once(' ') {
        Some((prefix, rest)) => {
            let head = rest.split('-').next().unwrap_or(rest);
            format!("{prefix} {head}…")
        }
        None => {
            let head = id.split('-').next().unwrap_or(id);
            if head.len() < id.len() { format!("{head}…") } else { id.to_string() }
        }
    }
}
