/// Single-column glyph drawn for an icon token.
///
/// Tokens are opaque names from the navigation table; unknown tokens get a
/// neutral bullet so custom tables still render.
pub fn glyph_for(icon: &str) -> &'static str {
    match icon.trim_end_matches("-outline") {
        "apps" | "grid" => "▦",
        "create" => "✎",
        "briefcase" => "▤",
        "cube" => "◫",
        "pricetags" => "◈",
        "qr-code" => "▣",
        "car" => "⇄",
        "analytics" => "∿",
        "settings" => "⚙",
        "person-add" => "+",
        "log-out" => "⎋",
        _ => "•",
    }
}

/// Expansion indicator for expandable rows.
pub fn chevron(open: bool) -> &'static str {
    if open { "▾" } else { "▸" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_have_dedicated_glyphs() {
        assert_eq!(glyph_for("qr-code-outline"), "▣");
        assert_eq!(glyph_for("apps-outline"), glyph_for("apps"));
        assert_eq!(glyph_for("rocket-outline"), "•");
    }
}
