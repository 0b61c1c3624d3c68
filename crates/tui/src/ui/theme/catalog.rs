use super::{Ansi256Theme, DraculaTheme, NordTheme, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Ordered list of selectable themes; Ctrl+T cycles in this order.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        aliases: &["dracula"],
        is_ansi_fallback: false,
        factory: || Box::new(DraculaTheme::new()),
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        aliases: &["nord"],
        is_ansi_fallback: false,
        factory: || Box::new(NordTheme::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        aliases: &["ansi256", "ansi", "256"],
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
];

/// Locate a definition by id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(name) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

/// Definition following `id` in catalog order, wrapping around.
///
/// ANSI fallbacks are skipped unless `include_ansi` is set.
pub fn next_after(id: &str, include_ansi: bool) -> &'static ThemeDefinition {
    let candidates: Vec<&'static ThemeDefinition> = THEME_DEFINITIONS
        .iter()
        .filter(|definition| include_ansi || !definition.is_ansi_fallback)
        .collect();
    let position = candidates.iter().position(|definition| definition.id == id);
    match position {
        Some(index) => candidates[(index + 1) % candidates.len()],
        None => candidates[0],
    }
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.is_ansi_fallback)
        .expect("ansi256 theme registered")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_ids_and_aliases_case_insensitively() {
        assert_eq!(resolve("NORD").map(|definition| definition.id), Some("nord"));
        assert_eq!(resolve("256").map(|definition| definition.id), Some("ansi256"));
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn cycling_wraps_and_skips_ansi_on_truecolor_terminals() {
        assert_eq!(next_after("dracula", false).id, "nord");
        assert_eq!(next_after("nord", false).id, "dracula");
        assert_eq!(next_after("nord", true).id, "ansi256");
        assert_eq!(next_after("unknown", false).id, "dracula");
    }
}
