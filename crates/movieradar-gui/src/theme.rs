//! Tonal dark/light palettes with a warm amber accent.

mod catalog;
mod colors;

pub use catalog::*;
pub use colors::*;

use iced::Theme;

/// Resolve `ThemeMode::System` to a concrete Dark or Light.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        },
        other => other,
    }
}

/// Color scheme for an already resolved mode. Dark doubles as the fallback.
pub fn scheme_for(mode: ThemeMode) -> ColorScheme {
    match mode {
        ThemeMode::Light => ColorScheme::light(),
        _ => ColorScheme::dark(),
    }
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "MovieRadar",
        Palette {
            background: cs.base,
            text: cs.text,
            primary: cs.accent,
            success: cs.watched,
            warning: cs.rating,
            danger: cs.danger,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes_are_kept() {
        assert_eq!(resolve_mode(ThemeMode::Dark), ThemeMode::Dark);
        assert_eq!(resolve_mode(ThemeMode::Light), ThemeMode::Light);
        assert_ne!(resolve_mode(ThemeMode::System), ThemeMode::System);
    }

    #[test]
    fn test_scheme_for_mode() {
        let light = scheme_for(ThemeMode::Light);
        let dark = scheme_for(ThemeMode::Dark);
        assert!(light.surface.r > dark.surface.r);
    }
}
