//! Color tokens for the two built-in schemes.

use iced::Color;

pub use movieradar_core::config::ThemeMode;

/// Every color the widgets draw with. Surfaces run from `sunken` (status
/// bar) up to `hover` (the brightest fill, used under the pointer).
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub sunken: Color,
    pub base: Color,
    pub rail: Color,
    pub card: Color,
    pub raised: Color,
    pub hover: Color,

    pub text: Color,
    pub text_muted: Color,
    pub text_faint: Color,
    pub line: Color,

    pub accent: Color,
    pub accent_hover: Color,
    pub accent_pressed: Color,
    pub on_accent: Color,
    /// Active nav item.
    pub accent_soft: Color,
    pub on_accent_soft: Color,
    /// Selected filter and page chips.
    pub chip: Color,
    pub on_chip: Color,

    pub danger: Color,
    pub danger_hover: Color,
    pub danger_pressed: Color,
    pub on_danger: Color,

    /// Star ratings.
    pub rating: Color,
    pub watched: Color,
    /// Dims the page behind the details dialog.
    pub backdrop: Color,
}

fn rgb(hex: u32) -> Color {
    Color::from_rgb8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

impl ColorScheme {
    /// Near-black surfaces with an amber accent.
    pub fn dark() -> Self {
        Self {
            sunken: rgb(0x0D0D10),
            base: rgb(0x131317),
            rail: rgb(0x19191E),
            card: rgb(0x1E1E24),
            raised: rgb(0x28282F),
            hover: rgb(0x393942),

            text: rgb(0xE7E5EA),
            text_muted: rgb(0xB3B0B9),
            text_faint: rgb(0x85828B),
            line: rgb(0x3E3D45),

            accent: rgb(0xF5B342),
            accent_hover: rgb(0xF8C566),
            accent_pressed: rgb(0xD8962A),
            on_accent: rgb(0x2A1A00),
            accent_soft: rgb(0x5B3F0E),
            on_accent_soft: rgb(0xFFDDAE),
            chip: rgb(0x463E32),
            on_chip: rgb(0xF0E0C8),

            danger: rgb(0xEE6A6A),
            danger_hover: rgb(0xF38686),
            danger_pressed: rgb(0xD85252),
            on_danger: rgb(0x2D0000),

            rating: rgb(0xF2CC4B),
            watched: rgb(0x6BCB8B),
            backdrop: Color::from_rgba8(0, 0, 0, 0.6),
        }
    }

    /// Warm paper surfaces with a darker amber accent for contrast.
    pub fn light() -> Self {
        Self {
            sunken: rgb(0xFFFFFF),
            base: rgb(0xFBF8F4),
            rail: rgb(0xF5F1EC),
            card: rgb(0xEFEBE5),
            raised: rgb(0xE9E5DF),
            hover: rgb(0xE0DBD3),

            text: rgb(0x1E1B17),
            text_muted: rgb(0x4E4840),
            text_faint: rgb(0x80786E),
            line: rgb(0xD2C8BB),

            accent: rgb(0x8A5A00),
            accent_hover: rgb(0x9E6A0A),
            accent_pressed: rgb(0x6E4700),
            on_accent: rgb(0xFFFFFF),
            accent_soft: rgb(0xFFDDAE),
            on_accent_soft: rgb(0x2B1A00),
            chip: rgb(0xF2E1C7),
            on_chip: rgb(0x261A07),

            danger: rgb(0xBA1A1A),
            danger_hover: rgb(0xCC2E2E),
            danger_pressed: rgb(0x9C1010),
            on_danger: rgb(0xFFFFFF),

            rating: rgb(0xB08400),
            watched: rgb(0x1E7A44),
            backdrop: Color::from_rgba8(0, 0, 0, 0.4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_unpacks_channels() {
        assert_eq!(rgb(0xFF8000), Color::from_rgb8(0xFF, 0x80, 0x00));
    }
}
