//! `.style()` closures for the widgets this app draws.
//!
//! Each function copies the colors it needs out of the scheme, so the
//! returned closure owns its data and outlives the borrow.

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::style;

use super::ColorScheme;

fn fill(color: Color) -> Option<Background> {
    Some(Background::Color(color))
}

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        ..Border::default()
    }
}

fn outlined(color: Color, radius: f32) -> Border {
    Border {
        color,
        width: 1.0,
        radius: radius.into(),
    }
}

fn drop_shadow(alpha: f32, y: f32, blur: f32) -> Shadow {
    Shadow {
        color: Color { a: alpha, ..Color::BLACK },
        offset: Vector::new(0.0, y),
        blur_radius: blur,
    }
}

/// Shared shape of the filled buttons: idle, hovered and pressed fills.
fn solid(
    idle: Color,
    hovered: Color,
    pressed: Color,
    text_color: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| button::Style {
        background: fill(match status {
            button::Status::Hovered => hovered,
            button::Status::Pressed => pressed,
            _ => idle,
        }),
        text_color,
        border: rounded(style::RADIUS_MD),
        ..Default::default()
    }
}

/// Transparent at rest, `hover` fill and brighter text under the pointer.
fn quiet(
    cs: &ColorScheme,
    border: Border,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (hover, text, muted) = (cs.hover, cs.text, cs.text_muted);
    move |_theme, status| {
        let hovered = matches!(status, button::Status::Hovered);
        button::Style {
            background: hovered.then(|| Background::Color(hover)),
            text_color: if hovered { text } else { muted },
            border,
            ..Default::default()
        }
    }
}

pub fn status_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let (bg, text) = (cs.sunken, cs.text_muted);
    move |_theme| container::Style {
        text_color: Some(text),
        background: fill(bg),
        ..Default::default()
    }
}

pub fn nav_rail(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.rail;
    move |_theme| container::Style {
        background: fill(bg),
        ..Default::default()
    }
}

/// Discover / Watchlist entries; the active page gets the soft accent pill.
pub fn nav_item(active: bool, cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (pill, on_pill) = (cs.accent_soft, cs.on_accent_soft);
    let idle = quiet(cs, rounded(style::RADIUS_XL));
    move |theme, status| {
        if active {
            button::Style {
                background: fill(pill),
                text_color: on_pill,
                border: rounded(style::RADIUS_XL),
                ..Default::default()
            }
        } else {
            idle(theme, status)
        }
    }
}

/// Watchlist filters and page numbers. A selected chip is filled and
/// stays filled while disabled.
pub fn chip(selected: bool, cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (bg, on_bg) = (cs.chip, cs.on_chip);
    let idle = quiet(cs, outlined(cs.line, style::CHIP_RADIUS));
    move |theme, status| {
        if selected {
            button::Style {
                background: fill(bg),
                text_color: on_bg,
                border: rounded(style::CHIP_RADIUS),
                ..Default::default()
            }
        } else {
            idle(theme, status)
        }
    }
}

/// "Add to Watchlist".
pub fn accent_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    solid(cs.accent, cs.accent_hover, cs.accent_pressed, cs.on_accent)
}

/// "Remove from Watchlist" inside the details dialog.
pub fn danger_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    solid(cs.danger, cs.danger_hover, cs.danger_pressed, cs.on_danger)
}

/// Secondary actions: card toggles for saved titles, "Open on TMDB".
pub fn outline_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    quiet(cs, outlined(cs.line, style::RADIUS_MD))
}

/// Round, borderless icon buttons (clear search, close dialog, remove).
pub fn icon_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    quiet(cs, rounded(style::RADIUS_FULL))
}

/// The text field inside [`search_bar`], which draws the frame.
pub fn search_input(cs: &ColorScheme) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let (value, icon, placeholder, selection) = (cs.text, cs.text_muted, cs.text_faint, cs.accent);
    move |_theme, _status| text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border::default(),
        icon,
        placeholder,
        value,
        selection: Color { a: 0.4, ..selection },
    }
}

pub fn search_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let (bg, line) = (cs.rail, cs.line);
    move |_theme| container::Style {
        background: fill(bg),
        border: outlined(line, style::RADIUS_FULL),
        ..Default::default()
    }
}

/// Frame behind a poster image, also shown alone as the placeholder.
pub fn poster_frame(cs: &ColorScheme, radius: f32) -> impl Fn(&Theme) -> container::Style {
    let (bg, line) = (cs.raised, cs.line);
    move |_theme| container::Style {
        background: fill(bg),
        border: outlined(line, radius),
        ..Default::default()
    }
}

/// The details dialog.
pub fn dialog(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let (bg, line) = (cs.raised, cs.line);
    move |_theme| container::Style {
        background: fill(bg),
        border: outlined(line, style::RADIUS_XL),
        shadow: drop_shadow(0.3, 8.0, 24.0),
        ..Default::default()
    }
}

/// Page-wide dimming layer behind the dialog.
pub fn backdrop(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let color = cs.backdrop;
    move |_theme| container::Style {
        background: fill(color),
        ..Default::default()
    }
}

pub fn card(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let (bg, line) = (cs.card, cs.line);
    move |_theme| container::Style {
        background: fill(bg),
        border: outlined(line, style::RADIUS_MD),
        shadow: drop_shadow(0.12, 2.0, 6.0),
        ..Default::default()
    }
}

/// Clickable layer over a [`card`]: a translucent wash on hover.
pub fn card_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (wash, text) = (Color { a: 0.5, ..cs.raised }, cs.text);
    move |_theme, status| button::Style {
        background: matches!(status, button::Status::Hovered).then(|| Background::Color(wash)),
        text_color: text,
        border: rounded(style::RADIUS_MD),
        ..Default::default()
    }
}

pub fn watched_badge(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let green = cs.watched;
    move |_theme| container::Style {
        text_color: Some(green),
        background: fill(Color { a: 0.12, ..green }),
        border: outlined(Color { a: 0.5, ..green }, style::RADIUS_FULL),
        ..Default::default()
    }
}

/// Thin overlay scrollbar that firms up while hovered or dragged.
pub fn scrollbar(cs: &ColorScheme) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    let (text, accent) = (cs.text, cs.accent);
    move |_theme, status| {
        let thumb = match status {
            scrollable::Status::Dragged { .. } => Color { a: 0.7, ..accent },
            scrollable::Status::Hovered {
                is_vertical_scrollbar_hovered: true,
                ..
            } => Color { a: 0.5, ..text },
            scrollable::Status::Hovered { .. } => Color { a: 0.25, ..text },
            _ => Color { a: 0.15, ..text },
        };
        let rail = scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(thumb),
                border: rounded(style::RADIUS_FULL),
            },
        };
        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll: scrollable::AutoScroll {
                background: Background::Color(Color::TRANSPARENT),
                border: Border::default(),
                shadow: Shadow::default(),
                icon: text,
            },
        }
    }
}
