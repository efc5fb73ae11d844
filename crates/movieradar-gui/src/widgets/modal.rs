use iced::widget::{center, mouse_area, opaque, stack};
use iced::Element;

use crate::theme::{self, ColorScheme};

/// Layer `dialog` over `base`, dimming the page behind it.
///
/// The dimmed layer swallows all input meant for the page. A press on it
/// publishes `on_dismiss`; presses inside the dialog stay with the dialog.
/// Escape is handled by [`crate::subscription::dismiss_keys`].
pub fn modal<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let backdrop = center(opaque(dialog)).style(theme::backdrop(cs));

    stack![base.into(), opaque(mouse_area(backdrop).on_press(on_dismiss))].into()
}
