use iced::widget::{button, row, text};
use iced::{Alignment, Element, Length};

use movieradar_core::pagination::PageButton;

use crate::style;
use crate::theme::{self, ColorScheme};

/// Row of page buttons. The current page renders selected and disabled.
pub fn pagination_bar<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    buttons: &[PageButton],
    on_select: impl Fn(u32) -> Message,
) -> Element<'a, Message> {
    let chips = buttons.iter().map(|b| {
        button(
            text(b.page.to_string())
                .size(style::TEXT_SM)
                .line_height(style::LINE_HEIGHT_NORMAL)
                .center(),
        )
        .height(Length::Fixed(style::CHIP_HEIGHT))
        .width(Length::Fixed(style::CHIP_HEIGHT + style::SPACE_SM))
        .on_press_maybe(b.is_enabled().then(|| on_select(b.page)))
        .style(theme::chip(b.current, cs))
        .into()
    });

    row(chips)
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center)
        .into()
}
