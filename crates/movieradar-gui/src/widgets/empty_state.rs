use iced::widget::{column, container, text, Text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::ColorScheme;

const ICON_SIZE: f32 = 40.0;

/// Placeholder for a grid with nothing to show: a large faint icon over a
/// headline and a hint.
pub fn empty_state<'a, Message: 'a>(
    cs: &ColorScheme,
    icon: Text<'a>,
    headline: &'a str,
    hint: &'a str,
) -> Element<'a, Message> {
    container(
        column![
            icon.size(ICON_SIZE).color(cs.text_faint),
            text(headline)
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .color(cs.text_muted)
                .line_height(style::LINE_HEIGHT_TIGHT),
            text(hint)
                .size(style::TEXT_SM)
                .color(cs.text_faint)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .spacing(style::SPACE_MD)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .padding(style::SPACE_2XL)
    .into()
}
