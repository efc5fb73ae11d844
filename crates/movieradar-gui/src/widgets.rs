pub mod details_panel;
pub mod empty_state;
pub mod media_card;
pub mod modal;
pub mod pagination_bar;
pub mod poster;

pub use details_panel::{details_panel, DetailsActions};
pub use empty_state::empty_state;
pub use media_card::{media_card, watchlist_card};
pub use modal::modal;
pub use pagination_bar::pagination_bar;
pub use poster::poster;

use iced::widget::scrollable;
use iced::Element;

use crate::theme::{self, ColorScheme};

/// A scrollable with consistent direction and style across the application.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    cs: &ColorScheme,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(6)
                .scroller_width(4)
                .margin(2),
        ))
        .style(theme::scrollbar(cs))
}
