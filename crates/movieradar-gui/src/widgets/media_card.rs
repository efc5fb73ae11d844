use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use movieradar_core::card::{Card, CardCommand, Poster};
use movieradar_core::models::WatchlistEntry;

use crate::poster_cache::PosterCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Card width: poster + horizontal padding inside the card.
pub const CARD_WIDTH: f32 = style::POSTER_WIDTH + 2.0 * style::SPACE_SM;

/// Poster, clipped two-line title and a date line.
fn card_body<'a, Message: 'a>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    poster_url: Option<&str>,
    title: String,
    date: String,
) -> iced::widget::Column<'a, Message> {
    let cover = widgets::poster(
        cs,
        posters,
        poster_url,
        style::POSTER_WIDTH,
        style::POSTER_HEIGHT,
        style::RADIUS_MD,
    );

    let title_el = container(
        text(title)
            .size(style::TEXT_SM)
            .font(style::FONT_HEADING)
            .color(cs.text)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::WordOrGlyph),
    )
    .height(Length::Fixed(
        style::TEXT_SM * style::LINE_HEIGHT_NORMAL * 2.0 + 2.0,
    ))
    .clip(true);

    let date_el = text(date)
        .size(style::TEXT_XS)
        .color(cs.text_muted)
        .line_height(style::LINE_HEIGHT_LOOSE);

    column![cover, title_el, date_el]
        .spacing(style::SPACE_XS)
        .width(Length::Fixed(style::POSTER_WIDTH))
}

/// Grid card for a search or trending result.
///
/// The whole card opens the details modal. The watchlist button sits inside
/// it and captures its own clicks, so toggling never opens details.
pub fn media_card<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    card: Card,
    on_command: impl Fn(CardCommand) -> Message,
) -> Element<'a, Message> {
    let open = on_command(card.open());
    let toggle = on_command(card.toggle());
    let label = card.toggle_label();

    let poster_url = match &card.poster {
        Poster::Url(url) => Some(url.as_str()),
        Poster::Placeholder => None,
    };

    let toggle_btn = button(
        text(label)
            .size(style::TEXT_XS)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .center(),
    )
    .width(Length::Fill)
    .padding([style::SPACE_XS, style::SPACE_SM])
    .on_press(toggle);
    let toggle_btn = if card.in_watchlist {
        toggle_btn.style(theme::outline_button(cs))
    } else {
        toggle_btn.style(theme::accent_button(cs))
    };

    let body = card_body(cs, posters, poster_url, card.title, card.date)
        .push(toggle_btn)
        .padding(style::SPACE_SM)
        .width(Length::Fixed(CARD_WIDTH));

    button(container(body).style(theme::card(cs)))
        .padding(0)
        .width(Length::Fixed(CARD_WIDTH))
        .on_press(open)
        .style(theme::card_button(cs))
        .into()
}

/// Grid card for a saved watchlist entry, with watched and remove controls.
pub fn watchlist_card<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    entry: &WatchlistEntry,
    image_base: &str,
    on_open: Message,
    on_toggle_watched: Message,
    on_remove: Message,
) -> Element<'a, Message> {
    let item = &entry.item;
    let poster_url = item.poster_url(image_base);

    let (watched_icon, watched_label) = if entry.watched {
        (lucide_icons::iced::icon_circle_x(), "Unwatch")
    } else {
        (lucide_icons::iced::icon_circle_check(), "Watched")
    };

    let controls = row![
        button(
            row![
                watched_icon.size(style::TEXT_SM),
                text(watched_label).size(style::TEXT_XS),
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center),
        )
        .padding([style::SPACE_XS, style::SPACE_SM])
        .on_press(on_toggle_watched)
        .style(theme::outline_button(cs)),
        Space::new().width(Length::Fill),
        button(lucide_icons::iced::icon_x().size(style::TEXT_BASE).center())
            .padding(style::SPACE_XS)
            .on_press(on_remove)
            .style(theme::icon_button(cs)),
    ]
    .align_y(Alignment::Center);

    let mut body = card_body(
        cs,
        posters,
        poster_url.as_deref(),
        item.display_title().to_string(),
        item.display_date().to_string(),
    );
    if entry.watched {
        body = body.push(
            container(text("Watched").size(style::TEXT_XS))
                .padding([style::SPACE_XXS, style::SPACE_SM])
                .style(theme::watched_badge(cs)),
        );
    }
    let body = body
        .push(controls)
        .padding(style::SPACE_SM)
        .width(Length::Fixed(CARD_WIDTH));

    button(container(body).style(theme::card(cs)))
        .padding(0)
        .width(Length::Fixed(CARD_WIDTH))
        .on_press(on_open)
        .style(theme::card_button(cs))
        .into()
}
