use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};

use movieradar_core::details::{DetailsState, MediaDetails};
use movieradar_core::models::MediaItem;

use crate::poster_cache::PosterCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Callbacks the details panel can fire.
pub struct DetailsActions<Message> {
    pub close: Message,
    pub toggle_watchlist: Message,
    pub open_external: Message,
}

/// Dialog body for the details modal.
///
/// Returns `None` while the modal is closed.
pub fn details_panel<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    state: &'a DetailsState,
    in_watchlist: bool,
    actions: DetailsActions<Message>,
) -> Option<Element<'a, Message>> {
    let (item, body): (&MediaItem, Element<'a, Message>) = match state {
        DetailsState::Closed => return None,
        DetailsState::Loading(item) => (
            item,
            text("Loading details...")
                .size(style::TEXT_SM)
                .color(cs.text_muted)
                .into(),
        ),
        DetailsState::Failed(item, message) => (
            item,
            column![
                text("Failed to load details")
                    .size(style::TEXT_BASE)
                    .color(cs.danger),
                text(message.as_str())
                    .size(style::TEXT_XS)
                    .color(cs.text_faint)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            ]
            .spacing(style::SPACE_XS)
            .into(),
        ),
        DetailsState::Loaded(item, details) => (item, loaded_body(cs, posters, details)),
    };

    let title = match state {
        DetailsState::Loaded(_, details) => details.title.as_str(),
        _ => item.display_title(),
    };

    let header = row![
        text(title)
            .size(style::TEXT_XL)
            .font(style::FONT_HEADING)
            .color(cs.text)
            .line_height(style::LINE_HEIGHT_TIGHT)
            .width(Length::Fill),
        button(lucide_icons::iced::icon_x().size(style::TEXT_LG).center())
            .padding(style::SPACE_XS)
            .on_press(actions.close)
            .style(theme::icon_button(cs)),
    ]
    .spacing(style::SPACE_SM)
    .align_y(Alignment::Start);

    let watchlist_label = if in_watchlist {
        "Remove from Watchlist"
    } else {
        "Add to Watchlist"
    };
    let watchlist_btn = button(text(watchlist_label).size(style::TEXT_SM))
        .padding([style::SPACE_SM, style::SPACE_LG])
        .on_press(actions.toggle_watchlist);
    let watchlist_btn = if in_watchlist {
        watchlist_btn.style(theme::danger_button(cs))
    } else {
        watchlist_btn.style(theme::accent_button(cs))
    };

    let footer = row![
        watchlist_btn,
        button(
            row![
                lucide_icons::iced::icon_info().size(style::TEXT_SM),
                text("Open on TMDB").size(style::TEXT_SM),
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center),
        )
        .padding([style::SPACE_SM, style::SPACE_LG])
        .on_press(actions.open_external)
        .style(theme::outline_button(cs)),
    ]
    .spacing(style::SPACE_SM);

    let content = column![
        header,
        scrollable(body).height(Length::Shrink),
        footer,
    ]
    .spacing(style::SPACE_LG);

    Some(
        container(content)
            .width(Length::Fixed(style::DIALOG_WIDTH))
            .max_height(style::DIALOG_MAX_HEIGHT)
            .padding(style::SPACE_XL)
            .style(theme::dialog(cs))
            .into(),
    )
}

fn loaded_body<'a, Message: 'a>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    details: &'a MediaDetails,
) -> Element<'a, Message> {
    let section = |label: &'static str, value: &'a str| {
        column![
            text(label)
                .size(style::TEXT_XS)
                .font(style::FONT_HEADING)
                .color(cs.text_faint),
            text(value)
                .size(style::TEXT_SM)
                .color(cs.text)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .spacing(style::SPACE_XXS)
    };

    let mut info = column![].spacing(style::SPACE_MD).width(Length::Fill);

    if let Some(date) = &details.release_date {
        info = info.push(
            row![
                lucide_icons::iced::icon_calendar()
                    .size(style::TEXT_SM)
                    .color(cs.text_muted),
                text(date.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.text_muted),
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center),
        );
    }
    if let Some(ratings) = &details.ratings {
        info = info.push(
            text(ratings.as_str())
                .size(style::TEXT_SM)
                .font(style::FONT_HEADING)
                .color(cs.rating),
        );
    }
    if let Some(cast) = &details.cast {
        info = info.push(section("Cast", cast));
    }
    info = info.push(section(
        "Overview",
        details.plot.as_deref().unwrap_or("No overview available."),
    ));

    row![
        widgets::poster(
            cs,
            posters,
            details.poster_url.as_deref(),
            style::DETAIL_POSTER_WIDTH,
            style::DETAIL_POSTER_HEIGHT,
            style::RADIUS_LG,
        ),
        Space::new().width(Length::Fixed(style::SPACE_XS)),
        info,
    ]
    .spacing(style::SPACE_LG)
    .into()
}
