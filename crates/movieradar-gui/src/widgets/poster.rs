use iced::widget::{container, image};
use iced::{ContentFit, Element, Length};

use crate::poster_cache::{PosterCache, PosterState};
use crate::theme::{self, ColorScheme};

/// Poster at a fixed size. Titles without a poster path, and posters still
/// downloading or failed, show a film icon in the same frame instead.
pub fn poster<'a, Message: 'a>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    url: Option<&str>,
    width: f32,
    height: f32,
    radius: f32,
) -> Element<'a, Message> {
    let cached = match url.and_then(|u| posters.get(u)) {
        Some(PosterState::Loaded(path)) => Some(path),
        _ => None,
    };

    let content: Element<'a, Message> = match cached {
        Some(path) => image(path.as_path())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .border_radius(radius)
            .into(),
        None => lucide_icons::iced::icon_film()
            .size(width / 4.0)
            .color(cs.text_faint)
            .into(),
    };

    container(content)
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(theme::poster_frame(cs, radius))
        .into()
}
