use iced::widget::{button, column, container, row, rule, text};
use iced::{Alignment, Element, Length};

use movieradar_core::card::CardCommand;
use movieradar_core::models::{MediaItem, WatchlistEntry};
use movieradar_core::watchlist::WatchlistStore;

use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Which entries the watchlist page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchFilter {
    #[default]
    All,
    ToWatch,
    Watched,
}

impl WatchFilter {
    pub const ALL: &[WatchFilter] = &[Self::All, Self::ToWatch, Self::Watched];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::ToWatch => "To watch",
            Self::Watched => "Watched",
        }
    }

    pub fn matches(self, entry: &WatchlistEntry) -> bool {
        match self {
            Self::All => true,
            Self::ToWatch => !entry.watched,
            Self::Watched => entry.watched,
        }
    }
}

/// Watchlist screen state. Entries are read from the store on every view.
#[derive(Debug, Default)]
pub struct Watchlist {
    filter: WatchFilter,
    image_base: String,
}

/// Messages handled by the Watchlist screen.
#[derive(Debug, Clone)]
pub enum Message {
    FilterChanged(WatchFilter),
    Open(MediaItem),
    ToggleWatched(MediaItem),
    Remove(MediaItem),
}

impl Watchlist {
    pub fn new(image_base: impl Into<String>) -> Self {
        Self {
            filter: WatchFilter::default(),
            image_base: image_base.into(),
        }
    }

    /// Handle a watchlist message, returning an Action for the app router.
    pub fn update(&mut self, msg: Message, store: Option<&WatchlistStore>) -> Action {
        match msg {
            Message::FilterChanged(filter) => {
                self.filter = filter;
                Action::None
            }
            Message::Open(item) => Action::Card(CardCommand::OpenDetails(item)),
            Message::ToggleWatched(item) => {
                let Some(store) = store else {
                    return Action::SetStatus(unavailable());
                };
                let title = item.display_title().to_string();
                match store.toggle_watched(&item) {
                    Ok(true) => {
                        let watched = store
                            .list()
                            .iter()
                            .any(|e| e.item.same_identity(&item) && e.watched);
                        Action::SetStatus(if watched {
                            format!("Marked \u{201C}{title}\u{201D} as watched")
                        } else {
                            format!("Marked \u{201C}{title}\u{201D} as not watched")
                        })
                    }
                    Ok(false) => Action::None,
                    Err(e) => {
                        tracing::error!(error = %e, "failed to update watchlist");
                        Action::SetStatus(format!("Failed to update watchlist: {e}"))
                    }
                }
            }
            Message::Remove(item) => {
                let Some(store) = store else {
                    return Action::SetStatus(unavailable());
                };
                match store.remove(&item) {
                    Ok(()) => Action::SetStatus(format!(
                        "Removed \u{201C}{}\u{201D} from watchlist",
                        item.display_title()
                    )),
                    Err(e) => {
                        tracing::error!(error = %e, "failed to update watchlist");
                        Action::SetStatus(format!("Failed to update watchlist: {e}"))
                    }
                }
            }
        }
    }

    /// Poster URLs for the saved entries.
    pub fn poster_urls(&self, store: Option<&WatchlistStore>) -> Vec<String> {
        store
            .map(|s| s.list())
            .unwrap_or_default()
            .iter()
            .filter_map(|e| e.item.poster_url(&self.image_base))
            .collect()
    }

    pub fn view<'a>(
        &'a self,
        cs: &ColorScheme,
        posters: &'a PosterCache,
        store: Option<&WatchlistStore>,
    ) -> Element<'a, Message> {
        let entries = store.map(WatchlistStore::list).unwrap_or_default();
        let shown: Vec<&WatchlistEntry> =
            entries.iter().filter(|e| self.filter.matches(e)).collect();

        let count_text = match shown.len() {
            1 => "1 title".to_string(),
            n => format!("{n} titles"),
        };

        let header = row![
            chip_bar(cs, self.filter),
            text(count_text)
                .size(style::TEXT_XS)
                .color(cs.text_faint)
                .line_height(style::LINE_HEIGHT_LOOSE)
                .width(Length::Fill),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center)
        .padding([style::SPACE_SM, style::SPACE_LG]);

        let list: Element<'a, Message> = if shown.is_empty() {
            let (title, subtitle) = if entries.is_empty() {
                (
                    "Your watchlist is empty",
                    "Add movies and shows from Discover.",
                )
            } else {
                ("Nothing here", "No titles match this filter.")
            };
            widgets::empty_state(cs, lucide_icons::iced::icon_library(), title, subtitle)
        } else {
            let cards: Vec<Element<'a, Message>> = shown
                .into_iter()
                .map(|entry| {
                    widgets::watchlist_card(
                        cs,
                        posters,
                        entry,
                        &self.image_base,
                        Message::Open(entry.item.clone()),
                        Message::ToggleWatched(entry.item.clone()),
                        Message::Remove(entry.item.clone()),
                    )
                })
                .collect();

            let wrap = iced_aw::Wrap::with_elements(cards)
                .spacing(style::SPACE_SM)
                .line_spacing(style::SPACE_SM);

            widgets::styled_scrollable(
                container(wrap).padding([style::SPACE_SM, style::SPACE_LG]),
                cs,
            )
            .height(Length::Fill)
            .into()
        };

        column![header, rule::horizontal(1), list]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn unavailable() -> String {
    "Watchlist storage is unavailable".to_string()
}

/// Filter chip bar for watched state filtering.
fn chip_bar(cs: &ColorScheme, active: WatchFilter) -> Element<'static, Message> {
    let chips: Vec<Element<'_, Message>> = WatchFilter::ALL
        .iter()
        .map(|&filter| {
            let is_selected = filter == active;
            let mut chip_content = row![].spacing(style::SPACE_XXS).align_y(Alignment::Center);
            if is_selected {
                chip_content =
                    chip_content.push(lucide_icons::iced::icon_circle_check().size(style::TEXT_XS));
            }
            chip_content = chip_content.push(
                text(filter.label())
                    .size(style::TEXT_XS)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );

            button(container(chip_content).center_y(Length::Fill))
                .height(Length::Fixed(style::CHIP_HEIGHT))
                .padding([style::SPACE_XS, style::SPACE_MD])
                .on_press(Message::FilterChanged(filter))
                .style(theme::chip(is_selected, cs))
                .into()
        })
        .collect();

    row(chips).spacing(style::SPACE_XS).into()
}

#[cfg(test)]
mod tests {
    use movieradar_core::storage::Storage;

    use super::*;

    fn item(id: i64, title: &str) -> MediaItem {
        MediaItem {
            id,
            title: Some(title.into()),
            ..Default::default()
        }
    }

    fn status(action: Action) -> String {
        match action {
            Action::SetStatus(s) => s,
            _ => panic!("expected a status update"),
        }
    }

    #[test]
    fn test_filter_matches() {
        let mut entry = WatchlistEntry::new(item(1, "A"));
        assert!(WatchFilter::All.matches(&entry));
        assert!(WatchFilter::ToWatch.matches(&entry));
        assert!(!WatchFilter::Watched.matches(&entry));
        entry.watched = true;
        assert!(WatchFilter::Watched.matches(&entry));
        assert!(!WatchFilter::ToWatch.matches(&entry));
    }

    #[test]
    fn test_toggle_and_remove_update_store() {
        let store = WatchlistStore::new(Storage::open_memory().unwrap(), "screen");
        store.add(&item(5, "A")).unwrap();
        let mut screen = Watchlist::new("https://img");

        let msg = status(screen.update(Message::ToggleWatched(item(5, "A")), Some(&store)));
        assert!(msg.contains("as watched"));
        assert!(store.list()[0].watched);

        let msg = status(screen.update(Message::Remove(item(5, "A")), Some(&store)));
        assert!(msg.starts_with("Removed"));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_open_routes_to_details() {
        let mut screen = Watchlist::new("https://img");
        match screen.update(Message::Open(item(9, "Z")), None) {
            Action::Card(CardCommand::OpenDetails(it)) => assert_eq!(it.id, 9),
            _ => panic!("expected an open command"),
        }
    }

    #[test]
    fn test_missing_store_reports_status() {
        let mut screen = Watchlist::new("https://img");
        let msg = status(screen.update(Message::Remove(item(1, "A")), None));
        assert_eq!(msg, "Watchlist storage is unavailable");
    }
}
