//! Card view-models for media grids.
//!
//! Cards are rebuilt from the current item list on every render, and each
//! card produces its own commands, so a handler can only ever refer to the
//! item it was rendered from.

use crate::models::MediaItem;
use crate::watchlist::WatchlistStore;

/// What a card shows in its poster slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poster {
    Url(String),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub item: MediaItem,
    pub title: String,
    pub date: String,
    pub poster: Poster,
    pub in_watchlist: bool,
}

/// Commands a card can emit.
#[derive(Debug, Clone, PartialEq)]
pub enum CardCommand {
    OpenDetails(MediaItem),
    ToggleWatchlist(MediaItem),
}

impl Card {
    pub fn new(item: &MediaItem, image_base: &str, in_watchlist: bool) -> Self {
        Self {
            title: item.display_title().to_string(),
            date: item.display_date().to_string(),
            poster: item
                .poster_url(image_base)
                .map_or(Poster::Placeholder, Poster::Url),
            in_watchlist,
            item: item.clone(),
        }
    }

    /// Command for a click anywhere on the card except its toggle button.
    pub fn open(&self) -> CardCommand {
        CardCommand::OpenDetails(self.item.clone())
    }

    /// Command for the watchlist toggle button.
    pub fn toggle(&self) -> CardCommand {
        CardCommand::ToggleWatchlist(self.item.clone())
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.in_watchlist {
            "Remove from Watchlist"
        } else {
            "Add to Watchlist"
        }
    }
}

/// Build one card per item, reading watchlist membership at call time.
pub fn render_cards(items: &[MediaItem], store: &WatchlistStore, image_base: &str) -> Vec<Card> {
    let saved = store.list();
    items
        .iter()
        .map(|item| {
            let in_watchlist = saved.iter().any(|e| e.item.same_identity(item));
            Card::new(item, image_base, in_watchlist)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::storage::Storage;

    const IMG: &str = "https://image.tmdb.org/t/p/w342";

    fn item(value: serde_json::Value) -> MediaItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_card_fields_and_fallbacks() {
        let card = Card::new(
            &item(json!({"id": 1, "title": "Dune", "release_date": "2021-10-22", "poster_path": "/d.jpg"})),
            IMG,
            false,
        );
        assert_eq!(card.title, "Dune");
        assert_eq!(card.date, "2021-10-22");
        assert_eq!(card.poster, Poster::Url(format!("{IMG}/d.jpg")));
        assert_eq!(card.toggle_label(), "Add to Watchlist");

        let bare = Card::new(&item(json!({"id": 2})), IMG, true);
        assert_eq!(bare.title, "Untitled");
        assert_eq!(bare.date, "");
        assert_eq!(bare.poster, Poster::Placeholder);
        assert_eq!(bare.toggle_label(), "Remove from Watchlist");
    }

    #[test]
    fn test_render_reflects_membership() {
        let store = WatchlistStore::new(Storage::open_memory().unwrap(), "cards");
        let saved = item(json!({"id": 1, "title": "Saved"}));
        let other = item(json!({"id": 1, "name": "Same id, TV"}));
        store.add(&saved).unwrap();

        let cards = render_cards(&[saved.clone(), other.clone()], &store, IMG);
        assert!(cards[0].in_watchlist);
        assert!(!cards[1].in_watchlist);
    }

    #[test]
    fn test_commands_bind_to_current_items() {
        let store = WatchlistStore::new(Storage::open_memory().unwrap(), "cards");
        let first = render_cards(&[item(json!({"id": 1, "title": "Old"}))], &store, IMG);
        let second = render_cards(&[item(json!({"id": 2, "title": "New"}))], &store, IMG);

        assert_eq!(first[0].open(), CardCommand::OpenDetails(first[0].item.clone()));
        match second[0].toggle() {
            CardCommand::ToggleWatchlist(it) => assert_eq!(it.id, 2),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
