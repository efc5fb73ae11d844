use serde::{Deserialize, Serialize};

use super::MediaItem;

/// A saved copy of a [`MediaItem`] plus the user's watched flag.
///
/// The item fields are a snapshot taken when the entry was added and are
/// never refreshed from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    #[serde(flatten)]
    pub item: MediaItem,
    #[serde(default)]
    pub watched: bool,
}

impl WatchlistEntry {
    pub fn new(item: MediaItem) -> Self {
        Self {
            item,
            watched: false,
        }
    }
}
