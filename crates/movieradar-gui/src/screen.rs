pub mod discover;
pub mod watchlist;

use iced::Task;

use movieradar_core::card::CardCommand;

use crate::app;

/// Which page is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Discover,
    Watchlist,
}

/// Actions that a screen can request from the app router.
///
/// Screens return these from `update()` instead of touching shared state;
/// the app interprets them in one place.
pub enum Action {
    None,
    /// Run an async Iced task that eventually produces an app::Message.
    RunTask(Task<app::Message>),
    /// A card (or card-like control) was activated.
    Card(CardCommand),
    /// Make sure these poster URLs are downloaded.
    RequestPosters(Vec<String>),
    /// Update the status bar message.
    SetStatus(String),
}
