use std::time::Duration;

use iced::keyboard::{self, key::Named, Key};
use iced::Subscription;

use movieradar_core::config::ThemeMode;

use crate::app::Message;

/// How often the OS appearance is re-checked in `system` mode.
const APPEARANCE_POLL: Duration = Duration::from_secs(5);

/// Ticks while the theme follows the OS, so a dark/light switch is picked up.
pub fn appearance_watch(mode: ThemeMode) -> Subscription<Message> {
    match mode {
        ThemeMode::System => iced::time::every(APPEARANCE_POLL).map(|_| Message::AppearanceTick),
        ThemeMode::Dark | ThemeMode::Light => Subscription::none(),
    }
}

/// Closes the details dialog on Escape. Only subscribed while it is open.
pub fn dismiss_keys() -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _id| match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) if is_dismiss_key(&key) => {
            Some(Message::CloseDetails)
        }
        _ => None,
    })
}

fn is_dismiss_key(key: &Key) -> bool {
    matches!(key, Key::Named(Named::Escape))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_escape_dismisses() {
        assert!(is_dismiss_key(&Key::Named(Named::Escape)));
        assert!(!is_dismiss_key(&Key::Named(Named::Enter)));
        assert!(!is_dismiss_key(&Key::Character("q".into())));
    }
}
