use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use movieradar_api::traits::CatalogService;
use movieradar_api::RadarClient;
use movieradar_core::card::CardCommand;
use movieradar_core::config::{AppConfig, ThemeMode};
use movieradar_core::error::CoreError;
use movieradar_core::details::{DetailSources, DetailsModal, DetailsState};
use movieradar_core::models::MediaItem;
use movieradar_core::search::SearchController;
use movieradar_core::storage::Storage;
use movieradar_core::watchlist::WatchlistStore;

use crate::poster_cache::{self, PosterCache};
use crate::screen::{discover, watchlist, Action, Page};
use crate::style;
use crate::subscription;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, DetailsActions};

/// Application context: owns every piece of state and routes messages to
/// the screens.
pub struct MovieRadar {
    page: Page,
    config: AppConfig,
    client: Option<Arc<RadarClient>>,
    store: Option<WatchlistStore>,
    // Theme
    active_mode: ThemeMode,
    colors: ColorScheme,
    // Screens
    discover: discover::Discover,
    watchlist: watchlist::Watchlist,
    // The one details modal, reused for every title
    details: DetailsModal,
    posters: PosterCache,
    status_message: String,
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(Page),
    Discover(discover::Message),
    Watchlist(watchlist::Message),
    DetailsLoaded {
        seq: u64,
        result: Result<DetailSources, String>,
    },
    CloseDetails,
    DetailsToggleWatchlist,
    OpenExternal(String),
    PosterLoaded {
        url: String,
        result: Result<PathBuf, String>,
    },
    AppearanceTick,
    CycleTheme,
}

impl MovieRadar {
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        let client = match RadarClient::new(&config.api.base_url, config.api.timeout()) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::error!(error = %e, "cannot build API client");
                None
            }
        };
        let store = open_store(&config);
        let active_mode = theme::resolve_mode(config.appearance.mode);
        let image_base = config.api.image_base_url.clone();
        let search = SearchController::new(
            config.search.debounce(),
            config.search.max_page_buttons,
        );
        let status_message = match (&client, &store) {
            (None, _) => format!("Invalid API base URL: {}", config.api.base_url),
            (_, None) => "Watchlist storage unavailable".to_string(),
            _ => "Ready".to_string(),
        };

        let mut app = Self {
            page: Page::default(),
            client,
            store,
            active_mode,
            colors: theme::scheme_for(active_mode),
            discover: discover::Discover::new(search, image_base.clone()),
            watchlist: watchlist::Watchlist::new(image_base.clone()),
            details: DetailsModal::new(image_base),
            posters: PosterCache::new(AppConfig::posters_dir()),
            status_message,
            config,
        };

        let action = app.discover.load_trending(app.client.as_ref());
        let task = app.handle_action(action);
        (app, task)
    }

    pub fn title(&self) -> String {
        String::from("MovieRadar")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(page) => {
                self.page = page;
                if page == Page::Watchlist {
                    let urls = self.watchlist.poster_urls(self.store.as_ref());
                    return self.request_posters(urls);
                }
                Task::none()
            }
            Message::Discover(msg) => {
                let action = self.discover.update(msg, self.client.as_ref());
                self.handle_action(action)
            }
            Message::Watchlist(msg) => {
                let action = self.watchlist.update(msg, self.store.as_ref());
                self.handle_action(action)
            }
            Message::DetailsLoaded { seq, result } => {
                if let Err(e) = &result {
                    tracing::warn!(error = %e, "details lookup failed");
                }
                if !self.details.finish(seq, result) {
                    tracing::debug!(seq, "dropping stale details response");
                    return Task::none();
                }
                let poster = match self.details.state() {
                    DetailsState::Loaded(_, details) => details.poster_url.clone(),
                    _ => None,
                };
                self.request_posters(poster.into_iter().collect())
            }
            Message::CloseDetails => {
                self.details.close();
                Task::none()
            }
            Message::DetailsToggleWatchlist => {
                if let Some(item) = self.details.state().item().cloned() {
                    self.toggle_watchlist(&item);
                }
                Task::none()
            }
            Message::OpenExternal(url) => {
                if let Err(e) = open::that_detached(&url) {
                    tracing::warn!(url = %url, error = %e, "cannot open browser");
                    self.status_message = format!("Could not open {url}: {e}");
                }
                Task::none()
            }
            Message::PosterLoaded { url, result } => {
                self.posters.finish(url, result);
                Task::none()
            }
            Message::AppearanceTick => {
                self.refresh_appearance();
                Task::none()
            }
            Message::CycleTheme => {
                let mode = self.config.appearance.mode.next();
                self.config.appearance.mode = mode;
                self.refresh_appearance();
                self.status_message = match save_theme_mode(mode) {
                    Ok(()) => format!("Theme: {}", mode.label()),
                    Err(e) => {
                        tracing::warn!(error = %e, "cannot save theme preference");
                        format!("Theme: {} (not saved: {e})", mode.label())
                    }
                };
                Task::none()
            }
        }
    }

    /// Re-resolve the configured mode and swap palettes if it changed.
    fn refresh_appearance(&mut self) {
        let mode = theme::resolve_mode(self.config.appearance.mode);
        if mode != self.active_mode {
            tracing::debug!(?mode, "appearance changed");
            self.active_mode = mode;
            self.colors = theme::scheme_for(mode);
        }
    }

    /// Interpret an Action returned by a screen's update().
    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::RunTask(task) => task,
            Action::Card(CardCommand::OpenDetails(item)) => self.open_details(item),
            Action::Card(CardCommand::ToggleWatchlist(item)) => {
                self.toggle_watchlist(&item);
                Task::none()
            }
            Action::RequestPosters(urls) => self.request_posters(urls),
            Action::SetStatus(msg) => {
                self.status_message = msg;
                Task::none()
            }
        }
    }

    /// Show the modal in its loading state and fetch the details.
    fn open_details(&mut self, item: MediaItem) -> Task<Message> {
        let req = self.details.open(item);
        let Some(client) = self.client.clone() else {
            self.details
                .finish(req.seq, Err("No valid API base URL configured".into()));
            return Task::none();
        };
        tracing::debug!(media_type = %req.media_type, id = req.id, "loading details");
        let seq = req.seq;
        Task::perform(
            async move {
                client
                    .details(&req.media_type, req.id)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| Message::DetailsLoaded { seq, result },
        )
    }

    fn toggle_watchlist(&mut self, item: &MediaItem) {
        let Some(store) = &self.store else {
            self.status_message = "Watchlist storage unavailable".into();
            return;
        };
        let title = item.display_title().to_string();
        self.status_message = match store.toggle(item) {
            Ok(true) => format!("Added \u{201C}{title}\u{201D} to watchlist"),
            Ok(false) => format!("Removed \u{201C}{title}\u{201D} from watchlist"),
            Err(e) => {
                tracing::error!(error = %e, "failed to update watchlist");
                format!("Failed to update watchlist: {e}")
            }
        };
    }

    /// Start downloads for posters that are neither cached nor in flight.
    fn request_posters(&mut self, urls: Vec<String>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .filter_map(|url| {
                let path = self.posters.begin(&url)?;
                Some(Task::perform(
                    poster_cache::fetch_poster(url.clone(), path),
                    move |result| Message::PosterLoaded {
                        url: url.clone(),
                        result,
                    },
                ))
            })
            .collect();
        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = &self.colors;
        let nav = self.nav_rail(cs);

        let page_content: Element<'_, Message> = match self.page {
            Page::Discover => self
                .discover
                .view(cs, &self.posters, self.store.as_ref())
                .map(Message::Discover),
            Page::Watchlist => self
                .watchlist
                .view(cs, &self.posters, self.store.as_ref())
                .map(Message::Watchlist),
        };

        let status_bar = container(
            text(&self.status_message)
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .style(theme::status_bar(cs))
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([4.0, style::SPACE_MD]);

        let main: Element<'_, Message> =
            column![row![nav, page_content].height(Length::Fill), status_bar].into();

        let state = self.details.state();
        let in_watchlist = match (state.item(), &self.store) {
            (Some(item), Some(store)) => store.contains(item),
            _ => false,
        };
        let actions = DetailsActions {
            close: Message::CloseDetails,
            toggle_watchlist: Message::DetailsToggleWatchlist,
            open_external: Message::OpenExternal(
                state.item().map(MediaItem::tmdb_url).unwrap_or_default(),
            ),
        };

        match widgets::details_panel(cs, &self.posters, state, in_watchlist, actions) {
            Some(panel) => widgets::modal(cs, main, panel, Message::CloseDetails),
            None => main,
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let appearance = subscription::appearance_watch(self.config.appearance.mode);
        if matches!(self.details.state(), DetailsState::Closed) {
            appearance
        } else {
            Subscription::batch([appearance, subscription::dismiss_keys()])
        }
    }

    pub fn theme(&self) -> Theme {
        theme::build_theme(&self.colors)
    }

    fn nav_rail<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let nav_item = |icon: iced::widget::Text<'static>, label: &'static str, page: Page| {
            let active = self.page == page;
            button(
                column![
                    icon.size(style::NAV_ICON_SIZE).center(),
                    text(label)
                        .size(style::TEXT_SM)
                        .line_height(style::LINE_HEIGHT_LOOSE)
                        .center(),
                ]
                .align_x(Alignment::Center)
                .spacing(style::SPACE_XXS)
                .width(Length::Fill),
            )
            .width(Length::Fixed(64.0))
            .padding([style::SPACE_SM, style::SPACE_XS])
            .on_press(Message::NavigateTo(page))
            .style(theme::nav_item(active, cs))
        };

        use lucide_icons::iced as icons;

        let mode = self.config.appearance.mode;
        let mode_icon = match mode {
            ThemeMode::System => icons::icon_monitor(),
            ThemeMode::Dark => icons::icon_moon(),
            ThemeMode::Light => icons::icon_sun(),
        };
        let theme_toggle = button(
            column![
                mode_icon.size(style::NAV_ICON_SIZE).center(),
                text(mode.label())
                    .size(style::TEXT_SM)
                    .line_height(style::LINE_HEIGHT_LOOSE)
                    .center(),
            ]
            .align_x(Alignment::Center)
            .spacing(style::SPACE_XXS)
            .width(Length::Fill),
        )
        .width(Length::Fixed(64.0))
        .padding([style::SPACE_SM, style::SPACE_XS])
        .on_press(Message::CycleTheme)
        .style(theme::nav_item(false, cs));

        let rail = column![
            nav_item(icons::icon_film(), "Discover", Page::Discover),
            nav_item(icons::icon_library(), "Watchlist", Page::Watchlist),
            Space::new().height(Length::Fill),
            theme_toggle,
        ]
        .spacing(style::SPACE_XS)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill);

        container(rail)
            .style(theme::nav_rail(cs))
            .width(Length::Fixed(style::NAV_RAIL_WIDTH))
            .height(Length::Fill)
            .padding([style::SPACE_LG, 0.0])
            .into()
    }
}

/// Persist only the appearance mode, leaving everything else in the user
/// file as it was (a `--api-base` override must not end up on disk).
fn save_theme_mode(mode: ThemeMode) -> Result<(), CoreError> {
    let mut on_disk = AppConfig::load()?;
    on_disk.appearance.mode = mode;
    on_disk.save()
}

/// Open the on-disk watchlist, falling back to an in-memory one so the
/// session still works when the data directory is unusable.
fn open_store(config: &AppConfig) -> Option<WatchlistStore> {
    let storage = AppConfig::ensure_db_path()
        .and_then(|path| Storage::open(&path))
        .or_else(|e| {
            tracing::warn!(error = %e, "cannot open watchlist database, using memory");
            Storage::open_memory()
        });
    match storage {
        Ok(storage) => Some(WatchlistStore::new(
            storage,
            config.watchlist.storage_key.clone(),
        )),
        Err(e) => {
            tracing::error!(error = %e, "watchlist storage unavailable");
            None
        }
    }
}
