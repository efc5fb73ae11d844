use std::sync::Arc;

use iced::widget::{button, column, container, row, rule, text, text_input, Column};
use iced::{Alignment, Element, Length, Task};

use movieradar_api::traits::CatalogService;
use movieradar_api::RadarClient;
use movieradar_core::card::{self, CardCommand};
use movieradar_core::models::MediaItem;
use movieradar_core::search::{
    ResultsState, SearchController, SearchIntent, SearchPage, SearchRequest,
};
use movieradar_core::trending::TrendingLoader;
use movieradar_core::watchlist::WatchlistStore;

use crate::app;
use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Discover screen: live search on top, trending below.
pub struct Discover {
    input: String,
    search: SearchController,
    trending: TrendingLoader,
    image_base: String,
}

/// Messages handled by the Discover screen.
#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submitted,
    ClearQuery,
    /// The debounce window for some input elapsed (`Some`) or was
    /// superseded (`None`).
    Debounced(Option<String>),
    PageSelected(u32),
    // Async results (errors stringified for Clone)
    SearchLoaded {
        seq: u64,
        result: Result<SearchPage, String>,
    },
    TrendingLoaded(Result<Vec<MediaItem>, String>),
    Card(CardCommand),
}

impl Discover {
    pub fn new(search: SearchController, image_base: impl Into<String>) -> Self {
        Self {
            input: String::new(),
            search,
            trending: TrendingLoader::new(),
            image_base: image_base.into(),
        }
    }

    /// Kick off the one-time trending load.
    pub fn load_trending(&mut self, client: Option<&Arc<RadarClient>>) -> Action {
        if !self.trending.start() {
            return Action::None;
        }
        let Some(client) = client.cloned() else {
            self.trending.finish(Err(no_client()));
            return Action::None;
        };
        Action::RunTask(Task::perform(
            async move { client.trending().await.map_err(|e| e.to_string()) },
            |result| app::Message::Discover(Message::TrendingLoaded(result)),
        ))
    }

    /// Handle a discover message, returning an Action for the app router.
    pub fn update(&mut self, msg: Message, client: Option<&Arc<RadarClient>>) -> Action {
        match msg {
            Message::InputChanged(value) => {
                self.input = value;
                self.debounce_input()
            }
            Message::Debounced(None) => Action::None,
            Message::Debounced(Some(query)) => {
                let intent = self.search.run(&query);
                self.intent_action(intent, client)
            }
            Message::Submitted => self.debounce_input(),
            Message::ClearQuery => {
                self.input.clear();
                self.debounce_input()
            }
            Message::PageSelected(page) => match self.search.go_to_page(page) {
                Some(req) => search_action(req, client, &mut self.search),
                None => Action::None,
            },
            Message::SearchLoaded { seq, result } => {
                if let Err(e) = &result {
                    tracing::warn!(error = %e, "search failed");
                }
                if self.search.finish(seq, result) {
                    poster_action(self.search.results().items(), &self.image_base)
                } else {
                    Action::None
                }
            }
            Message::TrendingLoaded(result) => {
                if let Err(e) = &result {
                    tracing::warn!(error = %e, "trending failed");
                }
                self.trending.finish(result);
                poster_action(self.trending.state().items(), &self.image_base)
            }
            Message::Card(command) => Action::Card(command),
        }
    }

    /// Hand the current input to the debouncer; a `Debounced` message
    /// follows once it settles or is superseded.
    fn debounce_input(&mut self) -> Action {
        Action::RunTask(Task::perform(
            self.search.input(self.input.clone()),
            |settled| app::Message::Discover(Message::Debounced(settled)),
        ))
    }

    fn intent_action(&mut self, intent: SearchIntent, client: Option<&Arc<RadarClient>>) -> Action {
        match intent {
            SearchIntent::Hide => Action::None,
            SearchIntent::Fetch(req) => search_action(req, client, &mut self.search),
        }
    }

    pub fn view<'a>(
        &'a self,
        cs: &ColorScheme,
        posters: &'a PosterCache,
        store: Option<&WatchlistStore>,
    ) -> Element<'a, Message> {
        let image_base = self.image_base.as_str();
        let header = container(self.search_bar(cs))
            .center_x(Length::Fill)
            .padding([style::SPACE_LG, style::SPACE_LG]);

        let mut sections = Column::new()
            .spacing(style::SPACE_XL)
            .padding([style::SPACE_SM, style::SPACE_LG])
            .width(Length::Fill);

        if self.search.results().is_visible() {
            let title = format!("Results for \u{201C}{}\u{201D}", self.search.query());
            let mut results = column![
                section_title(cs, title),
                results_grid(cs, posters, self.search.results(), store, image_base, "Searching..."),
            ]
            .spacing(style::SPACE_MD);

            let buttons = self.search.page_buttons();
            if !buttons.is_empty() {
                results = results.push(
                    container(widgets::pagination_bar(cs, &buttons, Message::PageSelected))
                        .center_x(Length::Fill),
                );
            }
            sections = sections.push(results).push(rule::horizontal(1));
        }

        sections = sections.push(
            column![
                section_title(cs, "Trending this week".to_string()),
                results_grid(cs, posters, self.trending.state(), store, image_base, "Loading..."),
            ]
            .spacing(style::SPACE_MD),
        );

        column![
            header,
            widgets::styled_scrollable(sections, cs).height(Length::Fill),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn search_bar<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let search_icon = lucide_icons::iced::icon_search()
            .size(style::TEXT_BASE)
            .color(cs.text_muted);

        let search_input = text_input("Search movies and TV shows...", &self.input)
            .on_input(Message::InputChanged)
            .on_submit(Message::Submitted)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_XS, style::SPACE_SM])
            .width(Length::Fill)
            .style(theme::search_input(cs));

        let mut search_row = row![search_icon, search_input]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center)
            .height(Length::Fixed(style::SEARCH_BAR_HEIGHT));

        if !self.input.is_empty() {
            let clear_size = style::TEXT_SM + style::SPACE_XS * 2.0;
            search_row = search_row.push(
                button(
                    container(
                        lucide_icons::iced::icon_x()
                            .size(style::TEXT_SM)
                            .color(cs.text_muted),
                    )
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
                )
                .on_press(Message::ClearQuery)
                .padding(0)
                .width(Length::Fixed(clear_size))
                .height(Length::Fixed(clear_size))
                .style(theme::icon_button(cs)),
            );
        }

        container(search_row)
            .style(theme::search_bar(cs))
            .padding([style::SPACE_XS, style::SPACE_MD])
            .max_width(style::SEARCH_BAR_WIDTH)
            .into()
    }
}

fn no_client() -> String {
    "No valid API base URL configured".to_string()
}

fn search_action(
    req: SearchRequest,
    client: Option<&Arc<RadarClient>>,
    search: &mut SearchController,
) -> Action {
    let Some(client) = client.cloned() else {
        search.finish(req.seq, Err(no_client()));
        return Action::None;
    };
    tracing::debug!(query = %req.query, page = req.page, seq = req.seq, "searching");
    let seq = req.seq;
    Action::RunTask(Task::perform(
        async move {
            client
                .search(&req.query, req.page)
                .await
                .map_err(|e| e.to_string())
        },
        move |result| app::Message::Discover(Message::SearchLoaded { seq, result }),
    ))
}

fn poster_action(items: &[MediaItem], image_base: &str) -> Action {
    let urls: Vec<String> = items
        .iter()
        .filter_map(|item| item.poster_url(image_base))
        .collect();
    if urls.is_empty() {
        Action::None
    } else {
        Action::RequestPosters(urls)
    }
}

fn section_title<'a>(cs: &ColorScheme, title: String) -> Element<'a, Message> {
    text(title)
        .size(style::TEXT_LG)
        .font(style::FONT_HEADING)
        .color(cs.text)
        .line_height(style::LINE_HEIGHT_TIGHT)
        .into()
}

/// Loading text, inline error, or a wrapped grid of cards for `state`.
fn results_grid<'a>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    state: &ResultsState,
    store: Option<&WatchlistStore>,
    image_base: &str,
    loading_label: &'static str,
) -> Element<'a, Message> {
    match state {
        ResultsState::Hidden => column![].into(),
        ResultsState::Loading => text(loading_label)
            .size(style::TEXT_SM)
            .color(cs.text_muted)
            .line_height(style::LINE_HEIGHT_LOOSE)
            .into(),
        ResultsState::Failed(message) => text(message.clone())
            .size(style::TEXT_SM)
            .color(cs.danger)
            .line_height(style::LINE_HEIGHT_LOOSE)
            .into(),
        ResultsState::Loaded(items) if items.is_empty() => widgets::empty_state(
            cs,
            lucide_icons::iced::icon_film(),
            "Nothing found",
            "Try a different title.",
        ),
        ResultsState::Loaded(items) => {
            let cards: Vec<Element<'a, Message>> = match store {
                Some(store) => card::render_cards(items, store, image_base),
                None => items
                    .iter()
                    .map(|item| card::Card::new(item, image_base, false))
                    .collect(),
            }
            .into_iter()
            .map(|c| widgets::media_card(cs, posters, c, Message::Card))
            .collect();

            iced_aw::Wrap::with_elements(cards)
                .spacing(style::SPACE_SM)
                .line_spacing(style::SPACE_SM)
                .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const IMG: &str = "https://image.tmdb.org/t/p/w342";

    fn screen() -> Discover {
        Discover::new(SearchController::new(Duration::from_millis(400), 10), IMG)
    }

    fn item(id: i64, poster: Option<&str>) -> MediaItem {
        MediaItem {
            id,
            title: Some(format!("Title {id}")),
            poster_path: poster.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_query_hides_results() {
        let mut discover = screen();
        let action = discover.update(Message::Debounced(Some("   ".into())), None);
        assert!(matches!(action, Action::None));
        assert!(!discover.search.results().is_visible());
    }

    #[test]
    fn test_missing_client_shows_inline_error() {
        let mut discover = screen();
        discover.update(Message::Debounced(Some("dune".into())), None);
        assert_eq!(
            discover.search.results(),
            &ResultsState::Failed(no_client())
        );

        discover.load_trending(None);
        assert_eq!(discover.trending.state(), &ResultsState::Failed(no_client()));
    }

    #[test]
    fn test_loaded_results_request_posters() {
        let mut discover = screen();
        let req = match discover.search.run("dune") {
            SearchIntent::Fetch(req) => req,
            SearchIntent::Hide => panic!("expected a fetch"),
        };
        let action = discover.update(
            Message::SearchLoaded {
                seq: req.seq,
                result: Ok(SearchPage {
                    results: vec![item(1, Some("/a.jpg")), item(2, None)],
                    page: 1,
                    total_pages: 1,
                }),
            },
            None,
        );
        match action {
            Action::RequestPosters(urls) => assert_eq!(urls, vec![format!("{IMG}/a.jpg")]),
            _ => panic!("expected poster requests"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_goes_through_debounce() {
        let mut discover = screen();
        discover.update(Message::InputChanged("dune".into()), None);
        let action = discover.update(Message::Submitted, None);

        assert!(matches!(action, Action::RunTask(_)));
        assert_eq!(discover.search.results(), &ResultsState::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_input_never_searches() {
        let mut discover = screen();
        let first = tokio::spawn(discover.search.input("du".into()));
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = tokio::spawn(discover.search.input("dune".into()));

        let mut searched = Vec::new();
        for settled in [first.await.unwrap(), second.await.unwrap()] {
            discover.update(Message::Debounced(settled), None);
            if discover.search.results().is_visible() {
                searched.push(discover.search.query().to_string());
            }
        }
        assert_eq!(searched, ["dune"]);
    }

    #[test]
    fn test_card_commands_bubble_up() {
        let mut discover = screen();
        let action = discover.update(
            Message::Card(CardCommand::ToggleWatchlist(item(3, None))),
            None,
        );
        assert!(matches!(
            action,
            Action::Card(CardCommand::ToggleWatchlist(it)) if it.id == 3
        ));
    }
}
