//! Live search state: debounced input, paginated requests, result state.
//!
//! The controller never performs I/O. It hands out [`SearchRequest`]s for
//! the caller to execute and takes the outcome back through
//! [`SearchController::finish`]. Each request carries a sequence number and
//! only the most recently issued one may update the results, so a slow
//! response can never overwrite a newer one.

use std::future::Future;
use std::time::Duration;

use crate::debounce::Debouncer;
use crate::models::MediaItem;
use crate::pagination::{self, PageButton};

/// What a results area is currently showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultsState {
    #[default]
    Hidden,
    Loading,
    Loaded(Vec<MediaItem>),
    Failed(String),
}

impl ResultsState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn items(&self) -> &[MediaItem] {
        match self {
            Self::Loaded(items) => items,
            _ => &[],
        }
    }
}

/// One page of search results as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub results: Vec<MediaItem>,
    pub page: u32,
    pub total_pages: u32,
}

/// A search the caller should send to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    /// The query is blank: nothing to fetch, results are hidden.
    Hide,
    Fetch(SearchRequest),
}

#[derive(Debug)]
pub struct SearchController {
    debouncer: Debouncer,
    max_page_buttons: u32,
    query: String,
    page: u32,
    total_pages: u32,
    results: ResultsState,
    latest_seq: u64,
}

impl SearchController {
    pub fn new(debounce: Duration, max_page_buttons: u32) -> Self {
        Self {
            debouncer: Debouncer::new(debounce),
            max_page_buttons,
            query: String::new(),
            page: 1,
            total_pages: 0,
            results: ResultsState::Hidden,
            latest_seq: 0,
        }
    }

    /// Debounce raw input, from a keystroke or a form submit alike. The
    /// returned future yields the text once the input has been quiet for the
    /// debounce period, or `None` if newer input superseded it. Pass the
    /// settled text to [`run`](Self::run).
    pub fn input(&mut self, raw: String) -> impl Future<Output = Option<String>> + Send + 'static {
        self.debouncer.call(raw)
    }

    /// Start a search for `raw` at page 1.
    ///
    /// Blank input hides the results and issues nothing. Otherwise the state
    /// switches to loading before the request is returned.
    pub fn run(&mut self, raw: &str) -> SearchIntent {
        if raw.trim().is_empty() {
            self.query.clear();
            self.results = ResultsState::Hidden;
            self.total_pages = 0;
            // Invalidate anything still in flight.
            self.latest_seq += 1;
            return SearchIntent::Hide;
        }
        self.query = raw.to_string();
        SearchIntent::Fetch(self.issue(1))
    }

    /// Re-run the last query at `page`.
    pub fn go_to_page(&mut self, page: u32) -> Option<SearchRequest> {
        if self.query.trim().is_empty() || page == 0 {
            return None;
        }
        Some(self.issue(page))
    }

    /// Apply the outcome of request `seq`. Returns `false` if a newer
    /// request was issued in the meantime and the outcome was dropped.
    pub fn finish(&mut self, seq: u64, outcome: Result<SearchPage, String>) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "dropping stale search response");
            return false;
        }
        match outcome {
            Ok(page) => {
                self.page = page.page.max(1);
                self.total_pages = page.total_pages;
                self.results = ResultsState::Loaded(page.results);
            }
            Err(message) => {
                self.total_pages = 0;
                self.results = ResultsState::Failed(message);
            }
        }
        true
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &ResultsState {
        &self.results
    }

    /// Page buttons for the last successful response.
    pub fn page_buttons(&self) -> Vec<PageButton> {
        match self.results {
            ResultsState::Loaded(_) => {
                pagination::page_buttons(self.page, self.total_pages, self.max_page_buttons)
            }
            _ => Vec::new(),
        }
    }

    fn issue(&mut self, page: u32) -> SearchRequest {
        self.latest_seq += 1;
        self.page = page;
        self.results = ResultsState::Loading;
        SearchRequest {
            query: self.query.clone(),
            page,
            seq: self.latest_seq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SearchController {
        SearchController::new(Duration::from_millis(400), 10)
    }

    fn item(id: i64, title: &str) -> MediaItem {
        MediaItem {
            id,
            title: Some(title.into()),
            ..Default::default()
        }
    }

    fn fetch(intent: SearchIntent) -> SearchRequest {
        match intent {
            SearchIntent::Fetch(req) => req,
            SearchIntent::Hide => panic!("expected a fetch"),
        }
    }

    #[test]
    fn test_blank_query_hides_without_request() {
        let mut search = controller();
        assert_eq!(search.run("   "), SearchIntent::Hide);
        assert!(!search.results().is_visible());
        assert!(search.go_to_page(2).is_none());
    }

    #[test]
    fn test_query_enters_loading_at_page_one() {
        let mut search = controller();
        let req = fetch(search.run("dune"));
        assert_eq!(req.query, "dune");
        assert_eq!(req.page, 1);
        assert_eq!(search.results(), &ResultsState::Loading);
    }

    #[test]
    fn test_success_sets_results_and_pagination() {
        let mut search = controller();
        let req = fetch(search.run("star"));
        let applied = search.finish(
            req.seq,
            Ok(SearchPage {
                results: vec![item(1, "Star")],
                page: 1,
                total_pages: 37,
            }),
        );
        assert!(applied);
        assert_eq!(search.results().items().len(), 1);

        let buttons = search.page_buttons();
        assert_eq!(buttons.len(), 10);
        assert!(!buttons[0].is_enabled());
        assert!(buttons[1..].iter().all(PageButton::is_enabled));
    }

    #[test]
    fn test_go_to_page_reuses_last_query() {
        let mut search = controller();
        let first = fetch(search.run("alien"));
        search.finish(
            first.seq,
            Ok(SearchPage {
                results: vec![item(1, "Alien")],
                page: 1,
                total_pages: 5,
            }),
        );

        let req = search.go_to_page(3).unwrap();
        assert_eq!(req.query, "alien");
        assert_eq!(req.page, 3);
        assert_eq!(search.results(), &ResultsState::Loading);
        assert!(search.page_buttons().is_empty());
    }

    #[test]
    fn test_failure_shows_inline_error() {
        let mut search = controller();
        let req = fetch(search.run("x"));
        search.finish(req.seq, Err("Search failed".into()));
        assert_eq!(search.results(), &ResultsState::Failed("Search failed".into()));
        assert!(search.results().is_visible());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut search = controller();
        let old = fetch(search.run("ali"));
        let new = fetch(search.run("alien"));

        assert!(search.finish(
            new.seq,
            Ok(SearchPage {
                results: vec![item(2, "Alien")],
                page: 1,
                total_pages: 1,
            })
        ));
        assert!(!search.finish(
            old.seq,
            Ok(SearchPage {
                results: vec![item(1, "Ali")],
                page: 1,
                total_pages: 1,
            })
        ));
        assert_eq!(search.results().items()[0].id, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_input_fetches_once_for_last_query() {
        let mut search = controller();
        let start = tokio::time::Instant::now();

        let first = tokio::spawn(search.input("dun".into()));
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = tokio::spawn(search.input("dune".into()));

        assert_eq!(first.await.unwrap(), None);
        let settled = second.await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(500));
        assert_eq!(settled.as_deref(), Some("dune"));

        // Nothing was issued while the input was settling.
        assert_eq!(search.results(), &ResultsState::Hidden);
        let req = fetch(search.run(&settled.unwrap()));
        assert_eq!(req.query, "dune");
        assert_eq!(req.seq, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_waits_out_the_full_period() {
        let mut search = controller();
        let pending = tokio::spawn(search.input("alien".into()));

        tokio::time::sleep(Duration::from_millis(399)).await;
        assert!(!pending.is_finished());
        assert_eq!(search.results(), &ResultsState::Hidden);

        assert_eq!(pending.await.unwrap().as_deref(), Some("alien"));
    }

    #[test]
    fn test_clearing_query_drops_in_flight_response() {
        let mut search = controller();
        let req = fetch(search.run("alien"));
        search.run("");
        assert!(!search.finish(req.seq, Ok(SearchPage::default())));
        assert!(!search.results().is_visible());
    }
}
