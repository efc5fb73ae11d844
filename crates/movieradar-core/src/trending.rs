use crate::models::MediaItem;
use crate::search::ResultsState;

/// Trending row shown on startup. Loaded once; no query, no pagination.
#[derive(Debug, Default)]
pub struct TrendingLoader {
    state: ResultsState,
    started: bool,
}

impl TrendingLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading state. Returns `false` if the load already ran,
    /// in which case the caller must not fetch again.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.state = ResultsState::Loading;
        true
    }

    pub fn finish(&mut self, outcome: Result<Vec<MediaItem>, String>) {
        self.state = match outcome {
            Ok(items) => ResultsState::Loaded(items),
            Err(message) => ResultsState::Failed(message),
        };
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_once() {
        let mut trending = TrendingLoader::new();
        assert!(!trending.state().is_visible());
        assert!(trending.start());
        assert_eq!(trending.state(), &ResultsState::Loading);
        assert!(!trending.start());
    }

    #[test]
    fn test_finish_states() {
        let mut trending = TrendingLoader::new();
        trending.start();
        trending.finish(Err("Failed to fetch trending".into()));
        assert_eq!(
            trending.state(),
            &ResultsState::Failed("Failed to fetch trending".into())
        );

        trending.finish(Ok(vec![MediaItem {
            id: 1,
            name: Some("Show".into()),
            ..Default::default()
        }]));
        assert_eq!(trending.state().items().len(), 1);
    }
}
