use std::time::Duration;

use reqwest::{Client, Request};
use serde::de::DeserializeOwned;
use url::Url;

use movieradar_core::details::DetailSources;
use movieradar_core::models::MediaItem;
use movieradar_core::search::SearchPage;

use crate::error::ApiError;
use crate::traits::CatalogService;
use crate::types::{DetailsResponse, SearchResponse, TrendingResponse};

/// Client for the MovieRadar aggregator backend.
///
/// Every call is an unauthenticated GET below `base_url`.
#[derive(Clone)]
pub struct RadarClient {
    base: Url,
    http: Client,
}

impl RadarClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut base =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        // `Url::join` replaces the last segment unless the path ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { base, http })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))
    }

    pub fn search_request(&self, query: &str, page: u32) -> Result<Request, ApiError> {
        let page = page.to_string();
        Ok(self
            .http
            .get(self.endpoint("search")?)
            .query(&[("q", query), ("page", page.as_str())])
            .build()?)
    }

    pub fn trending_request(&self) -> Result<Request, ApiError> {
        Ok(self.http.get(self.endpoint("trending")?).build()?)
    }

    pub fn details_request(&self, media_type: &str, id: i64) -> Result<Request, ApiError> {
        let id = id.to_string();
        Ok(self
            .http
            .get(self.endpoint("details")?)
            .query(&[("type", media_type), ("id", id.as_str())])
            .build()?)
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "backend API error");
            Err(ApiError::Api {
                status,
                message: body.trim().to_string(),
            })
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        tracing::debug!(url = %request.url(), "GET");
        let resp = self.http.execute(request).await?;
        let resp = Self::check_response(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl CatalogService for RadarClient {
    type Error = ApiError;

    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, ApiError> {
        let request = self.search_request(query, page)?;
        let response: SearchResponse = self.fetch(request).await?;
        Ok(response.into_page())
    }

    async fn trending(&self) -> Result<Vec<MediaItem>, ApiError> {
        let request = self.trending_request()?;
        let response: TrendingResponse = self.fetch(request).await?;
        Ok(response.results)
    }

    async fn details(&self, media_type: &str, id: i64) -> Result<DetailSources, ApiError> {
        let request = self.details_request(media_type, id)?;
        let response: DetailsResponse = self.fetch(request).await?;
        Ok(response.into_sources())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> RadarClient {
        RadarClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_search_url_encodes_query() {
        let req = client("http://localhost:8080/api")
            .search_request("fast & furious", 2)
            .unwrap();
        assert_eq!(req.method(), reqwest::Method::GET);
        assert_eq!(
            req.url().as_str(),
            "http://localhost:8080/api/search?q=fast+%26+furious&page=2"
        );
    }

    #[test]
    fn test_trailing_slash_base() {
        let req = client("http://localhost:8080/api/").trending_request().unwrap();
        assert_eq!(req.url().as_str(), "http://localhost:8080/api/trending");
    }

    #[test]
    fn test_details_url() {
        let req = client("https://radar.example.com")
            .details_request("tv", 1399)
            .unwrap();
        assert_eq!(
            req.url().as_str(),
            "https://radar.example.com/details?type=tv&id=1399"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            RadarClient::new("not a url", Duration::from_secs(1)),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            RadarClient::new("mailto:someone@example.com", Duration::from_secs(1)),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_http_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let client = client("http://127.0.0.1:9/api");
        let err = client.trending().await.unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
    }
}
