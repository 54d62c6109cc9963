use crate::modules::catalog::infrastructure::builtin;
use crate::modules::catalog::infrastructure::external::CommonHttpHandler;
use crate::modules::catalog::traits::RemoteCatalog;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::{TmdbListResponse, TmdbMovie, TmdbMovieDetails};

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Thin client for the TMDB v3 API.
///
/// Every public operation is total: a transport or decode failure is
/// logged and converted into the documented fallback value (built-in
/// movie list, empty vec, or `None`) instead of an error. Failures
/// therefore never cross this boundary.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> AppResult<Self> {
        Self::with_base_url(api_key, TMDB_BASE_URL)
    }

    /// Client against a custom base URL, used by tests to point at a
    /// dead or stubbed endpoint.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> AppResult<Self> {
        let client = CommonHttpHandler::create_http_client(10, "Reelix-Catalog/1.0")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Read the API key from `TMDB_API_KEY` (a `.env` file is honored).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("TMDB_API_KEY")
            .map_err(|_| AppError::InvalidInput("TMDB_API_KEY is not set".to_string()))?;
        Self::new(api_key)
    }

    pub async fn trending(&self) -> Vec<TmdbMovie> {
        self.fetch_list("/trending/movie/week", "trending").await
    }

    pub async fn popular(&self) -> Vec<TmdbMovie> {
        self.fetch_list("/movie/popular", "popular").await
    }

    pub async fn top_rated(&self) -> Vec<TmdbMovie> {
        self.fetch_list("/movie/top_rated", "top rated").await
    }

    pub async fn detail(&self, id: u32) -> Option<TmdbMovieDetails> {
        match self.try_detail(id).await {
            Ok(details) => Some(details),
            Err(AppError::NotFound(_)) => {
                debug!("TMDB movie {} not found", id);
                None
            }
            Err(e) => {
                warn!("TMDB detail request for movie {} failed: {}", id, e);
                None
            }
        }
    }

    pub async fn search(&self, query: &str) -> Vec<TmdbMovie> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.try_search(query).await {
            Ok(results) => results,
            Err(e) => {
                warn!("TMDB search for '{}' failed: {}", query, e);
                Vec::new()
            }
        }
    }

    /// Shared list-endpoint path; any failure or a response without a
    /// `results` field yields the built-in fallback movies.
    async fn fetch_list(&self, path: &str, section: &str) -> Vec<TmdbMovie> {
        match self.try_fetch_list(path).await {
            Ok(Some(results)) => results,
            Ok(None) => {
                warn!("TMDB {} response carried no results, using fallback", section);
                builtin::fallback_movies()
            }
            Err(e) => {
                warn!("TMDB {} request failed: {}, using fallback", section, e);
                builtin::fallback_movies()
            }
        }
    }

    async fn try_fetch_list(&self, path: &str) -> AppResult<Option<Vec<TmdbMovie>>> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;
        CommonHttpHandler::handle_response_status(response.status(), "TMDB")?;

        let body = response
            .json::<TmdbListResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse TMDB response: {}", e)))?;

        Ok(body.results)
    }

    async fn try_search(&self, query: &str) -> AppResult<Vec<TmdbMovie>> {
        let url = format!("{}/search/movie", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("query", query)])
            .send()
            .await?;
        CommonHttpHandler::handle_response_status(response.status(), "TMDB")?;

        let body = response
            .json::<TmdbListResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse TMDB response: {}", e)))?;

        Ok(body.results.unwrap_or_default())
    }

    async fn try_detail(&self, id: u32) -> AppResult<TmdbMovieDetails> {
        let url = format!("{}/movie/{}", self.base_url, id);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;
        CommonHttpHandler::handle_response_status(response.status(), "TMDB")?;

        response
            .json::<TmdbMovieDetails>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse TMDB response: {}", e)))
    }
}

#[async_trait]
impl RemoteCatalog for TmdbClient {
    async fn trending(&self) -> Vec<TmdbMovie> {
        self.trending().await
    }

    async fn popular(&self) -> Vec<TmdbMovie> {
        self.popular().await
    }

    async fn top_rated(&self) -> Vec<TmdbMovie> {
        self.top_rated().await
    }

    async fn detail(&self, id: u32) -> Option<TmdbMovieDetails> {
        self.detail(id).await
    }

    async fn search(&self, query: &str) -> Vec<TmdbMovie> {
        self.search(query).await
    }
}
