use crate::modules::catalog::infrastructure::builtin::data::{AnimeRecord, TvRecord};
use crate::modules::catalog::infrastructure::external::tmdb::dto::{TmdbMovie, TmdbMovieDetails};
use async_trait::async_trait;

/// Remote movie catalog operations.
///
/// Every method is total: implementations convert their own transport or
/// decode failures into the documented fallback value (built-in list,
/// empty vec, `None`) before returning, so callers can join on several
/// operations without any failure-aggregation logic.
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    /// Trending movies; falls back to the built-in list on failure.
    async fn trending(&self) -> Vec<TmdbMovie>;

    /// Popular movies; falls back to the built-in list on failure.
    async fn popular(&self) -> Vec<TmdbMovie>;

    /// Top-rated movies; falls back to the built-in list on failure.
    async fn top_rated(&self) -> Vec<TmdbMovie>;

    /// Single movie detail; `None` on failure or unknown id.
    async fn detail(&self, id: u32) -> Option<TmdbMovieDetails>;

    /// Text search; empty on failure, and an empty/whitespace query
    /// returns empty without issuing a request.
    async fn search(&self, query: &str) -> Vec<TmdbMovie>;
}

/// Fixed in-process datasets for categories the remote API does not
/// cover. Pure and deterministic, no failure mode.
pub trait LocalCatalog: Send + Sync {
    fn anime(&self) -> Vec<AnimeRecord>;
    fn tv(&self) -> Vec<TvRecord>;
}
