use crate::modules::catalog::domain::entities::content::Content;
use crate::modules::catalog::infrastructure::builtin::BuiltinMapper;
use crate::modules::catalog::infrastructure::external::tmdb::TmdbMapper;
use crate::modules::catalog::traits::{LocalCatalog, RemoteCatalog};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Number of trending items promoted to the hero rotation.
pub const FEATURED_COUNT: usize = 5;
/// The top-rated row is capped for display.
const TOP_RATED_COUNT: usize = 10;

/// One ordered sequence of content per home-page section, plus the
/// derived hero sub-sequence. Always fully populated with best-effort
/// data; there is no failure variant.
#[derive(Debug, Clone, Serialize)]
pub struct HomeContent {
    pub featured: Vec<Content>,
    pub trending: Vec<Content>,
    pub popular: Vec<Content>,
    pub top_rated: Vec<Content>,
    pub anime: Vec<Content>,
    pub tv: Vec<Content>,
}

/// Assembles the home-page content set from the remote and built-in
/// sources.
pub struct CatalogService {
    remote: Arc<dyn RemoteCatalog>,
    local: Arc<dyn LocalCatalog>,
}

impl CatalogService {
    pub fn new(remote: Arc<dyn RemoteCatalog>, local: Arc<dyn LocalCatalog>) -> Self {
        Self { remote, local }
    }

    /// Load every section concurrently and normalize each one
    /// independently.
    ///
    /// The join never needs failure handling: each remote operation is
    /// already total and reports fallback data instead of an error, so
    /// one empty or degraded section cannot block or empty another.
    pub async fn load_home(&self) -> HomeContent {
        let (trending_raw, popular_raw, top_rated_raw) = tokio::join!(
            self.remote.trending(),
            self.remote.popular(),
            self.remote.top_rated(),
        );

        let featured: Vec<Content> = trending_raw
            .iter()
            .take(FEATURED_COUNT)
            .map(TmdbMapper::to_featured)
            .collect();
        let trending: Vec<Content> = trending_raw.iter().map(TmdbMapper::to_content).collect();
        let popular: Vec<Content> = popular_raw.iter().map(TmdbMapper::to_content).collect();
        let mut top_rated: Vec<Content> =
            top_rated_raw.iter().map(TmdbMapper::to_content).collect();
        top_rated.truncate(TOP_RATED_COUNT);

        let anime: Vec<Content> = self
            .local
            .anime()
            .iter()
            .map(BuiltinMapper::anime_to_content)
            .collect();
        let tv: Vec<Content> = self
            .local
            .tv()
            .iter()
            .map(BuiltinMapper::tv_to_content)
            .collect();

        info!(
            trending = trending.len(),
            popular = popular.len(),
            top_rated = top_rated.len(),
            anime = anime.len(),
            tv = tv.len(),
            "home catalog assembled"
        );

        HomeContent {
            featured,
            trending,
            popular,
            top_rated,
            anime,
            tv,
        }
    }

    /// Normalized detail for a single movie; `None` when the remote
    /// lookup fails or the id is unknown.
    pub async fn detail(&self, id: u32) -> Option<Content> {
        self.remote
            .detail(id)
            .await
            .map(|details| TmdbMapper::details_to_content(&details))
    }
}
