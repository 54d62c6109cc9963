use crate::modules::catalog::domain::entities::content::Content;
use crate::modules::catalog::infrastructure::builtin::BuiltinMapper;
use crate::modules::catalog::infrastructure::external::tmdb::TmdbMapper;
use crate::modules::catalog::traits::{LocalCatalog, RemoteCatalog};
use std::sync::Arc;
use tracing::info;

/// Fans a query out to every source and merges the results.
pub struct SearchService {
    remote: Arc<dyn RemoteCatalog>,
    local: Arc<dyn LocalCatalog>,
}

impl SearchService {
    pub fn new(remote: Arc<dyn RemoteCatalog>, local: Arc<dyn LocalCatalog>) -> Self {
        Self { remote, local }
    }

    /// Search all sources concurrently and concatenate the normalized
    /// results in fixed order: movies, then anime, then TV.
    ///
    /// Branches are independent: the remote branch reports an empty vec
    /// on its own failure, and the built-in branches cannot fail, so no
    /// branch outcome can abort another. An empty or whitespace-only
    /// query returns immediately without dispatching any branch.
    pub async fn search(&self, query: &str) -> Vec<Content> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        let (movies, anime, tv) = tokio::join!(
            self.remote.search(query),
            async { self.local.anime() },
            async { self.local.tv() },
        );

        let mut results: Vec<Content> = movies.iter().map(TmdbMapper::to_content).collect();
        results.extend(
            anime
                .iter()
                .filter(|record| record.title.to_lowercase().contains(&needle))
                .map(BuiltinMapper::anime_to_content),
        );
        results.extend(
            tv.iter()
                .filter(|record| record.title.to_lowercase().contains(&needle))
                .map(BuiltinMapper::tv_to_content),
        );

        info!("search '{}' returned {} results", query, results.len());
        results
    }
}
