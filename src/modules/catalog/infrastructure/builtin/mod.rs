pub mod data;
pub mod mapper;

pub use data::fallback_movies;
pub use mapper::BuiltinMapper;

use crate::modules::catalog::traits::LocalCatalog;
use data::{AnimeRecord, TvRecord};

/// Fixed in-process datasets for the categories the remote API does not
/// serve. Pure and deterministic; there is no failure mode, which is
/// what lets the aggregation joins treat these branches as infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl LocalCatalog for BuiltinCatalog {
    fn anime(&self) -> Vec<AnimeRecord> {
        data::ANIME_CATALOG.to_vec()
    }

    fn tv(&self) -> Vec<TvRecord> {
        data::TV_CATALOG.to_vec()
    }
}
