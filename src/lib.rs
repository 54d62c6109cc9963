//! Catalog aggregation and federated search for a movie/TV/anime browser.
//!
//! The crate assembles a home-page content set from the TMDB API plus
//! built-in datasets, and fans search queries out across all sources with
//! per-source failure isolation. Callers only ever see normalized
//! [`Content`] values; raw source payloads stay behind the mappers.

pub mod modules;
pub mod shared;

pub use modules::catalog::{
    application::{CatalogService, HomeContent, SearchService},
    domain::entities::content::{Content, ContentKey, MediaDetail, MediaType},
    infrastructure::{builtin::BuiltinCatalog, external::tmdb::TmdbClient},
    traits::{LocalCatalog, RemoteCatalog},
};
pub use shared::errors::{AppError, AppResult};
