pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access - only export what's actually used
pub use application::{CatalogService, HomeContent, SearchService};
pub use domain::entities::content::{Content, ContentKey, MediaDetail, MediaType};
pub use infrastructure::builtin::BuiltinCatalog;
pub use infrastructure::external::tmdb::TmdbClient;
