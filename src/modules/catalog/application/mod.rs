pub mod home;
pub mod search;

pub use home::{CatalogService, HomeContent};
pub use search::SearchService;
