pub mod common;
pub mod tmdb;

pub use common::CommonHttpHandler;
