use crate::modules::catalog::domain::entities::content::{Content, MediaDetail};
use crate::modules::catalog::infrastructure::normalize;

use super::data::{AnimeRecord, TvRecord};

/// Converts built-in records into canonical [`Content`].
///
/// The built-in data already carries resolved genre names and absolute
/// image URLs; the rating still goes through the shared one-decimal
/// formatting so the invariant holds on every normalization path.
#[derive(Debug, Clone, Default)]
pub struct BuiltinMapper;

impl BuiltinMapper {
    pub fn anime_to_content(record: &AnimeRecord) -> Content {
        Content {
            id: record.id,
            title: record.title.to_string(),
            description: record.description.to_string(),
            image_url: record.image.to_string(),
            banner_url: Some(record.banner.to_string()),
            year: record.year,
            rating: normalize::format_rating(record.rating),
            detail: MediaDetail::Anime {
                episodes: record.episodes,
            },
            genres: record.genres.iter().map(|g| (*g).to_string()).collect(),
        }
    }

    pub fn tv_to_content(record: &TvRecord) -> Content {
        Content {
            id: record.id,
            title: record.title.to_string(),
            description: record.description.to_string(),
            image_url: record.image.to_string(),
            banner_url: Some(record.banner.to_string()),
            year: record.year,
            rating: normalize::format_rating(record.rating),
            detail: MediaDetail::Tv {
                seasons: record.seasons,
            },
            // The TV source data has no genre field; the sequence is
            // still present, just empty.
            genres: Vec::new(),
        }
    }
}
