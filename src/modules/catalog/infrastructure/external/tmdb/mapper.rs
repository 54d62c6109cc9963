use crate::modules::catalog::domain::entities::content::{Content, MediaDetail};
use crate::modules::catalog::infrastructure::normalize;

use super::dto::{TmdbMovie, TmdbMovieDetails};

/// Converts raw TMDB records into canonical [`Content`].
///
/// Mapping is total: missing optional fields resolve to the documented
/// defaults (sentinel year 0, "0h 0m" runtime, empty genres) so one bad
/// record never aborts a batch.
#[derive(Debug, Clone, Default)]
pub struct TmdbMapper;

impl TmdbMapper {
    /// Map a list/search record to content for row display (no banner).
    pub fn to_content(movie: &TmdbMovie) -> Content {
        Self::map_movie(movie, false)
    }

    /// Map a trending record to hero content, banner populated.
    pub fn to_featured(movie: &TmdbMovie) -> Content {
        Self::map_movie(movie, true)
    }

    fn map_movie(movie: &TmdbMovie, with_banner: bool) -> Content {
        let banner_url = if with_banner {
            movie
                .backdrop_path
                .as_deref()
                .map(|path| normalize::image_url(path, normalize::BACKDROP_SIZE))
        } else {
            None
        };

        Content {
            id: movie.id,
            title: movie
                .title
                .clone()
                .unwrap_or_else(|| "Unknown Title".to_string()),
            description: movie.overview.clone().unwrap_or_default(),
            image_url: normalize::image_url(
                movie.poster_path.as_deref().unwrap_or(""),
                normalize::POSTER_SIZE,
            ),
            banner_url,
            year: normalize::release_year(movie.release_date.as_deref()),
            rating: normalize::format_rating(movie.vote_average.unwrap_or(0.0)),
            detail: MediaDetail::Movie {
                duration: normalize::format_runtime(movie.runtime.unwrap_or(0)),
            },
            genres: normalize::genre_names(movie.genre_ids.as_deref().unwrap_or(&[])),
        }
    }

    /// Map a detail record; genres arrive as named objects here, so no
    /// id lookup is involved.
    pub fn details_to_content(details: &TmdbMovieDetails) -> Content {
        Content {
            id: details.id,
            title: details
                .title
                .clone()
                .unwrap_or_else(|| "Unknown Title".to_string()),
            description: details.overview.clone().unwrap_or_default(),
            image_url: normalize::image_url(
                details.poster_path.as_deref().unwrap_or(""),
                normalize::POSTER_SIZE,
            ),
            banner_url: details
                .backdrop_path
                .as_deref()
                .map(|path| normalize::image_url(path, normalize::BACKDROP_SIZE)),
            year: normalize::release_year(details.release_date.as_deref()),
            rating: normalize::format_rating(details.vote_average.unwrap_or(0.0)),
            detail: MediaDetail::Movie {
                duration: normalize::format_runtime(details.runtime.unwrap_or(0)),
            },
            genres: details
                .genres
                .as_ref()
                .map(|genres| genres.iter().map(|g| g.name.clone()).collect())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::entities::content::MediaType;
    use crate::modules::catalog::infrastructure::external::tmdb::dto::TmdbGenre;

    fn record() -> TmdbMovie {
        TmdbMovie {
            id: 42,
            title: Some("The Irishman".to_string()),
            overview: Some("Hitman Frank Sheeran looks back.".to_string()),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: Some("/backdrop.jpg".to_string()),
            release_date: Some("2019-11-01".to_string()),
            vote_average: Some(7.83),
            genre_ids: Some(vec![80, 18]),
            runtime: Some(209),
        }
    }

    #[test]
    fn maps_complete_record() {
        let content = TmdbMapper::to_content(&record());

        assert_eq!(content.id, 42);
        assert_eq!(content.title, "The Irishman");
        assert_eq!(content.year, 2019);
        assert_eq!(content.rating, "7.8");
        assert_eq!(content.image_url, "https://image.tmdb.org/t/p/w500/poster.jpg");
        assert_eq!(content.genres, vec!["Crime", "Drama"]);
        assert_eq!(content.media_type(), MediaType::Movie);
        assert_eq!(
            content.detail,
            MediaDetail::Movie {
                duration: "3h 29m".to_string()
            }
        );
    }

    #[test]
    fn banner_only_populated_for_featured() {
        assert_eq!(TmdbMapper::to_content(&record()).banner_url, None);
        assert_eq!(
            TmdbMapper::to_featured(&record()).banner_url,
            Some("https://image.tmdb.org/t/p/w1280/backdrop.jpg".to_string())
        );
    }

    #[test]
    fn sparse_record_maps_with_defaults() {
        let sparse = TmdbMovie {
            id: 1,
            title: None,
            overview: None,
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            vote_average: None,
            genre_ids: None,
            runtime: None,
        };

        let content = TmdbMapper::to_featured(&sparse);
        assert_eq!(content.title, "Unknown Title");
        assert_eq!(content.description, "");
        assert_eq!(content.year, 0);
        assert_eq!(content.rating, "0.0");
        assert_eq!(content.banner_url, None);
        assert!(content.genres.is_empty());
        assert_eq!(
            content.detail,
            MediaDetail::Movie {
                duration: "0h 0m".to_string()
            }
        );
    }

    #[test]
    fn rating_keeps_exactly_one_fractional_digit() {
        for vote in [Some(7.0), Some(6.666), Some(10.0), None] {
            let content = TmdbMapper::to_content(&TmdbMovie {
                vote_average: vote,
                ..record()
            });
            let fraction = content.rating.split('.').nth(1).expect("decimal point");
            assert_eq!(fraction.len(), 1, "rating {} not one-decimal", content.rating);
        }
    }

    #[test]
    fn detail_record_uses_named_genres() {
        let details = TmdbMovieDetails {
            id: 42,
            title: Some("The Irishman".to_string()),
            overview: None,
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: Some("/backdrop.jpg".to_string()),
            release_date: Some("2019-11-01".to_string()),
            vote_average: Some(7.8),
            runtime: Some(209),
            genres: Some(vec![
                TmdbGenre {
                    id: 80,
                    name: "Crime".to_string(),
                },
                TmdbGenre {
                    id: 18,
                    name: "Drama".to_string(),
                },
            ]),
        };

        let content = TmdbMapper::details_to_content(&details);
        assert_eq!(content.genres, vec!["Crime", "Drama"]);
        assert_eq!(
            content.detail,
            MediaDetail::Movie {
                duration: "3h 29m".to_string()
            }
        );
        assert!(content.banner_url.is_some());
    }
}
