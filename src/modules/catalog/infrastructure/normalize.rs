//! Pure field-level normalization helpers shared by the source mappers.
//!
//! Every function here is total over well-formed input: a missing or
//! unparseable field resolves to the documented default instead of an
//! error, so a single bad record can never abort a batch.

use chrono::{Datelike, NaiveDate};

pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
/// Poster width for list/card art.
pub const POSTER_SIZE: &str = "w500";
/// Wider variant for banner/hero art.
pub const BACKDROP_SIZE: &str = "w1280";

/// Year used when a release/air date is missing or unparseable.
pub const YEAR_UNKNOWN: i32 = 0;

/// TMDB genre id table.
const GENRES: [(u32, &str); 19] = [
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

/// Build a full image URL from a CDN path fragment and size variant.
pub fn image_url(path: &str, size: &str) -> String {
    format!("{}/{}{}", IMAGE_BASE, size, path)
}

/// Extract the year from a `YYYY-MM-DD` date string.
pub fn release_year(date: Option<&str>) -> i32 {
    date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.year())
        .unwrap_or(YEAR_UNKNOWN)
}

/// Format a vote average to exactly one fractional digit.
pub fn format_rating(vote_average: f32) -> String {
    format!("{:.1}", vote_average.clamp(0.0, 10.0))
}

/// Format a runtime in minutes as `"{hours}h {minutes}m"`.
pub fn format_runtime(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Resolve numeric genre ids to names; unmapped ids become "Unknown".
pub fn genre_names(ids: &[u32]) -> Vec<String> {
    ids.iter()
        .map(|id| {
            GENRES
                .iter()
                .find(|(genre_id, _)| genre_id == id)
                .map(|(_, name)| (*name).to_string())
                .unwrap_or_else(|| "Unknown".to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_genre_ids_resolve_to_names() {
        assert_eq!(genre_names(&[28]), vec!["Action"]);
        assert_eq!(genre_names(&[80, 18]), vec!["Crime", "Drama"]);
        assert_eq!(genre_names(&[10770, 878]), vec!["TV Movie", "Science Fiction"]);
    }

    #[test]
    fn unknown_genre_id_resolves_to_unknown() {
        assert_eq!(genre_names(&[99999]), vec!["Unknown"]);
        assert_eq!(genre_names(&[28, 99999]), vec!["Action", "Unknown"]);
    }

    #[test]
    fn empty_genre_ids_resolve_to_empty() {
        assert!(genre_names(&[]).is_empty());
    }

    #[test]
    fn runtime_formats_hours_and_minutes() {
        assert_eq!(format_runtime(209), "3h 29m");
        assert_eq!(format_runtime(116), "1h 56m");
        assert_eq!(format_runtime(60), "1h 0m");
        assert_eq!(format_runtime(0), "0h 0m");
    }

    #[test]
    fn rating_always_has_one_fractional_digit() {
        assert_eq!(format_rating(7.8), "7.8");
        assert_eq!(format_rating(9.0), "9.0");
        assert_eq!(format_rating(6.666), "6.7");
        assert_eq!(format_rating(0.0), "0.0");
    }

    #[test]
    fn rating_is_clamped_to_vote_range() {
        assert_eq!(format_rating(11.2), "10.0");
        assert_eq!(format_rating(-1.0), "0.0");
    }

    #[test]
    fn year_is_extracted_from_release_date() {
        assert_eq!(release_year(Some("2019-11-01")), 2019);
        assert_eq!(release_year(Some("2013-04-07")), 2013);
    }

    #[test]
    fn missing_or_bad_dates_yield_sentinel_year() {
        assert_eq!(release_year(None), YEAR_UNKNOWN);
        assert_eq!(release_year(Some("")), YEAR_UNKNOWN);
        assert_eq!(release_year(Some("not-a-date")), YEAR_UNKNOWN);
        assert_eq!(release_year(Some("2019-13-99")), YEAR_UNKNOWN);
    }

    #[test]
    fn image_urls_prefix_base_and_size() {
        assert_eq!(
            image_url("/mbYQLLluS651W89jO7MOZcL7UWH.jpg", POSTER_SIZE),
            "https://image.tmdb.org/t/p/w500/mbYQLLluS651W89jO7MOZcL7UWH.jpg"
        );
        assert_eq!(
            image_url("/d1sVANghKKMZNvqjW0V6y1ejvV9.jpg", BACKDROP_SIZE),
            "https://image.tmdb.org/t/p/w1280/d1sVANghKKMZNvqjW0V6y1ejvV9.jpg"
        );
    }
}
