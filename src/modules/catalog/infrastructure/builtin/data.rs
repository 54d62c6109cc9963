//! Built-in datasets: the anime and TV catalogs, and the raw movie list
//! substituted when the remote catalog is unreachable.

use crate::modules::catalog::infrastructure::external::tmdb::dto::TmdbMovie;

/// Raw anime record, already carrying display-ready fields except for
/// the rating, which still needs one-decimal formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimeRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub banner: &'static str,
    pub year: i32,
    pub rating: f32,
    pub episodes: u32,
    pub genres: &'static [&'static str],
}

/// Raw TV record; same shape as [`AnimeRecord`] with seasons instead of
/// episodes. The source data carries no genre information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TvRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub banner: &'static str,
    pub year: i32,
    pub rating: f32,
    pub seasons: u32,
}

pub const ANIME_CATALOG: &[AnimeRecord] = &[
    AnimeRecord {
        id: 7,
        title: "Attack on Titan",
        description: "After his hometown is destroyed and his mother is killed, young Eren Jaeger vows to cleanse the earth of the giant humanoid Titans.",
        image: "https://images.unsplash.com/photo-1635805737707-575885ab0820?w=500",
        banner: "https://images.unsplash.com/photo-1635805737707-575885ab0820?w=1200",
        year: 2013,
        rating: 9.0,
        episodes: 75,
        genres: &["Action", "Drama", "Fantasy"],
    },
    AnimeRecord {
        id: 8,
        title: "Demon Slayer",
        description: "A family is attacked by demons and only two members survive - Tanjiro and his sister Nezuko, who is turning into a demon slowly.",
        image: "https://images.unsplash.com/photo-1578632749014-ca77efd052eb?w=500",
        banner: "https://images.unsplash.com/photo-1578632749014-ca77efd052eb?w=1200",
        year: 2019,
        rating: 8.7,
        episodes: 44,
        genres: &["Action", "Fantasy"],
    },
];

pub const TV_CATALOG: &[TvRecord] = &[
    TvRecord {
        id: 9,
        title: "Stranger Things",
        description: "When a young boy vanishes, a small town uncovers a mystery involving secret experiments, terrifying supernatural forces and one strange little girl.",
        image: "https://images.unsplash.com/photo-1598899134739-24c46f58b8c0?w=500",
        banner: "https://images.unsplash.com/photo-1598899134739-24c46f58b8c0?w=1200",
        year: 2016,
        rating: 8.7,
        seasons: 4,
    },
    TvRecord {
        id: 10,
        title: "The Crown",
        description: "Follows the political rivalries and romance of Queen Elizabeth II's reign and the events that shaped the second half of the twentieth century.",
        image: "https://images.unsplash.com/photo-1535016120720-40c646be5580?w=500",
        banner: "https://images.unsplash.com/photo-1535016120720-40c646be5580?w=1200",
        year: 2016,
        rating: 8.6,
        seasons: 5,
    },
];

/// Raw movie records substituted when a TMDB list request fails. These
/// mirror the list-endpoint shape, so they flow through the same mapper
/// as live responses.
pub fn fallback_movies() -> Vec<TmdbMovie> {
    vec![
        TmdbMovie {
            id: 1,
            title: Some("The Irishman".to_string()),
            overview: Some(
                "Hitman Frank Sheeran looks back at the secrets he kept as a loyal member of the Bufalino crime family."
                    .to_string(),
            ),
            poster_path: Some("/mbYQLLluS651W89jO7MOZcL7UWH.jpg".to_string()),
            backdrop_path: Some("/d1sVANghKKMZNvqjW0V6y1ejvV9.jpg".to_string()),
            release_date: Some("2019-11-01".to_string()),
            vote_average: Some(7.8),
            genre_ids: Some(vec![80, 18]),
            runtime: Some(209),
        },
        TmdbMovie {
            id: 2,
            title: Some("Extraction".to_string()),
            overview: Some(
                "A black-market mercenary who has nothing to lose is hired to rescue the kidnapped son of an imprisoned international crime lord."
                    .to_string(),
            ),
            poster_path: Some("/1X4h40fcB4WWUmIBK0auT4zRBAV.jpg".to_string()),
            backdrop_path: Some("/1R6cvRtZgsYCkh8UFuWFN33xBP4.jpg".to_string()),
            release_date: Some("2020-04-24".to_string()),
            vote_average: Some(6.7),
            genre_ids: Some(vec![28, 53]),
            runtime: Some(116),
        },
    ]
}
