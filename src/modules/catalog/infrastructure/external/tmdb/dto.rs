use serde::{Deserialize, Serialize};

// Response envelope
//
// `results` stays an Option so callers can distinguish "present but
// empty" from "absent": list endpoints substitute the fallback movies
// when the field is missing, search just treats it as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbListResponse {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub results: Option<Vec<TmdbMovie>>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u32>,
}

/// Movie record as returned by list and search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbMovie {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub genre_ids: Option<Vec<u32>>,
    // Only present on the built-in fallback records; list endpoints
    // omit it.
    #[serde(default)]
    pub runtime: Option<u32>,
}

/// Full movie record from the detail endpoint; genres arrive as objects
/// here instead of bare ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbMovieDetails {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Option<Vec<TmdbGenre>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbGenre {
    pub id: u32,
    pub name: String,
}
