use serde::{Deserialize, Serialize};

/// Kind of catalog item, derived from [`MediaDetail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
    Anime,
}

/// Per-type payload of a catalog item.
///
/// Exactly one of duration / episodes / seasons exists per item; the sum
/// type enforces that at construction instead of leaving three optional
/// fields to keep in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaDetail {
    Movie {
        /// Formatted runtime, e.g. "3h 29m"
        duration: String,
    },
    Anime {
        episodes: u32,
    },
    Tv {
        seasons: u32,
    },
}

impl MediaDetail {
    pub fn media_type(&self) -> MediaType {
        match self {
            MediaDetail::Movie { .. } => MediaType::Movie,
            MediaDetail::Anime { .. } => MediaType::Anime,
            MediaDetail::Tv { .. } => MediaType::Tv,
        }
    }
}

/// Composite identity for a catalog item.
///
/// Raw source ids are small integers assigned independently per source,
/// so the bare `id` is only unique within one source. Anything that needs
/// cross-source identity (dedup, map keys) must key on this pair, never
/// on `id` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentKey {
    pub id: u32,
    pub media_type: MediaType,
}

/// Canonical, normalized representation of one catalog item.
///
/// Every `Content` value has passed through exactly one mapper; raw
/// source records never reach consumers. Values are built fresh per
/// request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Source-assigned id, unique only within the originating source.
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Wide backdrop art; populated only for featured/hero items and for
    /// built-in records that carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    /// Release/first-air year; 0 when the source date was missing or
    /// unparseable.
    pub year: i32,
    /// Always formatted to exactly one fractional digit, in [0.0, 10.0].
    pub rating: String,
    #[serde(flatten)]
    pub detail: MediaDetail,
    /// Resolved genre names; always present, possibly empty.
    pub genres: Vec<String>,
}

impl Content {
    pub fn media_type(&self) -> MediaType {
        self.detail.media_type()
    }

    pub fn key(&self) -> ContentKey {
        ContentKey {
            id: self.id,
            media_type: self.media_type(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u32) -> Content {
        Content {
            id,
            title: "Heat".to_string(),
            description: String::new(),
            image_url: "https://image.tmdb.org/t/p/w500/heat.jpg".to_string(),
            banner_url: None,
            year: 1995,
            rating: "8.3".to_string(),
            detail: MediaDetail::Movie {
                duration: "2h 50m".to_string(),
            },
            genres: vec!["Crime".to_string()],
        }
    }

    #[test]
    fn media_type_follows_detail() {
        assert_eq!(movie(1).media_type(), MediaType::Movie);

        let tv = Content {
            detail: MediaDetail::Tv { seasons: 3 },
            ..movie(1)
        };
        assert_eq!(tv.media_type(), MediaType::Tv);
    }

    #[test]
    fn key_distinguishes_sources_with_colliding_ids() {
        let a = movie(7);
        let b = Content {
            detail: MediaDetail::Anime { episodes: 12 },
            ..movie(7)
        };
        assert_eq!(a.id, b.id);
        assert_ne!(a.key(), b.key());
    }
}
