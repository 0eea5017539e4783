//! Song records and the slug index used for navigation.
//!
//! The map only needs titles and slugs; the remaining fields travel with the
//! record so the detail page can look a song up by the same slug the map
//! navigates to.

use fnv::FnvHashMap;
use thiserror::Error;

/// Path prefix of the song detail pages.
pub const DETAIL_PREFIX: &str = "/music/";

/// One entry of the music catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub slug: String,
    pub audio_src: String,
    pub lyrics: String,
    /// Preferred ring level, 1-based. The map distributes songs evenly and
    /// does not read this.
    pub ring: Option<u8>,
    pub credits: Option<String>,
    pub release_date: Option<String>,
}

impl Song {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            audio_src: String::new(),
            lyrics: String::new(),
            ring: None,
            credits: None,
            release_date: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("song slug must not be empty (title: {title:?})")]
    EmptySlug { title: String },
    #[error("duplicate song slug {0:?}")]
    DuplicateSlug(String),
    #[error("no song with slug {0:?}")]
    NotFound(String),
}

/// Ordered, slug-indexed collection of songs.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    songs: Vec<Song>,
    by_slug: FnvHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or repeated slugs.
    pub fn new(songs: Vec<Song>) -> Result<Self, CatalogError> {
        let mut by_slug = FnvHashMap::default();
        for (i, song) in songs.iter().enumerate() {
            if song.slug.is_empty() {
                return Err(CatalogError::EmptySlug {
                    title: song.title.clone(),
                });
            }
            if by_slug.insert(song.slug.clone(), i).is_some() {
                return Err(CatalogError::DuplicateSlug(song.slug.clone()));
            }
        }
        Ok(Self { songs, by_slug })
    }

    /// The five songs published on the site.
    pub fn default_catalog() -> Self {
        let songs = DEFAULT_SONGS
            .iter()
            .map(|s| Song {
                title: s.title.to_string(),
                slug: s.slug.to_string(),
                audio_src: s.audio_src.to_string(),
                lyrics: s.lyrics.trim_end().to_string(),
                ring: Some(s.ring),
                credits: Some(s.credits.to_string()),
                release_date: Some(s.release_date.to_string()),
            })
            .collect::<Vec<_>>();
        let by_slug = songs
            .iter()
            .enumerate()
            .map(|(i, s)| (s.slug.clone(), i))
            .collect();
        Self { songs, by_slug }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    pub fn get(&self, slug: &str) -> Option<&Song> {
        self.by_slug.get(slug).map(|&i| &self.songs[i])
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    /// Lookup for the detail page; a missing slug is a "not found" response.
    pub fn resolve(&self, slug: &str) -> Result<&Song, CatalogError> {
        self.get(slug)
            .ok_or_else(|| CatalogError::NotFound(slug.to_string()))
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.songs.iter().map(|s| s.slug.as_str())
    }
}

/// Detail page path for a slug.
pub fn detail_path(slug: &str) -> String {
    format!("{DETAIL_PREFIX}{slug}")
}

/// Header line above the map, e.g. "5 nodes · archive".
pub fn archive_caption(count: usize) -> String {
    format!("{count} nodes · archive")
}

/// Extract the slug from a detail page path (`/music/<slug>`, optional
/// trailing slash). Returns `None` for any other path.
pub fn slug_from_path(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(DETAIL_PREFIX)?;
    let slug = rest.strip_suffix('/').unwrap_or(rest);
    (!slug.is_empty() && !slug.contains('/')).then_some(slug)
}

struct SongSeed {
    title: &'static str,
    slug: &'static str,
    audio_src: &'static str,
    lyrics: &'static str,
    ring: u8,
    credits: &'static str,
    release_date: &'static str,
}

const DEFAULT_SONGS: &[SongSeed] = &[
    SongSeed {
        title: "Rush",
        slug: "rush",
        audio_src: "/audio/rush_final2.wav",
        lyrics: include_str!("../content/rush.txt"),
        ring: 2,
        credits: "Prod. michael harrison\nmix, master, lyrics and vocals by me",
        release_date: "December 29th, 2025",
    },
    SongSeed {
        title: "Testing",
        slug: "testing",
        audio_src: "/audio/testing.wav",
        lyrics: include_str!("../content/testing.txt"),
        ring: 4,
        credits: "Prod. michael harrison\nmix, master, lyrics and vocals by me",
        release_date: "December 29th, 2025",
    },
    SongSeed {
        title: "Trophy Hunting",
        slug: "trophy-hunting",
        audio_src: "/audio/Trophy Hunting.wav",
        lyrics: include_str!("../content/trophy-hunting.txt"),
        ring: 6,
        credits: "prod. n999\nmix, master, lyrics and vocals by me",
        release_date: "December 29th, 2025",
    },
    SongSeed {
        title: "Supernova",
        slug: "supernova",
        audio_src: "/audio/supernova5.wav",
        lyrics: include_str!("../content/supernova.txt"),
        ring: 3,
        credits: "Prod. fiftyzero\ninterpolated lyrics from Starset - Telescope\nmix, master, lyrics and vocals by me",
        release_date: "December 30th, 2025",
    },
    SongSeed {
        title: "Samsara (City Lights) [DEMO]",
        slug: "samsara-city-lights-demo",
        audio_src: "/audio/Samsara (City Lights) DEMO.wav",
        lyrics: include_str!("../content/samsara-city-lights-demo.txt"),
        ring: 5,
        credits: "Prod. fiftyzero\nMix, master, lyrics and vocals by me",
        release_date: "December 31st, 2025",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_from_path_accepts_detail_paths_only() {
        assert_eq!(slug_from_path("/music/rush"), Some("rush"));
        assert_eq!(slug_from_path("/music/rush/"), Some("rush"));
        assert_eq!(slug_from_path("/music/"), None);
        assert_eq!(slug_from_path("/music/a/b"), None);
        assert_eq!(slug_from_path("/blog/rush"), None);
    }

    #[test]
    fn detail_path_round_trips_through_slug_from_path() {
        let p = detail_path("trophy-hunting");
        assert_eq!(p, "/music/trophy-hunting");
        assert_eq!(slug_from_path(&p), Some("trophy-hunting"));
    }
}
