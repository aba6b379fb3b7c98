//! Rule-based song recommendations.
//!
//! Songs come from a fixed catalog keyed by genre. Categories the catalog
//! does not know fall back to the library: a known genre yields a synthetic
//! "Recommended ..." song, a known artist a synthetic "Similar to ..." song.

use serde::{Deserialize, Serialize};

use super::category::CategoryKind;
use super::model::Song;
use super::store::Library;

/// Number of songs returned when the caller does not say.
pub const DEFAULT_LIMIT: usize = 5;

/// Category reported when no category was requested.
pub const GENERAL_CATEGORY: &str = "general";

/// Recommendation result for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub recommended_songs: Vec<Song>,
    pub count: usize,
}

type CatalogEntry = (u64, &'static str, &'static str, u32);

const CATALOG: &[(&str, &[CatalogEntry])] = &[
    (
        "pop",
        &[
            (1001, "Popular Pop Hit", "Pop Star", 195),
            (1002, "Catchy Tune", "Top Artist", 210),
            (1003, "Summer Vibes", "Chart Topper", 185),
        ],
    ),
    (
        "sad",
        &[
            (2001, "Emotional Ballad", "Soul Singer", 240),
            (2002, "Melancholy Melody", "Heartfelt Artist", 220),
            (2003, "Tears and Rain", "Emotional Voice", 260),
        ],
    ),
    (
        "rock",
        &[
            (3001, "Rock Anthem", "Rock Band", 280),
            (3002, "Electric Guitar", "Hard Rockers", 250),
            (3003, "Power Chord", "Rock Legends", 270),
        ],
    ),
];

fn catalog_song(genre: &str, &(id, title, artist, duration): &CatalogEntry) -> Song {
    Song {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        genre: Some(genre.to_string()),
        duration: Some(duration),
    }
}

fn catalog_genre(genre: &str) -> Option<Vec<Song>> {
    CATALOG
        .iter()
        .find(|(name, _)| *name == genre)
        .map(|(name, entries)| entries.iter().map(|e| catalog_song(name, e)).collect())
}

fn whole_catalog() -> impl Iterator<Item = Song> {
    CATALOG
        .iter()
        .flat_map(|(name, entries)| entries.iter().map(move |e| catalog_song(name, e)))
}

/// Capitalize the first letter of every run of cased letters, lowercase the rest.
///
/// Uncased characters (digits, punctuation, CJK ideographs) end a word.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

impl Library {
    /// Recommend up to `limit` songs for `category`.
    ///
    /// The category is matched case-insensitively; a missing or empty one
    /// returns the head of the catalog under the `general` category.
    #[must_use]
    pub fn recommend(&self, category: Option<&str>, limit: Option<usize>) -> Recommendation {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        let category = category
            .map(str::to_lowercase)
            .filter(|c| !c.is_empty());

        let (category, mut songs) = match category {
            None => (
                GENERAL_CATEGORY.to_string(),
                whole_catalog().take(limit).collect(),
            ),
            Some(category) => {
                let songs = self.songs_for_category(&category, limit);
                (category, songs)
            }
        };
        songs.truncate(limit);

        Recommendation {
            category,
            count: songs.len(),
            recommended_songs: songs,
        }
    }

    fn songs_for_category(&self, category: &str, limit: usize) -> Vec<Song> {
        if let Some(songs) = catalog_genre(category) {
            return songs;
        }

        match self.category(category).map(|c| c.kind) {
            Some(CategoryKind::Genre) => vec![Song {
                id: 9999,
                title: format!("Recommended {} Song", title_case(category)),
                artist: "Recommended Artist".to_string(),
                genre: Some(category.to_string()),
                duration: Some(200),
            }],
            Some(CategoryKind::Artist) => vec![Song {
                id: 8888,
                title: format!("Similar to {}", title_case(category)),
                artist: "Similar Artist".to_string(),
                genre: Some("pop".to_string()),
                duration: Some(190),
            }],
            None => whole_catalog().take(limit).collect(),
        }
    }
}
