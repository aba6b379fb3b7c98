//! Playlist and song types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A song stored in a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: u64,
    pub title: String,
    pub artist: String,
    /// Free-form genre tag (e.g. `pop`, `rock`, `sad`).
    #[serde(default)]
    pub genre: Option<String>,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: Option<u32>,
}

impl Song {
    /// Lowercased genre, if the song has one.
    #[must_use]
    pub fn genre_key(&self) -> Option<String> {
        self.genre.as_deref().map(str::to_lowercase)
    }

    #[must_use]
    pub fn artist_key(&self) -> String {
        self.artist.to_lowercase()
    }
}

/// A named, ordered collection of songs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub songs: Vec<Song>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Song data supplied by a client; the library assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
}

impl NewSong {
    pub(crate) fn into_song(self, id: u64) -> Song {
        Song {
            id,
            title: self.title,
            artist: self.artist,
            genre: self.genre,
            duration: self.duration,
        }
    }
}

/// Body of a playlist creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewPlaylist {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub songs: Vec<NewSong>,
}

/// Partial update of a playlist. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PlaylistChanges {
    #[validate(length(min = 1, max = 100))]
    #[serde(default)]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub description: Option<String>,
    /// Replaces the whole song list when present.
    #[serde(default)]
    pub songs: Option<Vec<NewSong>>,
}
