//! Grouping of library songs into genre and artist categories.

use serde::{Deserialize, Serialize};

use super::model::Song;
use super::store::Library;

/// What a category groups songs by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Genre,
    Artist,
}

/// Songs sharing a (lowercased) genre or artist name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    pub song_count: usize,
    pub songs: Vec<Song>,
}

/// Group `songs` by `key`, keeping the order in which keys first appear.
fn group_by<F>(songs: &[Song], kind: CategoryKind, key: F) -> Vec<Category>
where
    F: Fn(&Song) -> Option<String>,
{
    let mut groups: Vec<(String, Vec<Song>)> = Vec::new();
    for song in songs {
        let Some(name) = key(song) else { continue };
        match groups.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, members)) => members.push(song.clone()),
            None => groups.push((name, vec![song.clone()])),
        }
    }

    groups
        .into_iter()
        .map(|(name, songs)| Category {
            name,
            kind,
            song_count: songs.len(),
            songs,
        })
        .collect()
}

impl Library {
    /// All categories: genres first, then artists.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let songs = self.all_songs();
        let mut categories = group_by(&songs, CategoryKind::Genre, Song::genre_key);
        categories.extend(group_by(&songs, CategoryKind::Artist, |s| {
            Some(s.artist_key())
        }));
        categories
    }

    /// Look a category up by name, ignoring case.
    ///
    /// A genre wins over an artist of the same name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<Category> {
        let name = name.to_lowercase();
        self.categories().into_iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn songs_by_genre(&self, genre: &str) -> Vec<Song> {
        let genre = genre.to_lowercase();
        self.all_songs()
            .into_iter()
            .filter(|s| s.genre_key().as_deref() == Some(genre.as_str()))
            .collect()
    }

    #[must_use]
    pub fn songs_by_artist(&self, artist: &str) -> Vec<Song> {
        let artist = artist.to_lowercase();
        self.all_songs()
            .into_iter()
            .filter(|s| s.artist_key() == artist)
            .collect()
    }
}
