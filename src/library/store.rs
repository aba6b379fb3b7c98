//! In-memory playlist storage.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use super::model::{NewPlaylist, NewSong, Playlist, PlaylistChanges, Song};

/// Thread-safe playlist store.
///
/// Cloning is cheap; all clones share the same playlists. Playlist and song
/// ids come from two independent counters and are never reused.
#[derive(Debug, Clone)]
pub struct Library {
    inner: Arc<RwLock<LibraryInner>>,
}

#[derive(Debug)]
struct LibraryInner {
    playlists: Vec<Playlist>,
    next_playlist_id: u64,
    next_song_id: u64,
}

impl LibraryInner {
    fn allocate_songs(&mut self, songs: Vec<NewSong>) -> Vec<Song> {
        songs
            .into_iter()
            .map(|song| {
                let id = self.next_song_id;
                self.next_song_id += 1;
                song.into_song(id)
            })
            .collect()
    }

    fn insert(&mut self, new: NewPlaylist) -> Playlist {
        let songs = self.allocate_songs(new.songs);
        let now = Utc::now();
        let playlist = Playlist {
            id: self.next_playlist_id,
            name: new.name,
            description: new.description,
            songs,
            created_at: now,
            updated_at: now,
        };
        self.next_playlist_id += 1;
        self.playlists.push(playlist.clone());
        playlist
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(LibraryInner {
                playlists: Vec::new(),
                next_playlist_id: 1,
                next_song_id: 1,
            })),
        }
    }

    /// Create a library holding the sample playlist served out of the box.
    #[must_use]
    pub fn with_sample_data() -> Self {
        let library = Self::new();
        library.write().insert(NewPlaylist {
            name: "My First Playlist".to_string(),
            description: Some("A sample playlist with various genres".to_string()),
            songs: vec![
                sample_song("Pop Song 1", "Artist A", "pop", 180),
                sample_song("Sad Song 1", "Artist B", "sad", 200),
                sample_song("Rock Song 1", "Artist C", "rock", 220),
                sample_song("Pop Song 2", "Artist A", "pop", 190),
            ],
        });
        library
    }

    fn read(&self) -> RwLockReadGuard<'_, LibraryInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LibraryInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All playlists in creation order.
    #[must_use]
    pub fn list_playlists(&self) -> Vec<Playlist> {
        self.read().playlists.clone()
    }

    #[must_use]
    pub fn get_playlist(&self, id: u64) -> Option<Playlist> {
        self.read().playlists.iter().find(|p| p.id == id).cloned()
    }

    /// Store a new playlist, assigning ids to it and its songs.
    pub fn create_playlist(&self, new: NewPlaylist) -> Playlist {
        self.write().insert(new)
    }

    /// Apply `changes` to the playlist with `id`.
    ///
    /// Returns `None` when no such playlist exists. A present song list
    /// replaces the old one and gets fresh song ids.
    pub fn update_playlist(&self, id: u64, changes: PlaylistChanges) -> Option<Playlist> {
        let mut guard = self.write();
        let index = guard.playlists.iter().position(|p| p.id == id)?;

        let songs = changes.songs.map(|songs| guard.allocate_songs(songs));
        let playlist = &mut guard.playlists[index];
        if let Some(name) = changes.name {
            playlist.name = name;
        }
        if let Some(description) = changes.description {
            playlist.description = Some(description);
        }
        if let Some(songs) = songs {
            playlist.songs = songs;
        }
        playlist.updated_at = Utc::now();
        Some(playlist.clone())
    }

    /// Remove a playlist. Returns `false` if it did not exist.
    pub fn delete_playlist(&self, id: u64) -> bool {
        let mut guard = self.write();
        let before = guard.playlists.len();
        guard.playlists.retain(|p| p.id != id);
        guard.playlists.len() != before
    }

    /// Every song of every playlist, in playlist order.
    #[must_use]
    pub fn all_songs(&self) -> Vec<Song> {
        self.read()
            .playlists
            .iter()
            .flat_map(|p| p.songs.iter().cloned())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().playlists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn sample_song(title: &str, artist: &str, genre: &str, duration: u32) -> NewSong {
    NewSong {
        title: title.to_string(),
        artist: artist.to_string(),
        genre: Some(genre.to_string()),
        duration: Some(duration),
    }
}
