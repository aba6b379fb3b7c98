//! In-memory music library.
//!
//! Holds playlists and derives categories and recommendations from them.
//!
//! # Architecture
//!
//! - [`Library`]: thread-safe playlist store, shared by all request handlers
//! - [`Category`]: songs grouped by genre or by artist
//! - [`Recommendation`]: catalog-backed suggestions for a category
//!
//! # Example
//!
//! ```rust
//! use playlist_generator::library::Library;
//!
//! let library = Library::with_sample_data();
//! assert_eq!(library.list_playlists().len(), 1);
//!
//! let rock = library.recommend(Some("rock"), Some(2));
//! assert_eq!(rock.count, 2);
//! ```

mod category;
mod model;
mod recommend;
mod store;

pub use category::{Category, CategoryKind};
pub use model::{NewPlaylist, NewSong, Playlist, PlaylistChanges, Song};
pub use recommend::{DEFAULT_LIMIT, GENERAL_CATEGORY, Recommendation, title_case};
pub use store::Library;
