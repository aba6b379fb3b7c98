//! Server-rendered pages.
//!
//! # Structure
//!
//! - [`generator`]: the playlist generator form
//! - [`page`]: document shell and page rendering
//! - [`components`]: reusable form components

pub mod components;
pub mod generator;
pub mod page;

pub use generator::PlaylistGenerator;
pub use page::render_index;
