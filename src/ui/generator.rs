//! Playlist generator form.
//!
//! A static placeholder: the inputs are uncontrolled and the button is always
//! disabled. Nothing in the rendered markup can issue a request.

use leptos::prelude::*;

use crate::ui::components::{Button, Input};

/// Inline style of the outer container.
pub const CONTAINER_STYLE: &str = "padding: 40px; font-family: Arial";

/// Inline style shared by both text inputs.
pub const FIELD_STYLE: &str = "display: block; margin-bottom: 12px; width: 320px";

/// The generator form.
#[component]
pub fn PlaylistGenerator() -> impl IntoView {
    view! {
        <div style=CONTAINER_STYLE>
            <h1>"AI Playlist Generator"</h1>

            <p>"Paste a Spotify playlist and generate genre-based playlists using AI."</p>

            <Input
                input_type="text"
                placeholder="Spotify Playlist URL"
                style=FIELD_STYLE
            />

            <Input
                input_type="text"
                placeholder="Genres (e.g. Chill, Workout, Party)"
                style=FIELD_STYLE
            />

            <Button button_type="submit" disabled=true>
                "Generate Playlists"
            </Button>
        </div>
    }
}

/// Render the form to an HTML fragment.
#[must_use]
pub fn render() -> String {
    view! { <PlaylistGenerator/> }.to_html()
}
