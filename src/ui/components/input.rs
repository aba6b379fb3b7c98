//! Input component for text fields.

use leptos::prelude::*;

/// Uncontrolled text input.
///
/// No `value` attribute is rendered, so the field starts empty and its
/// contents stay with the browser.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input placeholder="Spotify Playlist URL" style="display: block" />
/// }
/// ```
#[component]
pub fn Input(
    /// Input type (text, url, search, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(optional)]
    placeholder: Option<&'static str>,
    /// Inline style declarations.
    #[prop(default = "")]
    style: &'static str,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            placeholder=placeholder
            style=style
        />
    }
}
