//! Button component.

use leptos::prelude::*;

/// Plain button with no client-side behavior attached.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button button_type="submit" disabled=true>
///         "Generate Playlists"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Whether the button is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    view! {
        <button type=button_type disabled=disabled>
            {children()}
        </button>
    }
}
