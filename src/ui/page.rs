//! Full HTML documents.

use super::generator;

/// Title of the generator page.
pub const PAGE_TITLE: &str = "AI Playlist Generator";

/// Wrap rendered content in the HTML document shell.
///
/// The shell loads no scripts or stylesheets.
fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
</head>
<body>
    <div id="root">{content}</div>
</body>
</html>"#
    )
}

/// Render the generator page served at `/`.
#[must_use]
pub fn render_index() -> String {
    html_shell(PAGE_TITLE, &generator::render())
}
