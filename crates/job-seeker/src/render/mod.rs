//! Rich-text rendering for untrusted payload fields, plus the explicit theme
//! handed to every page renderer.

mod markdown;
mod sanitize;
mod theme;

pub use markdown::render_markdown;
pub use sanitize::{sanitize_rich_text, RichTextSanitizer};
pub use theme::Theme;

/// Escape plain text for interpolation into element content or a quoted
/// attribute value.
pub fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
