//! Image and link substitution.
//!
//! Handles:
//! - Images: `![alt](src)`, wrapped in an image figure
//! - Inline links: `[text](href)`
//!
//! Alt text, sources and hrefs are passed through verbatim.

use std::borrow::Cow;

use super::{non_empty_until, substitute};

/// Replace every `![alt](src)` with an image figure.
///
/// The alt text may be empty; the source may not.
pub fn replace_images(text: &str) -> Cow<'_, str> {
    substitute(text, b'!', |s| {
        let rest = s.strip_prefix("![")?;
        let close = rest.find(']')?;
        let alt = &rest[..close];
        let after = rest[close + 1..].strip_prefix('(')?;
        let (src, _) = non_empty_until(after, ')')?;
        let len = 2 + close + 1 + 1 + src.len() + 1;
        Some((
            len,
            format!("<figure class=\"img\"><img src=\"{src}\" alt=\"{alt}\"></figure>"),
        ))
    })
}

/// Replace every `[text](href)` with an anchor.
///
/// Both the text and the href must be non-empty.
pub fn replace_links(text: &str) -> Cow<'_, str> {
    substitute(text, b'[', |s| {
        let rest = &s[1..];
        let (label, after) = non_empty_until(rest, ']')?;
        let after = after.strip_prefix('(')?;
        let (href, _) = non_empty_until(after, ')')?;
        let len = 1 + label.len() + 1 + 1 + href.len() + 1;
        Some((len, format!("<a href=\"{href}\">{label}</a>")))
    })
}
