//! Strong and emphasis substitution.
//!
//! Both passes match the shortest run of non-`*` characters between
//! their delimiters. Strong runs first so that `**x**` is never seen by
//! the emphasis pass.

use std::borrow::Cow;

use super::{non_empty_until, substitute};

/// Replace every `**text**` with `<strong>text</strong>`.
pub fn replace_strong(text: &str) -> Cow<'_, str> {
    substitute(text, b'*', |s| {
        let rest = s.strip_prefix("**")?;
        let (inner, after) = non_empty_until(rest, '*')?;
        // `non_empty_until` consumed the first closing star; the second
        // must follow immediately.
        after.strip_prefix('*')?;
        Some((2 + inner.len() + 2, format!("<strong>{inner}</strong>")))
    })
}

/// Replace every `*text*` with `<em>text</em>`.
pub fn replace_emphasis(text: &str) -> Cow<'_, str> {
    substitute(text, b'*', |s| {
        let (inner, _) = non_empty_until(&s[1..], '*')?;
        Some((1 + inner.len() + 1, format!("<em>{inner}</em>")))
    })
}
