//! Code span substitution.
//!
//! Single backticks only; content is not escaped.

use std::borrow::Cow;

use super::{non_empty_until, substitute};

/// Replace every `` `text` `` with `<code>text</code>`.
pub fn replace_code_spans(text: &str) -> Cow<'_, str> {
    substitute(text, b'`', |s| {
        let (inner, _) = non_empty_until(&s[1..], '`')?;
        Some((1 + inner.len() + 1, format!("<code>{inner}</code>")))
    })
}
