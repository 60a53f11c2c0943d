//! Inline formatter for single lines of Markdown.
//!
//! Formatting is an ordered sequence of independent substitution passes,
//! each applied leftmost-first and non-overlapping across the whole line:
//! 1. Images: `![alt](src)`
//! 2. Strong: `**text**`
//! 3. Emphasis: `*text*`
//! 4. Code spans: `` `text` ``
//! 5. Links: `[text](href)`
//!
//! Strong must run before emphasis: `**x**` is consumed whole by pass 2 and
//! the output contains no `*` for pass 3 to pick up. Content is passed
//! through without escaping; chapter sources are author-controlled.

mod code_span;
mod emphasis;
mod links;

use std::borrow::Cow;

use memchr::memchr;

pub use code_span::replace_code_spans;
pub use emphasis::{replace_emphasis, replace_strong};
pub use links::{replace_images, replace_links};

/// Rewrite inline Markdown spans in `text` into HTML.
///
/// Unmatched delimiters are left as literal text.
///
/// # Example
/// ```
/// use ferrobook::inline::format_inline;
///
/// assert_eq!(
///     format_inline("**bold** and *italic*"),
///     "<strong>bold</strong> and <em>italic</em>"
/// );
/// ```
pub fn format_inline(text: &str) -> String {
    let text = replace_images(text);
    let text = replace_strong(&text);
    let text = replace_emphasis(&text);
    let text = replace_code_spans(&text);
    let text = replace_links(&text);
    text.into_owned()
}

/// Run one substitution pass over `text`.
///
/// `try_match` is offered the suffix of `text` starting at each occurrence
/// of `trigger` and returns the number of bytes it consumed plus the
/// replacement HTML. Consumed bytes are never rescanned. `trigger` must be
/// ASCII so that stepping past it stays on a char boundary.
pub(crate) fn substitute<F>(text: &str, trigger: u8, mut try_match: F) -> Cow<'_, str>
where
    F: FnMut(&str) -> Option<(usize, String)>,
{
    debug_assert!(trigger.is_ascii());
    let bytes = text.as_bytes();
    let Some(mut pos) = memchr(trigger, bytes) else {
        return Cow::Borrowed(text);
    };

    let mut out: Option<String> = None;
    let mut copied = 0;

    loop {
        if let Some((len, html)) = try_match(&text[pos..]) {
            let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 32));
            buf.push_str(&text[copied..pos]);
            buf.push_str(&html);
            pos += len;
            copied = pos;
        } else {
            pos += 1;
        }

        match memchr(trigger, &bytes[pos..]) {
            Some(offset) => pos += offset,
            None => break,
        }
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}

/// Split `s` at the first `delim`, requiring a non-empty head.
#[inline]
pub(crate) fn non_empty_until(s: &str, delim: char) -> Option<(&str, &str)> {
    let end = s.find(delim)?;
    if end == 0 {
        return None;
    }
    Some((&s[..end], &s[end + delim.len_utf8()..]))
}
