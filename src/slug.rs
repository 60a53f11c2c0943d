//! Heading anchor slugs.
//!
//! The block renderer and the table-of-contents builder derive anchors for
//! the same headings independently, so both go through [`slugify`]. It is a
//! pure function of its input; nothing here keeps state between calls.
//!
//! Slugs are not deduplicated. Two headings with the same text get the same
//! anchor, and a heading that is only a numbering prefix gets an empty one.

use unicode_script::{Script, UnicodeScript};

/// Derive a URL-safe anchor from heading text.
///
/// Steps, in order:
/// 1. strip a leading numbering prefix (`1.2 `, `第3章：`, `Chapter 4`)
/// 2. lowercase
/// 3. spaces become hyphens
/// 4. drop everything but `a-z`, `0-9`, `-` and Han ideographs
/// 5. collapse hyphen runs and trim hyphens from both ends
///
/// # Example
/// ```
/// use ferrobook::slug::slugify;
///
/// assert_eq!(slugify("2.1 Hello World"), "hello-world");
/// assert_eq!(slugify("第一节：概述"), "一节概述");
/// ```
pub fn slugify(text: &str) -> String {
    let body = strip_number_prefix(text);
    let mut slug = String::with_capacity(body.len());

    for c in body.chars().flat_map(char::to_lowercase) {
        if c == ' ' || c == '-' {
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || is_han(c) {
            slug.push(c);
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Strip a leading chapter/section numbering prefix.
///
/// The prefix is any run of ASCII digits, `.`, ASCII whitespace and the
/// markers `第` `章` `节` `：`, optionally interleaved with the words
/// `chapter` or `section` when a number follows them.
pub fn strip_number_prefix(text: &str) -> &str {
    let mut rest = text;
    loop {
        rest = rest.trim_start_matches(is_prefix_char);
        match strip_marker_word(rest) {
            Some(after) => rest = after,
            None => return rest,
        }
    }
}

#[inline]
fn is_prefix_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_whitespace() || matches!(c, '.' | '第' | '章' | '节' | '：')
}

/// Strip `chapter`/`section` (any case) if a number follows it.
fn strip_marker_word(text: &str) -> Option<&str> {
    const WORDS: [&str; 2] = ["chapter", "section"];

    for word in WORDS {
        let Some(head) = text.get(..word.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(word) {
            continue;
        }
        let after = &text[word.len()..];
        if after.trim_start_matches(|c: char| c.is_ascii_whitespace()).starts_with(|c: char| c.is_ascii_digit()) {
            return Some(after);
        }
    }
    None
}

/// Whether `c` belongs to the Han script (`\p{Han}`).
#[inline]
pub fn is_han(c: char) -> bool {
    c.script() == Script::Han
}
