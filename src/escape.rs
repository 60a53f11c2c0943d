//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for first escapable character,
//! then bulk-copies segments between escapes.
//!
//! Two contexts are covered:
//! - code-block bodies, where only `&`, `<` and `>` are rewritten
//! - attribute values (anchor ids, language classes), where quotes are
//!   rewritten too

use memchr::{memchr2, memchr3};

/// Lookup table for escapable characters in code-block text.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table
};

/// Lookup table for escapable characters in attributes.
const ATTR_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// Escape code text into output buffer.
///
/// Escapes `<`, `>`, and `&` to their HTML entity equivalents. Quotes are
/// left alone so source code stays readable in the generated page.
///
/// # Example
/// ```
/// use ferrobook::escape::escape_text_into;
///
/// let mut out = Vec::new();
/// escape_text_into(&mut out, b"if a < b && c");
/// assert_eq!(out, b"if a &lt; b &amp;&amp; c");
/// ```
#[inline]
pub fn escape_text_into(out: &mut Vec<u8>, input: &[u8]) {
    let first = memchr3(b'<', b'>', b'&', input);
    escape_into_with_table(out, input, first, &TEXT_ESCAPE_TABLE);
}

/// Escape an attribute value into output buffer.
///
/// Escapes `<`, `>`, `&`, `"`, and `'` to their HTML entity equivalents.
///
/// # Example
/// ```
/// use ferrobook::escape::escape_attr_into;
///
/// let mut out = Vec::new();
/// escape_attr_into(&mut out, b"value=\"test\"");
/// assert_eq!(out, b"value=&quot;test&quot;");
/// ```
#[inline]
pub fn escape_attr_into(out: &mut Vec<u8>, input: &[u8]) {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr2(b'"', b'\'', input);
    escape_into_with_table(out, input, min_opt(a, b), &ATTR_ESCAPE_TABLE);
}

#[inline]
fn escape_into_with_table(
    out: &mut Vec<u8>,
    input: &[u8],
    first: Option<usize>,
    escape_table: &[bool; 256],
) {
    let Some(mut pos) = first else {
        out.extend_from_slice(input);
        return;
    };

    out.extend_from_slice(&input[..pos]);

    while pos < input.len() {
        let scan_start = pos;
        while pos < input.len() && !escape_table[input[pos] as usize] {
            pos += 1;
        }

        if pos > scan_start {
            out.extend_from_slice(&input[scan_start..pos]);
        }

        if pos < input.len() {
            let escape_seq: &[u8] = match input[pos] {
                b'<' => b"&lt;",
                b'>' => b"&gt;",
                b'&' => b"&amp;",
                b'"' => b"&quot;",
                b'\'' => b"&#39;",
                other => {
                    out.push(other);
                    pos += 1;
                    continue;
                }
            };
            out.extend_from_slice(escape_seq);
            pos += 1;
        }
    }
}

#[inline]
fn min_opt(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
