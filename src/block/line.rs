//! Line classification.
//!
//! Each predicate looks at one line in isolation and returns a structured
//! match or nothing. [`classify`] tries them in a fixed order and the first
//! match wins, which is what resolves ambiguous lines such as `***`
//! (a rule, not a list item) or `# x` inside a table run.

/// List type (ordered or unordered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `- item` or `* item`
    Unordered,
    /// `1. item`
    Ordered,
}

impl ListKind {
    /// HTML tag name for this list kind.
    #[inline]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// An ATX heading line (`#` through `####`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Heading level (1-4).
    pub level: u8,
    /// Text after the `# ` prefix, as written.
    pub text: &'a str,
}

/// A list item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// Which list the item belongs to.
    pub kind: ListKind,
    /// Item text with the marker stripped.
    pub content: &'a str,
}

/// Classification of a single line outside a code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Code fence; carries the trimmed info string.
    Fence {
        /// Language tag (possibly empty).
        info: &'a str,
    },
    /// `<!-- ... -->` comment line.
    Comment,
    /// Line whose trimmed form starts with `|`.
    TableRow,
    /// Line starting with `> `.
    Quote,
    /// ATX heading.
    Heading(Heading<'a>),
    /// `---` or `***`.
    Rule,
    /// List item.
    ListItem(ListItem<'a>),
    /// Empty or whitespace-only line.
    Blank,
    /// Anything else.
    Text,
}

/// Maximum heading level the renderer recognizes.
pub const MAX_HEADING_LEVEL: u8 = 4;

/// Classify a line. First match wins.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(info) = fence_info(line) {
        return LineKind::Fence { info };
    }
    if is_comment(line) {
        return LineKind::Comment;
    }
    if is_table_row(line) {
        return LineKind::TableRow;
    }
    if is_quote(line) {
        return LineKind::Quote;
    }
    if let Some(heading) = heading(line) {
        return LineKind::Heading(heading);
    }
    if is_rule(line) {
        return LineKind::Rule;
    }
    if let Some(item) = list_item(line) {
        return LineKind::ListItem(item);
    }
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    LineKind::Text
}

/// Info string of a fence line (line starts with three backticks).
#[inline]
pub fn fence_info(line: &str) -> Option<&str> {
    line.strip_prefix("```").map(str::trim)
}

/// Whether the line opens or closes a code block.
#[inline]
pub fn is_fence(line: &str) -> bool {
    line.starts_with("```")
}

/// Whether the line is an HTML comment.
#[inline]
pub fn is_comment(line: &str) -> bool {
    line.trim().starts_with("<!--")
}

/// Whether the line is a table row.
#[inline]
pub fn is_table_row(line: &str) -> bool {
    line.trim().starts_with('|')
}

/// Whether the line is a table header separator row (`| --- | --- |`).
#[inline]
pub fn is_table_separator(line: &str) -> bool {
    is_table_row(line) && line.contains("---")
}

/// Whether the line belongs to a blockquote run.
#[inline]
pub fn is_quote(line: &str) -> bool {
    line.starts_with("> ")
}

/// Parse an ATX heading of level 1-4.
///
/// The `#` run must start the line and be followed by a space.
pub fn heading(line: &str) -> Option<Heading<'_>> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL as usize {
        return None;
    }
    let text = line[level..].strip_prefix(' ')?;
    Some(Heading {
        level: level as u8,
        text,
    })
}

/// Parse a second-level heading (`## text`), returning its text.
#[inline]
pub fn h2_text(line: &str) -> Option<&str> {
    heading(line).filter(|h| h.level == 2).map(|h| h.text)
}

/// Whether the trimmed line is exactly `---` or `***`.
#[inline]
pub fn is_rule(line: &str) -> bool {
    matches!(line.trim(), "---" | "***")
}

/// Parse a list item (`- x`, `* x`, `12. x`) after trimming.
pub fn list_item(line: &str) -> Option<ListItem<'_>> {
    let trimmed = line.trim();
    if let Some(content) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
        return Some(ListItem {
            kind: ListKind::Unordered,
            content,
        });
    }

    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let content = trimmed[digits..].strip_prefix(". ")?;
    Some(ListItem {
        kind: ListKind::Ordered,
        content,
    })
}

/// Leading indentation width; a tab counts as four columns.
pub fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for b in line.bytes() {
        match b {
            b' ' => width += 1,
            b'\t' => width += 4,
            _ => break,
        }
    }
    width
}

/// Whether the line ends an open list because it is structural:
/// a heading marker, a rule or a comment (indentation ignored).
#[inline]
pub fn closes_list(line: &str) -> bool {
    line.trim().starts_with('#') || is_rule(line) || is_comment(line)
}

/// Filename caption from a comment line such as `// src/main.go`.
///
/// The line must start with `// ` or `# ` (after trimming) and its second
/// whitespace-separated field must contain a `.` or `/`.
pub fn caption_file(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if !trimmed.starts_with("// ") && !trimmed.starts_with("# ") {
        return None;
    }
    trimmed
        .split_whitespace()
        .nth(1)
        .filter(|field| field.contains('.') || field.contains('/'))
}
