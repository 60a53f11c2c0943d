//! Table of contents.
//!
//! The contents page lists every numbered chapter followed by its
//! second-level headings. Section anchors come from the same
//! [`slugify`](crate::slug::slugify) call, on the same trimmed heading
//! text, that the block renderer uses, so every link lands on the heading
//! it names. Fenced code is skipped while scanning for the same reason.

use std::fmt::Write as _;

use crate::block::{h2_text, is_fence};
use crate::book::Chapter;
use crate::cursor::LineCursor;
use crate::slug::slugify;

/// Title of the contents page.
pub const CONTENTS_TITLE: &str = "目录";

/// Anchor id of the contents page heading.
pub const CONTENTS_ID: &str = "contents";

/// A second-level heading inside a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocSection {
    /// Heading text as written (trimmed).
    pub title: String,
    /// Anchor id the rendered heading carries.
    pub anchor: String,
}

/// One chapter line of the contents page.
#[derive(Debug, Clone)]
pub struct TocEntry<'a> {
    /// The chapter the entry links to.
    pub chapter: &'a Chapter,
    /// Number without its trailing dot (`"2"`, `"2.1"`).
    pub number: &'a str,
    /// Title with any leading chapter label removed.
    pub title: &'a str,
    /// Second-level headings, in source order.
    pub sections: Vec<TocSection>,
}

/// Scan chapter Markdown for `## ` headings outside code blocks.
pub fn collect_sections(markdown: &str) -> Vec<TocSection> {
    let mut cursor = LineCursor::new(markdown);
    let mut in_code = false;
    let mut sections = Vec::new();

    while let Some(line) = cursor.next_line() {
        if is_fence(line) {
            in_code = !in_code;
            continue;
        }
        if in_code {
            continue;
        }
        if let Some(text) = h2_text(line) {
            let title = text.trim();
            sections.push(TocSection {
                title: title.to_owned(),
                anchor: slugify(title),
            });
        }
    }
    sections
}

/// Build contents entries for every numbered chapter.
///
/// Front matter and the contents chapter itself are skipped.
pub fn toc_entries(chapters: &[Chapter]) -> Vec<TocEntry<'_>> {
    chapters
        .iter()
        .filter(|chapter| chapter.is_numbered())
        .map(|chapter| TocEntry {
            chapter,
            number: chapter.display_number(),
            title: display_title(&chapter.title),
            sections: collect_sections(&chapter.markdown),
        })
        .collect()
}

/// Render the contents page fragment.
pub fn build_toc(chapters: &[Chapter]) -> String {
    let mut out = String::with_capacity(256 + chapters.len() * 128);
    out.push_str("<h1 id=\"");
    out.push_str(CONTENTS_ID);
    out.push_str("\">");
    out.push_str(CONTENTS_TITLE);
    out.push_str("</h1>\n\n<nav epub:type=\"toc\">\n<ol>\n");

    for entry in toc_entries(chapters) {
        let class = if entry.chapter.is_subsection() {
            " class=\"indent\""
        } else {
            ""
        };
        let file = &entry.chapter.output_file;
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "<li{class}><a href=\"{file}\">{}. {}</a></li>",
            entry.number, entry.title
        );
        for section in &entry.sections {
            let _ = writeln!(
                out,
                "<li class=\"indent\"><a href=\"{file}#{}\">{}</a></li>",
                section.anchor, section.title
            );
        }
    }

    out.push_str("</ol>\n</nav>\n");
    out
}

/// Drop a leading `第 N 章：` or `Chapter N:` label from a chapter title.
///
/// # Example
/// ```
/// use ferrobook::toc::display_title;
///
/// assert_eq!(display_title("第 2 章：并发"), "并发");
/// assert_eq!(display_title("Chapter 3: Memory"), "Memory");
/// assert_eq!(display_title("Preface"), "Preface");
/// ```
pub fn display_title(title: &str) -> &str {
    let cjk = title
        .strip_prefix('第')
        .and_then(|rest| strip_numbered_label(rest, "章"));
    let english = || {
        let head = title.get(..7)?;
        if !head.eq_ignore_ascii_case("chapter") {
            return None;
        }
        strip_numbered_label(&title[7..], "")
    };
    cjk.or_else(english).unwrap_or(title)
}

/// Match `\s*\d+\s*{word}[:：]\s*` and return what follows.
fn strip_numbered_label<'t>(rest: &'t str, word: &str) -> Option<&'t str> {
    let rest = rest.trim_start();
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = rest[digits..].trim_start().strip_prefix(word)?;
    let rest = rest.strip_prefix([':', '：'])?;
    Some(rest.trim_start())
}
