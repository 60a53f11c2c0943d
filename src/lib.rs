//! ferrobook: Markdown book chapters to static HTML
//!
//! The core is a line-oriented renderer for the Markdown subset technical
//! books are written in: headings with stable anchor ids, pipe tables,
//! flat lists, fenced code with filename captions, diagram blocks and
//! blockquote callouts. On top of it the [`book`] module discovers chapter
//! files, builds the table of contents and writes one navigable page per
//! chapter.
//!
//! # Design Principles
//! - No AST: each line is classified once and written out immediately
//! - No regex: byte and char scanning only
//! - One slug function shared by headings and the table of contents
//! - Every opened container is closed, including at end of input

pub mod block;
pub mod book;
pub mod cursor;
pub mod escape;
pub mod inline;
pub mod render;
pub mod slug;
pub mod toc;

// Re-export primary types
pub use block::{BlockRenderer, CalloutKind, ListKind};
pub use book::{build_book, init_project, BookConfig, BookError, BuildReport, Chapter, ChapterKind};
pub use render::HtmlWriter;
pub use slug::slugify;
pub use toc::{build_toc, collect_sections, TocEntry, TocSection};

/// Rendering options.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Fence language rendered as an unescaped diagram container
    /// instead of a code figure.
    pub diagram_language: &'static str,
    /// Render blockquotes as classified `<aside>` callouts. When off they
    /// render as plain `<blockquote>` elements.
    pub callouts: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            diagram_language: "mermaid",
            callouts: true,
        }
    }
}

/// Convert one chapter of Markdown to an HTML fragment.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = ferrobook::to_html("## 第一节：概述\n内容。");
/// assert!(html.contains("<h2 id=\"一节概述\">第一节：概述</h2>"));
/// assert!(html.contains("<p>内容。</p>"));
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    BlockRenderer::new(input, options).render()
}

/// Convert Markdown to HTML, appending to a provided buffer.
///
/// The renderer writes straight into `out`, so a buffer reused across
/// chapters keeps its allocation.
pub fn to_html_into(input: &str, out: &mut String) {
    to_html_into_with_options(input, out, &Options::default());
}

/// Convert Markdown to HTML with options, appending to a provided buffer.
pub fn to_html_into_with_options(input: &str, out: &mut String, options: &Options) {
    let buf = std::mem::take(out);
    *out = BlockRenderer::with_buffer(input, options, buf).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = Options::default();
        assert_eq!(options.diagram_language, "mermaid");
        assert!(options.callouts);
    }

    #[test]
    fn test_to_html_section_then_list() {
        let html = to_html("## 第一节：概述\n内容。\n- 项 一\n- 项 二\n");
        assert_eq!(
            html,
            "<h2 id=\"一节概述\">第一节：概述</h2>\n\n\
             <p>内容。</p>\n\n\
             <ul>\n<li><p>项 一</p></li>\n<li><p>项 二</p></li>\n</ul>\n"
        );
    }

    #[test]
    fn test_to_html_into_appends() {
        let mut out = String::from("<!-- head -->\n");
        to_html_into("text", &mut out);
        assert_eq!(out, "<!-- head -->\n<p>text</p>\n\n");
    }

    #[test]
    fn test_to_html_into_reuses_allocation() {
        let mut out = String::with_capacity(4096);
        let ptr = out.as_ptr();
        for _ in 0..3 {
            out.clear();
            to_html_into("## 安装\n- a\n- b\n", &mut out);
        }
        assert_eq!(out, to_html("## 安装\n- a\n- b\n"));
        assert_eq!(out.as_ptr(), ptr);
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(to_html("# A\r\nb\r\n"), "<h1 id=\"a\">A</h1>\n\n<p>b</p>\n\n");
    }
}
