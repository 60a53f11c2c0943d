//! HTML output writer for chapter fragments.
//!
//! Every element the block renderer emits has one helper here, so the
//! exact markup (including the blank line after headings and paragraphs
//! that page templates rely on) is defined in a single file.

use crate::block::{CalloutKind, ListKind};
use crate::escape;

/// HTML output writer with pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use ferrobook::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(1000);
/// writer.paragraph("Hello");
/// writer.code_line("<World>", true);
///
/// let html = writer.into_string();
/// assert_eq!(html, "<p>Hello</p>\n\n&lt;World&gt;\n");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Chapter HTML is typically ~1.5x its Markdown source.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        let capacity = input_len + input_len / 2;
        Self {
            out: Vec::with_capacity(capacity),
        }
    }

    /// Wrap an existing buffer; output is appended after its contents.
    #[inline]
    pub fn from_string(buf: String, input_len: usize) -> Self {
        let mut out = buf.into_bytes();
        out.reserve(input_len + input_len / 2);
        Self { out }
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a dynamic string without escaping.
    #[inline]
    pub fn write_string(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        self.out.push(b);
    }

    /// Write code text with `&`, `<`, `>` escaped.
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        escape::escape_text_into(&mut self.out, text.as_bytes());
    }

    /// Write an attribute value with full escaping (including quotes).
    #[inline]
    pub fn write_escaped_attr(&mut self, attr: &str) {
        escape::escape_attr_into(&mut self.out, attr.as_bytes());
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push(b'\n');
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: only `&str` content and ASCII markup are ever appended.
        unsafe { String::from_utf8_unchecked(self.out) }
    }

    // --- Book Elements ---

    /// Write a heading with an anchor id: `<hN id="slug">inner</hN>\n\n`
    #[inline]
    pub fn heading(&mut self, level: u8, id: &str, inner_html: &str) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("<h");
        self.write_byte(b'0' + level);
        self.write_str(" id=\"");
        self.write_escaped_attr(id);
        self.write_str("\">");
        self.write_string(inner_html);
        self.write_str("</h");
        self.write_byte(b'0' + level);
        self.write_str(">\n\n");
    }

    /// Write a paragraph: `<p>inner</p>\n\n`
    #[inline]
    pub fn paragraph(&mut self, inner_html: &str) {
        self.write_str("<p>");
        self.write_string(inner_html);
        self.write_str("</p>\n\n");
    }

    /// Write a horizontal rule: `<hr />\n\n`
    #[inline]
    pub fn thematic_break(&mut self) {
        self.write_str("<hr />\n\n");
    }

    /// Open a code figure, with an optional filename caption.
    pub fn code_figure_start(&mut self, lang: &str, caption: Option<&str>) {
        self.write_str("<figure class=\"code ");
        self.write_escaped_attr(lang);
        self.write_str("\">\n");
        if let Some(file) = caption {
            self.write_str("<figcaption>File: ");
            self.write_escaped_text(file);
            self.write_str("</figcaption>\n");
        }
        self.write_str("<pre><code class=\"language-");
        self.write_escaped_attr(lang);
        self.write_str("\">");
    }

    /// Close a code figure: `</code></pre>\n</figure>\n`
    #[inline]
    pub fn code_figure_end(&mut self) {
        self.write_str("</code></pre>\n</figure>\n");
    }

    /// Open a diagram container: `<div class="lang">\n`
    #[inline]
    pub fn diagram_start(&mut self, lang: &str) {
        self.write_str("<div class=\"");
        self.write_escaped_attr(lang);
        self.write_str("\">\n");
    }

    /// Close a diagram container: `</div>\n`
    #[inline]
    pub fn diagram_end(&mut self) {
        self.write_str("</div>\n");
    }

    /// Write one line of a code body, escaped or verbatim.
    #[inline]
    pub fn code_line(&mut self, line: &str, escape: bool) {
        if escape {
            self.write_escaped_text(line);
        } else {
            self.write_string(line);
        }
        self.newline();
    }

    /// Open a table and its header section: `<table>\n<thead>\n`
    #[inline]
    pub fn table_start(&mut self) {
        self.write_str("<table>\n<thead>\n");
    }

    /// Close the header section and open the body: `</thead>\n<tbody>\n`
    #[inline]
    pub fn table_body_start(&mut self) {
        self.write_str("</thead>\n<tbody>\n");
    }

    /// Close a table: `</tbody>\n</table>\n`
    #[inline]
    pub fn table_end(&mut self) {
        self.write_str("</tbody>\n</table>\n");
    }

    /// Write one table row; `cell_tag` is `th` or `td`.
    pub fn table_row<'c, I>(&mut self, cell_tag: &'static str, cells: I)
    where
        I: IntoIterator<Item = &'c str>,
    {
        self.write_str("<tr>\n");
        for cell in cells {
            self.write_byte(b'<');
            self.write_str(cell_tag);
            self.write_byte(b'>');
            self.write_string(cell);
            self.write_str("</");
            self.write_str(cell_tag);
            self.write_str(">\n");
        }
        self.write_str("</tr>\n");
    }

    /// Open a list: `<ul>\n` or `<ol>\n`
    #[inline]
    pub fn list_start(&mut self, kind: ListKind) {
        self.write_byte(b'<');
        self.write_str(kind.tag());
        self.write_str(">\n");
    }

    /// Close a list: `</ul>\n` or `</ol>\n`
    #[inline]
    pub fn list_end(&mut self, kind: ListKind) {
        self.write_str("</");
        self.write_str(kind.tag());
        self.write_str(">\n");
    }

    /// Open a list item holding one paragraph: `<li><p>inner</p>`
    ///
    /// The item stays open; the caller closes it with [`Self::li_end`].
    #[inline]
    pub fn li_start(&mut self, inner_html: &str) {
        self.write_str("<li><p>");
        self.write_string(inner_html);
        self.write_str("</p>");
    }

    /// Close a list item: `</li>\n`
    #[inline]
    pub fn li_end(&mut self) {
        self.write_str("</li>\n");
    }

    /// Write a callout aside with its label.
    pub fn callout(&mut self, kind: CalloutKind, inner_html: &str) {
        self.write_str("<aside class=\"");
        self.write_str(kind.css_class());
        self.write_str("\"><p>\n<strong>");
        self.write_str(kind.label());
        self.write_str("</strong> ");
        self.write_string(inner_html);
        self.write_str("\n</p></aside>\n");
    }

    /// Write a plain blockquote holding one paragraph.
    pub fn blockquote(&mut self, inner_html: &str) {
        self.write_str("<blockquote>\n<p>");
        self.write_string(inner_html);
        self.write_str("</p>\n</blockquote>\n");
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_capacity() {
        let writer = HtmlWriter::with_capacity_for(1000);
        assert!(writer.out.capacity() >= 1500);
    }

    #[test]
    fn test_writer_heading_levels() {
        for level in 1..=4 {
            let mut writer = HtmlWriter::new();
            writer.heading(level, "intro", "Intro");
            let expected = format!("<h{level} id=\"intro\">Intro</h{level}>\n\n");
            assert_eq!(writer.into_string(), expected);
        }
    }

    #[test]
    fn test_writer_paragraph() {
        let mut writer = HtmlWriter::new();
        writer.paragraph("Hello <em>you</em>");
        assert_eq!(writer.into_string(), "<p>Hello <em>you</em></p>\n\n");
    }

    #[test]
    fn test_writer_code_figure() {
        let mut writer = HtmlWriter::new();
        writer.code_figure_start("go", Some("main.go"));
        writer.code_line("x := a < b", true);
        writer.code_figure_end();
        assert_eq!(
            writer.into_string(),
            "<figure class=\"code go\">\n<figcaption>File: main.go</figcaption>\n\
             <pre><code class=\"language-go\">x := a &lt; b\n</code></pre>\n</figure>\n"
        );
    }

    #[test]
    fn test_writer_code_figure_escapes_lang() {
        let mut writer = HtmlWriter::new();
        writer.code_figure_start("a\"b", None);
        assert_eq!(
            writer.into_string(),
            "<figure class=\"code a&quot;b\">\n<pre><code class=\"language-a&quot;b\">"
        );
    }

    #[test]
    fn test_writer_diagram_is_verbatim() {
        let mut writer = HtmlWriter::new();
        writer.diagram_start("mermaid");
        writer.code_line("A --> B", false);
        writer.diagram_end();
        assert_eq!(writer.into_string(), "<div class=\"mermaid\">\nA --> B\n</div>\n");
    }

    #[test]
    fn test_writer_table() {
        let mut writer = HtmlWriter::new();
        writer.table_start();
        writer.table_row("th", ["a", "b"]);
        writer.table_body_start();
        writer.table_row("td", ["1", "2"]);
        writer.table_end();
        assert_eq!(
            writer.into_string(),
            "<table>\n<thead>\n<tr>\n<th>a</th>\n<th>b</th>\n</tr>\n</thead>\n<tbody>\n\
             <tr>\n<td>1</td>\n<td>2</td>\n</tr>\n</tbody>\n</table>\n"
        );
    }

    #[test]
    fn test_writer_list() {
        let mut writer = HtmlWriter::new();
        writer.list_start(ListKind::Ordered);
        writer.li_start("one");
        writer.li_end();
        writer.list_end(ListKind::Ordered);
        assert_eq!(writer.into_string(), "<ol>\n<li><p>one</p></li>\n</ol>\n");
    }

    #[test]
    fn test_writer_callout() {
        let mut writer = HtmlWriter::new();
        writer.callout(CalloutKind::Hint, "Try it");
        assert_eq!(
            writer.into_string(),
            "<aside class=\"hint\"><p>\n<strong>Hint:</strong> Try it\n</p></aside>\n"
        );
    }

    #[test]
    fn test_writer_from_string_appends_in_place() {
        let mut buf = String::with_capacity(256);
        buf.push_str("<!-- head -->\n");
        let ptr = buf.as_ptr();

        let mut writer = HtmlWriter::from_string(buf, 16);
        writer.paragraph("body");
        let html = writer.into_string();
        assert_eq!(html, "<!-- head -->\n<p>body</p>\n\n");
        assert_eq!(html.as_ptr(), ptr);
    }
}
