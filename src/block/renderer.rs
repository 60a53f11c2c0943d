//! Block renderer: one chapter of Markdown in, one HTML fragment out.
//!
//! Lines are processed top to bottom. Inside a code block classification
//! is suspended; otherwise each line is classified once and dispatched:
//!
//! 1. list termination: an unindented non-item line, or a heading/rule/
//!    comment, closes an open list before the line is handled
//! 2. table termination: any line but a row or a comment closes a table
//! 3. fence: open a code figure (or diagram container)
//! 4. comment: dropped
//! 5. table row: opens a table (header + optional separator) or adds a row
//! 6. blockquote run: consumed greedily into one callout
//! 7. heading, rule, list item, paragraph
//!
//! Anything still open at the end of input is closed.

use smallvec::SmallVec;

use super::callout;
use super::line::{self, LineKind};
use super::state::{BlockState, CodeBlock};
use super::table;
use crate::cursor::LineCursor;
use crate::inline::format_inline;
use crate::render::HtmlWriter;
use crate::slug::slugify;
use crate::Options;

/// Language tag used when a fence has none.
const DEFAULT_CODE_LANG: &str = "text";

/// Renders the Markdown of one chapter into an HTML fragment.
pub struct BlockRenderer<'a> {
    cursor: LineCursor<'a>,
    state: BlockState<'a>,
    writer: HtmlWriter,
    options: &'a Options,
}

impl<'a> BlockRenderer<'a> {
    /// Create a renderer over `input`.
    pub fn new(input: &'a str, options: &'a Options) -> Self {
        Self {
            cursor: LineCursor::new(input),
            state: BlockState::Idle,
            writer: HtmlWriter::with_capacity_for(input.len()),
            options,
        }
    }

    /// Create a renderer that appends to `buf` instead of a fresh buffer.
    pub fn with_buffer(input: &'a str, options: &'a Options, buf: String) -> Self {
        Self {
            cursor: LineCursor::new(input),
            state: BlockState::Idle,
            writer: HtmlWriter::from_string(buf, input.len()),
            options,
        }
    }

    /// Render every line and return the fragment.
    pub fn render(mut self) -> String {
        while let Some(line) = self.cursor.next_line() {
            self.render_line(line);
        }
        self.state.close(&mut self.writer);
        self.writer.into_string()
    }

    fn render_line(&mut self, line: &'a str) {
        if let Some(&code) = self.state.code_block() {
            if line::is_fence(line) {
                self.state.close(&mut self.writer);
            } else {
                self.writer.code_line(line, !code.diagram);
            }
            return;
        }

        let kind = line::classify(line);

        if self.state.in_list() && ends_list(line, &kind) {
            self.state.close_list(&mut self.writer);
        }
        if self.state.in_table() && !matches!(kind, LineKind::TableRow | LineKind::Comment) {
            self.state.close_table(&mut self.writer);
        }

        match kind {
            LineKind::Fence { info } => self.open_code(info),
            LineKind::Comment | LineKind::Blank => {}
            LineKind::TableRow => self.table_row(line),
            LineKind::Quote => self.blockquote(line),
            LineKind::Heading(heading) => {
                let id = slugify(heading.text.trim());
                self.writer
                    .heading(heading.level, &id, &format_inline(heading.text));
            }
            LineKind::Rule => self.writer.thematic_break(),
            LineKind::ListItem(item) => {
                let html = format_inline(item.content);
                self.state.push_list_item(item.kind, &html, &mut self.writer);
            }
            LineKind::Text => self.writer.paragraph(&format_inline(line)),
        }
    }

    fn open_code(&mut self, info: &'a str) {
        let lang = if info.is_empty() { DEFAULT_CODE_LANG } else { info };
        let diagram = lang == self.options.diagram_language;

        let caption = if diagram {
            None
        } else {
            self.cursor.peek().and_then(line::caption_file)
        };
        if caption.is_some() {
            self.cursor.bump();
        }

        let code = CodeBlock {
            lang,
            caption,
            diagram,
        };
        self.state.open_code(code, &mut self.writer);
    }

    fn table_row(&mut self, row: &'a str) {
        if self.state.in_table() {
            table::write_row(&mut self.writer, row, "td");
            return;
        }

        self.state.open_table(&mut self.writer);
        table::write_row(&mut self.writer, row, "th");
        if self.cursor.peek().is_some_and(line::is_table_separator) {
            self.cursor.bump();
        }
        self.writer.table_body_start();
    }

    fn blockquote(&mut self, first: &'a str) {
        let mut run: SmallVec<[&str; 8]> = SmallVec::new();
        run.push(strip_quote(first));
        run.extend(
            self.cursor
                .take_while(line::is_quote)
                .into_iter()
                .map(strip_quote),
        );
        let content = run.join("\n");

        if !self.options.callouts {
            self.writer.blockquote(&join_lines(&content));
            return;
        }

        let kind = callout::classify(&content);
        let stripped = callout::strip_markers(&content);
        self.writer.callout(kind, &join_lines(stripped.trim()));
    }
}

/// Whether `line` terminates an open list.
///
/// An item line keeps the list open; so does an indented continuation.
/// Headings, rules and comments always end it.
fn ends_list(line: &str, kind: &LineKind<'_>) -> bool {
    let is_item = matches!(kind, LineKind::ListItem(_));
    (line::indent_width(line) < 2 && !is_item) || line::closes_list(line)
}

#[inline]
fn strip_quote(line: &str) -> &str {
    line.strip_prefix("> ").unwrap_or(line)
}

/// Inline-format each non-empty line and join them with `<br>`.
fn join_lines(content: &str) -> String {
    content
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(format_inline)
        .collect::<Vec<_>>()
        .join("<br>\n")
}
