//! Open-block state for the block renderer.
//!
//! At most one of {code block, table, list} is open at a time, so the
//! state is a single enum. Every transition writes the closing (or
//! opening) markup it implies, which keeps tag emission balanced no matter
//! which path the renderer takes.

use super::line::ListKind;
use crate::render::HtmlWriter;

/// An open fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    /// Language tag (`text` when the fence had none).
    pub lang: &'a str,
    /// Filename caption taken from the first body line, if any.
    pub caption: Option<&'a str>,
    /// Diagram source: rendered in a `<div>` and not escaped.
    pub diagram: bool,
}

/// The block currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState<'a> {
    /// Nothing open.
    #[default]
    Idle,
    /// Inside a fenced code block.
    InCode(CodeBlock<'a>),
    /// Inside a table body.
    InTable,
    /// Inside a list; `item_open` is true while the last `<li>` is unclosed.
    InList {
        /// Which list is open.
        kind: ListKind,
        /// Whether an item is still open.
        item_open: bool,
    },
}

impl<'a> BlockState<'a> {
    /// Whether a list is open.
    #[inline]
    pub fn in_list(&self) -> bool {
        matches!(self, Self::InList { .. })
    }

    /// Whether a table is open.
    #[inline]
    pub fn in_table(&self) -> bool {
        matches!(self, Self::InTable)
    }

    /// The open code block, if any.
    #[inline]
    pub fn code_block(&self) -> Option<&CodeBlock<'a>> {
        match self {
            Self::InCode(code) => Some(code),
            _ => None,
        }
    }

    /// Close whatever is open and return to `Idle`.
    pub fn close(&mut self, writer: &mut HtmlWriter) {
        match *self {
            Self::Idle => {}
            Self::InCode(code) => {
                if code.diagram {
                    writer.diagram_end();
                } else {
                    writer.code_figure_end();
                }
            }
            Self::InTable => writer.table_end(),
            Self::InList { kind, item_open } => {
                if item_open {
                    writer.li_end();
                }
                writer.list_end(kind);
            }
        }
        *self = Self::Idle;
    }

    /// Close an open list (and its open item). Other states are untouched.
    pub fn close_list(&mut self, writer: &mut HtmlWriter) {
        if self.in_list() {
            self.close(writer);
        }
    }

    /// Close an open table. Other states are untouched.
    pub fn close_table(&mut self, writer: &mut HtmlWriter) {
        if self.in_table() {
            self.close(writer);
        }
    }

    /// Open a code block, closing any open table or list first.
    pub fn open_code(&mut self, code: CodeBlock<'a>, writer: &mut HtmlWriter) {
        self.close(writer);
        if code.diagram {
            writer.diagram_start(code.lang);
        } else {
            writer.code_figure_start(code.lang, code.caption);
        }
        *self = Self::InCode(code);
    }

    /// Open a table, closing any open list first.
    ///
    /// The caller writes the header row between this call and
    /// [`HtmlWriter::table_body_start`].
    pub fn open_table(&mut self, writer: &mut HtmlWriter) {
        self.close(writer);
        writer.table_start();
        *self = Self::InTable;
    }

    /// Start a new list item of `kind` holding `inner_html`.
    ///
    /// A list of the other kind is closed first so item types never mix
    /// within one list. The new item is left open.
    pub fn push_list_item(&mut self, kind: ListKind, inner_html: &str, writer: &mut HtmlWriter) {
        match *self {
            Self::InList {
                kind: open_kind,
                item_open,
            } if open_kind == kind => {
                if item_open {
                    writer.li_end();
                }
            }
            _ => {
                self.close(writer);
                writer.list_start(kind);
            }
        }
        writer.li_start(inner_html);
        *self = Self::InList {
            kind,
            item_open: true,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(lang: &str, diagram: bool) -> CodeBlock<'_> {
        CodeBlock {
            lang,
            caption: None,
            diagram,
        }
    }

    #[test]
    fn test_idle_close_is_noop() {
        let mut writer = HtmlWriter::new();
        let mut state = BlockState::Idle;
        state.close(&mut writer);
        assert!(writer.into_string().is_empty());
        assert_eq!(state, BlockState::Idle);
    }

    #[test]
    fn test_code_open_close() {
        let mut writer = HtmlWriter::new();
        let mut state = BlockState::Idle;
        state.open_code(code("go", false), &mut writer);
        assert_eq!(state.code_block().map(|c| c.lang), Some("go"));
        state.close(&mut writer);
        assert_eq!(
            writer.into_string(),
            "<figure class=\"code go\">\n<pre><code class=\"language-go\"></code></pre>\n</figure>\n"
        );
        assert_eq!(state, BlockState::Idle);
    }

    #[test]
    fn test_diagram_open_close() {
        let mut writer = HtmlWriter::new();
        let mut state = BlockState::Idle;
        state.open_code(code("mermaid", true), &mut writer);
        state.close(&mut writer);
        assert_eq!(writer.into_string(), "<div class=\"mermaid\">\n</div>\n");
    }

    #[test]
    fn test_code_closes_list() {
        let mut writer = HtmlWriter::new();
        let mut state = BlockState::Idle;
        state.push_list_item(ListKind::Unordered, "a", &mut writer);
        state.open_code(code("text", false), &mut writer);
        assert!(writer.into_string().starts_with("<ul>\n<li><p>a</p></li>\n</ul>\n<figure"));
    }

    #[test]
    fn test_code_closes_table() {
        let mut writer = HtmlWriter::new();
        let mut state = BlockState::Idle;
        state.open_table(&mut writer);
        writer.table_body_start();
        state.open_code(code("text", false), &mut writer);
        assert!(writer.into_string().contains("</tbody>\n</table>\n<figure"));
    }

    #[test]
    fn test_list_items_same_kind() {
        let mut writer = HtmlWriter::new();
        let mut state = BlockState::Idle;
        state.push_list_item(ListKind::Ordered, "a", &mut writer);
        state.push_list_item(ListKind::Ordered, "b", &mut writer);
        state.close(&mut writer);
        assert_eq!(
            writer.into_string(),
            "<ol>\n<li><p>a</p></li>\n<li><p>b</p></li>\n</ol>\n"
        );
    }

    #[test]
    fn test_list_kind_switch_starts_new_list() {
        let mut writer = HtmlWriter::new();
        let mut state = BlockState::Idle;
        state.push_list_item(ListKind::Unordered, "a", &mut writer);
        state.push_list_item(ListKind::Ordered, "b", &mut writer);
        state.close(&mut writer);
        assert_eq!(
            writer.into_string(),
            "<ul>\n<li><p>a</p></li>\n</ul>\n<ol>\n<li><p>b</p></li>\n</ol>\n"
        );
    }

    #[test]
    fn test_list_closed_item_not_reclosed() {
        let mut writer = HtmlWriter::new();
        let mut state = BlockState::InList {
            kind: ListKind::Unordered,
            item_open: false,
        };
        state.close(&mut writer);
        assert_eq!(writer.into_string(), "</ul>\n");
    }

    #[test]
    fn test_close_list_leaves_table() {
        let mut writer = HtmlWriter::new();
        let mut state = BlockState::InTable;
        state.close_list(&mut writer);
        assert_eq!(state, BlockState::InTable);
        assert!(writer.into_string().is_empty());
    }

    #[test]
    fn test_close_table_leaves_list() {
        let mut writer = HtmlWriter::new();
        let mut state = BlockState::InList {
            kind: ListKind::Ordered,
            item_open: true,
        };
        state.close_table(&mut writer);
        assert!(state.in_list());
        assert!(writer.into_string().is_empty());
    }

    #[test]
    fn test_table_opens_after_list() {
        let mut writer = HtmlWriter::new();
        let mut state = BlockState::Idle;
        state.push_list_item(ListKind::Unordered, "a", &mut writer);
        state.open_table(&mut writer);
        assert!(state.in_table());
        assert_eq!(
            writer.into_string(),
            "<ul>\n<li><p>a</p></li>\n</ul>\n<table>\n<thead>\n"
        );
    }
}
