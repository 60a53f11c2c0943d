//! Block-level rendering for chapter Markdown.
//!
//! The block renderer is line-oriented and handles:
//! - Fenced code blocks (with filename captions and diagram containers)
//! - Pipe tables
//! - Blockquote runs rendered as callouts
//! - ATX headings (levels 1-4) with anchor ids
//! - Horizontal rules
//! - Flat ordered and unordered lists
//! - Paragraphs

mod callout;
mod line;
mod renderer;
mod state;
mod table;

pub use callout::{classify as classify_callout, strip_markers, CalloutKind};
pub use line::{
    caption_file, classify, h2_text, indent_width, is_fence, Heading, LineKind, ListItem,
    ListKind, MAX_HEADING_LEVEL,
};
pub use renderer::BlockRenderer;
pub use state::{BlockState, CodeBlock};
pub use table::split_cells;
