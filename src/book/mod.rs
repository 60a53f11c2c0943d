//! Book assembly: configuration, chapter discovery, page chrome and the
//! build/init entry points.
//!
//! A project looks like:
//!
//! ```text
//! book.yaml
//! book/
//!   00.00-frontmatter.md
//!   00.01-contents.md
//!   01-introduction.md
//!   01.01-first-steps.md
//! assets/css/main.css      (optional stylesheet override)
//! ```

pub mod chapter;
pub mod config;
mod error;
pub mod page;
pub mod scaffold;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use chapter::{discover_chapters, extract_title, Chapter, ChapterKind};
pub use config::{BookConfig, ConfigError};
pub use error::BookError;
pub use page::PageContext;
pub use scaffold::init_project;

use crate::toc::build_toc;
use crate::{to_html_with_options, Options};
use scaffold::{write_file, DEFAULT_CSS};

/// Page also written for the front matter, so the output opens on it.
pub const INDEX_PAGE: &str = "index.html";

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Resolved output directory.
    pub output_dir: PathBuf,
    /// Every page written, in reading order (`index.html` included).
    pub pages: Vec<PathBuf>,
}

/// Build the book at `root` into its output directory.
///
/// `output_override` takes precedence over `output_dir` in `book.yaml`.
///
/// # Errors
///
/// Fails if `book.yaml` or `book/` is missing or unreadable, or if an
/// output file cannot be written.
pub fn build_book(root: &Path, output_override: Option<&Path>) -> Result<BuildReport, BookError> {
    let config = BookConfig::load(root)?;
    let chapters = discover_chapters(root, &config)?;
    let output_dir = config.resolve_output_dir(root, output_override);
    info!(
        root = %root.display(),
        output = %output_dir.display(),
        chapters = chapters.len(),
        "building book"
    );

    let assets = output_dir.join("assets");
    for dir in [assets.join("css"), assets.join("img")] {
        std::fs::create_dir_all(&dir).map_err(BookError::io(&dir))?;
    }
    write_file(&assets.join("css").join("main.css"), &stylesheet(root)?)?;

    let options = Options::default();
    let toc = build_toc(&chapters);
    let mut pages = Vec::with_capacity(chapters.len() + 1);

    for ctx in (0..chapters.len()).filter_map(|i| PageContext::at(&config, &chapters, i)) {
        let chapter = ctx.chapter;
        let body = match chapter.kind {
            ChapterKind::Contents => toc.clone(),
            ChapterKind::Normal | ChapterKind::FrontMatter => {
                to_html_with_options(&chapter.markdown, &options)
            }
        };
        let html = ctx.render(&body);

        let path = output_dir.join(&chapter.output_file);
        write_file(&path, &html)?;
        debug!(page = %chapter.output_file, title = %chapter.title, "rendered page");
        pages.push(path);

        if chapter.kind == ChapterKind::FrontMatter {
            let index = output_dir.join(INDEX_PAGE);
            write_file(&index, &html)?;
            pages.push(index);
        }
    }

    info!(pages = pages.len(), output = %output_dir.display(), "book built");
    Ok(BuildReport { output_dir, pages })
}

/// Project stylesheet, or the embedded default.
fn stylesheet(root: &Path) -> Result<String, BookError> {
    let local = root.join("assets").join("css").join("main.css");
    if local.is_file() {
        debug!(path = %local.display(), "using project stylesheet");
        return std::fs::read_to_string(&local).map_err(BookError::io(&local));
    }
    Ok(DEFAULT_CSS.to_owned())
}
