//! `init`: create a new book project from the embedded template.

use std::path::Path;

use tracing::{debug, info};

use super::chapter::SOURCE_DIR;
use super::config::CONFIG_FILENAME;
use super::error::BookError;

/// Default stylesheet.
pub const DEFAULT_CSS: &str = include_str!("../../assets/main.css");

/// Template `book.yaml`.
pub const DEFAULT_CONFIG: &str = include_str!("../../assets/book.yaml");

/// Sample chapters written into `book/`.
pub const SAMPLE_CHAPTERS: &[(&str, &str)] = &[
    (
        "00.00-frontmatter.md",
        include_str!("../../assets/sample/00.00-frontmatter.md"),
    ),
    (
        "00.01-contents.md",
        include_str!("../../assets/sample/00.01-contents.md"),
    ),
    (
        "01-introduction.md",
        include_str!("../../assets/sample/01-introduction.md"),
    ),
    (
        "01.01-first-steps.md",
        include_str!("../../assets/sample/01.01-first-steps.md"),
    ),
    (
        "02-advanced.md",
        include_str!("../../assets/sample/02-advanced.md"),
    ),
];

/// Create a new project at `path`.
///
/// Layout:
/// ```text
/// <path>/
///   book.yaml
///   book/*.md
///   assets/css/main.css
/// ```
///
/// # Errors
///
/// Returns [`BookError::AlreadyExists`] if `path` exists and
/// [`BookError::Io`] if a directory or file cannot be created.
pub fn init_project(path: &Path) -> Result<(), BookError> {
    if path.exists() {
        return Err(BookError::AlreadyExists(path.to_path_buf()));
    }
    info!(path = %path.display(), "creating book project");

    let book_dir = path.join(SOURCE_DIR);
    let css_dir = path.join("assets").join("css");
    for dir in [book_dir.as_path(), css_dir.as_path()] {
        std::fs::create_dir_all(dir).map_err(BookError::io(dir))?;
    }

    write_file(&path.join(CONFIG_FILENAME), DEFAULT_CONFIG)?;
    for (name, content) in SAMPLE_CHAPTERS {
        write_file(&book_dir.join(name), content)?;
    }
    write_file(&css_dir.join("main.css"), DEFAULT_CSS)?;
    Ok(())
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<(), BookError> {
    debug!(path = %path.display(), bytes = content.len(), "writing");
    std::fs::write(path, content).map_err(BookError::io(path))
}
