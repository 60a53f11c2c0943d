//! Chapter discovery.
//!
//! Chapters are the `*.md` files directly under `<root>/book/`, taken in
//! file-name order. Two file names are reserved:
//!
//! | File                   | Page                      |
//! |------------------------|---------------------------|
//! | `00.00-frontmatter.md` | `00.00-front-matter.html` |
//! | `00.01-contents.md`    | `00.01-contents.html`     |
//!
//! A file named `<digits>-<stem>.md` starts the next top-level chapter and
//! is written to `NN.00-<stem>.html`. Any other file is a sub-chapter of
//! the most recent top-level chapter and keeps its own stem.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::config::BookConfig;
use super::error::BookError;
use crate::toc::CONTENTS_TITLE;

/// Directory under the project root holding chapter sources.
pub const SOURCE_DIR: &str = "book";

/// Title used when a chapter has no `# ` heading.
pub const UNTITLED: &str = "Untitled";

const FRONT_MATTER_SOURCE: &str = "00.00-frontmatter.md";
const FRONT_MATTER_ID: &str = "00.00-front-matter";
const FRONT_MATTER_TITLE: &str = "前言";
const CONTENTS_SOURCE: &str = "00.01-contents.md";
const CONTENTS_ID: &str = "00.01-contents";

/// Page role of a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChapterKind {
    /// Numbered chapter or sub-chapter.
    #[default]
    Normal,
    /// The book's front matter, also published as `index.html`.
    FrontMatter,
    /// The table of contents page.
    Contents,
}

/// One chapter of the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// Output file name without extension.
    pub id: String,
    /// Chapter number with trailing dot (`"2."`, `"2.1."`), empty when unnumbered.
    pub number: String,
    /// Title from the first `# ` heading.
    pub title: String,
    /// Source file.
    pub source: PathBuf,
    /// Source Markdown.
    pub markdown: String,
    /// Output file name, relative to the output directory.
    pub output_file: String,
    /// Category of a top-level chapter.
    pub category: Option<String>,
    /// Page role.
    pub kind: ChapterKind,
}

impl Chapter {
    /// Number without its trailing dot.
    pub fn display_number(&self) -> &str {
        self.number.strip_suffix('.').unwrap_or(&self.number)
    }

    /// Whether this is a sub-chapter (`N.M.`).
    pub fn is_subsection(&self) -> bool {
        self.number.matches('.').count() > 1
    }

    /// Whether this chapter is listed in the table of contents.
    pub fn is_numbered(&self) -> bool {
        self.kind == ChapterKind::Normal
    }
}

/// First-line `# ` heading of a chapter, or [`UNTITLED`].
pub fn extract_title(markdown: &str) -> &str {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .unwrap_or(UNTITLED)
}

/// List and load every chapter of the book at `root`.
///
/// # Errors
///
/// Returns [`BookError::MissingSourceDir`] when `<root>/book` is absent and
/// [`BookError::Io`] when a file cannot be read.
pub fn discover_chapters(root: &Path, config: &BookConfig) -> Result<Vec<Chapter>, BookError> {
    let dir = root.join(SOURCE_DIR);
    if !dir.is_dir() {
        return Err(BookError::MissingSourceDir(dir));
    }

    let mut sources = Vec::new();
    for entry in std::fs::read_dir(&dir).map_err(BookError::io(&dir))? {
        let path = entry.map_err(BookError::io(&dir))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            sources.push(path);
        }
    }
    sources.sort();

    let mut numbering = Numbering::default();
    let mut chapters = Vec::with_capacity(sources.len());
    for source in sources {
        let markdown = std::fs::read_to_string(&source).map_err(BookError::io(&source))?;
        let Some(file_name) = source.file_name().and_then(|n| n.to_str()).map(str::to_owned)
        else {
            warn!(path = %source.display(), "skipping chapter with non UTF-8 file name");
            continue;
        };
        let chapter = classify_source(&file_name, source, markdown, config, &mut numbering);
        debug!(file = %file_name, number = %chapter.number, output = %chapter.output_file, "discovered chapter");
        chapters.push(chapter);
    }
    Ok(chapters)
}

/// Running chapter/sub-chapter counters.
#[derive(Debug, Default)]
struct Numbering {
    chapter: u32,
    sub: u32,
}

fn classify_source(
    file_name: &str,
    source: PathBuf,
    markdown: String,
    config: &BookConfig,
    numbering: &mut Numbering,
) -> Chapter {
    let reserved = match file_name {
        FRONT_MATTER_SOURCE => Some((FRONT_MATTER_ID, FRONT_MATTER_TITLE, ChapterKind::FrontMatter)),
        CONTENTS_SOURCE => Some((CONTENTS_ID, CONTENTS_TITLE, ChapterKind::Contents)),
        _ => None,
    };
    if let Some((id, title, kind)) = reserved {
        return Chapter {
            id: id.to_owned(),
            number: String::new(),
            title: title.to_owned(),
            source,
            markdown,
            output_file: format!("{id}.html"),
            category: None,
            kind,
        };
    }

    let title = extract_title(&markdown).to_owned();
    let (number, output_file, category) = match top_level_stem(file_name) {
        Some(stem) => {
            numbering.chapter += 1;
            numbering.sub = 0;
            let n = numbering.chapter;
            (
                format!("{n}."),
                format!("{n:02}.00-{stem}.html"),
                config.category(n).map(str::to_owned),
            )
        }
        None => {
            if numbering.chapter == 0 {
                warn!(file = %file_name, "sub-chapter appears before any top-level chapter");
            }
            numbering.sub += 1;
            let stem = file_name.strip_suffix(".md").unwrap_or(file_name);
            (
                format!("{}.{}.", numbering.chapter, numbering.sub),
                format!("{stem}.html"),
                None,
            )
        }
    };

    Chapter {
        id: output_file.trim_end_matches(".html").to_owned(),
        number,
        title,
        source,
        markdown,
        output_file,
        category,
        kind: ChapterKind::Normal,
    }
}

/// `<digits>-<stem>.md` → `stem`.
fn top_level_stem(file_name: &str) -> Option<&str> {
    let digits = file_name.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    file_name[digits..].strip_prefix('-')?.strip_suffix(".md")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_all(names: &[&str]) -> Vec<Chapter> {
        let mut config = BookConfig::default();
        config.categories.insert(1, "基础".to_owned());
        let mut numbering = Numbering::default();
        names
            .iter()
            .map(|name| {
                classify_source(
                    name,
                    PathBuf::from(name),
                    format!("# Title of {name}\n"),
                    &config,
                    &mut numbering,
                )
            })
            .collect()
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title("intro\n  # 第1章：入门  \n# later"), "第1章：入门");
        assert_eq!(extract_title("## only h2"), UNTITLED);
        assert_eq!(extract_title(""), UNTITLED);
    }

    #[test]
    fn test_top_level_stem() {
        assert_eq!(top_level_stem("01-intro.md"), Some("intro"));
        assert_eq!(top_level_stem("12-a-b.md"), Some("a-b"));
        assert_eq!(top_level_stem("01.01-intro.md"), None);
        assert_eq!(top_level_stem("intro.md"), None);
        assert_eq!(top_level_stem("01intro.md"), None);
    }

    #[test]
    fn test_numbering() {
        let chapters = classify_all(&[
            "00.00-frontmatter.md",
            "00.01-contents.md",
            "01-intro.md",
            "01.01-setup.md",
            "01.02-tools.md",
            "05-concurrency.md",
        ]);

        assert_eq!(chapters[0].kind, ChapterKind::FrontMatter);
        assert_eq!(chapters[0].output_file, "00.00-front-matter.html");
        assert_eq!(chapters[0].title, "前言");
        assert_eq!(chapters[1].kind, ChapterKind::Contents);
        assert_eq!(chapters[1].output_file, "00.01-contents.html");
        assert_eq!(chapters[1].title, "目录");

        assert_eq!(chapters[2].number, "1.");
        assert_eq!(chapters[2].output_file, "01.00-intro.html");
        assert_eq!(chapters[2].id, "01.00-intro");
        assert_eq!(chapters[2].category.as_deref(), Some("基础"));
        assert_eq!(chapters[2].title, "Title of 01-intro.md");

        assert_eq!(chapters[3].number, "1.1.");
        assert_eq!(chapters[3].output_file, "01.01-setup.html");
        assert_eq!(chapters[3].category, None);
        assert_eq!(chapters[4].number, "1.2.");

        // Numbered by position, not by the digits in the file name.
        assert_eq!(chapters[5].number, "2.");
        assert_eq!(chapters[5].output_file, "02.00-concurrency.html");
    }

    #[test]
    fn test_display_number_and_subsection() {
        let chapters = classify_all(&["01-a.md", "01.01-b.md"]);
        assert_eq!(chapters[0].display_number(), "1");
        assert!(!chapters[0].is_subsection());
        assert_eq!(chapters[1].display_number(), "1.1");
        assert!(chapters[1].is_subsection());
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_chapters(dir.path(), &BookConfig::default()).unwrap_err();
        assert!(matches!(err, BookError::MissingSourceDir(_)));
    }

    #[test]
    fn test_discover_sorted_md_only() {
        let dir = tempfile::tempdir().unwrap();
        let book = dir.path().join(SOURCE_DIR);
        std::fs::create_dir(&book).unwrap();
        std::fs::write(book.join("02-b.md"), "# B").unwrap();
        std::fs::write(book.join("01-a.md"), "# A").unwrap();
        std::fs::write(book.join("notes.txt"), "skip").unwrap();

        let chapters = discover_chapters(dir.path(), &BookConfig::default()).unwrap();
        let titles: Vec<_> = chapters.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
        assert_eq!(chapters[0].markdown, "# A");
    }
}
