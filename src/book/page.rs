//! Full page assembly.
//!
//! Wraps a rendered chapter fragment in the book's page chrome: head with
//! metadata and highlighting/diagram scripts, breadcrumbs, previous/next
//! navigation (also bound to the arrow keys) and a copy button on every
//! code figure.
//!
//! Titles and categories are written as-is, the same way headings reach
//! the body and the contents page. Only attribute values are escaped.

use std::fmt::Write as _;

use html_escape::encode_double_quoted_attribute;

use super::chapter::{Chapter, ChapterKind};
use super::config::BookConfig;
use crate::toc::CONTENTS_TITLE;

/// Front matter page, target of the book title breadcrumb.
pub const FRONT_MATTER_PAGE: &str = "00.00-front-matter.html";

/// Contents page, linked from header and footer.
pub const CONTENTS_PAGE: &str = "00.01-contents.html";

/// Stylesheet path relative to the output directory.
pub const STYLESHEET: &str = "assets/css/main.css";

const PREV_LABEL: &str = "上一章";
const NEXT_LABEL: &str = "下一章";

const HEAD_SCRIPTS: &str = r#"		<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/intellij-light.min.css">
		<script src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js"></script>
		<script src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/languages/go.min.js"></script>
		<script src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/languages/bash.min.js"></script>
		<script>hljs.highlightAll();</script>
		<script type="module">
			import mermaid from 'https://cdn.jsdelivr.net/npm/mermaid@11/dist/mermaid.esm.min.mjs';
			mermaid.initialize({ startOnLoad: true });
		</script>
"#;

const COPY_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect><path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"></path></svg>"#;
const COPIED_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="20 6 9 17 4 12"></polyline></svg>"#;

/// Everything a page needs besides its body.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Book configuration.
    pub config: &'a BookConfig,
    /// The chapter being rendered.
    pub chapter: &'a Chapter,
    /// Preceding chapter in reading order.
    pub prev: Option<&'a Chapter>,
    /// Following chapter in reading order.
    pub next: Option<&'a Chapter>,
}

impl<'a> PageContext<'a> {
    /// Context for `chapters[index]`, with its neighbours.
    pub fn at(config: &'a BookConfig, chapters: &'a [Chapter], index: usize) -> Option<Self> {
        let chapter = chapters.get(index)?;
        Some(Self {
            config,
            chapter,
            prev: index.checked_sub(1).and_then(|i| chapters.get(i)),
            next: chapters.get(index + 1),
        })
    }

    /// Wrap `body` into a complete HTML document.
    pub fn render(&self, body: &str) -> String {
        let config = self.config;
        let prev_link = nav_link(self.prev, PREV_LABEL);
        let next_link = nav_link(self.next, NEXT_LABEL);

        let mut out = String::with_capacity(body.len() + 6 * 1024);
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            r#"<!DOCTYPE html>
<html lang="{lang}">
	<head>
		<meta charset="utf-8">
		<meta http-equiv="x-ua-compatible" content="ie=edge">
		<meta name="author" content="{author}">
		<meta name="copyright" content="{copyright}">
		<title>{chapter_title} &mdash; {book_title}</title>
		<meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no">
		<link rel="stylesheet" type="text/css" href="{STYLESHEET}">
{HEAD_SCRIPTS}	</head>
	<body>
		<header>
			<div class="wrapper">
				<div>
					{breadcrumbs}
				</div>
				<div>
					&lsaquo; {prev_link}
					&middot; <a href="{CONTENTS_PAGE}">{CONTENTS_TITLE}</a> &middot;
					{next_link} &rsaquo;
				</div>
			</div>
		</header>
		<main class="wrapper text">
			{indicator}
			{body}
		</main>
		<footer>
			<div class="wrapper">
				<div>
					&lsaquo; {prev_link}
				</div>
				<div>
					<a href="{CONTENTS_PAGE}">{CONTENTS_TITLE}</a>
				</div>
				<div>
					{next_link} &rsaquo;
				</div>
			</div>
		</footer>
		<script>
			document.onkeydown = function(evt) {{
				evt = evt || window.event;
				switch (evt.keyCode) {{
					case 37:
						{prev_js}
						break;
					case 39:
						{next_js}
						break;
				}}
			}};
{copy_script}
		</script>
	</body>
</html>
"#,
            lang = encode_double_quoted_attribute(&config.language),
            author = encode_double_quoted_attribute(&config.author),
            copyright = encode_double_quoted_attribute(&config.copyright),
            chapter_title = self.chapter.title,
            book_title = config.title,
            breadcrumbs = self.breadcrumbs(),
            indicator = self.chapter_indicator(),
            prev_js = nav_script(self.prev),
            next_js = nav_script(self.next),
            copy_script = copy_button_script(),
        );
        out
    }

    /// Book title, then category and chapter title for inner pages.
    pub fn breadcrumbs(&self) -> String {
        let mut out = format!(
            r#"<a href="{FRONT_MATTER_PAGE}">{}</a>"#,
            self.config.title
        );
        let chapter = self.chapter;
        match chapter.kind {
            ChapterKind::FrontMatter => {}
            ChapterKind::Contents => push_crumb(&mut out, CONTENTS_TITLE),
            ChapterKind::Normal => {
                if let Some(category) = chapter.category.as_deref().filter(|c| !c.is_empty()) {
                    push_crumb(&mut out, category);
                }
                push_crumb(&mut out, &chapter.title);
            }
        }
        out
    }

    /// `第 N 章` marker for numbered chapters, empty otherwise.
    pub fn chapter_indicator(&self) -> String {
        if self.chapter.number.is_empty() {
            return String::new();
        }
        format!(
            r#"<div class="chapter">第 {} 章</div>"#,
            self.chapter.display_number()
        )
    }
}

fn push_crumb(out: &mut String, text: &str) {
    let _ = write!(out, r#" <span class="crumbs">&rsaquo; {text}</span>"#);
}

fn nav_link(target: Option<&Chapter>, label: &str) -> String {
    match target {
        Some(chapter) => format!(
            r#"<a href="{}">{label}</a>"#,
            encode_double_quoted_attribute(&chapter.output_file)
        ),
        None => format!(r#"<span class="disabled">{label}</span>"#),
    }
}

fn nav_script(target: Option<&Chapter>) -> String {
    target
        .map(|chapter| format!(r#"window.location.href = "{}";"#, chapter.output_file))
        .unwrap_or_default()
}

fn copy_button_script() -> String {
    format!(
        r#"
			document.querySelectorAll('figure.code').forEach(container => {{
				const button = document.createElement('button');
				button.className = 'copy-button';
				button.title = 'Copy to clipboard';
				button.innerHTML = '{COPY_ICON}';
				container.appendChild(button);

				button.addEventListener('click', () => {{
					const code = container.querySelector('pre').innerText;
					navigator.clipboard.writeText(code).then(() => {{
						button.classList.add('copied');
						button.innerHTML = '{COPIED_ICON}';
						setTimeout(() => {{
							button.classList.remove('copied');
							button.innerHTML = '{COPY_ICON}';
						}}, 2000);
					}}).catch(err => {{
						console.error('Failed to copy: ', err);
					}});
				}});
			}});"#
    )
}
