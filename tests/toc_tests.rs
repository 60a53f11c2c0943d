//! Table of contents tests, including anchor agreement with rendered pages.

use ferrobook::{build_toc, collect_sections, to_html, Chapter, ChapterKind};
use pretty_assertions::assert_eq;

fn chapter(number: &str, title: &str, file: &str, markdown: &str) -> Chapter {
    Chapter {
        id: file.trim_end_matches(".html").to_owned(),
        number: number.to_owned(),
        title: title.to_owned(),
        source: format!("book/{file}").into(),
        markdown: markdown.to_owned(),
        output_file: file.to_owned(),
        category: None,
        kind: ChapterKind::Normal,
    }
}

const INTRO: &str = "# 第1章：入门\n\n## 第一节：安装\n\n```bash\n## 这是注释\n```\n\n## 1.2 Hello World\n\n### 细节\n";
const DETAILS: &str = "# 深入\n\n## Go 语言的 Channel  \n";

#[test]
fn full_contents_page() {
    let mut front = chapter("", "前言", "00.00-front-matter.html", "# 前言\n## 致谢");
    front.kind = ChapterKind::FrontMatter;
    let mut contents = chapter("", "目录", "00.01-contents.html", "# 目录");
    contents.kind = ChapterKind::Contents;
    let chapters = vec![
        front,
        contents,
        chapter("1.", "第1章：入门", "01.00-intro.html", INTRO),
        chapter("1.1.", "深入", "01.01-details.html", DETAILS),
        chapter("2.", "Chapter 2: Tools", "02.00-tools.html", "# Chapter 2: Tools\n"),
    ];

    let expected = "<h1 id=\"contents\">目录</h1>\n\n<nav epub:type=\"toc\">\n<ol>\n\
<li><a href=\"01.00-intro.html\">1. 入门</a></li>\n\
<li class=\"indent\"><a href=\"01.00-intro.html#一节安装\">第一节：安装</a></li>\n\
<li class=\"indent\"><a href=\"01.00-intro.html#hello-world\">1.2 Hello World</a></li>\n\
<li class=\"indent\"><a href=\"01.01-details.html\">1.1. 深入</a></li>\n\
<li class=\"indent\"><a href=\"01.01-details.html#go-语言的-channel\">Go 语言的 Channel</a></li>\n\
<li><a href=\"02.00-tools.html\">2. Tools</a></li>\n\
</ol>\n</nav>\n";
    assert_eq!(build_toc(&chapters), expected);
}

#[test]
fn every_toc_anchor_exists_in_page() {
    for markdown in [INTRO, DETAILS, "## A & B\n## 第二节：原理\n## 2.3 x--y\n## ##\n"] {
        let page = to_html(markdown);
        for section in collect_sections(markdown) {
            let id = format!("<h2 id=\"{}\">", section.anchor);
            assert!(page.contains(&id), "missing {id} in {page}");
        }
    }
}

#[test]
fn heading_after_table_header_keeps_anchor() {
    let markdown = "| a | b |\n## Part --- Two\ntext\n";
    let sections = collect_sections(markdown);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].anchor, "part-two");

    let page = to_html(markdown);
    assert!(page.contains("<h2 id=\"part-two\">Part --- Two</h2>"), "{page}");
    assert!(page.contains("<p>text</p>"), "{page}");
}

#[test]
fn sections_inside_diagram_skipped() {
    let sections = collect_sections("```mermaid\n## x\n```\n## real");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].anchor, "real");
}

#[test]
fn sections_after_unterminated_fence_skipped() {
    assert!(collect_sections("```go\n## hidden").is_empty());
}

#[test]
fn duplicate_sections_share_anchor() {
    let sections = collect_sections("## Setup\n## Setup\n");
    assert_eq!(sections[0].anchor, sections[1].anchor);
}
