use ferrobook::{to_html, to_html_with_options, Options};

fn html(input: &str) -> String {
    to_html(input)
}

fn html_no_callouts(input: &str) -> String {
    let opts = Options {
        callouts: false,
        ..Options::default()
    };
    to_html_with_options(input, &opts)
}

// --- Kinds ---

#[test]
fn callout_note_default() {
    let out = html("> 普通引用");
    assert_eq!(
        out,
        "<aside class=\"note\"><p>\n<strong>Note:</strong> 普通引用\n</p></aside>\n"
    );
}

#[test]
fn callout_hint_glyph() {
    let out = html("> 💡 使用 `go vet` 检查");
    assert_eq!(
        out,
        "<aside class=\"hint\"><p>\n<strong>Hint:</strong> 使用 <code>go vet</code> 检查\n</p></aside>\n"
    );
}

#[test]
fn callout_hint_keyword() {
    let out = html("> 提示：先运行测试");
    assert!(out.starts_with("<aside class=\"hint\">"), "Got: {out}");
    assert!(out.contains("提示：先运行测试"));
}

#[test]
fn callout_important_glyph_with_variation_selector() {
    let out = html("> ⚠️ 不要复制 Mutex");
    assert_eq!(
        out,
        "<aside class=\"important\"><p>\n<strong>Important:</strong> 不要复制 Mutex\n</p></aside>\n"
    );
}

#[test]
fn callout_important_keywords() {
    for word in ["注意", "警告", "重要"] {
        let out = html(&format!("> {word}：内容"));
        assert!(out.starts_with("<aside class=\"important\">"), "{word}: {out}");
    }
}

// --- Alert tokens ---

#[test]
fn callout_tip_token() {
    let out = html("> [!TIP]\n> Use the race detector.");
    assert_eq!(
        out,
        "<aside class=\"hint\"><p>\n<strong>Hint:</strong> Use the race detector.\n</p></aside>\n"
    );
}

#[test]
fn callout_warning_token() {
    let out = html("> [!WARNING]\n> Data race.");
    assert!(out.starts_with("<aside class=\"important\">"), "Got: {out}");
    assert!(!out.contains("[!WARNING]"));
}

#[test]
fn callout_caution_and_important_tokens() {
    assert!(html("> [!CAUTION]\n> x").contains("class=\"important\""));
    assert!(html("> [!IMPORTANT]\n> x").contains("class=\"important\""));
}

#[test]
fn callout_note_token() {
    let out = html("> [!NOTE]\n> Just so you know.");
    assert!(out.starts_with("<aside class=\"note\">"), "Got: {out}");
    assert!(!out.contains("[!NOTE]"));
}

#[test]
fn callout_token_case_insensitive() {
    assert!(html("> [!tip] lower").contains("class=\"hint\""));
}

#[test]
fn callout_unknown_token_kept() {
    let out = html("> [!FOO] text");
    assert!(out.contains("class=\"note\""));
    assert!(out.contains("[!FOO] text"));
}

// --- Precedence ---

#[test]
fn important_wins_over_hint() {
    let out = html("> 💡 一个技巧\n> ⚠️ 但是要小心");
    assert!(out.starts_with("<aside class=\"important\">"), "Got: {out}");
}

#[test]
fn marker_anywhere_in_run() {
    let out = html("> 第一行\n> 第二行\n> 提示：在最后");
    assert!(out.starts_with("<aside class=\"hint\">"), "Got: {out}");
}

// --- Content ---

#[test]
fn multiline_joined_with_br() {
    let out = html("> line one\n> line **two**");
    assert_eq!(
        out,
        "<aside class=\"note\"><p>\n<strong>Note:</strong> line one<br>\nline <strong>two</strong>\n</p></aside>\n"
    );
}

#[test]
fn empty_quote_lines_skipped() {
    let out = html("> a\n> \n> b");
    assert!(out.contains("a<br>\nb"), "Got: {out}");
}

#[test]
fn run_ends_at_non_quote_line() {
    let out = html("> quoted\nplain");
    assert_eq!(
        out,
        "<aside class=\"note\"><p>\n<strong>Note:</strong> quoted\n</p></aside>\n<p>plain</p>\n\n"
    );
}

#[test]
fn separate_runs_are_separate_callouts() {
    let out = html("> 💡 one\n\n> ⚠️ two");
    assert_eq!(out.matches("<aside").count(), 2);
    assert!(out.contains("class=\"hint\""));
    assert!(out.contains("class=\"important\""));
}

#[test]
fn quote_without_space_is_paragraph() {
    assert_eq!(html(">tight"), "<p>>tight</p>\n\n");
}

#[test]
fn quote_closes_list() {
    let out = html("- item\n> note");
    assert!(out.starts_with("<ul>\n<li><p>item</p></li>\n</ul>\n<aside"), "Got: {out}");
}

// --- Disabled ---

#[test]
fn callouts_disabled_plain_blockquote() {
    let out = html_no_callouts("> [!TIP]\n> text");
    assert_eq!(out, "<blockquote>\n<p>[!TIP]<br>\ntext</p>\n</blockquote>\n");
    assert!(!out.contains("<aside"));
}
