//! Blockquote callouts.
//!
//! A run of `> ` lines renders as an `<aside>` whose kind is picked from
//! marker glyphs, keywords or GitHub-style `[!KIND]` tokens found anywhere
//! in the run. Important markers take precedence over hint markers.

/// Callout kind for a blockquote run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    /// Default informational note.
    Note,
    /// Tip or hint.
    Hint,
    /// Caution, warning or important information.
    Important,
}

impl CalloutKind {
    /// CSS class of the aside.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Hint => "hint",
            Self::Important => "important",
        }
    }

    /// Label printed at the start of the callout.
    pub fn label(self) -> &'static str {
        match self {
            Self::Note => "Note:",
            Self::Hint => "Hint:",
            Self::Important => "Important:",
        }
    }
}

const IMPORTANT_MARKERS: &[&str] = &["⚠", "注意", "警告", "重要"];
const HINT_MARKERS: &[&str] = &["💡", "提示"];

/// Glyphs removed from callout text before rendering.
const MARKER_GLYPHS: &[char] = &['💡', '⚠', '\u{FE0F}', '❌', '✅'];

/// Pick the callout kind for the joined content of a blockquote run.
pub fn classify(content: &str) -> CalloutKind {
    let has_token = |wanted: CalloutKind| alert_tokens(content).any(|(kind, _, _)| kind == wanted);

    if IMPORTANT_MARKERS.iter().any(|m| content.contains(m)) || has_token(CalloutKind::Important) {
        return CalloutKind::Important;
    }
    if HINT_MARKERS.iter().any(|m| content.contains(m)) || has_token(CalloutKind::Hint) {
        return CalloutKind::Hint;
    }
    CalloutKind::Note
}

/// Remove marker glyphs and `[!KIND]` tokens from callout text.
pub fn strip_markers(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut copied = 0;
    for (_, start, end) in alert_tokens(content) {
        out.push_str(&content[copied..start]);
        copied = end;
    }
    out.push_str(&content[copied..]);
    out.retain(|c| !MARKER_GLYPHS.contains(&c));
    out
}

/// Iterate over `[!KIND]` tokens as `(kind, start, end)` byte spans.
fn alert_tokens(content: &str) -> impl Iterator<Item = (CalloutKind, usize, usize)> + '_ {
    let mut pos = 0;
    std::iter::from_fn(move || {
        while let Some(offset) = content[pos..].find("[!") {
            let start = pos + offset;
            let name_start = start + 2;
            let Some(close) = content[name_start..].find(']') else {
                pos = content.len();
                return None;
            };
            let end = name_start + close + 1;
            match alert_kind(&content[name_start..end - 1]) {
                Some(kind) => {
                    pos = end;
                    return Some((kind, start, end));
                }
                None => pos = name_start,
            }
        }
        None
    })
}

fn alert_kind(name: &str) -> Option<CalloutKind> {
    const KINDS: [(&str, CalloutKind); 5] = [
        ("NOTE", CalloutKind::Note),
        ("TIP", CalloutKind::Hint),
        ("IMPORTANT", CalloutKind::Important),
        ("WARNING", CalloutKind::Important),
        ("CAUTION", CalloutKind::Important),
    ];
    KINDS
        .iter()
        .find(|(token, _)| token.eq_ignore_ascii_case(name))
        .map(|&(_, kind)| kind)
}
