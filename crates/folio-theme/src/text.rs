//! Text helpers shared by the blog renderers.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Character budget for generated post summaries.
pub(crate) const SUMMARY_LENGTH: usize = 450;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// A paragraph holding only the word "images" marks where a gallery goes.
static GALLERY_PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<p>\s*images\s*</p>").unwrap());

/// Remove markup tags, keeping their text content.
pub(crate) fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Build a plain-text summary of at most `budget` characters.
///
/// Text longer than the budget is cut at the last whole word that fits and
/// gets an `&hellip;` marker. Shorter text is returned whole.
pub(crate) fn summarize(html: &str, budget: usize) -> String {
    let text = strip_tags(html);
    let text = text.trim();

    let Some((cut, next)) = text.char_indices().nth(budget) else {
        return text.to_owned();
    };

    let truncated = &text[..cut];
    let truncated = if next.is_whitespace() {
        truncated
    } else {
        match truncated.rfind(char::is_whitespace) {
            Some(pos) if pos > 0 => &truncated[..pos],
            _ => truncated,
        }
    };
    format!("{}&hellip;", truncated.trim_end())
}

/// Whether the body contains a gallery placeholder paragraph.
pub(crate) fn has_gallery_placeholder(body: &str) -> bool {
    GALLERY_PLACEHOLDER_RE.is_match(body)
}

/// Replace every gallery placeholder paragraph with `replacement`.
pub(crate) fn replace_gallery_placeholder(body: &str, replacement: &str) -> String {
    GALLERY_PLACEHOLDER_RE
        .replace_all(body, NoExpand(replacement))
        .into_owned()
}

/// Turn escaped plain text into paragraph markup.
///
/// Blank lines become paragraph breaks; single newlines become `br`.
pub(crate) fn paragraphs(text: &str, br: &str) -> String {
    text.replace("\r\n", "\n")
        .replace("\n\n", "</p><p>")
        .replace('\n', br)
}

/// `"1 Comment"`, `"2 Comments"`.
pub(crate) fn count_label(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}
